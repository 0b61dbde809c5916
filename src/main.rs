//! nextword - highlight markup files and query the completion vocabulary

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use nextword::completion::{CompletionEngine, CompletionUpdate, KeyInput, Vocabulary};
use nextword::config::Config;
use nextword::render::render_document;
use nextword::syntax::{markup_highlighter, BlockDocument, Highlighter};
use nextword::{EditorError, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = Config::load();

    match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") | None => {
            print_usage();
            Ok(())
        }
        Some("--version") | Some("-V") => {
            print_version();
            Ok(())
        }
        Some("highlight") => {
            let file = args
                .get(2)
                .ok_or_else(|| EditorError::Usage("highlight needs a FILE".to_string()))?;
            highlight(&config, Path::new(file))
        }
        Some("complete") => {
            let prefix = args
                .get(2)
                .ok_or_else(|| EditorError::Usage("complete needs a PREFIX".to_string()))?;
            complete(&config, prefix)
        }
        Some(other) => Err(EditorError::Usage(format!("unknown command '{}'", other))),
    }
}

fn highlight(config: &Config, file: &Path) -> Result<()> {
    let highlighter = match &config.rules {
        Some(path) => Highlighter::from_file(path)?,
        None => markup_highlighter()?,
    };

    let text = fs::read_to_string(file)?;
    let doc = BlockDocument::new(&highlighter, text.strip_suffix('\n').unwrap_or(&text));

    let stdout = io::stdout();
    render_document(&mut stdout.lock(), &doc)
}

fn complete(config: &Config, prefix: &str) -> Result<()> {
    let wordlist = config
        .wordlist
        .clone()
        .unwrap_or_else(|| PathBuf::from("wordlist.txt"));
    let mut engine = CompletionEngine::new(Vocabulary::from_file(&wordlist), config.completion_settings());

    // Behave as if the prefix had just been typed
    let Some(last) = prefix.chars().last() else {
        return Ok(());
    };
    if let CompletionUpdate::Show(suggestions) = engine.on_key_input(prefix, &KeyInput::char(last)) {
        let mut out = io::stdout().lock();
        for word in &suggestions.candidates {
            writeln!(out, "{}", word)?;
        }
    }
    Ok(())
}

fn print_usage() {
    println!("nextword {} - markup highlighting and word completion", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: nextword <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  highlight FILE   Print FILE with syntax highlighting");
    println!("  complete PREFIX  List completions for PREFIX");
    println!();
    println!("Options:");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Settings are read from ~/.nextword.conf (wordlist, rules,");
    println!("min-prefix, end-of-word, max-visible, case-sensitive).");
    println!("Set RUST_LOG for logging.");
}

fn print_version() {
    println!("nextword {}", env!("CARGO_PKG_VERSION"));
}
