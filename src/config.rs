//! Configuration file support
//!
//! Loads settings from ~/.nextword.conf (or %USERPROFILE%\.nextword.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # nextword configuration
//! min-prefix = 2
//! end-of-word = ~!@#$%^&*()_+{}|:"<>?,./;'[]\-=
//! max-visible = 7
//! case-sensitive = false
//! wordlist = /usr/share/nextword/wordlist.txt
//! rules = /home/me/.config/markup.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::completion::{CaseSensitivity, CompletionSettings, DEFAULT_END_OF_WORD};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum prefix length before suggestions show
    pub min_prefix: usize,
    /// Characters that end a word and close the popup
    pub end_of_word: String,
    /// Popup rows
    pub max_visible: usize,
    /// Match prefixes with exact case
    pub case_sensitive: bool,
    /// Word list for the completion vocabulary
    pub wordlist: Option<PathBuf>,
    /// TOML rule file replacing the built-in rule set
    pub rules: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_prefix: 2,
            end_of_word: DEFAULT_END_OF_WORD.to_string(),
            max_visible: 7,
            case_sensitive: false,
            wordlist: None,
            rules: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".nextword.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".nextword.conf"))
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        if let Ok(contents) = fs::read_to_string(path) {
            let settings = Self::parse(&contents);
            config.apply(&settings);
        }

        config
    }

    /// Settings the completion engine needs
    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            min_prefix: self.min_prefix,
            end_of_word: self.end_of_word.clone(),
            max_visible: self.max_visible,
            case: if self.case_sensitive {
                CaseSensitivity::Sensitive
            } else {
                CaseSensitivity::Insensitive
            },
        }
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value; values may themselves contain '='
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("min-prefix") {
            match value.parse::<usize>() {
                Ok(n) => self.min_prefix = n.clamp(1, 16),
                Err(_) => warn!("ignoring min-prefix = {}", value),
            }
        }

        if let Some(value) = settings.get("end-of-word") {
            self.end_of_word = value.clone();
        }

        if let Some(value) = settings.get("max-visible") {
            match value.parse::<usize>() {
                Ok(n) => self.max_visible = n.clamp(1, 50),
                Err(_) => warn!("ignoring max-visible = {}", value),
            }
        }

        if let Some(value) = settings.get("case-sensitive") {
            match parse_bool(value) {
                Some(b) => self.case_sensitive = b,
                None => warn!("ignoring case-sensitive = {}", value),
            }
        }

        if let Some(value) = settings.get("wordlist").filter(|v| !v.is_empty()) {
            self.wordlist = Some(PathBuf::from(value));
        }

        if let Some(value) = settings.get("rules").filter(|v| !v.is_empty()) {
            self.rules = Some(PathBuf::from(value));
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
