//! Rule files
//!
//! Rule sets can be described in TOML instead of being compiled in:
//!
//! ```toml
//! name = "markup"
//!
//! [[rule]]
//! name = "command"
//! pattern = '\\[A-Za-z]+'
//! style = "keyword"
//!
//! [comment]
//! start = '/\*'
//! end = '\*/'
//! style = "blockComment"
//! ```
//!
//! Rules keep the order they appear in the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::highlighter::Highlighter;
use super::rules::{CommentMarkers, PatternRule};
use super::tokens::StyleTag;
use crate::error::{EditorError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    name: String,
    #[serde(default, rename = "rule")]
    rules: Vec<RuleEntry>,
    comment: Option<CommentEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    name: String,
    pattern: String,
    style: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommentEntry {
    start: String,
    end: String,
    #[serde(default = "default_comment_style")]
    style: String,
}

fn default_comment_style() -> String {
    StyleTag::BlockComment.name().to_string()
}

fn style_tag(name: &str) -> Result<StyleTag> {
    StyleTag::from_name(name).ok_or_else(|| EditorError::UnknownStyle(name.to_string()))
}

impl Highlighter {
    /// Build a highlighter from TOML rule-file contents
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: RuleFile = toml::from_str(contents)?;
        let mut hl = Highlighter::new(&file.name);

        for entry in &file.rules {
            let style = style_tag(&entry.style)?;
            hl.add_rule(PatternRule::new(&entry.name, &entry.pattern, style)?);
        }

        if let Some(comment) = &file.comment {
            let style = style_tag(&comment.style)?;
            hl.set_comment(CommentMarkers::new(&comment.start, &comment.end, style)?);
        }

        Ok(hl)
    }

    /// Load a highlighter from a TOML rule file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::BlockState;
    use crate::syntax::style::StyledSpan;
    use pretty_assertions::assert_eq;

    const MARKUP: &str = r#"
name = "markup"

[[rule]]
name = "command"
pattern = '\\[A-Za-z]+'
style = "keyword"

[[rule]]
name = "line_comment"
pattern = '%.*'
style = "lineComment"

[comment]
start = '/\*'
end = '\*/'
"#;

    #[test]
    fn test_load_rule_file() {
        let hl = Highlighter::from_toml(MARKUP).unwrap();

        assert_eq!(hl.name, "markup");
        assert_eq!(hl.rules.len(), 2);
        assert_eq!(hl.rules[0].name, "command");
        assert_eq!(hl.rules[1].style, StyleTag::LineComment);
        assert_eq!(hl.comment.as_ref().map(|c| c.style), Some(StyleTag::BlockComment));

        let result = hl.highlight(r"\x /* y", BlockState::Normal);
        assert_eq!(result.spans[0], StyledSpan::new(0, 2, StyleTag::Keyword));
        assert_eq!(result.end_state, BlockState::InComment);
    }

    #[test]
    fn test_rules_without_comment() {
        let hl = Highlighter::from_toml("name = \"plain\"\n").unwrap();
        assert!(hl.rules.is_empty());
        assert!(hl.comment.is_none());
    }

    #[test]
    fn test_unknown_style() {
        let contents = r#"
name = "bad"
[[rule]]
name = "x"
pattern = 'x'
style = "sparkly"
"#;
        let err = Highlighter::from_toml(contents).unwrap_err();
        assert!(matches!(err, EditorError::UnknownStyle(ref s) if s == "sparkly"));
    }

    #[test]
    fn test_invalid_pattern() {
        let contents = r#"
name = "bad"
[[rule]]
name = "open_group"
pattern = '(x'
style = "keyword"
"#;
        let err = Highlighter::from_toml(contents).unwrap_err();
        assert!(matches!(err, EditorError::Pattern { ref rule, .. } if rule == "open_group"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Highlighter::from_toml("name = ").unwrap_err();
        assert!(matches!(err, EditorError::RuleFile(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markup.toml");
        fs::write(&path, MARKUP).unwrap();

        let hl = Highlighter::from_file(&path).unwrap();
        assert_eq!(hl.rules.len(), 2);

        let missing = Highlighter::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(EditorError::Io(_))));
    }
}
