//! Style tags for syntax highlighting
//!
//! This module defines the opaque tags the highlighter attaches to
//! spans, and the default visual style a renderer uses for each.

use super::style::{Color, Style};

/// Semantic tags attached to highlighted spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Backslash commands (`\section`, `\emph`)
    Keyword,
    /// Brace-delimited groups (`{...}`)
    BraceGroup,
    /// Comments running to the end of the block (`% ...`)
    LineComment,
    /// Comments that may span blocks (`/* ... */`)
    BlockComment,
}

impl StyleTag {
    /// Get the default style for this tag
    pub fn default_style(&self) -> Style {
        match self {
            StyleTag::Keyword => Style::fg(Color::Magenta).with_bold(),
            StyleTag::BraceGroup => Style::fg(Color::Green).with_italic(),
            StyleTag::LineComment => Style::fg(Color::BrightBlack),
            StyleTag::BlockComment => Style::fg(Color::Red),
        }
    }

    /// Get the name used for this tag in rule files
    pub fn name(&self) -> &'static str {
        match self {
            StyleTag::Keyword => "keyword",
            StyleTag::BraceGroup => "braceGroup",
            StyleTag::LineComment => "lineComment",
            StyleTag::BlockComment => "blockComment",
        }
    }

    /// Parse a tag from its rule-file name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(StyleTag::Keyword),
            "braceGroup" => Some(StyleTag::BraceGroup),
            "lineComment" => Some(StyleTag::LineComment),
            "blockComment" => Some(StyleTag::BlockComment),
            _ => None,
        }
    }
}
