//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to match block text
//! and the state carried from one block to the next.

use regex::Regex;

use super::style::StyledSpan;
use super::tokens::StyleTag;
use crate::error::{EditorError, Result};

/// A single-block pattern rule
///
/// Every non-overlapping match of `pattern` in a block is styled with `style`.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Style tag to assign to matches
    pub style: StyleTag,
}

impl PatternRule {
    /// Create a new pattern rule
    ///
    /// A pattern that does not compile is a configuration error.
    pub fn new(name: &str, pattern: &str, style: StyleTag) -> Result<Self> {
        let pattern = compile(name, pattern)?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            style,
        })
    }

    /// Find the first match at or after `start`, as a byte range
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start > text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }

    /// Collect spans for all non-overlapping matches, leftmost first
    ///
    /// Scanning resumes at the end of each match. A zero-length match
    /// advances the scan by one character so the loop always terminates.
    pub fn spans(&self, text: &str) -> Vec<StyledSpan> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while let Some((start, end)) = self.find_at(text, pos) {
            if end > start {
                spans.push(StyledSpan::from_range(start..end, self.style));
                pos = end;
            } else {
                pos = next_char_boundary(text, end);
            }
            if pos > text.len() {
                break;
            }
        }

        spans
    }
}

/// Start and end markers for comments that may span blocks
#[derive(Debug, Clone)]
pub struct CommentMarkers {
    /// Pattern that opens the comment
    pub start: Regex,
    /// Pattern that closes the comment
    pub end: Regex,
    /// Style tag for the comment region
    pub style: StyleTag,
}

impl CommentMarkers {
    /// Create a new marker pair
    pub fn new(start_pattern: &str, end_pattern: &str, style: StyleTag) -> Result<Self> {
        Ok(Self {
            start: compile("comment_start", start_pattern)?,
            end: compile("comment_end", end_pattern)?,
            style,
        })
    }

    /// Find the next start marker at or after `from`
    pub fn find_start(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.start
            .find_at(text, from)
            .filter(|m| m.end() > m.start())
            .map(|m| (m.start(), m.end()))
    }

    /// Find the end of the next end marker at or after `from`
    pub fn find_end(&self, text: &str, from: usize) -> Option<usize> {
        if from > text.len() {
            return None;
        }
        self.end
            .find_at(text, from)
            .filter(|m| m.end() > m.start())
            .map(|m| m.end())
    }
}

/// State carried from the end of one block into the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlockState {
    /// Not inside an unterminated comment
    #[default]
    Normal,
    /// Inside a comment that has not been closed yet
    InComment,
}

impl BlockState {
    /// Integer encoding used by block-based text widgets
    pub fn as_i32(self) -> i32 {
        match self {
            BlockState::Normal => 0,
            BlockState::InComment => 1,
        }
    }

    /// Decode a widget block state; anything other than 1 is treated as normal
    pub fn from_i32(value: i32) -> Self {
        if value == 1 {
            BlockState::InComment
        } else {
            BlockState::Normal
        }
    }

    /// Check if we're inside an open comment
    pub fn is_in_comment(&self) -> bool {
        *self == BlockState::InComment
    }
}

/// Result of highlighting a single block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResult {
    /// Rule spans in rule order, followed by comment spans
    pub spans: Vec<StyledSpan>,
    /// State at end of block (for the next block)
    pub end_state: BlockState,
}

fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| EditorError::Pattern {
        rule: rule.to_string(),
        source,
    })
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(pos + 1, |ch| pos + ch.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("command", r"\\[A-Za-z]+", StyleTag::Keyword).unwrap();
        assert_eq!(rule.find_at(r"a \begin b", 0), Some((2, 8)));
        assert_eq!(rule.find_at(r"a \begin b", 3), None);
        assert_eq!(rule.find_at("no commands", 0), None);
    }

    #[test]
    fn test_spans_repeat_after_match() {
        let rule = PatternRule::new("command", r"\\[A-Za-z]+", StyleTag::Keyword).unwrap();
        let spans = rule.spans(r"\a x \bb \c");
        assert_eq!(
            spans,
            vec![
                StyledSpan::new(0, 2, StyleTag::Keyword),
                StyledSpan::new(5, 3, StyleTag::Keyword),
                StyledSpan::new(9, 2, StyleTag::Keyword),
            ]
        );
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        let rule = PatternRule::new("stars", r"x*", StyleTag::Keyword).unwrap();
        let spans = rule.spans("aéxxb");
        assert_eq!(spans, vec![StyledSpan::new(3, 2, StyleTag::Keyword)]);
        assert!(rule.spans("").is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = PatternRule::new("broken", r"(unclosed", StyleTag::Keyword).unwrap_err();
        assert!(matches!(err, EditorError::Pattern { ref rule, .. } if rule == "broken"));
    }

    #[test]
    fn test_comment_markers() {
        let markers = CommentMarkers::new(r"/\*", r"\*/", StyleTag::BlockComment).unwrap();
        assert_eq!(markers.find_start("x /* c */", 0), Some((2, 4)));
        assert_eq!(markers.find_end("x /* c */", 4), Some(9));
        assert_eq!(markers.find_end("x /* c", 4), None);
    }

    #[test]
    fn test_block_state_encoding() {
        assert_eq!(BlockState::default(), BlockState::Normal);
        assert_eq!(BlockState::from_i32(1), BlockState::InComment);
        assert_eq!(BlockState::from_i32(-1), BlockState::Normal);
        assert_eq!(BlockState::InComment.as_i32(), 1);
        assert!(BlockState::InComment.is_in_comment());
        assert!(!BlockState::Normal.is_in_comment());
    }
}
