//! Visual styles and styled spans
//!
//! Spans carry an opaque [`StyleTag`]; the visual [`Style`] a tag maps to
//! is only consulted by renderers.

use std::ops::Range;

use super::tokens::StyleTag;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled span of text within a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Length of the span in bytes
    pub len: usize,
    /// Style tag applied to this span
    pub style: StyleTag,
}

impl StyledSpan {
    /// Create a new span
    pub fn new(start: usize, len: usize, style: StyleTag) -> Self {
        Self { start, len, style }
    }

    /// Create a span covering a byte range
    pub fn from_range(range: Range<usize>, style: StyleTag) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start), style)
    }

    /// Byte offset one past the end of this span
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Collapse possibly overlapping spans into a per-byte style map.
///
/// Spans are applied in the order given, so a later span overwrites an
/// earlier one wherever they overlap. Spans reaching past `text_len` are
/// clipped.
pub fn resolve(text_len: usize, spans: &[StyledSpan]) -> Vec<Option<StyleTag>> {
    let mut styles = vec![None; text_len];
    for span in spans {
        let end = span.end().min(text_len);
        if span.start >= end {
            continue;
        }
        for slot in &mut styles[span.start..end] {
            *slot = Some(span.style);
        }
    }
    styles
}

/// Split `text` into contiguous runs sharing one resolved style.
///
/// Run boundaries always fall on char boundaries, even if a span was
/// computed with offsets inside a multi-byte character.
pub fn segments(text: &str, spans: &[StyledSpan]) -> Vec<(Range<usize>, Option<StyleTag>)> {
    let styles = resolve(text.len(), spans);
    let mut runs: Vec<(Range<usize>, Option<StyleTag>)> = Vec::new();

    for (offset, ch) in text.char_indices() {
        let style = styles[offset];
        let end = offset + ch.len_utf8();
        match runs.last_mut() {
            Some((range, current)) if *current == style => range.end = end,
            _ => runs.push((offset..end, style)),
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_italic();
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.is_default());
    }

    #[test]
    fn test_span_from_range() {
        let span = StyledSpan::from_range(5..10, StyleTag::Keyword);
        assert_eq!(span, StyledSpan::new(5, 5, StyleTag::Keyword));
        assert_eq!(span.end(), 10);
    }

    #[test]
    fn test_resolve_last_write_wins() {
        let spans = [
            StyledSpan::new(0, 6, StyleTag::BraceGroup),
            StyledSpan::new(2, 2, StyleTag::Keyword),
        ];
        let styles = resolve(8, &spans);
        assert_eq!(styles[1], Some(StyleTag::BraceGroup));
        assert_eq!(styles[2], Some(StyleTag::Keyword));
        assert_eq!(styles[3], Some(StyleTag::Keyword));
        assert_eq!(styles[4], Some(StyleTag::BraceGroup));
        assert_eq!(styles[7], None);
    }

    #[test]
    fn test_resolve_clips_out_of_range() {
        let styles = resolve(3, &[StyledSpan::new(1, 10, StyleTag::LineComment)]);
        assert_eq!(styles, vec![None, Some(StyleTag::LineComment), Some(StyleTag::LineComment)]);
    }

    #[test]
    fn test_segments() {
        let spans = [StyledSpan::new(2, 3, StyleTag::Keyword)];
        let runs = segments("a \\bc d", &spans);
        assert_eq!(
            runs,
            vec![
                (0..2, None),
                (2..5, Some(StyleTag::Keyword)),
                (5..7, None),
            ]
        );
    }
}
