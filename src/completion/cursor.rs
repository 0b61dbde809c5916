//! Word under the cursor

use std::ops::Range;

/// Check if a character is part of a word
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// The word touching a cursor position within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordUnderCursor {
    /// Byte range of the word in the line
    pub range: Range<usize>,
    /// The word itself (empty if the cursor touches no word)
    pub text: String,
}

impl WordUnderCursor {
    /// Find the word around byte offset `cursor` in `line`
    ///
    /// A cursor sitting right after the last character of a word still
    /// selects that word. Offsets past the end or inside a multi-byte
    /// character are clamped back to the previous char boundary.
    pub fn at(line: &str, cursor: usize) -> Self {
        let mut cursor = cursor.min(line.len());
        while !line.is_char_boundary(cursor) {
            cursor -= 1;
        }

        let start = line[..cursor]
            .char_indices()
            .rev()
            .take_while(|&(_, ch)| is_word_char(ch))
            .last()
            .map_or(cursor, |(idx, _)| idx);

        let end = line[cursor..]
            .char_indices()
            .find(|&(_, ch)| !is_word_char(ch))
            .map_or(line.len(), |(idx, _)| cursor + idx);

        Self {
            range: start..end,
            text: line[start..end].to_string(),
        }
    }

    /// Byte offset just past the word
    pub fn end(&self) -> usize {
        self.range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('5'));
        assert!(is_word_char('_'));
        assert!(is_word_char('é'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('\\'));
    }

    #[test]
    fn test_cursor_after_word() {
        let word = WordUnderCursor::at("see comp", 8);
        assert_eq!(word.range, 4..8);
        assert_eq!(word.text, "comp");
    }

    #[test]
    fn test_cursor_inside_word() {
        let word = WordUnderCursor::at("a completion b", 5);
        assert_eq!(word.text, "completion");
        assert_eq!(word.end(), 12);
    }

    #[test]
    fn test_cursor_on_space() {
        let word = WordUnderCursor::at("ab  cd", 3);
        assert_eq!(word.text, "");
        assert_eq!(word.range, 3..3);
    }

    #[test]
    fn test_command_prefix_is_not_part_of_word() {
        let word = WordUnderCursor::at(r"\sec", 4);
        assert_eq!(word.text, "sec");
        assert_eq!(word.range, 1..4);
    }

    #[test]
    fn test_clamps_cursor() {
        assert_eq!(WordUnderCursor::at("héllo", 2).text, "héllo");
        assert_eq!(WordUnderCursor::at("word", 99).text, "word");
        assert_eq!(WordUnderCursor::at("", 0).text, "");
    }
}
