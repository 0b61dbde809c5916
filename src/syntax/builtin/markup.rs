//! TeX-like markup rule set

use crate::error::Result;
use crate::syntax::highlighter::Highlighter;
use crate::syntax::rules::{CommentMarkers, PatternRule};
use crate::syntax::tokens::StyleTag;

/// Backslash commands (`\section`)
const COMMAND: &str = r"\\[A-Za-z]+";
/// Brace groups, greedy from the first `{` to the last `}`
const BRACE_GROUP: &str = r"\{(.*)\}";
/// `%` comments run to the end of the block
const LINE_COMMENT: &str = r"%[^\n]*";
const COMMENT_START: &str = r"/\*";
const COMMENT_END: &str = r"\*/";

/// Create the markup highlighter
pub fn markup_highlighter() -> Result<Highlighter> {
    let mut hl = Highlighter::new("markup");

    let rules = [
        ("command", COMMAND, StyleTag::Keyword),
        ("brace_group", BRACE_GROUP, StyleTag::BraceGroup),
        ("line_comment", LINE_COMMENT, StyleTag::LineComment),
    ];
    for (name, pattern, style) in rules {
        hl.add_rule(PatternRule::new(name, pattern, style)?);
    }
    hl.set_comment(CommentMarkers::new(COMMENT_START, COMMENT_END, StyleTag::BlockComment)?);

    Ok(hl)
}
