//! Block highlighter
//!
//! A [`Highlighter`] combines an ordered pattern rule set with an optional
//! pair of comment markers. Highlighting is a pure function of the block
//! text and the state the previous block ended in.

use log::trace;

use super::rules::{BlockState, CommentMarkers, HighlightResult, PatternRule};
use super::style::StyledSpan;

/// A rule set for one markup language
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// Rule set name (e.g., "markup")
    pub name: String,
    /// Pattern rules, applied in declared order
    pub rules: Vec<PatternRule>,
    /// Markers for comments that can span blocks
    pub comment: Option<CommentMarkers>,
}

impl Highlighter {
    /// Create a new empty highlighter
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
            comment: None,
        }
    }

    /// Append a pattern rule; later rules win where spans overlap
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Set the multi-block comment markers
    pub fn set_comment(&mut self, markers: CommentMarkers) {
        self.comment = Some(markers);
    }

    /// Highlight a single block of text
    ///
    /// Takes the block text and the state the previous block ended in.
    /// Returns the spans for this block and the state for the next one.
    pub fn highlight(&self, text: &str, prev_state: BlockState) -> HighlightResult {
        let mut spans: Vec<StyledSpan> = self.rules.iter().flat_map(|rule| rule.spans(text)).collect();

        let end_state = match &self.comment {
            Some(markers) => comment_spans(markers, text, prev_state, &mut spans),
            // Without markers the carried state passes through untouched
            None => prev_state,
        };

        trace!(
            "{}: {:?} -> {:?} over {} bytes, {} spans",
            self.name,
            prev_state,
            end_state,
            text.len(),
            spans.len()
        );

        HighlightResult { spans, end_state }
    }
}

/// Append comment spans for `text` and return the block's ending state
fn comment_spans(
    markers: &CommentMarkers,
    text: &str,
    prev_state: BlockState,
    spans: &mut Vec<StyledSpan>,
) -> BlockState {
    let mut open = if prev_state.is_in_comment() {
        Some(0)
    } else {
        markers.find_start(text, 0).map(|(start, _)| start)
    };

    // The end marker is searched from the start of the opening marker,
    // so `/*/` closes on its own
    while let Some(start) = open {
        match markers.find_end(text, start) {
            Some(end) => {
                spans.push(StyledSpan::from_range(start..end, markers.style));
                open = markers.find_start(text, end).map(|(start, _)| start);
            }
            None => {
                if text.len() > start {
                    spans.push(StyledSpan::from_range(start..text.len(), markers.style));
                }
                return BlockState::InComment;
            }
        }
    }

    BlockState::Normal
}
