//! Per-document highlighting cache
//!
//! A [`BlockDocument`] keeps each block's text, the state it was
//! highlighted with, and the result. Edits re-highlight the touched block
//! and cascade forward only while the carried state keeps changing.

use std::ops::Range;

use log::debug;

use super::highlighter::Highlighter;
use super::rules::{BlockState, HighlightResult};
use super::style::StyledSpan;

/// One block and its cached highlighting
#[derive(Debug, Clone)]
struct BlockEntry {
    /// Block text (without the separating newline)
    text: String,
    /// State this block was last highlighted with
    prev_state: BlockState,
    /// Last highlighting result
    result: HighlightResult,
}

/// A document split into blocks, highlighted incrementally
pub struct BlockDocument<'h> {
    highlighter: &'h Highlighter,
    blocks: Vec<BlockEntry>,
}

impl<'h> BlockDocument<'h> {
    /// Split `text` into newline-separated blocks and highlight them all
    pub fn new(highlighter: &'h Highlighter, text: &str) -> Self {
        let mut state = BlockState::default();
        let blocks = text
            .split('\n')
            .map(|line| {
                let result = highlighter.highlight(line, state);
                let entry = BlockEntry {
                    text: line.to_string(),
                    prev_state: state,
                    result,
                };
                state = entry.result.end_state;
                entry
            })
            .collect();

        Self { highlighter, blocks }
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of a block
    pub fn block_text(&self, idx: usize) -> Option<&str> {
        self.blocks.get(idx).map(|b| b.text.as_str())
    }

    /// Cached spans of a block
    pub fn spans(&self, idx: usize) -> Option<&[StyledSpan]> {
        self.blocks.get(idx).map(|b| b.result.spans.as_slice())
    }

    /// State a block ends in
    pub fn end_state(&self, idx: usize) -> Option<BlockState> {
        self.blocks.get(idx).map(|b| b.result.end_state)
    }

    /// Iterate over block texts with their spans
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[StyledSpan])> {
        self.blocks
            .iter()
            .map(|b| (b.text.as_str(), b.result.spans.as_slice()))
    }

    /// Join the blocks back into a single string
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the text of a block
    ///
    /// Returns the range of blocks that were re-highlighted, or `None`
    /// if `idx` is out of range.
    pub fn set_block(&mut self, idx: usize, text: &str) -> Option<Range<usize>> {
        let block = self.blocks.get_mut(idx)?;
        block.text = text.to_string();
        Some(self.cascade(idx, true))
    }

    /// Insert a new block before `idx` (`idx == len()` appends)
    pub fn insert_block(&mut self, idx: usize, text: &str) -> Option<Range<usize>> {
        if idx > self.blocks.len() {
            return None;
        }
        // Left empty here; the forced cascade highlights it
        let prev_state = self.state_before(idx);
        self.blocks.insert(
            idx,
            BlockEntry {
                text: text.to_string(),
                prev_state,
                result: HighlightResult {
                    spans: Vec::new(),
                    end_state: prev_state,
                },
            },
        );
        Some(self.cascade(idx, true))
    }

    /// Remove a block, re-highlighting whatever followed it if needed
    pub fn remove_block(&mut self, idx: usize) -> Option<Range<usize>> {
        if idx >= self.blocks.len() {
            return None;
        }
        self.blocks.remove(idx);
        Some(self.cascade(idx, false))
    }

    fn state_before(&self, idx: usize) -> BlockState {
        if idx == 0 {
            BlockState::default()
        } else {
            self.blocks[idx - 1].result.end_state
        }
    }

    /// Re-highlight from `start` until a block's incoming state matches
    /// the state it was computed with
    fn cascade(&mut self, start: usize, force_first: bool) -> Range<usize> {
        let mut idx = start;
        let mut state = self.state_before(start);

        while let Some(block) = self.blocks.get_mut(idx) {
            if block.prev_state == state && !(force_first && idx == start) {
                break;
            }
            block.result = self.highlighter.highlight(&block.text, state);
            block.prev_state = state;
            state = block.result.end_state;
            idx += 1;
        }

        if idx - start > 1 {
            debug!("re-highlighted blocks {}..{} after edit", start, idx);
        }

        start..idx
    }
}
