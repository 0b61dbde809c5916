//! Syntax highlighting module
//!
//! This module provides block-incremental highlighting:
//! - Ordered regex pattern rules applied to each block
//! - Comments that span blocks, tracked through a carried [`BlockState`]
//! - A document cache that cascades re-highlighting only as far as needed

mod builtin;
mod document;
mod highlighter;
mod loader;
mod rules;
mod style;
mod tokens;

pub use builtin::markup_highlighter;
pub use document::BlockDocument;
pub use highlighter::Highlighter;
pub use rules::{BlockState, CommentMarkers, HighlightResult, PatternRule};
pub use style::{resolve, segments, Color, Style, StyledSpan};
pub use tokens::StyleTag;
