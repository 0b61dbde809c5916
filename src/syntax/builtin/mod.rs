//! Built-in rule sets
//!
//! This module provides the highlighting rules used when no rule
//! file is configured.

mod markup;

pub use markup::markup_highlighter;
