//! nextword - block-incremental markup highlighting and next-word completion
//!
//! The host editor feeds [`syntax::Highlighter`] one block at a time,
//! carrying a [`syntax::BlockState`] between blocks, and feeds
//! [`completion::CompletionEngine`] each key press.

pub mod completion;
pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{EditorError, Result};
