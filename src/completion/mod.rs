//! Next-word completion
//!
//! A [`Vocabulary`] of known words filtered by the prefix under the
//! cursor, with accepted words promoted one rank per use.

mod cursor;
mod engine;
mod input;
mod vocabulary;

pub use cursor::WordUnderCursor;
pub use engine::{
    CompletionEngine, CompletionSettings, CompletionUpdate, Suggestions, TextSplice, DEFAULT_END_OF_WORD,
};
pub use input::{KeyInput, KeyKind};
pub use vocabulary::{CaseSensitivity, Vocabulary};
