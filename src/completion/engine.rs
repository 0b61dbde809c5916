//! Completion engine
//!
//! Turns key presses into popup updates and accepted candidates into text
//! splices. The engine owns the prefix tracking; the vocabulary is held
//! behind an `Arc` and replaced wholesale on every promotion, so a
//! renderer holding an older snapshot never sees a half-updated list.

use std::sync::Arc;

use log::debug;
use unicode_width::UnicodeWidthStr;

use super::input::{KeyInput, KeyKind};
use super::vocabulary::{CaseSensitivity, Vocabulary};

/// Delimiters that end a word and close the popup
pub const DEFAULT_END_OF_WORD: &str = "~!@#$%^&*()_+{}|:\"<>?,./;'[]\\-=";

/// Engine-facing completion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSettings {
    /// Minimum prefix length (in characters) before suggestions show
    pub min_prefix: usize,
    /// Characters that end the current word
    pub end_of_word: String,
    /// Rows the popup shows at once
    pub max_visible: usize,
    /// How the prefix is matched against vocabulary words
    pub case: CaseSensitivity,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            min_prefix: 2,
            end_of_word: DEFAULT_END_OF_WORD.to_string(),
            max_visible: 7,
            case: CaseSensitivity::Insensitive,
        }
    }
}

/// Candidates shown in the popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    /// Prefix the candidates were filtered by
    pub prefix: String,
    /// Matching words in vocabulary order
    pub candidates: Vec<String>,
    /// Index of the highlighted candidate
    pub selected: usize,
    /// Rows the popup shows at once
    pub max_visible: usize,
}

impl Suggestions {
    /// The highlighted candidate
    pub fn selected(&self) -> Option<&str> {
        self.candidates.get(self.selected).map(String::as_str)
    }

    /// The rows currently scrolled into view, keeping the selection visible
    pub fn visible(&self) -> &[String] {
        let rows = self.max_visible.max(1);
        let first = (self.selected + 1).saturating_sub(rows);
        let last = (first + rows).min(self.candidates.len());
        &self.candidates[first..last]
    }

    /// Display width of the widest candidate, for sizing the popup
    pub fn column_width(&self) -> usize {
        self.candidates.iter().map(|c| c.width()).max().unwrap_or(0)
    }
}

/// What the popup should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionUpdate {
    /// Show (or refresh) the popup
    Show(Suggestions),
    /// Hide the popup
    Hide,
    /// Leave the popup as it is
    Unchanged,
    /// The user chose this candidate; call [`CompletionEngine::accept`]
    Accept(String),
}

/// Edit that inserts the rest of an accepted candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSplice {
    /// Always false: the typed prefix stays in place
    pub delete_word_under_cursor: bool,
    /// Byte offset where the text goes (end of the word under the cursor)
    pub insert_at: usize,
    /// Text to insert
    pub text: String,
}

impl TextSplice {
    /// Apply the splice to a line of text
    ///
    /// Offsets past the end append; offsets inside a character are
    /// moved forward to the next char boundary.
    pub fn apply(&self, line: &mut String) {
        let mut at = self.insert_at.min(line.len());
        while !line.is_char_boundary(at) {
            at += 1;
        }
        line.insert_str(at, &self.text);
    }
}

/// Next-word completion driven by key presses
pub struct CompletionEngine {
    vocabulary: Arc<Vocabulary>,
    settings: CompletionSettings,
    /// Word tracked from the last text-producing key
    prev_word: String,
    /// Popup contents while visible
    popup: Option<Suggestions>,
}

impl CompletionEngine {
    /// Create an engine over a vocabulary
    pub fn new(vocabulary: Vocabulary, settings: CompletionSettings) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
            settings,
            prev_word: String::new(),
            popup: None,
        }
    }

    /// Current vocabulary snapshot
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    /// Settings the engine was created with
    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Popup contents, if the popup is visible
    pub fn popup(&self) -> Option<&Suggestions> {
        self.popup.as_ref()
    }

    /// Check if the popup is visible
    pub fn is_visible(&self) -> bool {
        self.popup.is_some()
    }

    /// Handle a key press
    ///
    /// `word_under_cursor` is the word touching the cursor after the key
    /// has been applied to the document.
    pub fn on_key_input(&mut self, word_under_cursor: &str, key: &KeyInput) -> CompletionUpdate {
        if let Some(update) = self.popup_key(key) {
            return update;
        }

        let shortcut = key.is_completion_shortcut();
        if key.ctrl_or_shift() && key.text.is_empty() && !shortcut {
            return CompletionUpdate::Unchanged;
        }

        // A space ends the word; the next word starts a fresh prefix
        if key.text == " " {
            return self.dismiss();
        }
        self.prev_word = word_under_cursor.to_string();

        if !shortcut && self.blocks_completion(key) {
            self.popup = None;
            return CompletionUpdate::Hide;
        }

        self.refresh()
    }

    /// Accept a candidate
    ///
    /// Returns the splice that completes the word ending at `word_end`
    /// and promotes the candidate in the vocabulary.
    pub fn accept(&mut self, candidate: &str, word_end: usize) -> TextSplice {
        let typed = self
            .popup
            .as_ref()
            .map_or(self.prev_word.chars().count(), |p| p.prefix.chars().count());
        let suffix: String = candidate.chars().skip(typed).collect();

        self.vocabulary = Arc::new(self.vocabulary.promote(candidate));
        debug!("accepted '{}', inserting '{}'", candidate, suffix);

        self.prev_word.clear();
        self.popup = None;

        TextSplice {
            delete_word_under_cursor: false,
            insert_at: word_end,
            text: suffix,
        }
    }

    /// Hide the popup and forget the tracked word
    pub fn dismiss(&mut self) -> CompletionUpdate {
        self.prev_word.clear();
        self.popup = None;
        CompletionUpdate::Hide
    }

    /// Move the highlight down one row (no wrap-around)
    pub fn select_next(&mut self) -> CompletionUpdate {
        self.move_selection(|selected, len| (selected + 1).min(len.saturating_sub(1)))
    }

    /// Move the highlight up one row (no wrap-around)
    pub fn select_previous(&mut self) -> CompletionUpdate {
        self.move_selection(|selected, _| selected.saturating_sub(1))
    }

    fn move_selection(&mut self, step: impl Fn(usize, usize) -> usize) -> CompletionUpdate {
        match self.popup.as_mut() {
            Some(popup) => {
                popup.selected = step(popup.selected, popup.candidates.len());
                CompletionUpdate::Show(popup.clone())
            }
            None => CompletionUpdate::Unchanged,
        }
    }

    /// Keys the popup consumes while it is visible
    fn popup_key(&mut self, key: &KeyInput) -> Option<CompletionUpdate> {
        let popup = self.popup.as_ref()?;
        match key.kind {
            KeyKind::Enter | KeyKind::Tab | KeyKind::BackTab => {
                let candidate = popup.selected()?.to_string();
                Some(CompletionUpdate::Accept(candidate))
            }
            KeyKind::Escape => Some(self.dismiss()),
            KeyKind::Up => Some(self.select_previous()),
            KeyKind::Down => Some(self.select_next()),
            _ => None,
        }
    }

    fn blocks_completion(&self, key: &KeyInput) -> bool {
        key.has_other_modifier()
            || !key.edits_text()
            || self.prev_word.chars().count() < self.settings.min_prefix
            || key
                .text
                .chars()
                .last()
                .is_some_and(|ch| self.settings.end_of_word.contains(ch))
    }

    fn refresh(&mut self) -> CompletionUpdate {
        let candidates: Vec<String> = self
            .vocabulary
            .search_with(&self.prev_word, self.settings.case)
            .into_iter()
            .map(str::to_string)
            .collect();

        if candidates.is_empty() {
            self.popup = None;
            return CompletionUpdate::Hide;
        }

        let selected = match &self.popup {
            Some(popup) if popup.prefix == self.prev_word => popup.selected.min(candidates.len() - 1),
            _ => 0,
        };

        let popup = Suggestions {
            prefix: self.prev_word.clone(),
            candidates,
            selected,
            max_visible: self.settings.max_visible,
        };
        self.popup = Some(popup.clone());
        CompletionUpdate::Show(popup)
    }
}
