//! Notepad text model and the statistics shown in its toolbar.

/// MIME type used for downloaded notes.
pub const NOTES_MIME_TYPE: &str = "text/markdown";

/// Free text edited by the notepad.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotepadDocument {
    text: String,
}

impl NotepadDocument {
    /// Wraps existing text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whitespace-separated tokens of the trimmed text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Characters in the text, counted as Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Toolbar summary, e.g. `3 words, 17 chars`.
    pub fn stats_label(&self) -> String {
        format!("{} words, {} chars", self.word_count(), self.char_count())
    }
}

/// File name for a notes download stamped with `date` (`YYYY-MM-DD`).
pub fn download_file_name(date: &str) -> String {
    format!("notes_{date}.md")
}
