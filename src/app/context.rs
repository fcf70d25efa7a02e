use crate::ports::{ClipboardWriter, SuggestionClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SuggestionClient, C: ClipboardWriter> {
    suggestions: S,
    clipboard: C,
}

impl<S: SuggestionClient, C: ClipboardWriter> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(suggestions: S, clipboard: C) -> Self {
        Self { suggestions, clipboard }
    }

    /// Get a reference to the suggestion client.
    pub fn suggestions(&self) -> &S {
        &self.suggestions
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
