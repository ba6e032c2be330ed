//! Candidate bar plumbing.

use super::*;

impl CompositionSession {
    /// Push suggestions for `fragment` to the host. An empty fragment means
    /// no word is in progress, so the bar shows next-word predictions for the
    /// last committed word instead of prefix completions.
    pub(super) fn refresh_suggestions(&mut self, fragment: &str) {
        let suggestions = {
            let model = self.model.borrow();
            if fragment.is_empty() {
                match &self.last_committed_word {
                    Some(previous) if !previous.is_empty() => {
                        model.next_word_suggestions(previous)
                    }
                    _ => Vec::new(),
                }
            } else {
                model.suggestions(fragment)
            }
        };
        self.sink.on_suggestions_changed(&suggestions);
    }

    /// Buffered mode completes the trailing fragment of the compose buffer.
    pub(super) fn refresh_buffered_suggestions(&mut self) {
        let fragment = self.compose.trailing_fragment().to_string();
        self.refresh_suggestions(&fragment);
    }

    pub(super) fn clear_suggestions(&mut self) {
        self.sink.on_suggestions_changed(&[]);
    }
}
