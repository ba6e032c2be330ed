//! Trait boundary to the embedding input-method host.
//!
//! The session mutates the host's editable field only through [`TextTarget`],
//! reports UI state only through [`SuggestionSink`], and reaches the
//! translation backend only through [`TranslationClient`].

use std::cell::RefCell;
use std::rc::Rc;

use super::session::types::Mode;

/// Non-character keys the session forwards to the host field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
}

/// The host's editable text field.
pub trait TextTarget {
    /// Append `text` at the cursor.
    fn commit_text(&mut self, text: &str);

    /// Delete up to `count` characters before the cursor. Implementations
    /// must clamp to the text actually present rather than failing.
    fn delete_surrounding_text(&mut self, count: usize);

    /// Forward a raw key event (e.g. Enter) to the field.
    fn send_key_event(&mut self, key: KeyCode);
}

/// Outbound UI callbacks. All calls originate on the host's input thread.
pub trait SuggestionSink {
    fn on_suggestions_changed(&mut self, suggestions: &[String]);
    fn on_preview_changed(&mut self, text: &str);
    fn on_mode_changed(&mut self, mode: Mode);
}

/// Translation backend. `None` means the request failed; the session treats
/// that as "no update" and surfaces nothing.
pub trait TranslationClient: Send {
    fn translate(&self, source_lang: &str, target_lang: &str, text: &str) -> Option<String>;
}

// Shared-handle impls so a host (or a test) can keep a reference to the
// collaborator it hands the session.

impl<T: TextTarget> TextTarget for Rc<RefCell<T>> {
    fn commit_text(&mut self, text: &str) {
        self.borrow_mut().commit_text(text);
    }

    fn delete_surrounding_text(&mut self, count: usize) {
        self.borrow_mut().delete_surrounding_text(count);
    }

    fn send_key_event(&mut self, key: KeyCode) {
        self.borrow_mut().send_key_event(key);
    }
}

impl<T: SuggestionSink> SuggestionSink for Rc<RefCell<T>> {
    fn on_suggestions_changed(&mut self, suggestions: &[String]) {
        self.borrow_mut().on_suggestions_changed(suggestions);
    }

    fn on_preview_changed(&mut self, text: &str) {
        self.borrow_mut().on_preview_changed(text);
    }

    fn on_mode_changed(&mut self, mode: Mode) {
        self.borrow_mut().on_mode_changed(mode);
    }
}
