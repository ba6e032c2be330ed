//! BufferedComposition mode: compose in a panel, translate as a whole.
//!
//! Nothing typed here touches the host field directly. The panel preview
//! mirrors the buffer; a debounced request keeps the committed translation
//! current, and the done key fires an immediate translate-and-clear.

use super::*;
use crate::core::worker::RequestPurpose;

impl CompositionSession {
    pub(super) fn buffered_character(&mut self, ch: char) {
        self.compose.push(ch);
        self.after_buffered_edit();
    }

    pub(super) fn buffered_space(&mut self) {
        self.compose.push(' ');
        self.after_buffered_edit();
    }

    pub(super) fn buffered_delete(&mut self) {
        if self.compose.is_empty() {
            return;
        }
        self.compose.pop();
        self.sink.on_preview_changed(self.compose.text());

        if self.compose.is_empty() {
            // Emptying the buffer retracts the committed translation and
            // drops the pending request.
            self.debounce.cancel();
            let committed = self.committed_translation_len;
            if committed > 0 {
                self.target.delete_surrounding_text(committed);
            }
            self.committed_translation_len = 0;
            self.refresh_suggestions("");
        } else {
            self.schedule_preview_translation();
            self.refresh_buffered_suggestions();
        }
    }

    pub(super) fn buffered_done(&mut self) {
        if self.compose.trimmed_is_empty() {
            return;
        }
        // Explicit translate: skip the debounce entirely. The commit purpose
        // clears the buffer and preview once the result is applied.
        self.debounce.cancel();
        self.submit_translation(self.buffered_request(RequestPurpose::BufferedCommit));
    }

    pub(super) fn buffered_suggestion_selected(&mut self, word: &str) {
        // Replace the trailing fragment (or the whole buffer when it has no
        // space yet) with the chosen word.
        let replaced = {
            let text = self.compose.text();
            match text.rfind(' ') {
                Some(idx) => format!("{}{word} ", &text[..=idx]),
                None => format!("{word} "),
            }
        };
        self.compose.set(replaced);

        self.sink.on_preview_changed(self.compose.text());
        self.debounce.cancel();
        self.submit_translation(self.buffered_request(RequestPurpose::BufferedPreview));
        self.clear_suggestions();
    }

    pub(super) fn buffered_paste(&mut self, text: &str) {
        self.compose.push_str(text);
        self.sink.on_preview_changed(self.compose.text());
        self.debounce.cancel();
        self.submit_translation(self.buffered_request(RequestPurpose::BufferedPreview));
        self.refresh_buffered_suggestions();
    }

    /// Common tail for character and space input: preview, debounce, and
    /// suggestions for the trailing word fragment.
    fn after_buffered_edit(&mut self) {
        self.sink.on_preview_changed(self.compose.text());
        self.schedule_preview_translation();
        self.refresh_buffered_suggestions();
    }

    fn schedule_preview_translation(&mut self) {
        if self.compose.trimmed_is_empty() {
            self.debounce.cancel();
            return;
        }
        let request = self.buffered_request(RequestPurpose::BufferedPreview);
        let now = self.clock.now();
        self.debounce
            .schedule(request, now, self.config.preview_debounce);
    }

    fn buffered_request(&self, purpose: RequestPurpose) -> TranslationRequest {
        TranslationRequest {
            source_lang: self.config.source_lang.clone(),
            target_lang: self.config.target_lang.clone(),
            text: self.compose.text().to_string(),
            purpose,
        }
    }
}
