//! LiveTranslation mode: type, pause, and the translated text replaces what
//! the last translation committed.

use super::*;
use crate::core::host::KeyCode;
use crate::core::worker::RequestPurpose;

impl CompositionSession {
    pub(super) fn live_character(&mut self, ch: char) {
        self.live_buffer.push(ch);
        self.schedule_live_translation();
    }

    pub(super) fn live_space(&mut self) {
        self.live_buffer.push(' ');
        self.schedule_live_translation();
    }

    pub(super) fn live_delete(&mut self) {
        if self.live_buffer.is_empty() {
            // Nothing composed; fall through to the Normal backspace so the
            // current-word tracking stays in step with the field.
            self.normal_delete();
            return;
        }
        self.live_buffer.pop();
        if self.live_buffer.is_empty() {
            self.debounce.cancel();
            let committed = self.live_output_len;
            if committed > 0 {
                self.target.delete_surrounding_text(committed);
            }
            self.live_output_len = 0;
        } else {
            self.schedule_live_translation();
        }
    }

    /// Done finishes the utterance: whatever translation is on screen stays,
    /// the buffer starts over, and the enter key goes through.
    pub(super) fn live_done(&mut self) {
        self.debounce.cancel();
        self.live_buffer.clear();
        self.live_output_len = 0;
        self.target.send_key_event(KeyCode::Enter);
    }

    pub(super) fn live_paste(&mut self, text: &str) {
        self.live_buffer.push_str(text);
        self.schedule_live_translation();
    }

    fn schedule_live_translation(&mut self) {
        if self.live_buffer.trimmed_is_empty() {
            self.debounce.cancel();
            return;
        }
        let request = TranslationRequest {
            source_lang: self.config.live_source_lang.clone(),
            target_lang: self.config.target_lang.clone(),
            text: self.live_buffer.text().to_string(),
            purpose: RequestPurpose::LiveReplace,
        };
        let now = self.clock.now();
        self.debounce
            .schedule(request, now, self.config.live_debounce);
    }
}
