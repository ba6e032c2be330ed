//! Normal mode: characters commit straight to the host field.

use lingo_engine::autocorrect;

use super::*;
use crate::core::host::KeyCode;

impl CompositionSession {
    pub(super) fn normal_character(&mut self, ch: char) {
        // Any character invalidates the auto-correct undo window.
        self.undo = None;
        self.target.commit_text(ch.encode_utf8(&mut [0; 4]));

        if ch.is_alphanumeric() {
            self.word.push(ch);
            let fragment = self.word.clone();
            self.refresh_suggestions(&fragment);
        } else {
            // Word boundary: learn the finished word and switch the
            // candidate bar to next-word predictions.
            let finished = std::mem::take(&mut self.word);
            self.model.borrow_mut().learn_word(&finished);
            self.last_committed_word = Some(finished);
            self.refresh_suggestions("");
        }
    }

    pub(super) fn normal_space(&mut self) {
        let typed = self.word.clone();
        let mut correction_applied = false;

        if !self.suppress_next_correction && typed.chars().count() > 1 {
            let correction = autocorrect::best_match(&self.model.borrow(), &typed);
            if let Some(correction) = correction
                && correction != typed
            {
                self.target.delete_surrounding_text(typed.chars().count());
                self.target.commit_text(&correction);
                self.undo = Some(AutoCorrectUndo {
                    original: typed,
                    corrected: correction.clone(),
                });
                self.word = correction;
                correction_applied = true;
            }
        }
        if !correction_applied {
            self.undo = None;
            self.suppress_next_correction = false;
        }

        self.target.commit_text(" ");

        let just_typed = std::mem::take(&mut self.word);
        {
            let mut model = self.model.borrow_mut();
            model.learn_word(&just_typed);
            if let Some(previous) = &self.last_committed_word
                && !previous.is_empty()
            {
                model.learn_bigram(previous, &just_typed);
            }
        }
        self.last_committed_word = Some(just_typed);
        self.refresh_suggestions("");
    }

    pub(super) fn normal_delete(&mut self) {
        if let Some(undo) = self.undo.take() {
            // Undo the auto-correction: remove "corrected " and restore the
            // original word exactly as typed, then skip auto-correct once so
            // the next space does not immediately re-correct it.
            self.target
                .delete_surrounding_text(undo.corrected.chars().count() + 1);
            self.target.commit_text(&undo.original);
            self.word = undo.original;
            self.suppress_next_correction = true;
            return;
        }

        self.target.delete_surrounding_text(1);
        if !self.word.is_empty() {
            self.word.pop();
            let fragment = self.word.clone();
            self.refresh_suggestions(&fragment);
        } else {
            self.clear_suggestions();
        }
    }

    pub(super) fn normal_done(&mut self) {
        self.undo = None;
        let finished = std::mem::take(&mut self.word);
        self.model.borrow_mut().learn_word(&finished);
        self.last_committed_word = Some(finished);
        self.clear_suggestions();
        self.target.send_key_event(KeyCode::Enter);
    }

    pub(super) fn normal_suggestion_selected(&mut self, word: &str) {
        self.undo = None;
        if !self.word.is_empty() {
            self.target
                .delete_surrounding_text(self.word.chars().count());
        }
        self.target.commit_text(&format!("{word} "));

        {
            let mut model = self.model.borrow_mut();
            model.learn_word(word);
            if let Some(previous) = &self.last_committed_word
                && !previous.is_empty()
            {
                model.learn_bigram(previous, word);
            }
        }
        self.last_committed_word = Some(word.to_string());
        self.word.clear();
        self.refresh_suggestions("");
    }

    pub(super) fn normal_paste(&mut self, text: &str) {
        self.undo = None;
        self.target.commit_text(text);
        self.model
            .borrow_mut()
            .learn_words_batch(text.split_whitespace());
        self.last_committed_word = Some(text.trim().to_string());
        self.word.clear();
        self.refresh_suggestions("");
    }
}
