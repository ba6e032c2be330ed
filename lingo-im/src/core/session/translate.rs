//! Translation dispatch and result application.
//!
//! The debouncer only holds a not-yet-dispatched request; `pump` moves due
//! requests to the worker and applies any finished outcomes. Outcomes are
//! applied whenever they are drained, even if the user kept typing or changed
//! mode in between, so a slow backend can visibly replace newer text.

use std::time::Duration;

use tracing::debug;

use super::*;
use crate::core::worker::{RequestPurpose, TranslationOutcome};

impl CompositionSession {
    /// Drive the asynchronous side: dispatch a due debounced request to the
    /// worker and apply every outcome that has finished. Hosts call this from
    /// their input loop (on a timer, or after each event batch).
    pub fn pump(&mut self) {
        let now = self.clock.now();
        if let Some(request) = self.debounce.take_due(now) {
            self.submit_translation(request);
        }
        while let Some(outcome) = self.worker.try_recv() {
            self.apply_translation(outcome);
        }
    }

    /// Like [`pump`](Self::pump), but after dispatching waits up to `timeout`
    /// for one outcome. For hosts without a polling loop.
    pub fn pump_blocking(&mut self, timeout: Duration) {
        let now = self.clock.now();
        if let Some(request) = self.debounce.take_due(now) {
            self.submit_translation(request);
        }
        if let Some(outcome) = self.worker.recv_timeout(timeout) {
            self.apply_translation(outcome);
        }
        while let Some(outcome) = self.worker.try_recv() {
            self.apply_translation(outcome);
        }
    }

    pub(super) fn submit_translation(&mut self, request: TranslationRequest) {
        debug!(purpose = ?request.purpose, chars = request.text.chars().count(), "translation dispatched");
        self.worker.submit(request);
    }

    fn apply_translation(&mut self, outcome: TranslationOutcome) {
        let Some(translated) = outcome.translated else {
            debug!(purpose = ?outcome.purpose, "translation failed, keeping text");
            return;
        };

        match outcome.purpose {
            RequestPurpose::LiveReplace => {
                self.replace_span(&translated, SpanKind::Live);
            }
            RequestPurpose::BufferedPreview => {
                self.replace_span(&translated, SpanKind::Buffered);
            }
            RequestPurpose::BufferedCommit => {
                self.replace_span(&translated, SpanKind::Buffered);
                // The committed text is final now; forget the span so a later
                // preview cannot retract it, and reset the panel.
                self.committed_translation_len = 0;
                self.compose.clear();
                self.sink.on_preview_changed("");
                self.clear_suggestions();
            }
        }
    }

    /// Replace the previously committed translated span with `translated`
    /// and track the new length.
    fn replace_span(&mut self, translated: &str, kind: SpanKind) {
        let tracked = match kind {
            SpanKind::Live => &mut self.live_output_len,
            SpanKind::Buffered => &mut self.committed_translation_len,
        };
        if *tracked > 0 {
            self.target.delete_surrounding_text(*tracked);
        }
        self.target.commit_text(translated);
        *tracked = translated.chars().count();
    }
}

#[derive(Clone, Copy)]
enum SpanKind {
    Live,
    Buffered,
}
