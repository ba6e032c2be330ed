//! Mode and overlay transitions.

use tracing::debug;

use super::*;
use super::types::LiveToggle;

impl CompositionSession {
    /// Toggle the buffered compose-then-translate panel.
    ///
    /// Entering clears the compose buffer, resets the tracked output span,
    /// and blanks the preview. Leaving returns to Normal. Either way any
    /// pending debounce timer is dropped.
    pub fn toggle_buffered_composition(&mut self) {
        self.debounce.cancel();
        self.undo = None;
        if self.mode == Mode::BufferedComposition {
            self.mode = Mode::Normal;
        } else {
            self.mode = Mode::BufferedComposition;
            self.compose.clear();
            self.committed_translation_len = 0;
            self.sink.on_preview_changed("");
        }
        debug!(mode = ?self.mode, "buffered composition toggled");
        self.sink.on_mode_changed(self.mode);
    }

    /// Activate the live-translation toggle.
    ///
    /// Turning off is immediate. Turning on takes two activations strictly
    /// within the double-tap window; the first only asks the host to surface
    /// a hint. Entering clears the live buffer and tracked output length.
    pub fn toggle_live_translation(&mut self) -> LiveToggle {
        self.undo = None;
        if self.mode == Mode::LiveTranslation {
            self.debounce.cancel();
            self.mode = Mode::Normal;
            debug!("live translation off");
            self.sink.on_mode_changed(self.mode);
            return LiveToggle::Disabled;
        }

        let now = self.clock.now();
        let double_tap = self
            .last_live_tap
            .is_some_and(|prev| now.duration_since(prev) < self.config.double_tap_window);
        self.last_live_tap = Some(now);
        if !double_tap {
            return LiveToggle::HintDoubleTap;
        }

        self.debounce.cancel();
        self.mode = Mode::LiveTranslation;
        self.live_buffer.clear();
        self.live_output_len = 0;
        self.clear_suggestions();
        debug!(target_lang = %self.config.target_lang, "live translation on");
        self.sink.on_mode_changed(self.mode);
        LiveToggle::Enabled
    }

    /// Open or close an overlay panel. Overlays pause character routing but
    /// leave every buffer intact; closing one drops any pending debounce
    /// timer so a stale request cannot fire underneath the reopened mode.
    pub fn set_overlay(&mut self, overlay: Overlay) {
        if overlay == self.overlay {
            return;
        }
        if overlay == Overlay::None {
            self.debounce.cancel();
        }
        debug!(?overlay, "overlay changed");
        self.overlay = overlay;
    }

    pub fn toggle_emoji_overlay(&mut self) {
        let next = if self.overlay == Overlay::Emoji {
            Overlay::None
        } else {
            Overlay::Emoji
        };
        self.set_overlay(next);
    }

    pub fn toggle_clipboard_overlay(&mut self) {
        let next = if self.overlay == Overlay::Clipboard {
            Overlay::None
        } else {
            Overlay::Clipboard
        };
        self.set_overlay(next);
    }
}
