//! Type definitions for the composition session

use std::time::Duration;

use crate::config::Settings;

/// Input mode. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Characters commit straight to the host field; completion and
    /// auto-correct run on the word being typed.
    #[default]
    Normal,
    /// Characters accumulate in a compose buffer shown in the translation
    /// panel; the buffer is translated as a whole.
    BufferedComposition,
    /// Characters accumulate in a buffer that is re-translated word by word
    /// after each pause, the output replacing what was committed before.
    LiveTranslation,
}

/// Overlay panels that suspend character routing without touching the
/// underlying mode's buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Emoji,
    Clipboard,
}

/// Result of a live-translation toggle activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveToggle {
    /// Mode is now on.
    Enabled,
    /// Mode is now off.
    Disabled,
    /// First activation while off: the host should hint that a second tap
    /// within the double-tap window enables the mode.
    HintDoubleTap,
}

/// Auto-correct undo state, valid only immediately after a correction.
#[derive(Debug, Clone)]
pub(crate) struct AutoCorrectUndo {
    /// What the user actually typed.
    pub original: String,
    /// What was committed in its place.
    pub corrected: String,
}

/// Session tunables, usually derived from [`Settings`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Source language for buffered translation.
    pub source_lang: String,
    /// Target language for both translation modes.
    pub target_lang: String,
    /// Source language for live translation ("auto" = detect).
    pub live_source_lang: String,
    /// Quiet period before a live-mode translation request fires.
    pub live_debounce: Duration,
    /// Quiet period before the buffered panel re-translates.
    pub preview_debounce: Duration,
    /// Window for the double-tap gesture that enables live translation.
    pub double_tap_window: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SessionConfig {
    fn from(settings: &Settings) -> Self {
        let t = &settings.translation;
        Self {
            source_lang: t.source_lang.clone(),
            target_lang: t.target_lang.clone(),
            live_source_lang: t.live_source_lang.clone(),
            live_debounce: Duration::from_millis(t.live_debounce_ms),
            preview_debounce: Duration::from_millis(t.preview_debounce_ms),
            double_tap_window: Duration::from_millis(t.double_tap_window_ms),
        }
    }
}
