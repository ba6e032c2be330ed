//! CompositionSession - the per-attach state machine.
//!
//! Every keystroke from the host enters here and is dispatched by the current
//! mode: committed straight to the text field (Normal), accumulated for
//! panel translation (BufferedComposition), or accumulated and re-translated
//! after each pause (LiveTranslation). The session also owns the auto-correct
//! undo window and the debounce/worker plumbing for translation requests.

mod buffer;
mod buffered;
mod live;
mod mode;
mod normal;
mod suggest;
mod translate;
pub mod types;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use lingo_engine::WordModel;
use tracing::trace;

use buffer::ComposeBuffer;
use types::{AutoCorrectUndo, Mode, Overlay, SessionConfig};

use super::clock::{Clock, SystemClock};
use super::debounce::Debouncer;
use super::host::{SuggestionSink, TextTarget, TranslationClient};
use super::worker::{TranslationRequest, TranslationWorker};

/// The composition state machine. One per keyboard attach; buffers are
/// ephemeral, the shared [`WordModel`] persists across sessions.
pub struct CompositionSession {
    /// Current input mode
    mode: Mode,
    /// Active overlay panel, if any
    overlay: Overlay,
    /// Word being typed in Normal mode (for completion and auto-correct)
    word: String,
    /// Most recently committed word (bigram context)
    last_committed_word: Option<String>,
    /// Auto-correct undo window, valid until the next keystroke
    undo: Option<AutoCorrectUndo>,
    /// Skip auto-correct on the next space (set by an undo)
    suppress_next_correction: bool,
    /// Compose buffer for BufferedComposition
    compose: ComposeBuffer,
    /// Chars of translated output currently committed by buffered mode
    committed_translation_len: usize,
    /// Compose buffer for LiveTranslation
    live_buffer: ComposeBuffer,
    /// Chars of translated output currently committed by live mode
    live_output_len: usize,
    /// Last activation of the live toggle while off (double-tap gesture)
    last_live_tap: Option<Instant>,
    /// Pending (not yet dispatched) translation request
    debounce: Debouncer<TranslationRequest>,
    /// Sequential background translation worker
    worker: TranslationWorker,
    /// Shared prediction model
    model: Rc<RefCell<WordModel>>,
    /// Host text field
    target: Box<dyn TextTarget>,
    /// Host UI callbacks
    sink: Box<dyn SuggestionSink>,
    /// Time source for debounce and gesture windows
    clock: Box<dyn Clock>,
    config: SessionConfig,
}

impl CompositionSession {
    /// Create a session over the host's collaborators, using wall-clock time.
    pub fn new(
        model: Rc<RefCell<WordModel>>,
        target: Box<dyn TextTarget>,
        sink: Box<dyn SuggestionSink>,
        client: Box<dyn TranslationClient>,
        config: SessionConfig,
    ) -> Self {
        Self::with_clock(model, target, sink, client, config, Box::new(SystemClock))
    }

    /// Create a session with an injected clock (tests drive a manual clock).
    pub fn with_clock(
        model: Rc<RefCell<WordModel>>,
        target: Box<dyn TextTarget>,
        sink: Box<dyn SuggestionSink>,
        client: Box<dyn TranslationClient>,
        config: SessionConfig,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            mode: Mode::Normal,
            overlay: Overlay::None,
            word: String::new(),
            last_committed_word: None,
            undo: None,
            suppress_next_correction: false,
            compose: ComposeBuffer::new(),
            committed_translation_len: 0,
            live_buffer: ComposeBuffer::new(),
            live_output_len: 0,
            last_live_tap: None,
            debounce: Debouncer::new(),
            worker: TranslationWorker::spawn(client),
            model,
            target,
            sink,
            clock,
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// A printable character was typed.
    pub fn on_character(&mut self, ch: char) {
        if self.overlay != Overlay::None {
            return;
        }
        trace!(mode = ?self.mode, %ch, "character");
        match self.mode {
            Mode::Normal => self.normal_character(ch),
            Mode::BufferedComposition => self.buffered_character(ch),
            Mode::LiveTranslation => self.live_character(ch),
        }
    }

    /// The space key was pressed.
    pub fn on_space(&mut self) {
        if self.overlay != Overlay::None {
            return;
        }
        match self.mode {
            Mode::Normal => self.normal_space(),
            Mode::BufferedComposition => self.buffered_space(),
            Mode::LiveTranslation => self.live_space(),
        }
    }

    /// The delete/backspace key was pressed. Still routed while an overlay
    /// is open (overlay panels carry their own backspace button).
    pub fn on_delete(&mut self) {
        match self.mode {
            Mode::Normal => self.normal_delete(),
            Mode::BufferedComposition => self.buffered_delete(),
            Mode::LiveTranslation => self.live_delete(),
        }
    }

    /// The done/enter key was pressed.
    pub fn on_done(&mut self) {
        if self.overlay != Overlay::None {
            return;
        }
        match self.mode {
            Mode::Normal => self.normal_done(),
            Mode::BufferedComposition => self.buffered_done(),
            Mode::LiveTranslation => self.live_done(),
        }
    }

    /// The user tapped a suggestion in the candidate bar.
    pub fn on_suggestion_selected(&mut self, word: &str) {
        if self.overlay != Overlay::None {
            return;
        }
        match self.mode {
            Mode::Normal => self.normal_suggestion_selected(word),
            Mode::BufferedComposition => self.buffered_suggestion_selected(word),
            // No candidate bar of its own; falls back to the Normal path.
            Mode::LiveTranslation => self.normal_suggestion_selected(word),
        }
    }

    /// Text pasted from the clipboard overlay (or any host paste source).
    /// Routed even while an overlay is open - that is where pastes originate.
    pub fn paste_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.mode {
            Mode::Normal => self.normal_paste(text),
            Mode::BufferedComposition => self.buffered_paste(text),
            Mode::LiveTranslation => self.live_paste(text),
        }
    }

    /// Change the translation target language (both modes).
    pub fn set_target_language(&mut self, code: &str) {
        self.config.target_lang = code.to_string();
    }
}
