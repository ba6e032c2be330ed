//! Tests for the composition session

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lingo_engine::{MemoryStore, WordModel};

use super::*;
use crate::core::clock::ManualClock;
use crate::core::host::{KeyCode, SuggestionSink, TextTarget, TranslationClient};
use super::types::LiveToggle;

mod autocorrect;

const LIVE_DELAY: Duration = Duration::from_millis(500);
const PREVIEW_DELAY: Duration = Duration::from_millis(700);
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Fake editable field. Commits append at the end, deletes clamp.
#[derive(Default)]
struct RecordingTarget {
    text: String,
    keys: Vec<KeyCode>,
}

impl TextTarget for RecordingTarget {
    fn commit_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_surrounding_text(&mut self, count: usize) {
        for _ in 0..count {
            if self.text.pop().is_none() {
                break;
            }
        }
    }

    fn send_key_event(&mut self, key: KeyCode) {
        self.keys.push(key);
    }
}

/// Records the latest candidate bar, preview, and mode notifications.
#[derive(Default)]
struct RecordingSink {
    suggestions: Vec<String>,
    preview: String,
    modes: Vec<Mode>,
}

impl SuggestionSink for RecordingSink {
    fn on_suggestions_changed(&mut self, suggestions: &[String]) {
        self.suggestions = suggestions.to_vec();
    }

    fn on_preview_changed(&mut self, text: &str) {
        self.preview = text.to_string();
    }

    fn on_mode_changed(&mut self, mode: Mode) {
        self.modes.push(mode);
    }
}

/// Translates to `T(<input>)` and logs every call.
struct MockClient {
    calls: Arc<Mutex<Vec<String>>>,
}

impl TranslationClient for MockClient {
    fn translate(&self, _source: &str, _target: &str, text: &str) -> Option<String> {
        self.calls.lock().unwrap().push(text.to_string());
        Some(format!("T({text})"))
    }
}

struct FailingClient;

impl TranslationClient for FailingClient {
    fn translate(&self, _source: &str, _target: &str, _text: &str) -> Option<String> {
        None
    }
}

struct Harness {
    session: CompositionSession,
    target: Rc<RefCell<RecordingTarget>>,
    sink: Rc<RefCell<RecordingSink>>,
    clock: ManualClock,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Harness {
    fn field_text(&self) -> String {
        self.target.borrow().text.clone()
    }

    fn suggestions(&self) -> Vec<String> {
        self.sink.borrow().suggestions.clone()
    }

    fn preview(&self) -> String {
        self.sink.borrow().preview.clone()
    }

    fn translation_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == ' ' {
                self.session.on_space();
            } else {
                self.session.on_character(ch);
            }
        }
    }

    /// Advance past the debounce delay and run one blocking pump.
    fn settle(&mut self, delay: Duration) {
        self.clock.advance(delay);
        self.session.pump_blocking(RECV_TIMEOUT);
    }

    fn enable_live(&mut self) {
        assert_eq!(
            self.session.toggle_live_translation(),
            LiveToggle::HintDoubleTap
        );
        self.clock.advance(Duration::from_millis(100));
        assert_eq!(self.session.toggle_live_translation(), LiveToggle::Enabled);
    }
}

fn harness() -> Harness {
    harness_with_words(&[])
}

fn harness_with_words(words: &[&str]) -> Harness {
    build_harness(words, |calls| Box::new(MockClient { calls }))
}

fn harness_failing() -> Harness {
    build_harness(&[], |_| Box::new(FailingClient))
}

fn build_harness(
    words: &[&str],
    make_client: impl FnOnce(Arc<Mutex<Vec<String>>>) -> Box<dyn TranslationClient>,
) -> Harness {
    let mut model = WordModel::load(Box::new(MemoryStore::new()));
    for word in words {
        model.learn_word(word);
    }
    let model = Rc::new(RefCell::new(model));

    let target = Rc::new(RefCell::new(RecordingTarget::default()));
    let sink = Rc::new(RefCell::new(RecordingSink::default()));
    let clock = ManualClock::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let session = CompositionSession::with_clock(
        model,
        Box::new(target.clone()),
        Box::new(sink.clone()),
        make_client(calls.clone()),
        SessionConfig::default(),
        Box::new(clock.clone()),
    );

    Harness {
        session,
        target,
        sink,
        clock,
        calls,
    }
}
