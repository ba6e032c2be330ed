//! lingo-im: a soft-keyboard composition and prediction core
//!
//! This crate provides the per-keystroke state machine an input-method host
//! embeds: plain text entry with adaptive completion and auto-correct, a
//! buffered compose-then-translate mode, and a live word-by-word
//! auto-translation mode. It uses lingo-engine for the vocabulary, bigram,
//! and edit-distance machinery.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use lingo_engine::{FileStore, MemoryStore, PersistenceStore, WordModel};

pub mod config;
pub mod core;

pub use config::Settings;
pub use core::clock::{Clock, ManualClock, SystemClock};
pub use core::host::{KeyCode, SuggestionSink, TextTarget, TranslationClient};
pub use core::session::CompositionSession;
pub use core::session::types::{LiveToggle, Mode, Overlay, SessionConfig};

/// Build the shared word model a host hands to each [`CompositionSession`]:
/// file-backed under the platform data directory when one exists, in-memory
/// otherwise, seeded with the starter dictionary when configured.
pub fn build_word_model(settings: &Settings) -> Rc<RefCell<WordModel>> {
    let store: Box<dyn PersistenceStore> = match Settings::model_dir() {
        Some(dir) => Box::new(FileStore::new(dir)),
        None => Box::new(MemoryStore::new()),
    };
    let mut model = WordModel::load(store);
    if settings.prediction.seed_base_dictionary {
        model.seed_base_dictionary();
    }
    Rc::new(RefCell::new(model))
}

static INIT_LOGGING: Once = Once::new();

/// Install a stderr tracing subscriber, env-filtered, defaulting to `warn`.
/// Safe to call more than once; only the first call has an effect.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
