//! Adaptive vocabulary and next-word (bigram) prediction model.
//!
//! Owns the set of known words and a per-word table of recently observed
//! successors. Both are loaded once at construction and rewritten through the
//! persistence store on every mutation; the vocabulary only ever grows.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::store::PersistenceStore;

/// Maximum number of prefix suggestions returned per query.
pub const MAX_SUGGESTIONS: usize = 5;
/// Maximum number of successors remembered per bigram key.
pub const MAX_SUCCESSORS: usize = 5;

const WORDS_KEY: &str = "user_words";
const BIGRAMS_KEY: &str = "user_bigrams";

/// Starter vocabulary so prefix completion and auto-correct are useful
/// before any learning has happened.
const BASE_DICTIONARY: &[&str] = &[
    "the", "and", "that", "have", "for", "not", "with", "you", "this", "but", "his", "from",
    "they", "we", "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there",
    "their", "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year",
    "your", "good", "some", "could", "them", "see", "other", "than", "then", "now", "look",
    "only", "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our",
    "work", "first", "well", "way", "even", "new", "want", "because", "any", "these", "give",
    "day", "most", "keyboard", "translate", "love", "are",
];

/// The prediction model: vocabulary plus bigram successor table.
pub struct WordModel {
    vocabulary: HashSet<String>,
    bigrams: HashMap<String, Vec<String>>,
    store: Box<dyn PersistenceStore>,
}

impl WordModel {
    /// Load both blobs from the store. The base dictionary is not seeded
    /// here; call [`seed_base_dictionary`](Self::seed_base_dictionary) for
    /// interactive use.
    pub fn load(store: Box<dyn PersistenceStore>) -> Self {
        let mut vocabulary = HashSet::new();
        if let Some(raw) = store.get(WORDS_KEY) {
            for word in raw.lines() {
                if !word.is_empty() {
                    vocabulary.insert(word.to_string());
                }
            }
        }

        let mut bigrams = HashMap::new();
        if let Some(raw) = store.get(BIGRAMS_KEY) {
            for entry in raw.split('|') {
                let parts: Vec<&str> = entry.split(':').collect();
                if parts.len() != 2 {
                    continue;
                }
                let successors: Vec<String> =
                    parts[1].split(',').map(str::to_string).collect();
                bigrams.insert(parts[0].to_string(), successors);
            }
        }

        debug!(
            words = vocabulary.len(),
            bigram_keys = bigrams.len(),
            "word model loaded"
        );
        Self {
            vocabulary,
            bigrams,
            store,
        }
    }

    /// Add the built-in starter dictionary to the in-memory vocabulary.
    pub fn seed_base_dictionary(&mut self) {
        for word in BASE_DICTIONARY {
            self.vocabulary.insert((*word).to_string());
        }
    }

    /// Case-insensitive prefix completion: excludes an exact (case-insensitive)
    /// match of `prefix`, sorted ascending, at most [`MAX_SUGGESTIONS`].
    /// An empty prefix yields nothing; callers fall back to
    /// [`next_word_suggestions`](Self::next_word_suggestions).
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let check = prefix.to_lowercase();
        let mut results: Vec<String> = self
            .vocabulary
            .iter()
            .filter(|word| {
                let lower = word.to_lowercase();
                lower.starts_with(&check) && lower != check
            })
            .cloned()
            .collect();
        results.sort();
        results.truncate(MAX_SUGGESTIONS);
        results
    }

    /// Successors recently observed after `previous`, most recent first.
    pub fn next_word_suggestions(&self, previous: &str) -> Vec<String> {
        let key = previous.to_lowercase();
        self.bigrams.get(key.trim()).cloned().unwrap_or_default()
    }

    /// Case-insensitive vocabulary membership.
    pub fn contains(&self, word: &str) -> bool {
        let check = word.to_lowercase();
        self.vocabulary.iter().any(|w| w.to_lowercase() == check)
    }

    /// Iterate the vocabulary in arbitrary order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Remember a word once it has been committed. Words shorter than two
    /// characters (after trimming) are ignored.
    pub fn learn_word(&mut self, word: &str) {
        let clean = word.trim();
        if clean.chars().count() < 2 {
            return;
        }
        if self.vocabulary.insert(clean.to_string()) {
            self.flush_words();
        }
    }

    /// Insert many words with a single flush at the end. Used for pasted
    /// text, where one write per word would hammer the store.
    pub fn learn_words_batch<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        let mut modified = false;
        for word in words {
            if word.chars().count() > 1 && self.vocabulary.insert(word.to_string()) {
                modified = true;
            }
        }
        if modified {
            self.flush_words();
        }
    }

    /// Record that `current` followed `previous`: move-to-front insert under
    /// the lowercased key, capped at [`MAX_SUCCESSORS`].
    pub fn learn_bigram(&mut self, previous: &str, current: &str) {
        if previous.is_empty() || current.is_empty() {
            return;
        }
        let key = previous.to_lowercase().trim().to_string();
        let value = current.trim().to_string();

        let list = self.bigrams.entry(key).or_default();
        list.retain(|existing| *existing != value);
        list.insert(0, value);
        list.truncate(MAX_SUCCESSORS);

        self.flush_bigrams();
    }

    fn flush_words(&mut self) {
        let mut words: Vec<&str> = self.vocabulary.iter().map(String::as_str).collect();
        words.sort_unstable();
        let blob = words.join("\n");
        if let Err(e) = self.store.put(WORDS_KEY, &blob) {
            warn!("failed to persist vocabulary: {e}");
        }
    }

    fn flush_bigrams(&mut self) {
        let blob: String = self
            .bigrams
            .iter()
            .map(|(key, successors)| format!("{key}:{}", successors.join(",")))
            .collect::<Vec<String>>()
            .join("|");
        if let Err(e) = self.store.put(BIGRAMS_KEY, &blob) {
            warn!("failed to persist bigram table: {e}");
        }
    }
}

impl std::fmt::Debug for WordModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordModel")
            .field("vocabulary", &self.vocabulary.len())
            .field("bigram_keys", &self.bigrams.len())
            .finish()
    }
}
