pub mod autocorrect;
pub mod store;
pub mod word_model;

pub use autocorrect::{best_match, levenshtein};
pub use store::{FileStore, MemoryStore, PersistenceStore, StoreError};
pub use word_model::WordModel;
