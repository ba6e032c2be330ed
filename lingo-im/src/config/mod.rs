//! Configuration loading and defaults.

pub mod settings;

pub use settings::Settings;
