//! Configuration module — project-level settings with defaults.

pub mod settings;

pub use settings::Settings;
