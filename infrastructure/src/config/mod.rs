//! Configuration file loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileGenerationConfig, FileOllamaConfig, FileTrackingConfig};
pub use loader::ConfigLoader;
