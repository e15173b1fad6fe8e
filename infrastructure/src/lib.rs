//! Infrastructure layer for openprop
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the live Ollama gateway, the simulated gateway, the
//! filesystem run tracker, and configuration file loading.

pub mod config;
pub mod ollama;
pub mod simulated;
pub mod tracking;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileOllamaConfig, FileTrackingConfig,
};
pub use ollama::OllamaGateway;
pub use simulated::SimulatedGateway;
pub use tracking::FileRunTracker;
