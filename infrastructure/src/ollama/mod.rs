//! Live generation via a local Ollama endpoint

pub mod gateway;
pub mod protocol;

pub use gateway::OllamaGateway;
