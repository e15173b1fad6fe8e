//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Defaults target a stock local setup: Ollama on its default port, the
//! `llama3.2` model, simulation off.

use openprop_application::GenerationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Simulation toggle: fabricate output instead of calling Ollama
    pub simulate: bool,
    /// Ollama endpoint settings
    pub ollama: FileOllamaConfig,
    /// Run tracking settings
    pub tracking: FileTrackingConfig,
    /// Decoding parameters
    pub generation: FileGenerationConfig,
}

/// `[ollama]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Server base address
    pub base_url: String,
    /// Model identifier passed with every request
    pub model: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
        }
    }
}

/// `[tracking]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrackingConfig {
    /// Whether runs are recorded at all
    pub enabled: bool,
    /// Directory holding the run store
    pub dir: String,
}

impl Default for FileTrackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: "openprop-runs".to_string(),
        }
    }
}

/// `[generation]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    /// Round-trip bound per request, in seconds
    pub timeout_secs: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
            timeout_secs: params.timeout.as_secs(),
        }
    }
}

impl FileGenerationConfig {
    /// Convert into the application-layer parameter set
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_temperature(self.temperature)
            .with_top_p(self.top_p)
            .with_max_tokens(self.max_tokens)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_local_ollama() {
        let config = FileConfig::default();
        assert!(!config.simulate);
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.ollama.model, "llama3.2");
        assert!(config.tracking.enabled);
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.generation.top_p, 0.9);
        assert_eq!(config.generation.max_tokens, 512);
        assert_eq!(config.generation.timeout_secs, 120);
    }

    #[test]
    fn test_to_params() {
        let section = FileGenerationConfig {
            temperature: 0.3,
            top_p: 0.8,
            max_tokens: 64,
            timeout_secs: 5,
        };
        let params = section.to_params();
        assert_eq!(params.temperature, 0.3);
        assert_eq!(params.max_tokens, 64);
        assert_eq!(params.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml_from_str(
            r#"
            simulate = true

            [ollama]
            model = "mistral"
            "#,
        );
        assert!(config.simulate);
        assert_eq!(config.ollama.model, "mistral");
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.generation.max_tokens, 512);
    }

    fn toml_from_str(raw: &str) -> FileConfig {
        use figment::providers::{Format, Toml};
        figment::Figment::new()
            .merge(Toml::string(raw))
            .extract()
            .unwrap()
    }
}
