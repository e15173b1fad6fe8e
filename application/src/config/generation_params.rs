//! Generation parameters: decoding settings and the request bound.
//!
//! [`GenerationParams`] groups the static parameters sent with every live
//! generation request. They are fixed at process configuration time and
//! never change during a run.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Decoding parameters and the round-trip bound for live generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling probability.
    pub top_p: f64,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
    /// Upper bound on one request round trip.
    pub timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 512,
            timeout: Duration::from_secs(120),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 0.9);
        assert_eq!(params.max_tokens, 512);
        assert_eq!(params.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_builders() {
        let params = GenerationParams::default()
            .with_temperature(0.2)
            .with_max_tokens(128)
            .with_timeout(Duration::from_secs(10));
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_tokens, 128);
        assert_eq!(params.timeout, Duration::from_secs(10));
    }
}
