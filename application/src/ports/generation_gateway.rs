//! Generation gateway port
//!
//! Defines the interface for generating one proposal section. Adapters live
//! in the infrastructure layer: a live adapter that calls the configured
//! text-generation endpoint and a simulated adapter for testing and demos.
//!
//! The port is deliberately infallible: a generation failure is a value
//! ([`SectionOutcome::Failed`]), not an error. The assembly loop must never
//! abort because one section's request failed.

use async_trait::async_trait;
use openprop_domain::{ProposalContext, RunId, SectionOutcome};
use std::time::Duration;

/// The outcome of one generate call plus its measured wall-clock time
#[derive(Debug, Clone)]
pub struct SectionGeneration {
    pub outcome: SectionOutcome,
    pub elapsed: Duration,
}

impl SectionGeneration {
    pub fn generated(text: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            outcome: SectionOutcome::Generated(text.into()),
            elapsed,
        }
    }

    pub fn failed(detail: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            outcome: SectionOutcome::Failed {
                detail: detail.into(),
            },
            elapsed,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.outcome.is_generated()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Which operating mode a gateway runs in, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationMode {
    /// Fabricated output, no external service
    Simulated,
    /// Live requests against a text-generation endpoint
    Live { model: String },
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Simulated => write!(f, "Simulation"),
            GenerationMode::Live { model } => write!(f, "Ollama ({})", model),
        }
    }
}

/// Gateway for section generation
///
/// One call per section. Implementations must not return errors: any
/// failure is converted into [`SectionOutcome::Failed`] with the detail
/// preserved, paired with the elapsed time up to the failure point.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Generate the text for one section
    ///
    /// `run` is the current tracking run, if any; live implementations
    /// record the section latency against it (best-effort).
    async fn generate(
        &self,
        template_id: &str,
        section: &str,
        context: &ProposalContext,
        run: Option<&RunId>,
    ) -> SectionGeneration;

    /// The operating mode, for user-facing banners
    fn mode(&self) -> GenerationMode;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_generation_helpers() {
        let ok = SectionGeneration::generated("text", Duration::from_millis(1200));
        assert!(ok.is_generated());
        assert!((ok.elapsed_secs() - 1.2).abs() < 1e-9);

        let failed = SectionGeneration::failed("boom", Duration::ZERO);
        assert!(!failed.is_generated());
        assert_eq!(failed.outcome.render(), "[generation error: boom]");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(GenerationMode::Simulated.to_string(), "Simulation");
        assert_eq!(
            GenerationMode::Live {
                model: "llama3.2".to_string()
            }
            .to_string(),
            "Ollama (llama3.2)"
        );
    }
}
