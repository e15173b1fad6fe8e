//! Simulated generation gateway
//!
//! Fabricates plausible output without calling any external service: each
//! generate call sleeps for a pseudo-random duration in [0.8, 1.8] seconds
//! to model realistic latency, then returns a deterministic placeholder
//! embedding the section name and the context's company name. Never fails.

use async_trait::async_trait;
use openprop_application::{GenerationGateway, GenerationMode, SectionGeneration};
use openprop_domain::{ProposalContext, RunId};
use rand::Rng;
use std::time::Duration;

/// Lower bound of the simulated latency, in seconds
const MIN_LATENCY_SECS: f64 = 0.8;
/// Upper bound of the simulated latency, in seconds
const MAX_LATENCY_SECS: f64 = 1.8;

/// Gateway that simulates generation for demos and tests
#[derive(Debug, Default)]
pub struct SimulatedGateway;

impl SimulatedGateway {
    pub fn new() -> Self {
        Self
    }

    /// Sample one simulated latency, uniform over [0.8, 1.8] seconds
    fn sample_latency() -> Duration {
        let secs = rand::thread_rng().gen_range(MIN_LATENCY_SECS..=MAX_LATENCY_SECS);
        Duration::from_secs_f64(secs)
    }
}

#[async_trait]
impl GenerationGateway for SimulatedGateway {
    async fn generate(
        &self,
        _template_id: &str,
        section: &str,
        context: &ProposalContext,
        _run: Option<&RunId>,
    ) -> SectionGeneration {
        let latency = Self::sample_latency();
        tokio::time::sleep(latency).await;

        let text = format!("**{}**: Mock for {}.", section, context.company_name());
        SectionGeneration::generated(text, latency)
    }

    fn mode(&self) -> GenerationMode {
        GenerationMode::Simulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_stays_in_range() {
        for _ in 0..1000 {
            let latency = SimulatedGateway::sample_latency().as_secs_f64();
            assert!((MIN_LATENCY_SECS..=MAX_LATENCY_SECS).contains(&latency));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_embeds_section_and_company() {
        let gateway = SimulatedGateway::new();
        let ctx = ProposalContext::new().with_company_name("Acme");

        let result = gateway
            .generate("startup_seed", "Traction", &ctx, None)
            .await;

        assert!(result.is_generated());
        let text = result.outcome.render();
        assert!(text.contains("Traction"));
        assert!(text.contains("Acme"));

        let secs = result.elapsed_secs();
        assert!((MIN_LATENCY_SECS..=MAX_LATENCY_SECS).contains(&secs));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_defaults_company_name() {
        let gateway = SimulatedGateway::new();

        let result = gateway
            .generate("startup_seed", "Team", &ProposalContext::new(), None)
            .await;

        assert_eq!(
            result.outcome.render(),
            "**Team**: Mock for Company."
        );
    }

    #[test]
    fn test_mode_is_simulated() {
        assert_eq!(SimulatedGateway::new().mode(), GenerationMode::Simulated);
    }
}
