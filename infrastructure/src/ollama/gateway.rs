//! Ollama generation gateway
//!
//! Implements [`GenerationGateway`] with one synchronous POST per section
//! against a locally hosted Ollama endpoint.
//!
//! The degrade-gracefully contract is the central property here: any
//! failure (connect error, timeout, non-2xx status, malformed body) is
//! converted into a failed section outcome carrying the error detail, never
//! an error returned to the assembly loop. Latency metrics are recorded
//! against the tracking run on success, best-effort.

use super::protocol::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use openprop_application::{
    GenerationGateway, GenerationMode, GenerationParams, RunTracker, SectionGeneration,
};
use openprop_domain::{metric_name, ProposalContext, RunId, SectionPrompts};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

/// Why one generation request failed
#[derive(Error, Debug)]
enum RequestError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned HTTP {status} {reason}")]
    Status { status: u16, reason: &'static str },

    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Live gateway against an Ollama `/api/generate` endpoint
pub struct OllamaGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    params: GenerationParams,
    tracker: Arc<dyn RunTracker>,
}

impl OllamaGateway {
    /// Create a gateway for the given base address and model
    ///
    /// `base_url` is the server address (e.g. `http://localhost:11434`);
    /// the `/api/generate` path is appended here.
    pub fn new(
        base_url: impl AsRef<str>,
        model: impl Into<String>,
        params: GenerationParams,
        tracker: Arc<dyn RunTracker>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/generate", base_url.as_ref().trim_end_matches('/')),
            model: model.into(),
            params,
            tracker,
        }
    }

    /// One round trip: send the prompt, extract and trim the generated text
    async fn request(&self, prompt: &str) -> Result<String, RequestError> {
        let payload = GenerateRequest::new(self.model.as_str(), prompt, &self.params);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.params.timeout)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown"),
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text = body.response.trim().to_string();
        if text.is_empty() {
            return Err(RequestError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl GenerationGateway for OllamaGateway {
    async fn generate(
        &self,
        template_id: &str,
        section: &str,
        context: &ProposalContext,
        run: Option<&RunId>,
    ) -> SectionGeneration {
        let start = Instant::now();
        let prompt = SectionPrompts::resolve(template_id, section, context);
        debug!("Requesting '{}' from {}", section, self.endpoint);

        match self.request(&prompt).await {
            Ok(text) => {
                let elapsed = start.elapsed();
                if let Some(run) = run {
                    self.tracker
                        .log_metric(run, &metric_name(section), elapsed.as_secs_f64());
                }
                SectionGeneration::generated(text, elapsed)
            }
            Err(e) => {
                let elapsed = start.elapsed();
                warn!("Generation of '{}' failed after {:?}: {}", section, elapsed, e);
                SectionGeneration::failed(e.to_string(), elapsed)
            }
        }
    }

    fn mode(&self) -> GenerationMode {
        GenerationMode::Live {
            model: self.model.clone(),
        }
    }
}
