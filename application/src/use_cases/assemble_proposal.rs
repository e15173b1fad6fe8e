//! Assemble Proposal use case.
//!
//! Executes the sequential assembly loop: one generate call per template
//! section, in declared order, appending each outcome to the document and
//! reporting progress after each section.
//!
//! Sections are never reordered or parallelized, since each section's progress
//! must be observably reported before the next one starts. There are no
//! retries; a failed section is recorded as failed and the loop proceeds.
//! The use case itself always succeeds: the returned document has exactly
//! one entry per template section regardless of individual failures.

use crate::ports::generation_gateway::GenerationGateway;
use crate::ports::progress::ProgressNotifier;
use crate::ports::run_tracker::RunTracker;
use openprop_domain::{ProposalContext, ProposalDocument, ProposalTemplate, RunId, RunRecord};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the [`AssembleProposalUseCase`].
#[derive(Debug, Clone)]
pub struct AssembleProposalInput {
    pub template: ProposalTemplate,
    pub context: ProposalContext,
}

impl AssembleProposalInput {
    pub fn new(template: ProposalTemplate, context: ProposalContext) -> Self {
        Self { template, context }
    }
}

/// The finished proposal: document plus the run record.
#[derive(Debug, Clone)]
pub struct AssembledProposal {
    pub document: ProposalDocument,
    pub run: RunRecord,
}

impl AssembledProposal {
    pub fn run_id(&self) -> &RunId {
        self.run.id()
    }

    /// Per-section latencies in seconds, in template order.
    pub fn latencies(&self) -> &[(String, f64)] {
        self.run.latencies()
    }
}

/// Use case for assembling one proposal.
///
/// Holds the shared generation gateway and run tracker; construct one and
/// pass it wherever assembly is triggered.
pub struct AssembleProposalUseCase {
    gateway: Arc<dyn GenerationGateway>,
    tracker: Arc<dyn RunTracker>,
}

impl AssembleProposalUseCase {
    pub fn new(gateway: Arc<dyn GenerationGateway>, tracker: Arc<dyn RunTracker>) -> Self {
        Self { gateway, tracker }
    }

    /// Execute the assembly loop with progress callbacks.
    pub async fn execute(
        &self,
        input: AssembleProposalInput,
        progress: &dyn ProgressNotifier,
    ) -> AssembledProposal {
        let template = input.template;
        let context = input.context;
        let total = template.section_count();

        info!(
            "Assembling '{}' for {} ({} sections)",
            template.title,
            context.company_name(),
            total
        );

        let run_id = self.tracker.start_run(&template.id);
        let mut run = RunRecord::new(run_id.clone());
        let mut document = ProposalDocument::new(template.title.as_str(), context.company_name());

        progress.on_assembly_start(&template.title, total);

        for (index, section) in template.structure.iter().enumerate() {
            progress.on_section_start(section, index, total);
            debug!("Generating section {}/{}: {}", index + 1, total, section);

            let generation = self
                .gateway
                .generate(&template.id, section, &context, Some(&run_id))
                .await;

            let success = generation.is_generated();
            if !success {
                warn!(
                    "Section '{}' failed: {}",
                    section,
                    generation.outcome.render()
                );
            }

            run.record_latency(section.as_str(), generation.elapsed_secs());
            document.append_section(section.as_str(), generation.outcome);
            progress.on_section_complete(section, index + 1, total, success);
        }

        self.tracker
            .log_artifact(&run_id, "proposal.md", &document.to_markdown());
        self.tracker.finish_run(&run_id);
        progress.on_assembly_complete();

        info!("Run {} finished in {:.1}s", run_id, run.total_seconds());

        AssembledProposal { document, run }
    }
}
