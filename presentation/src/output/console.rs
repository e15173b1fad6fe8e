//! Console formatting of assembled proposals

use colored::Colorize;
use openprop_application::AssembledProposal;
use serde_json::json;

/// Formats an [`AssembledProposal`] for terminal output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The full Markdown document with a run footer
    pub fn format(result: &AssembledProposal) -> String {
        format!(
            "{}\n---\nRun ID: {}\n",
            result.document.to_markdown().trim_end(),
            result.run_id()
        )
    }

    /// Per-section status and latency summary
    pub fn format_summary(result: &AssembledProposal) -> String {
        let mut out = format!(
            "{} - run {}\n\n",
            result.document.title().bold(),
            result.run_id().short()
        );

        for (entry, (_, secs)) in result.document.entries().iter().zip(result.latencies()) {
            let mark = if entry.outcome.is_generated() {
                "v".green()
            } else {
                "x".red()
            };
            out.push_str(&format!("  {} {:<20} {:>6.2}s\n", mark, entry.section, secs));
        }

        out.push_str(&format!(
            "\n{} sections in {:.1}s\n",
            result.document.section_count(),
            result.run.total_seconds()
        ));
        out
    }

    /// JSON output: document, run id, per-section outcomes and latencies
    pub fn format_json(result: &AssembledProposal) -> String {
        let sections: Vec<serde_json::Value> = result
            .document
            .entries()
            .iter()
            .zip(result.latencies())
            .map(|(entry, (_, secs))| {
                json!({
                    "section": entry.section,
                    "generated": entry.outcome.is_generated(),
                    "body": entry.outcome.render(),
                    "latency_secs": secs,
                })
            })
            .collect();

        let value = json!({
            "run_id": result.run_id().as_str(),
            "title": result.document.title(),
            "company": result.document.company(),
            "sections": sections,
            "markdown": result.document.to_markdown(),
        });

        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
