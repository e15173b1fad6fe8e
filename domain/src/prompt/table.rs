//! Per-template section prompts
//!
//! Each template carries its own section→prompt table. Scoping the table
//! per template lets two templates define different prompts under the same
//! section name ("Financials" means revenue projections in a seed deck and
//! a joint P&L in a partnership deck).
//!
//! Resolution never fails: an unknown section name falls back to a generic
//! `Write <section>.` prompt, and missing context fields substitute their
//! defaults.

use crate::context::ProposalContext;

/// Prompts for the `startup_seed` template
const STARTUP_SEED_PROMPTS: &[(&str, &str)] = &[
    (
        "Executive Summary",
        "Write a 3-4 sentence executive summary. Company: {company_name}. Goal: {goal}. Tone: {tone}.",
    ),
    ("Problem Statement", "Describe the core problem. Use urgency."),
    ("Solution", "Explain how {company_name} solves it."),
    ("Market Opportunity", "Estimate TAM and growth."),
    ("Business Model", "List revenue streams."),
    ("Traction", "Show users or revenue."),
    ("Team", "Highlight key founders."),
    ("Financials", "Project 3-year revenue."),
    ("The Ask", "State funding and use of funds."),
];

/// Prompts for the `strategic_partnership` template
const STRATEGIC_PARTNERSHIP_PROMPTS: &[(&str, &str)] = &[
    ("Introduction", "Introduce both companies."),
    ("Shared Vision", "Describe joint future."),
    ("Synergies", "Detail cost/revenue upside."),
    ("Operating Model", "Propose team and IP."),
    ("Financials", "Model joint P&L."),
    ("Next Steps", "Suggest NDA, diligence, term sheet."),
];

/// Resolves section names to finished prompt strings
pub struct SectionPrompts;

impl SectionPrompts {
    /// The prompt table for a template id, empty for unknown templates
    fn table(template_id: &str) -> &'static [(&'static str, &'static str)] {
        match template_id {
            "startup_seed" => STARTUP_SEED_PROMPTS,
            "strategic_partnership" => STRATEGIC_PARTNERSHIP_PROMPTS,
            _ => &[],
        }
    }

    /// Build the finished prompt for one section
    ///
    /// Looks up the section in the template's table, falling back to a
    /// generic `Write <section>.` prompt, then substitutes the recognized
    /// placeholders (`{company_name}`, `{goal}`, `{tone}`) from the context.
    pub fn resolve(template_id: &str, section: &str, context: &ProposalContext) -> String {
        let template = Self::table(template_id)
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, prompt)| (*prompt).to_string())
            .unwrap_or_else(|| format!("Write {}.", section));

        template
            .replace("{company_name}", context.company_name())
            .replace("{goal}", context.goal())
            .replace("{tone}", &context.tone_lowercase())
    }
}
