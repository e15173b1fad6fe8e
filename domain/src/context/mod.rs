//! Proposal context value object
//!
//! The context carries the user-supplied values that personalize generated
//! text. Every field is optional: accessors fall back to defaults, so a
//! partially-populated context degrades gracefully instead of failing.

use serde::{Deserialize, Serialize};

/// Default company name when none was supplied
pub const DEFAULT_COMPANY: &str = "Company";
/// Default goal when none was supplied
pub const DEFAULT_GOAL: &str = "growth";
/// Default tone when none was supplied
pub const DEFAULT_TONE: &str = "Professional";

/// User-supplied values for one proposal run (Value Object)
///
/// Created once per wizard submission and read-only during generation.
/// Empty or whitespace-only values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalContext {
    company_name: Option<String>,
    goal: Option<String>,
    tone: Option<String>,
}

impl ProposalContext {
    /// Create an empty context; all accessors return defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_company_name(mut self, company: impl Into<String>) -> Self {
        self.company_name = non_blank(company.into());
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = non_blank(goal.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = non_blank(tone.into());
        self
    }

    /// Company name, or `"Company"` if absent
    pub fn company_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or(DEFAULT_COMPANY)
    }

    /// Goal, or `"growth"` if absent
    pub fn goal(&self) -> &str {
        self.goal.as_deref().unwrap_or(DEFAULT_GOAL)
    }

    /// Tone, or `"Professional"` if absent
    pub fn tone(&self) -> &str {
        self.tone.as_deref().unwrap_or(DEFAULT_TONE)
    }

    /// Tone lower-cased for prompt phrasing
    pub fn tone_lowercase(&self) -> String {
        self.tone().to_lowercase()
    }

    /// Whether a company name was explicitly supplied
    pub fn has_company_name(&self) -> bool {
        self.company_name.is_some()
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_uses_defaults() {
        let ctx = ProposalContext::new();
        assert_eq!(ctx.company_name(), "Company");
        assert_eq!(ctx.goal(), "growth");
        assert_eq!(ctx.tone(), "Professional");
        assert_eq!(ctx.tone_lowercase(), "professional");
    }

    #[test]
    fn test_populated_context() {
        let ctx = ProposalContext::new()
            .with_company_name("Acme")
            .with_goal("Raise $1M")
            .with_tone("Bold");
        assert_eq!(ctx.company_name(), "Acme");
        assert_eq!(ctx.goal(), "Raise $1M");
        assert_eq!(ctx.tone(), "Bold");
        assert_eq!(ctx.tone_lowercase(), "bold");
        assert!(ctx.has_company_name());
    }

    #[test]
    fn test_blank_values_degrade_to_defaults() {
        let ctx = ProposalContext::new()
            .with_company_name("   ")
            .with_goal("")
            .with_tone("\t");
        assert_eq!(ctx.company_name(), "Company");
        assert_eq!(ctx.goal(), "growth");
        assert_eq!(ctx.tone(), "Professional");
        assert!(!ctx.has_company_name());
    }
}
