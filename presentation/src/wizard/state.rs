//! Wizard step state machine
//!
//! The wizard's session state (current step, selected template, collected
//! form data, generated document) is an explicit value passed through pure
//! transition functions, not ambient global state. The I/O loop in
//! [`repl`](super::repl) drives the transitions.

use openprop_domain::{ProposalContext, ProposalTemplate};
use thiserror::Error;

/// Tone choices offered by the wizard, first is the default
pub const TONES: &[&str] = &["Professional", "Bold", "Friendly"];

/// Suggested company name shown as the input default
pub const SUGGESTED_COMPANY: &str = "NexaAI";
/// Suggested goal shown as the input default
pub const SUGGESTED_GOAL: &str = "Raise $2M seed";

/// Where the wizard currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ChooseTemplate,
    EnterDetails,
    Generating,
    Review,
}

/// Rejected form submission
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DetailsError {
    #[error("Company name is required")]
    MissingCompany,
}

/// The wizard's session state
#[derive(Debug, Clone)]
pub struct WizardState {
    step: WizardStep,
    template: Option<ProposalTemplate>,
    context: ProposalContext,
    document: Option<String>,
    run_id: Option<String>,
}

impl WizardState {
    /// Fresh wizard at the template-selection step
    pub fn new() -> Self {
        Self {
            step: WizardStep::ChooseTemplate,
            template: None,
            context: ProposalContext::new(),
            document: None,
            run_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn template(&self) -> Option<&ProposalTemplate> {
        self.template.as_ref()
    }

    pub fn context(&self) -> &ProposalContext {
        &self.context
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn run_id(&self) -> Option<&str> {
        self.run_id.as_deref()
    }

    /// Pick a template and move to the details form
    pub fn select_template(mut self, template: ProposalTemplate) -> Self {
        self.template = Some(template);
        self.step = WizardStep::EnterDetails;
        self
    }

    /// Submit the details form and move to generation
    ///
    /// The company name is required; goal and tone may be blank and will
    /// fall back to their defaults during generation.
    pub fn submit_details(
        mut self,
        company: &str,
        goal: &str,
        tone: &str,
    ) -> Result<Self, (Self, DetailsError)> {
        if company.trim().is_empty() {
            return Err((self, DetailsError::MissingCompany));
        }

        self.context = ProposalContext::new()
            .with_company_name(company)
            .with_goal(goal)
            .with_tone(tone);
        self.step = WizardStep::Generating;
        Ok(self)
    }

    /// Store the finished document and move to review
    pub fn record_result(mut self, document: String, run_id: String) -> Self {
        self.document = Some(document);
        self.run_id = Some(run_id);
        self.step = WizardStep::Review;
        self
    }

    /// Start over: clear everything and return to template selection
    pub fn reset(self) -> Self {
        Self::new()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openprop_domain::TemplateCatalog;

    fn seed_template() -> ProposalTemplate {
        TemplateCatalog::require("startup_seed").unwrap()
    }

    #[test]
    fn test_happy_path_transitions() {
        let state = WizardState::new();
        assert_eq!(state.step(), WizardStep::ChooseTemplate);

        let state = state.select_template(seed_template());
        assert_eq!(state.step(), WizardStep::EnterDetails);
        assert_eq!(state.template().unwrap().id, "startup_seed");

        let state = state
            .submit_details("Acme", "Raise $1M", "Bold")
            .unwrap();
        assert_eq!(state.step(), WizardStep::Generating);
        assert_eq!(state.context().company_name(), "Acme");

        let state = state.record_result("# doc".to_string(), "run-1".to_string());
        assert_eq!(state.step(), WizardStep::Review);
        assert_eq!(state.document(), Some("# doc"));
        assert_eq!(state.run_id(), Some("run-1"));
    }

    #[test]
    fn test_missing_company_is_rejected() {
        let state = WizardState::new().select_template(seed_template());
        let (state, err) = state.submit_details("   ", "goal", "Bold").unwrap_err();
        assert_eq!(err, DetailsError::MissingCompany);
        // The wizard stays on the form with its template intact
        assert_eq!(state.step(), WizardStep::EnterDetails);
        assert!(state.template().is_some());
    }

    #[test]
    fn test_blank_goal_and_tone_fall_back_to_defaults() {
        let state = WizardState::new()
            .select_template(seed_template())
            .submit_details("Acme", "", "")
            .unwrap();
        assert_eq!(state.context().goal(), "growth");
        assert_eq!(state.context().tone(), "Professional");
    }

    #[test]
    fn test_reset_clears_everything() {
        let state = WizardState::new()
            .select_template(seed_template())
            .submit_details("Acme", "g", "Bold")
            .unwrap()
            .record_result("# doc".to_string(), "run-1".to_string())
            .reset();

        assert_eq!(state.step(), WizardStep::ChooseTemplate);
        assert!(state.template().is_none());
        assert!(state.document().is_none());
        assert!(state.run_id().is_none());
        assert_eq!(state.context().company_name(), "Company");
    }
}
