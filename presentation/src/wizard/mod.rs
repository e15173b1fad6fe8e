//! Interactive proposal wizard

pub mod repl;
pub mod state;

pub use repl::{ProposalWizard, WizardError};
pub use state::{WizardState, WizardStep};
