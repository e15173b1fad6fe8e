//! Presentation layer for openprop
//!
//! This crate contains the CLI definition, output formatters, progress
//! reporters, and the interactive wizard.

pub mod cli;
pub mod output;
pub mod progress;
pub mod wizard;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SectionProgressReporter, SimpleProgress};
pub use wizard::{ProposalWizard, WizardError, WizardState, WizardStep};
