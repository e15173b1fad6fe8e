//! Application layer for openprop
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    generation_gateway::{GenerationGateway, GenerationMode, SectionGeneration},
    progress::{progress_fraction, NoProgress, ProgressNotifier},
    run_tracker::{NoRunTracker, RunTracker},
};
pub use use_cases::assemble_proposal::{
    AssembleProposalInput, AssembleProposalUseCase, AssembledProposal,
};
