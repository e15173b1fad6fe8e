//! Use cases

pub mod assemble_proposal;

pub use assemble_proposal::{AssembleProposalInput, AssembleProposalUseCase, AssembledProposal};
