//! Core domain primitives

pub mod error;

pub use self::error::DomainError;
