//! Progress reporting during assembly

pub mod reporter;

pub use reporter::{SectionProgressReporter, SimpleProgress};
