//! Proposal template entity

use serde::{Deserialize, Serialize};

/// A proposal template: an ordered list of section names
///
/// Templates are immutable once defined. The section order is significant;
/// the generated document follows it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalTemplate {
    /// Stable identifier (e.g. `startup_seed`)
    pub id: String,
    /// Display title
    pub title: String,
    /// Ordered section names; never empty
    pub structure: Vec<String>,
    /// Presentational icon tag
    pub icon: String,
}

impl ProposalTemplate {
    /// Create a new template
    ///
    /// # Panics
    /// Panics if `structure` is empty; a template without sections
    /// cannot produce a document.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        structure: Vec<&str>,
        icon: impl Into<String>,
    ) -> Self {
        assert!(!structure.is_empty(), "Template must have sections");
        Self {
            id: id.into(),
            title: title.into(),
            structure: structure.into_iter().map(String::from).collect(),
            icon: icon.into(),
        }
    }

    /// Number of sections in this template
    pub fn section_count(&self) -> usize {
        self.structure.len()
    }
}

impl std::fmt::Display for ProposalTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}
