//! Static template catalog
//!
//! The catalog is fixed for the lifetime of the process: the same set of
//! templates is returned on every call, in the same order.

use super::entities::ProposalTemplate;
use crate::core::error::DomainError;

/// Registry of the built-in proposal templates
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// All available templates, in display order
    pub fn templates() -> Vec<ProposalTemplate> {
        vec![
            ProposalTemplate::new(
                "startup_seed",
                "Startup Seed Funding",
                vec![
                    "Executive Summary",
                    "Problem Statement",
                    "Solution",
                    "Market Opportunity",
                    "Business Model",
                    "Traction",
                    "Team",
                    "Financials",
                    "The Ask",
                ],
                "rocket",
            ),
            ProposalTemplate::new(
                "strategic_partnership",
                "Strategic Partnership",
                vec![
                    "Introduction",
                    "Shared Vision",
                    "Synergies",
                    "Operating Model",
                    "Financials",
                    "Next Steps",
                ],
                "handshake",
            ),
        ]
    }

    /// Look up a template by id
    pub fn find(id: &str) -> Option<ProposalTemplate> {
        Self::templates().into_iter().find(|t| t.id == id)
    }

    /// Look up a template by id, or fail with the unknown id
    pub fn require(id: &str) -> Result<ProposalTemplate, DomainError> {
        Self::find(id).ok_or_else(|| DomainError::UnknownTemplate(id.to_string()))
    }

    /// The valid template ids, for user-facing error messages
    pub fn ids() -> Vec<String> {
        Self::templates().into_iter().map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_stable() {
        let first = TemplateCatalog::templates();
        let second = TemplateCatalog::templates();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_startup_seed_has_nine_sections() {
        let tmpl = TemplateCatalog::find("startup_seed").unwrap();
        assert_eq!(tmpl.section_count(), 9);
        assert_eq!(tmpl.structure[0], "Executive Summary");
        assert_eq!(tmpl.structure[8], "The Ask");
    }

    #[test]
    fn test_strategic_partnership_has_six_sections() {
        let tmpl = TemplateCatalog::find("strategic_partnership").unwrap();
        assert_eq!(tmpl.section_count(), 6);
        assert_eq!(tmpl.structure[5], "Next Steps");
    }

    #[test]
    fn test_find_unknown_returns_none() {
        assert!(TemplateCatalog::find("nope").is_none());
    }

    #[test]
    fn test_require_unknown_is_error() {
        let err = TemplateCatalog::require("nope").unwrap_err();
        assert!(matches!(err, DomainError::UnknownTemplate(id) if id == "nope"));
    }

    #[test]
    fn test_ids() {
        assert_eq!(TemplateCatalog::ids(), vec!["startup_seed", "strategic_partnership"]);
    }
}
