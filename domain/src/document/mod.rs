//! The generated proposal document
//!
//! A document is an ordered, append-only sequence of section entries, one
//! per template section. A section whose generation failed still gets an
//! entry that renders as an inline error marker, so the document always has
//! exactly as many sections as the template's structure.

use serde::Serialize;

/// The result of generating one section
///
/// Failure detail is preserved for logging, but both variants render
/// uniformly as text to append to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SectionOutcome {
    /// The model produced text
    Generated(String),
    /// Generation failed; the detail describes why
    Failed { detail: String },
}

impl SectionOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, SectionOutcome::Generated(_))
    }

    /// The text to place in the document body
    ///
    /// Failures render as an inline error marker, never as an empty string.
    pub fn render(&self) -> String {
        match self {
            SectionOutcome::Generated(text) => text.clone(),
            SectionOutcome::Failed { detail } => format!("[generation error: {}]", detail),
        }
    }
}

/// One (section heading, body) pair in the document
#[derive(Debug, Clone, Serialize)]
pub struct SectionEntry {
    pub section: String,
    pub outcome: SectionOutcome,
}

/// The assembled proposal document
///
/// Built by appending one entry per section in template order, then
/// rendered to Markdown. Owned exclusively by the caller that triggered
/// generation.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalDocument {
    title: String,
    company: String,
    entries: Vec<SectionEntry>,
}

impl ProposalDocument {
    /// Start a document with the template title and company line
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            entries: Vec::new(),
        }
    }

    /// Append the next section's outcome
    pub fn append_section(&mut self, section: impl Into<String>, outcome: SectionOutcome) {
        self.entries.push(SectionEntry {
            section: section.into(),
            outcome,
        });
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    pub fn section_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether every section generated successfully
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_generated())
    }

    /// Render the document as Markdown
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n**Company**: {}\n\n", self.title, self.company);
        for entry in &self.entries {
            out.push_str(&format!("## {}\n\n{}\n\n", entry.section, entry.outcome.render()));
        }
        out
    }
}
