//! Run identity and per-section latency record
//!
//! A run is one end-to-end execution of the assembly loop, identified by an
//! opaque id and carrying the measured latency of each section in order.

use serde::{Deserialize, Serialize};

/// Opaque identifier for one assembly run (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short 8-char prefix for display
    pub fn short(&self) -> &str {
        let end = self.0.len().min(8);
        &self.0[..end]
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The metric name recorded for a section's latency
///
/// `"Executive Summary"` → `"latency_executive_summary"`
pub fn metric_name(section: &str) -> String {
    format!("latency_{}", section.to_lowercase().replace(' ', "_"))
}

/// Per-run record: id plus ordered section latencies in seconds
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    id: RunId,
    latencies: Vec<(String, f64)>,
}

impl RunRecord {
    pub fn new(id: RunId) -> Self {
        Self {
            id,
            latencies: Vec::new(),
        }
    }

    pub fn id(&self) -> &RunId {
        &self.id
    }

    /// Record the measured latency for the next completed section
    pub fn record_latency(&mut self, section: impl Into<String>, seconds: f64) {
        self.latencies.push((section.into(), seconds));
    }

    /// Section latencies in completion order
    pub fn latencies(&self) -> &[(String, f64)] {
        &self.latencies
    }

    pub fn latency_for(&self, section: &str) -> Option<f64> {
        self.latencies
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, secs)| *secs)
    }

    /// Total wall-clock seconds spent generating
    pub fn total_seconds(&self) -> f64 {
        self.latencies.iter().map(|(_, secs)| secs).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_name() {
        assert_eq!(metric_name("Executive Summary"), "latency_executive_summary");
        assert_eq!(metric_name("The Ask"), "latency_the_ask");
        assert_eq!(metric_name("Team"), "latency_team");
    }

    #[test]
    fn test_run_id_short() {
        let id = RunId::new("0123456789abcdef");
        assert_eq!(id.short(), "01234567");

        let tiny = RunId::new("abc");
        assert_eq!(tiny.short(), "abc");
    }

    #[test]
    fn test_record_preserves_order() {
        let mut record = RunRecord::new(RunId::new("r1"));
        record.record_latency("Solution", 1.2);
        record.record_latency("Team", 0.9);

        let names: Vec<&str> = record.latencies().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Solution", "Team"]);
        assert_eq!(record.latency_for("Team"), Some(0.9));
        assert_eq!(record.latency_for("Missing"), None);
        assert!((record.total_seconds() - 2.1).abs() < 1e-9);
    }
}
