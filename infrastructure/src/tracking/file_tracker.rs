//! Filesystem run tracker
//!
//! Implements the [`RunTracker`] port against a local directory. Each run
//! gets its own directory under the tracking root:
//!
//! ```text
//! <root>/<run-id>/run.json        # id, template, timestamps
//! <root>/<run-id>/metrics.jsonl   # one JSON object per metric
//! <root>/<run-id>/artifacts/<name>
//! ```
//!
//! Every operation is best-effort: I/O failures are logged as warnings and
//! never surface to the assembly loop.

use openprop_application::RunTracker;
use openprop_domain::RunId;
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// Run tracker writing runs, metrics, and artifacts to a local directory
pub struct FileRunTracker {
    root: PathBuf,
}

impl FileRunTracker {
    /// Create a tracker rooted at the given directory
    ///
    /// The directory is created lazily on the first run.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run_dir(&self, run: &RunId) -> PathBuf {
        self.root.join(run.as_str())
    }

    fn timestamp() -> String {
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }

    fn write_json(path: &Path, value: &serde_json::Value) {
        let Ok(contents) = serde_json::to_string_pretty(value) else {
            return;
        };
        if let Err(e) = fs::write(path, contents) {
            warn!("Could not write {}: {}", path.display(), e);
        }
    }
}

impl RunTracker for FileRunTracker {
    fn start_run(&self, template_id: &str) -> RunId {
        let run = RunId::new(Uuid::new_v4().to_string());
        let dir = self.run_dir(&run);

        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("Could not create run directory {}: {}", dir.display(), e);
            return run;
        }

        Self::write_json(
            &dir.join("run.json"),
            &json!({
                "run_id": run.as_str(),
                "template": template_id,
                "started_at": Self::timestamp(),
            }),
        );

        run
    }

    fn log_metric(&self, run: &RunId, name: &str, value: f64) {
        let path = self.run_dir(run).join("metrics.jsonl");
        let record = json!({
            "name": name,
            "value": value,
            "timestamp": Self::timestamp(),
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", line) {
                    warn!("Could not append metric to {}: {}", path.display(), e);
                }
            }
            Err(e) => warn!("Could not open {}: {}", path.display(), e),
        }
    }

    fn log_artifact(&self, run: &RunId, name: &str, contents: &str) {
        let dir = self.run_dir(run).join("artifacts");
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("Could not create artifact directory {}: {}", dir.display(), e);
            return;
        }

        let path = dir.join(name);
        if let Err(e) = fs::write(&path, contents) {
            warn!("Could not write artifact {}: {}", path.display(), e);
        }
    }

    fn finish_run(&self, run: &RunId) {
        let path = self.run_dir(run).join("run.json");

        let parsed: Option<serde_json::Value> = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok());

        let Some(serde_json::Value::Object(mut record)) = parsed else {
            warn!("Could not update {}", path.display());
            return;
        };

        record.insert("finished_at".to_string(), json!(Self::timestamp()));
        Self::write_json(&path, &serde_json::Value::Object(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_run_creates_run_record() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = FileRunTracker::new(dir.path());

        let run = tracker.start_run("startup_seed");

        let raw = fs::read_to_string(dir.path().join(run.as_str()).join("run.json")).unwrap();
        let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(record["run_id"], run.as_str());
        assert_eq!(record["template"], "startup_seed");
        assert!(record.get("started_at").is_some());
    }

    #[test]
    fn test_run_ids_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = FileRunTracker::new(dir.path());
        assert_ne!(tracker.start_run("a"), tracker.start_run("a"));
    }

    #[test]
    fn test_metrics_are_parseable_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = FileRunTracker::new(dir.path());
        let run = tracker.start_run("startup_seed");

        tracker.log_metric(&run, "latency_team", 1.23);
        tracker.log_metric(&run, "latency_financials", 0.98);

        let raw = fs::read_to_string(dir.path().join(run.as_str()).join("metrics.jsonl")).unwrap();
        let lines: Vec<&str> = raw.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["name"], "latency_team");
        assert_eq!(first["value"], 1.23);
        assert!(first.get("timestamp").is_some());
    }

    #[test]
    fn test_artifact_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = FileRunTracker::new(dir.path());
        let run = tracker.start_run("startup_seed");

        let document = "# Startup Seed Funding\n\n## Team\n\nTwo founders.\n";
        tracker.log_artifact(&run, "proposal.md", document);

        let stored = fs::read_to_string(
            dir.path()
                .join(run.as_str())
                .join("artifacts")
                .join("proposal.md"),
        )
        .unwrap();
        assert_eq!(stored, document);
    }

    #[test]
    fn test_finish_run_stamps_end_time() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = FileRunTracker::new(dir.path());
        let run = tracker.start_run("startup_seed");

        tracker.finish_run(&run);

        let raw = fs::read_to_string(dir.path().join(run.as_str()).join("run.json")).unwrap();
        let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(record.get("finished_at").is_some());
        assert_eq!(record["run_id"], run.as_str());
    }

    #[test]
    fn test_unwritable_root_degrades_to_warnings() {
        // A file in place of the root directory makes every write fail.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let tracker = FileRunTracker::new(&blocker);
        let run = tracker.start_run("startup_seed");
        tracker.log_metric(&run, "latency_team", 1.0);
        tracker.log_artifact(&run, "proposal.md", "# T");
        tracker.finish_run(&run);
        // No panic, and the caller still got a usable id.
        assert!(!run.as_str().is_empty());
    }
}
