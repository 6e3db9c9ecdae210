//! Run artifact management for the results directory.
//!
//! Provides centralized handling of per-run artifacts with:
//! - Unique run directories under the results base location
//! - The run's log file path
//! - Run metadata tracking and retention cleanup

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config;

/// Filename of the timestamped, leveled log inside a run directory
pub const LOG_FILE_NAME: &str = "test_log.txt";

/// A run's artifact directory
#[derive(Debug, Clone)]
pub struct RunSession {
    /// Unique run ID
    pub id: String,
    /// Root directory for this run's artifacts
    pub dir: PathBuf,
    /// Whether to keep artifacts after the run ends
    pub keep: bool,
}

impl RunSession {
    /// Create a new run under the configured results base directory.
    ///
    /// Artifacts are kept by default: they are the product of the run, not
    /// scratch files.
    pub fn new() -> Self {
        let id = generate_run_id();
        let dir = PathBuf::from(config::results_base_dir()).join(&id);

        Self {
            id,
            dir,
            keep: true,
        }
    }

    /// Create a run rooted in a specific directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let id = dir
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(generate_run_id);

        Self {
            id,
            dir,
            keep: true,
        }
    }

    /// Set whether to keep artifacts after the run ends
    pub fn keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    /// Initialize the run directory and write its metadata sidecar
    pub fn init(&self, base_url: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let metadata = serde_json::json!({
            "id": self.id,
            "created": chrono::Utc::now().to_rfc3339(),
            "base_url": base_url,
        });

        let metadata_path = self.dir.join(".run.json");
        fs::write(metadata_path, serde_json::to_string_pretty(&metadata)?)?;

        Ok(())
    }

    /// Path of this run's log file
    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE_NAME)
    }

    /// Clean up the run directory
    pub fn cleanup(&self) -> std::io::Result<()> {
        if self.dir.exists() && !self.keep {
            fs::remove_dir_all(&self.dir)?;
        }
        Ok(())
    }
}

impl Default for RunSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RunSession {
    fn drop(&mut self) {
        if !self.keep {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }
}

/// Generate a unique run ID
fn generate_run_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let pid = std::process::id();
    format!("run_{}_{}", timestamp, pid)
}

/// Clean up runs under `base` older than the specified duration
pub fn cleanup_old_runs(base: &Path, max_age: std::time::Duration) -> std::io::Result<usize> {
    if !base.exists() {
        return Ok(0);
    }

    let now = SystemTime::now();
    let mut cleaned = 0;

    for entry in fs::read_dir(base)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            if let Ok(metadata) = entry.metadata() {
                if let Ok(modified) = metadata.modified() {
                    if let Ok(age) = now.duration_since(modified) {
                        if age > max_age && fs::remove_dir_all(&path).is_ok() {
                            cleaned += 1;
                        }
                    }
                }
            }
        }
    }

    Ok(cleaned)
}

/// List all existing run directories under `base`
pub fn list_runs(base: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !base.exists() {
        return Ok(Vec::new());
    }

    let mut runs = Vec::new();
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            runs.push(path);
        }
    }
    runs.sort();
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_session_new() {
        let session = RunSession::new();
        assert!(session.id.starts_with("run_"));
        assert!(session.keep);
    }

    #[test]
    fn test_run_session_in_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nightly");
        let session = RunSession::in_dir(&dir);
        assert_eq!(session.id, "nightly");
        assert_eq!(session.dir, dir);
    }

    #[test]
    fn test_init_writes_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let session = RunSession::in_dir(tmp.path().join("meta"));
        session.init("http://127.0.0.1:8000/").unwrap();

        let raw = fs::read_to_string(session.dir.join(".run.json")).unwrap();
        let meta: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(meta["id"], "meta");
        assert_eq!(meta["base_url"], "http://127.0.0.1:8000/");
        assert!(meta["created"].is_string());
    }

    #[test]
    fn test_log_path_is_inside_run_dir() {
        let session = RunSession::in_dir("/tmp/authcheck-test/run_x");
        assert!(session.log_path().ends_with("run_x/test_log.txt"));
    }

    #[test]
    fn test_list_runs_only_directories_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("run_b")).unwrap();
        fs::create_dir(tmp.path().join("run_a")).unwrap();
        fs::write(tmp.path().join("stray.txt"), "x").unwrap();

        let runs = list_runs(tmp.path()).unwrap();
        assert_eq!(
            runs,
            vec![tmp.path().join("run_a"), tmp.path().join("run_b")]
        );
    }

    #[test]
    fn test_list_runs_missing_base_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let runs = list_runs(&tmp.path().join("absent")).unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn test_cleanup_old_runs_respects_age() {
        let tmp = tempfile::tempdir().unwrap();
        let stale = tmp.path().join("run_old");
        fs::create_dir(&stale).unwrap();

        // Nothing is an hour old yet
        let cleaned =
            cleanup_old_runs(tmp.path(), std::time::Duration::from_secs(3600)).unwrap();
        assert_eq!(cleaned, 0);
        assert!(stale.exists());

        // With a zero retention window everything qualifies
        std::thread::sleep(std::time::Duration::from_millis(20));
        let cleaned = cleanup_old_runs(tmp.path(), std::time::Duration::ZERO).unwrap();
        assert_eq!(cleaned, 1);
        assert!(!stale.exists());
    }

    #[test]
    fn test_cleanup_old_runs_missing_base() {
        let tmp = tempfile::tempdir().unwrap();
        let cleaned = cleanup_old_runs(
            &tmp.path().join("absent"),
            std::time::Duration::from_secs(60),
        )
        .unwrap();
        assert_eq!(cleaned, 0);
    }

    #[test]
    fn test_cleanup_respects_keep() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("scratch");
        let session = RunSession::in_dir(&dir).keep(false);
        session.init("http://127.0.0.1:8000/").unwrap();
        assert!(dir.exists());
        session.cleanup().unwrap();
        assert!(!dir.exists());
    }
}
