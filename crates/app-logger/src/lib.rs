//! App Logger
//!
//! Dated file logger for Tauri applications. Installs a `tracing-subscriber`
//! fmt subscriber writing to `<app_name>-<date>.log` in the given directory.
//! Records emitted through the `log` facade are picked up via the
//! tracing-log bridge that ships with tracing-subscriber's defaults.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Number of dated log files kept per application.
const MAX_LOG_FILES: usize = 7;

/// Initialize the global logger, writing to a dated file under `log_dir`.
///
/// Returns the path of the active log file. Calling this twice is an error
/// (the global subscriber can only be set once).
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(&log_dir)?;

    let file_name = format!("{}-{}.log", app_name, chrono::Local::now().format("%Y-%m-%d"));
    let path = log_dir.join(file_name);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    prune_old_logs(&log_dir, app_name)?;

    Ok(path)
}

/// Remove the oldest dated log files beyond [`MAX_LOG_FILES`].
///
/// The date suffix sorts lexicographically, so name order is age order.
fn prune_old_logs(log_dir: &Path, app_name: &str) -> std::io::Result<()> {
    let prefix = format!("{}-", app_name);
    let mut logs: Vec<PathBuf> = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    logs.sort();
    while logs.len() > MAX_LOG_FILES {
        let oldest = logs.remove(0);
        fs::remove_file(oldest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_to_dated_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = init_logger(dir.path().to_path_buf(), "TestApp").expect("init failed");

        tracing::info!("hello from tracing");
        log::warn!("hello from log facade");

        assert!(path.exists());
        let contents = fs::read_to_string(&path).expect("read log");
        assert!(contents.contains("hello from tracing"));
    }

    #[test]
    fn test_prune_keeps_newest_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        for day in 1..=10 {
            let name = format!("TestApp-2026-08-{:02}.log", day);
            fs::write(dir.path().join(name), "x").expect("write");
        }
        // Unrelated file must survive pruning
        fs::write(dir.path().join("other.txt"), "x").expect("write");

        prune_old_logs(dir.path(), "TestApp").expect("prune");

        let remaining: Vec<_> = fs::read_dir(dir.path())
            .expect("read_dir")
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".log"))
            .collect();
        assert_eq!(remaining.len(), MAX_LOG_FILES);
        assert!(!dir.path().join("TestApp-2026-08-01.log").exists());
        assert!(dir.path().join("TestApp-2026-08-10.log").exists());
        assert!(dir.path().join("other.txt").exists());
    }
}
