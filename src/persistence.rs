use crate::error::ScrapeError;
use crate::report::ScrapeReport;
use crate::utils::timestamped_filename;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a report to a timestamped JSON file under the given directory
///
/// Creates the directory if needed and returns the path written. The
/// caller owns the report; nothing is retained here.
pub fn save_report(report: &ScrapeReport, dir: impl AsRef<Path>) -> Result<PathBuf, ScrapeError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(timestamped_filename());
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)?;

    ::log::info!("Saved report to {}", path.display());
    Ok(path)
}

/// Mirror a report to a fixed path, overwriting any previous one
///
/// Consumers that want "the latest scrape" watch this file; the pipeline
/// itself keeps no such state.
pub fn save_latest(report: &ScrapeReport, path: impl AsRef<Path>) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;

    ::log::debug!("Updated latest report at {}", path.display());
    Ok(())
}
