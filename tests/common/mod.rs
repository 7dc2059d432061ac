// Shared test helpers for integration tests
#![allow(dead_code)]

use run_report::{EventState, RunData, RunReport};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the store used throughout the report tests: three pieces of
/// metadata and a single "Deploy Bundle" event running from 10 to 12.
pub fn deploy_bundle_report() -> RunReport {
    let mut report = RunReport::new();
    report.register_metadata([
        ("cloud_name", "cloud1"),
        ("model_name", "model2"),
        ("target_bundle", "precise-essex"),
    ]);
    report.register_event("Deploy Bundle", EventState::Start, Some(10.0));
    report.register_event("Deploy Bundle", EventState::Finish, Some(12.0));
    report
}

/// Writes `data` as a run-data file named `run_data.json` inside `dir`.
pub fn write_run_data(dir: &Path, data: &RunData) -> PathBuf {
    let path = dir.join("run_data.json");
    let json = serde_json::to_string_pretty(data).expect("Failed to serialize run data");
    fs::write(&path, json).expect("Failed to write run data");
    path
}

/// Writes a report configuration file named `RunReport.toml` inside `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("RunReport.toml");
    fs::write(&path, content).expect("Failed to write RunReport.toml");
    path
}
