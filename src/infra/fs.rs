//! # File System Operations Module / 文件系统操作模块
//!
//! This module persists run data between separate invocations of the
//! command-line tool, so a shell-driven harness can record events one call
//! at a time.
//!
//! 此模块在命令行工具的多次独立调用之间持久化运行数据，
//! 使基于 shell 的测试框架可以逐次调用记录事件。

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::core::models::RunData;

/// Loads run data from a JSON file. A file that does not exist yet reads as
/// an empty run.
///
/// # Arguments
/// * `path` - Path to the run-data file
///
/// # Returns
/// The recorded `RunData`, or an error if the file exists but cannot be read
/// or parsed
pub fn load_run_data(path: &Path) -> Result<RunData> {
    if !path.exists() {
        return Ok(RunData::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read run data: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse run data: {}", path.display()))
}

/// Saves run data to a JSON file, replacing any previous content.
///
/// # Arguments
/// * `path` - Path to the run-data file
/// * `data` - The run data to store
///
/// # Errors
/// Fails without touching the file when any timestamp is not finite, since
/// JSON would store it as `null` and the value would be lost.
pub fn save_run_data(path: &Path, data: &RunData) -> Result<()> {
    for (name, times) in &data.events {
        let stamps = [times.start, times.finish];
        if stamps.iter().flatten().any(|t| !t.is_finite()) {
            bail!("Event '{}' has a non-finite timestamp", name);
        }
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(data).context("Failed to serialize run data")?;
    fs::write(path, json).with_context(|| format!("Failed to write run data: {}", path.display()))
}
