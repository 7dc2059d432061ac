//! # Text Reporting Module / 文本报告模块
//!
//! Renders a report as `key: value` lines and emits it to the log and,
//! optionally, to a file.
//!
//! 将报告渲染为 `key: value` 行，并将其输出到日志，以及可选地输出到文件。

use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::error::ReportError;

/// Log target used for the report block.
/// 报告文本块使用的日志目标。
pub const REPORT_LOG_TARGET: &str = "run_report";

/// Renders one `key: value` line per top-level entry of `report`.
///
/// String values are written bare; every other value is written as compact
/// JSON with sorted keys, so equal reports always render identically.
///
/// 为 `report` 的每个顶级条目渲染一行 `key: value`。
/// 字符串值按原样写出；其他所有值都写成键已排序的紧凑 JSON，因此相同的报告总是渲染得完全一致。
///
/// # Output Format / 输出格式
/// ```text
/// Events: {"Deploy Bundle":{"Elapsed Time":2.0,"Finish":12.0,"PCT Of Run Time":100.0,"Start":10.0}}
/// Metadata: {"cloud_name":"cloud1"}
/// ```
pub fn render_report(report: &Map<String, Value>) -> String {
    report
        .iter()
        .map(|(key, value)| match value {
            Value::String(text) => format!("{}: {}\n", key, text),
            other => format!("{}: {}\n", key, other),
        })
        .collect()
}

/// Logs the rendered `report` at info level and, when `output_file` is set,
/// writes the same text to it (created or truncated).
///
/// 以 info 级别记录渲染后的 `report`，并在设置了 `output_file` 时将相同文本写入该文件（创建或截断）。
///
/// # Errors / 错误
/// Returns `ReportError::Io` if the file cannot be created or written. The
/// log entry has already been emitted at that point.
pub fn write_report(report: &Map<String, Value>, output_file: Option<&Path>) -> Result<(), ReportError> {
    let text = render_report(report);
    log::info!(target: REPORT_LOG_TARGET, "{}", text);

    if let Some(path) = output_file {
        write_text(path, &text).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}
