//! # Recording Commands / 记录命令
//!
//! These commands let a shell-driven harness build up run data one call at a
//! time. Each call loads the run-data file, applies a single registration to
//! a `RunReport` and saves the result back.
//!
//! 这些命令让基于 shell 的测试框架逐次调用构建运行数据。
//! 每次调用都会加载运行数据文件，对 `RunReport` 执行一次注册，然后将结果保存回去。

use anyhow::{Context, Result, bail};
use colored::*;
use serde_json::Value;
use std::path::Path;

use crate::core::models::EventState;
use crate::core::store::RunReport;
use crate::infra::fs::{load_run_data, save_run_data};
use crate::infra::t;

fn load_store(data: &Path, locale: &str) -> Result<RunReport> {
    let run_data = load_run_data(data).with_context(|| {
        t!("run_data_load_failed", locale = locale, path = data.display()).to_string()
    })?;
    Ok(RunReport::from_run_data(run_data))
}

fn save_store(data: &Path, report: &RunReport, locale: &str) -> Result<()> {
    save_run_data(data, &report.get_run_data()).with_context(|| {
        t!("run_data_save_failed", locale = locale, path = data.display()).to_string()
    })
}

/// Records one Start or Finish timestamp in the run-data file.
/// 在运行数据文件中记录一个 Start 或 Finish 时间戳。
pub fn record_event(
    data: &Path,
    name: &str,
    state: EventState,
    timestamp: Option<f64>,
    locale: &str,
) -> Result<()> {
    let mut report = load_store(data, locale)?;
    report.register_event(name, state, timestamp);
    save_store(data, &report, locale)?;

    println!(
        "{} {}",
        "✔".green(),
        t!(
            "event_recorded",
            locale = locale,
            name = name.yellow(),
            state = state,
            path = data.display()
        )
    );
    Ok(())
}

/// Merges `KEY=VALUE` pairs into the metadata of the run-data file.
/// 将 `KEY=VALUE` 键值对合并到运行数据文件的元数据中。
pub fn record_metadata(data: &Path, pairs: &[String], locale: &str) -> Result<()> {
    let parsed = pairs
        .iter()
        .map(|pair| parse_metadata_pair(pair, locale))
        .collect::<Result<Vec<_>>>()?;

    let mut report = load_store(data, locale)?;
    report.register_metadata(parsed);
    save_store(data, &report, locale)?;

    println!(
        "{} {}",
        "✔".green(),
        t!(
            "metadata_recorded",
            locale = locale,
            count = pairs.len(),
            path = data.display()
        )
    );
    Ok(())
}

/// Empties the run-data file.
/// 清空运行数据文件。
pub fn reset(data: &Path, locale: &str) -> Result<()> {
    let mut report = load_store(data, locale)?;
    report.reset_run_data();
    save_store(data, &report, locale)?;

    println!(
        "{} {}",
        "✔".green(),
        t!("run_data_reset", locale = locale, path = data.display())
    );
    Ok(())
}

/// Splits a `KEY=VALUE` argument.
///
/// Values that parse as a JSON number, boolean or `null` and print back
/// identically keep that type; anything else, including JSON arrays, objects
/// and numbers that would lose digits, is stored as a string.
///
/// 拆分 `KEY=VALUE` 参数。
/// 可解析为 JSON 数字、布尔值或 `null` 且原样回写的值保留其类型；其他任何值（包括 JSON 数组、对象以及会丢失位数的数字）都作为字符串存储。
pub fn parse_metadata_pair(pair: &str, locale: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = pair.split_once('=') else {
        bail!(t!("metadata_pair_invalid", locale = locale, pair = pair).to_string());
    };
    let key = key.trim();
    if key.is_empty() {
        bail!(t!("metadata_pair_invalid", locale = locale, pair = pair).to_string());
    }

    // Typed only when the value prints back unchanged, so digits that do
    // not fit an f64 stay exact as a string.
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Number(_) | Value::Bool(_) | Value::Null)) if value.to_string() == raw => {
            value
        }
        _ => Value::String(raw.to_string()),
    };
    Ok((key.to_string(), value))
}
