//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints a colored, formatted summary of a run report to the
//! console with internationalization support.
//!
//! 此模块在控制台打印彩色格式化的运行报告摘要，支持国际化。

use colored::*;

use crate::core::models::{EventReport, EventSummary};
use crate::infra::t;

/// Prints a formatted summary of the event report to the console.
/// Events are listed with their timestamps, elapsed time and share of the
/// run; incomplete events are dimmed and show `N/A`.
///
/// 在控制台打印事件报告的格式化摘要。
/// 列出事件及其时间戳、耗时和运行占比；不完整的事件以暗色显示并显示 `N/A`。
///
/// # Output Format / 输出格式
/// ```text
/// --- Run Report ---
///   - Event                          |        Start |       Finish |    Elapsed |  % of Run
///   - Deploy Bundle                  |        10.00 |        12.00 |      2.00s |   100.00%
///
///   cloud_name: cloud1
/// ```
pub fn print_summary(report: &EventReport, locale: &str) {
    println!("\n{}", t!("report_summary_banner", locale = locale).bold());
    println!(
        "  - {:<30} | {:>12} | {:>12} | {:>10} | {:>9}",
        t!("summary_header_event", locale = locale),
        t!("summary_header_start", locale = locale),
        t!("summary_header_finish", locale = locale),
        t!("summary_header_elapsed", locale = locale),
        t!("summary_header_pct", locale = locale),
    );

    for (name, summary) in &report.events {
        let line = format_row(name, summary);
        if summary.elapsed_time.is_some() {
            println!("{}", line);
        } else {
            println!("{}", line.dimmed());
        }
    }

    if !report.metadata.is_empty() {
        println!("\n{}", t!("metadata_banner", locale = locale).cyan());
        for (key, value) in &report.metadata {
            match value {
                serde_json::Value::String(text) => println!("  {}: {}", key, text),
                other => println!("  {}: {}", key, other),
            }
        }
    }
}

fn format_row(name: &str, summary: &EventSummary) -> String {
    let timestamp = |value: Option<f64>| {
        value
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "N/A".to_string())
    };
    let elapsed = summary
        .elapsed_time
        .map(|v| format!("{:.2}s", v))
        .unwrap_or_else(|| "N/A".to_string());
    let pct = summary
        .pct_of_run_time
        .map(|v| format!("{:.2}%", v))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "  - {:<30} | {:>12} | {:>12} | {:>10} | {:>9}",
        name,
        timestamp(summary.start),
        timestamp(summary.finish),
        elapsed,
        pct
    )
}
