//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML run reports.
//! It creates a styled, self-contained HTML file with run totals, a per-event
//! timing table and the run metadata.
//!
//! 此模块处理 HTML 运行报告的生成。
//! 它创建一个样式化的独立 HTML 文件，包含运行总计、每个事件的计时表以及运行元数据。

use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::core::models::{EventReport, EventSummary};
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Renders the report as a complete HTML document.
///
/// 将报告渲染为完整的 HTML 文档。
pub fn render_html_report(report: &EventReport, locale: &str) -> Markup {
    let total = report.events.len();
    let complete = report
        .events
        .values()
        .filter(|e| e.elapsed_time.is_some())
        .count();
    let window = run_window(report);

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                div class="summary-container" {
                    div class="summary-item" {
                        span class="count" { (total) }
                        span class="label" { (t!("html_report.summary.events", locale = locale)) }
                    }
                    div class="summary-item" {
                        span class="count" { (complete) }
                        span class="label" { (t!("html_report.summary.complete", locale = locale)) }
                    }
                    div class="summary-item" {
                        span class="count" {
                            @if let Some(run_time) = window {
                                (format!("{:.2}s", run_time))
                            } @else {
                                "N/A"
                            }
                        }
                        span class="label" { (t!("html_report.summary.run_time", locale = locale)) }
                    }
                }
                table {
                    thead {
                        tr {
                            th { (t!("html_report.table.header.event", locale = locale)) }
                            th { (t!("html_report.table.header.start", locale = locale)) }
                            th { (t!("html_report.table.header.finish", locale = locale)) }
                            th { (t!("html_report.table.header.elapsed", locale = locale)) }
                            th { (t!("html_report.table.header.pct", locale = locale)) }
                        }
                    }
                    tbody {
                        @for (name, summary) in &report.events {
                            (event_row(name, summary))
                        }
                    }
                }
                @if !report.metadata.is_empty() {
                    h2 { (t!("html_report.metadata_header", locale = locale)) }
                    table {
                        tbody {
                            @for (key, value) in &report.metadata {
                                tr {
                                    th { (key) }
                                    td {
                                        @match value {
                                            serde_json::Value::String(text) => { (text) }
                                            other => { (other.to_string()) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn event_row(name: &str, summary: &EventSummary) -> Markup {
    let class = if summary.elapsed_time.is_some() { "" } else { "incomplete" };
    html! {
        tr class=(class) {
            td { (name) }
            td class="number" { (optional(summary.start, "")) }
            td class="number" { (optional(summary.finish, "")) }
            td class="number" { (optional(summary.elapsed_time, "s")) }
            td class="number" {
                (optional(summary.pct_of_run_time, "%"))
                @if let Some(pct) = summary.pct_of_run_time {
                    div class="pct-bar" style=(format!("width: {:.0}%", pct.clamp(0.0, 100.0))) {}
                }
            }
        }
    }
}

fn optional(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{:.2}{}", v, unit))
        .unwrap_or_else(|| "N/A".to_string())
}

fn run_window(report: &EventReport) -> Option<f64> {
    let start = report.events.values().filter_map(|e| e.start).reduce(f64::min)?;
    let finish = report.events.values().filter_map(|e| e.finish).reduce(f64::max)?;
    Some(finish - start)
}

/// Generates an HTML report from the event report and saves it to `output_path`.
///
/// 从事件报告生成 HTML 报告并保存到 `output_path`。
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written.
pub fn generate_html_report(report: &EventReport, output_path: &Path, locale: &str) -> Result<()> {
    let markup = render_html_report(report, locale);
    fs::write(output_path, markup.into_string()).with_context(|| {
        t!("html_write_failed", locale = locale, path = output_path.display()).to_string()
    })?;
    Ok(())
}
