//! # Reporting Module / 报告模块
//!
//! This module handles the rendering and output of run reports in multiple formats.
//! It provides the `key: value` text report that is logged and written to disk,
//! colorful console summaries and styled HTML reports with internationalization support.
//!
//! 此模块处理多种格式的运行报告渲染和输出。
//! 它提供记录到日志并写入磁盘的 `key: value` 文本报告、彩色控制台摘要以及支持国际化的样式化 HTML 报告。

pub mod console;
pub mod html;
pub mod text;

// Re-export common reporting functions
pub use console::print_summary;
pub use html::generate_html_report;
pub use text::{render_report, write_report};
