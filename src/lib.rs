//! # Run Report Library / Run Report 库
//!
//! This library records timestamped lifecycle events and run metadata for a
//! test-execution session and renders a summary of how long each event took
//! and what share of the whole run it represents.
//!
//! 此库为测试执行会话记录带时间戳的生命周期事件和运行元数据，
//! 并渲染一份摘要，显示每个事件的耗时及其在整个运行中所占的比例。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, the `RunReport` store, timing arithmetic and configuration
//! - `infra` - Infrastructure services like run-data persistence and logging setup
//! - `reporting` - Text, console and HTML report rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、`RunReport` 存储、时间运算和配置
//! - `infra` - 基础设施服务，如运行数据持久化和日志设置
//! - `reporting` - 文本、控制台和 HTML 报告渲染
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```
//! use run_report::{EventState, RunReport};
//!
//! let mut report = RunReport::new();
//! report.register_metadata([("cloud_name", "cloud1")]);
//! report.register_event("Deploy Bundle", EventState::Start, Some(10.0));
//! report.register_event("Deploy Bundle", EventState::Finish, Some(12.0));
//!
//! let summary = report.get_event_report().unwrap();
//! assert_eq!(summary.events["Deploy Bundle"].pct_of_run_time, Some(100.0));
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::{
    EventReport, EventState, EventSummary, EventTimes, Metadata, ReportError, RunData, RunReport,
    get_events_start_stop_time,
};

/// Resolves a requested locale against the bundled translations.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
///
/// 根据内置翻译解析请求的语言环境。
/// 它首先尝试匹配完整的语言环境（例如 "zh-CN"），然后只匹配语言代码（例如 "en"），最后回退到 "en"。
pub fn resolve_locale(requested: &str) -> String {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return requested.to_string();
    }
    requested
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
