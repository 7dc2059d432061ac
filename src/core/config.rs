//! # Configuration Module / 配置模块
//!
//! `ReportConfig` holds the settings read from `RunReport.toml`. Command-line
//! flags take precedence over the values found here.
//!
//! `ReportConfig` 保存从 `RunReport.toml` 读取的设置。命令行标志优先于此处的值。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::timing::DEFAULT_PCT_PRECISION;
use crate::infra::t;

/// Default configuration file name, looked up in the working directory.
/// 默认配置文件名，在工作目录中查找。
pub const DEFAULT_CONFIG_FILE: &str = "RunReport.toml";

/// Settings for rendering a run report.
/// 渲染运行报告的设置。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for console messages (e.g., "en", "zh-CN"). When unset,
    /// the detected system locale is used.
    /// 控制台消息的语言（例如 "en", "zh-CN"）。未设置时使用检测到的系统语言。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Where the text report is written, if anywhere. The report is always
    /// logged regardless of this setting.
    /// 文本报告的写入位置（如有）。无论此设置如何，报告总是会被记录到日志。
    #[serde(default)]
    pub output_file: Option<PathBuf>,

    /// Optional path for an HTML rendering of the report.
    /// 报告 HTML 版本的可选路径。
    #[serde(default)]
    pub html: Option<PathBuf>,

    /// Decimal places kept for `PCT Of Run Time`.
    /// `PCT Of Run Time` 保留的小数位数。
    #[serde(default = "default_pct_precision")]
    pub pct_precision: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: None,
            output_file: None,
            html: None,
            pct_precision: default_pct_precision(),
        }
    }
}

fn default_pct_precision() -> u32 {
    DEFAULT_PCT_PRECISION
}

impl ReportConfig {
    /// Loads the configuration from `path`.
    ///
    /// # Errors / 错误
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path, locale: &str) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            t!("config_read_failed", locale = locale, path = path.display()).to_string()
        })?;
        toml::from_str(&content).with_context(|| {
            t!("config_parse_failed", locale = locale, path = path.display()).to_string()
        })
    }

    /// Loads `path` if it exists, falling back to defaults only when `path`
    /// is the implicit default file name.
    /// 如果 `path` 存在则加载；仅当 `path` 是隐式默认文件名时才回退到默认值。
    pub fn load_or_default(path: &Path, explicit: bool, locale: &str) -> Result<Self> {
        if !explicit && !path.exists() {
            log::debug!("No {} found, using default settings", path.display());
            return Ok(Self::default());
        }
        Self::load(path, locale)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize report configuration")
    }
}
