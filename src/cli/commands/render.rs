// src/cli/commands/render.rs

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{config::ReportConfig, store::RunReport},
    infra::{fs::load_run_data, t},
    reporting::{generate_html_report, print_summary},
};

/// Inputs of the `render` command after command-line parsing.
/// `render` 命令在命令行解析后的输入。
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub data: PathBuf,
    pub config: PathBuf,
    /// Whether `--config` was given explicitly; only then is a missing file an error.
    pub config_explicit: bool,
    pub output: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub precision: Option<u32>,
    /// Locale from `--lang`; the configured language is used otherwise.
    pub locale: Option<String>,
    /// System locale, used when neither `--lang` nor the config names one.
    pub detected_locale: String,
}

/// Merges command-line overrides over the file configuration.
/// 将命令行覆盖项合并到文件配置之上。
pub fn merge_config(mut config: ReportConfig, options: &RenderOptions) -> ReportConfig {
    if let Some(output) = &options.output {
        config.output_file = Some(output.clone());
    }
    if let Some(html) = &options.html {
        config.html = Some(html.clone());
    }
    if let Some(precision) = options.precision {
        config.pct_precision = precision;
    }
    if let Some(locale) = &options.locale {
        config.language = Some(locale.clone());
    }
    config
}

/// Picks the locale for rendering: the merged config language if any,
/// otherwise the detected system locale.
/// 选择渲染使用的语言：优先使用合并后配置中的语言，否则使用检测到的系统语言。
pub fn effective_locale(config: &ReportConfig, options: &RenderOptions) -> String {
    let requested = config.language.as_deref().unwrap_or(&options.detected_locale);
    crate::resolve_locale(requested)
}

pub fn execute(options: RenderOptions) -> Result<()> {
    let bootstrap_locale = options.locale.as_deref().unwrap_or(&options.detected_locale);
    let file_config =
        ReportConfig::load_or_default(&options.config, options.config_explicit, bootstrap_locale)?;
    let config = merge_config(file_config, &options);
    let locale = effective_locale(&config, &options);
    rust_i18n::set_locale(&locale);

    let run_data = load_run_data(&options.data).with_context(|| {
        t!("run_data_load_failed", locale = locale, path = options.data.display()).to_string()
    })?;
    let report = RunReport::from_run_data(run_data).with_pct_precision(config.pct_precision);

    let event_report = report
        .get_event_report()
        .with_context(|| t!("report_build_failed", locale = locale).to_string())?;

    print_summary(&event_report, &locale);

    report
        .write_event_report(config.output_file.as_deref())
        .with_context(|| t!("report_write_failed", locale = locale).to_string())?;

    if let Some(output) = &config.output_file {
        println!(
            "\n{}",
            t!("report_written", locale = locale, path = output.display()).green()
        );
    }

    if let Some(html_path) = &config.html {
        println!(
            "{}",
            t!("html_report_generating", locale = locale, path = html_path.display())
        );
        generate_html_report(&event_report, html_path, &locale)?;
    }

    Ok(())
}
