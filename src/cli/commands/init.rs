//! # Configuration Initialization Module / 配置初始化模块
//!
//! This module creates a `RunReport.toml` file, either with defaults or
//! through a short interactive wizard.
//!
//! 此模块通过默认值或简短的交互式向导创建 `RunReport.toml` 文件。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Prompts for the report file, HTML output and precision
//! - **Overwrite Protection**: Confirmation prompt before overwriting an existing configuration
//!
//! - **交互式向导**: 提示输入报告文件、HTML 输出和精度
//! - **覆盖保护**: 覆盖现有配置前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::ReportConfig;
use crate::core::timing::{DEFAULT_PCT_PRECISION, MAX_PCT_PRECISION};
use crate::infra::t;

/// Runs the interactive wizard to generate a `RunReport.toml` file.
///
/// With `non_interactive` set, the default configuration is written straight
/// away, replacing any existing file.
///
/// 运行交互式向导以生成 `RunReport.toml` 文件。
/// 设置 `non_interactive` 时，直接写入默认配置，并替换任何现有文件。
pub fn run_init_wizard(config_path: &Path, language: &str, non_interactive: bool) -> Result<()> {
    let default_config = ReportConfig {
        language: Some(language.to_string()),
        ..ReportConfig::default()
    };

    if non_interactive {
        return write_config(config_path, &default_config, language);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
    println!("{}", t!("init_wizard_description", locale = language));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init_overwrite_prompt", locale = language, path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let output_file: String = Input::with_theme(&theme)
        .with_prompt(t!("init_output_file_prompt", locale = language))
        .default("summary.yaml".to_string())
        .allow_empty(true)
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let html: String = Input::with_theme(&theme)
        .with_prompt(t!("init_html_prompt", locale = language))
        .allow_empty(true)
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let pct_precision: u32 = Input::with_theme(&theme)
        .with_prompt(t!("init_precision_prompt", locale = language))
        .default(DEFAULT_PCT_PRECISION)
        .validate_with(|input: &u32| -> Result<(), String> {
            if *input <= MAX_PCT_PRECISION {
                Ok(())
            } else {
                Err(t!("init_precision_too_large", locale = language, max = MAX_PCT_PRECISION).to_string())
            }
        })
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let config = ReportConfig {
        output_file: non_empty_path(&output_file),
        html: non_empty_path(&html),
        pct_precision,
        ..default_config
    };

    write_config(config_path, &config, language)
}

fn non_empty_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

fn write_config(path: &Path, config: &ReportConfig, language: &str) -> Result<()> {
    let toml_string = config
        .to_toml()
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init_write_failed", locale = language, path = path.display()).to_string())?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
