//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for `ReportConfig` loading and
//! serialization, and for merging command-line overrides.
//!
//! 此模块包含 `ReportConfig` 加载和序列化以及合并命令行覆盖项的单元测试。

mod common;

use run_report::cli::commands::render::{RenderOptions, effective_locale, merge_config};
use run_report::core::config::ReportConfig;
use std::path::PathBuf;
use tempfile::tempdir;

fn options() -> RenderOptions {
    RenderOptions {
        data: PathBuf::from("run_data.json"),
        config: PathBuf::from("RunReport.toml"),
        config_explicit: false,
        output: None,
        html: None,
        precision: None,
        locale: None,
        detected_locale: "en".to_string(),
    }
}

#[cfg(test)]
mod report_config_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.language, None);
        assert_eq!(config.output_file, None);
        assert_eq!(config.html, None);
        assert_eq!(config.pct_precision, 2);
    }

    #[test]
    fn test_deserialization_minimal() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_deserialization_full() {
        let toml_str = r#"
            language = "zh-CN"
            output_file = "/tmp/summary.yaml"
            html = "report.html"
            pct_precision = 0
        "#;

        let config: ReportConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.output_file, Some(PathBuf::from("/tmp/summary.yaml")));
        assert_eq!(config.html, Some(PathBuf::from("report.html")));
        assert_eq!(config.pct_precision, 0);
    }

    #[test]
    fn test_serialization() {
        let config = ReportConfig {
            language: Some("en".to_string()),
            output_file: Some(PathBuf::from("summary.yaml")),
            ..ReportConfig::default()
        };

        let toml_str = config.to_toml().unwrap();

        assert!(toml_str.contains("language = \"en\""));
        assert!(toml_str.contains("output_file = \"summary.yaml\""));
        assert!(toml_str.contains("pct_precision = 2"));
        assert!(!toml_str.contains("html"));
    }

    #[test]
    fn test_serialization_omits_unset_language() {
        let toml_str = ReportConfig::default().to_toml().unwrap();
        assert!(!toml_str.contains("language"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = common::write_config(dir.path(), "pct_precision = 1\n");

        let config = ReportConfig::load(&path, "en").unwrap();
        assert_eq!(config.pct_precision, 1);
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = common::write_config(dir.path(), "pct_precision = [unclosed\n");

        let err = ReportConfig::load(&path, "en").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse configuration file"));
    }

    #[test]
    fn test_load_or_default_missing_implicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("RunReport.toml");

        let config = ReportConfig::load_or_default(&path, false, "en").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_load_or_default_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");

        let err = ReportConfig::load_or_default(&path, true, "en").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read configuration file"));
    }
}

#[cfg(test)]
mod merge_tests {
    use super::*;

    #[test]
    fn test_merge_without_overrides_keeps_file_values() {
        let file_config = ReportConfig {
            language: Some("zh-CN".to_string()),
            output_file: Some(PathBuf::from("summary.yaml")),
            html: None,
            pct_precision: 1,
        };

        assert_eq!(merge_config(file_config.clone(), &options()), file_config);
    }

    #[test]
    fn test_merge_overrides_take_precedence() {
        let file_config = ReportConfig {
            output_file: Some(PathBuf::from("summary.yaml")),
            ..ReportConfig::default()
        };
        let overrides = RenderOptions {
            output: Some(PathBuf::from("other.yaml")),
            html: Some(PathBuf::from("report.html")),
            precision: Some(0),
            locale: Some("zh-CN".to_string()),
            ..options()
        };

        let merged = merge_config(file_config, &overrides);

        assert_eq!(merged.output_file, Some(PathBuf::from("other.yaml")));
        assert_eq!(merged.html, Some(PathBuf::from("report.html")));
        assert_eq!(merged.pct_precision, 0);
        assert_eq!(merged.language.as_deref(), Some("zh-CN"));
    }
}

#[cfg(test)]
mod locale_tests {
    use super::*;

    #[test]
    fn test_detected_locale_used_without_configured_language() {
        let options = RenderOptions {
            detected_locale: "zh-CN".to_string(),
            ..options()
        };
        let config = merge_config(ReportConfig::default(), &options);

        assert_eq!(effective_locale(&config, &options), "zh-CN");
    }

    #[test]
    fn test_configured_language_beats_detected_locale() {
        let options = RenderOptions {
            detected_locale: "zh-CN".to_string(),
            ..options()
        };
        let file_config = ReportConfig {
            language: Some("en".to_string()),
            ..ReportConfig::default()
        };
        let config = merge_config(file_config, &options);

        assert_eq!(effective_locale(&config, &options), "en");
    }

    #[test]
    fn test_lang_flag_beats_configured_language() {
        let options = RenderOptions {
            locale: Some("zh-CN".to_string()),
            detected_locale: "zh-CN".to_string(),
            ..options()
        };
        let file_config = ReportConfig {
            language: Some("en".to_string()),
            ..ReportConfig::default()
        };
        let config = merge_config(file_config, &options);

        assert_eq!(effective_locale(&config, &options), "zh-CN");
    }

    #[test]
    fn test_unknown_detected_locale_falls_back_to_english() {
        let options = RenderOptions {
            detected_locale: "zh-TW".to_string(),
            ..options()
        };
        let config = merge_config(ReportConfig::default(), &options);

        assert_eq!(effective_locale(&config, &options), "en");
    }
}
