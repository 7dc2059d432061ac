//! # Recording Command Unit Tests / 记录命令单元测试
//!
//! Tests for the commands that build up a run-data file one registration at
//! a time.
//!
//! 逐次注册构建运行数据文件的命令测试。

mod common;

use run_report::cli::commands::record::{parse_metadata_pair, record_event, record_metadata, reset};
use run_report::infra::fs::load_run_data;
use run_report::{EventState, EventTimes, RunData};
use serde_json::json;
use tempfile::tempdir;

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_string_value() {
        let (key, value) = parse_metadata_pair("cloud_name=cloud1", "en").unwrap();
        assert_eq!(key, "cloud_name");
        assert_eq!(value, json!("cloud1"));
    }

    #[test]
    fn test_parse_scalar_values() {
        assert_eq!(parse_metadata_pair("machines=3", "en").unwrap().1, json!(3));
        assert_eq!(parse_metadata_pair("ratio=0.5", "en").unwrap().1, json!(0.5));
        assert_eq!(parse_metadata_pair("smoke=true", "en").unwrap().1, json!(true));
        assert_eq!(parse_metadata_pair("extra=null", "en").unwrap().1, json!(null));
    }

    #[test]
    fn test_parse_inexact_numbers_stay_strings() {
        assert_eq!(
            parse_metadata_pair("build=12345678901234567890123", "en").unwrap().1,
            json!("12345678901234567890123")
        );
        assert_eq!(parse_metadata_pair("ratio=1e3", "en").unwrap().1, json!("1e3"));
        assert_eq!(parse_metadata_pair("version=1.10", "en").unwrap().1, json!("1.10"));
    }

    #[test]
    fn test_parse_structured_values_stay_strings() {
        assert_eq!(
            parse_metadata_pair("list=[1,2]", "en").unwrap().1,
            json!("[1,2]")
        );
    }

    #[test]
    fn test_parse_value_containing_equals() {
        let (key, value) = parse_metadata_pair("query=a=b", "en").unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, json!("a=b"));
    }

    #[test]
    fn test_parse_empty_value() {
        assert_eq!(parse_metadata_pair("note=", "en").unwrap().1, json!(""));
    }

    #[test]
    fn test_parse_invalid_pairs() {
        assert!(parse_metadata_pair("no-separator", "en").is_err());
        assert!(parse_metadata_pair("=value", "en").is_err());
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_record_event_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_data.json");

        record_event(&path, "Deploy Bundle", EventState::Start, Some(10.0), "en").unwrap();
        record_event(&path, "Deploy Bundle", EventState::Finish, Some(12.0), "en").unwrap();

        let data = load_run_data(&path).unwrap();
        assert_eq!(data.events["Deploy Bundle"], EventTimes::new(10.0, 12.0));
    }

    #[test]
    fn test_record_metadata_merges() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_data.json");

        record_metadata(&path, &["a=1".to_string(), "b=2".to_string()], "en").unwrap();
        record_metadata(&path, &["b=3".to_string(), "c=4".to_string()], "en").unwrap();

        let data = load_run_data(&path).unwrap();
        assert_eq!(serde_json::to_value(&data.metadata).unwrap(), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_record_metadata_rejects_bad_pair_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_data.json");

        assert!(record_metadata(&path, &["a=1".to_string(), "broken".to_string()], "en").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_reset_clears_file() {
        let dir = tempdir().unwrap();
        let path = common::write_run_data(
            dir.path(),
            &common::deploy_bundle_report().get_run_data(),
        );

        reset(&path, "en").unwrap();

        assert_eq!(load_run_data(&path).unwrap(), RunData::default());
    }
}
