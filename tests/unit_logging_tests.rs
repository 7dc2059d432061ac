//! # Logging Setup Unit Tests / 日志设置单元测试
//!
//! Tests for mapping the `-v`/`-q` flags to a log level filter.
//!
//! 将 `-v`/`-q` 标志映射为日志级别过滤器的测试。

use log::LevelFilter;
use run_report::infra::logging::level_for;

#[cfg(test)]
mod logging_level_tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(level_for(0, false), LevelFilter::Info);
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(level_for(1, false), LevelFilter::Debug);
        assert_eq!(level_for(2, false), LevelFilter::Trace);
        assert_eq!(level_for(5, false), LevelFilter::Trace);
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(level_for(2, true), LevelFilter::Error);
    }
}
