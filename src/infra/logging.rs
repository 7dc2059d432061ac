//! # Logging Module / 日志模块
//!
//! Sets up `env_logger` for the command-line tool. The library itself only
//! talks to the `log` facade.
//!
//! 为命令行工具设置 `env_logger`。库本身只使用 `log` 门面。

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Maps the verbosity flags to a log level.
/// 将详细程度标志映射为日志级别。
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Installs the global logger. Calling this more than once keeps the first
/// logger.
///
/// # Arguments
/// * `verbose` - Number of `-v` flags given
/// * `quiet` - Whether `-q` was given
pub fn init_logging(verbose: u8, quiet: bool) {
    let _ = Builder::new()
        .filter_level(level_for(verbose, quiet))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
