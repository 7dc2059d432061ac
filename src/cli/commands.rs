//! Subcommand implementations for the `run-report` binary.
//! `run-report` 可执行文件的子命令实现。

pub mod init;
pub mod record;
pub mod render;
