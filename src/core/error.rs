//! # Error Module / 错误模块
//!
//! Typed errors raised by the run report library. The command-line layer
//! wraps these in `anyhow` with localized context.
//!
//! 运行报告库产生的类型化错误。命令行层使用 `anyhow` 和本地化上下文包装它们。

use std::path::PathBuf;

use crate::core::models::EventState;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The run-time window was requested over an empty event set.
    #[error("cannot compute the run window of an empty event set")]
    EmptyEventSet,

    /// No event carries a timestamp for the given state, so one end of the
    /// run window is unknown.
    #[error("no event has a {state} timestamp; the run window is unbounded")]
    MissingBound { state: EventState },

    #[error("unknown event state '{0}' (expected 'start' or 'finish')")]
    UnknownState(String),

    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
