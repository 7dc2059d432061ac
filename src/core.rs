//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Run Report,
//! including data models, the event store, timing arithmetic and configuration.
//!
//! 此模块包含 Run Report 的核心功能，
//! 包括数据模型、事件存储、时间运算和配置。

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod timing;

// Re-exports
pub use error::ReportError;
pub use models::{EventReport, EventState, EventSummary, EventTimes, Metadata, RunData};
pub use store::RunReport;
pub use timing::get_events_start_stop_time;
