//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Run Report,
//! including run-data persistence, logging setup and i18n support.
//!
//! 此模块为 Run Report 提供基础设施服务，
//! 包括运行数据持久化、日志设置和国际化支持。

pub mod fs;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
