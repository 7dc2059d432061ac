//! # Timing Module / 计时模块
//!
//! Helpers for the time arithmetic behind the report: capturing the current
//! timestamp, finding the overall run window and computing rounded
//! percentages of it.
//!
//! 报告背后的时间运算辅助函数：获取当前时间戳、确定整体运行窗口并计算其四舍五入的百分比。

use chrono::Utc;
use std::collections::BTreeMap;

use crate::core::error::ReportError;
use crate::core::models::{EventState, EventTimes};

/// Default number of decimal places kept for `PCT Of Run Time`.
pub const DEFAULT_PCT_PRECISION: u32 = 2;

/// Largest precision honoured; `f64` carries no more significant decimals.
pub const MAX_PCT_PRECISION: u32 = 15;

/// Gets the current time as fractional seconds since the Unix epoch.
/// 以 Unix 纪元以来的秒数（含小数）获取当前时间。
pub fn now_timestamp() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Computes the overall run window of a set of events.
///
/// Returns the earliest Start and the latest Finish across all events. Events
/// missing one of the two slots still contribute the slot they do have.
///
/// 计算一组事件的整体运行窗口。
/// 返回所有事件中最早的 Start 和最晚的 Finish。缺少其中一个槽位的事件仍会贡献其已有的槽位。
///
/// # Errors / 错误
/// - `ReportError::EmptyEventSet` if `events` is empty
/// - `ReportError::MissingBound` if no event has a Start, or none has a Finish
pub fn get_events_start_stop_time(
    events: &BTreeMap<String, EventTimes>,
) -> Result<(f64, f64), ReportError> {
    if events.is_empty() {
        return Err(ReportError::EmptyEventSet);
    }

    let start = events
        .values()
        .filter_map(|times| times.start)
        .reduce(f64::min)
        .ok_or(ReportError::MissingBound {
            state: EventState::Start,
        })?;
    let finish = events
        .values()
        .filter_map(|times| times.finish)
        .reduce(f64::max)
        .ok_or(ReportError::MissingBound {
            state: EventState::Finish,
        })?;

    Ok((start, finish))
}

/// Expresses `elapsed` as a percentage of `run_time`, rounded to `precision`
/// decimal places (at most [`MAX_PCT_PRECISION`]). Returns `None` for a
/// zero-length run.
pub fn percentage_of(elapsed: f64, run_time: f64, precision: u32) -> Option<f64> {
    if run_time == 0.0 {
        return None;
    }
    Some(round_to(elapsed / run_time * 100.0, precision))
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PCT_PRECISION) as i32);
    (value * factor).round() / factor
}
