//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures recorded and produced by the run
//! report: event states, per-event timestamp records, the aggregate run data
//! and the derived report.
//!
//! 此模块定义运行报告记录和生成的数据结构：
//! 事件状态、每个事件的时间戳记录、聚合运行数据以及派生报告。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::core::error::ReportError;

/// Free-form run metadata, e.g. `cloud_name` or `target_bundle`.
/// 自由格式的运行元数据，例如 `cloud_name` 或 `target_bundle`。
pub type Metadata = BTreeMap<String, Value>;

/// The two canonical lifecycle states of an event.
/// 事件的两个规范生命周期状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventState {
    /// The event has begun. / 事件已开始。
    Start,
    /// The event has completed. / 事件已完成。
    Finish,
}

impl EventState {
    /// Gets the display label under which this state is stored.
    /// 获取存储此状态时使用的显示标签。
    pub fn label(&self) -> &'static str {
        match self {
            EventState::Start => "Start",
            EventState::Finish => "Finish",
        }
    }
}

impl fmt::Display for EventState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventState {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(EventState::Start),
            "finish" => Ok(EventState::Finish),
            _ => Err(ReportError::UnknownState(s.to_string())),
        }
    }
}

/// The Start/Finish timestamps recorded for a single event.
/// Timestamps are seconds; no ordering between the two slots is enforced.
///
/// 为单个事件记录的 Start/Finish 时间戳。
/// 时间戳以秒为单位；两个槽位之间不强制任何顺序。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTimes {
    #[serde(rename = "Start", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(rename = "Finish", default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<f64>,
}

impl EventTimes {
    pub fn new(start: f64, finish: f64) -> Self {
        Self {
            start: Some(start),
            finish: Some(finish),
        }
    }

    /// Gets the timestamp stored for `state`, if any.
    pub fn get(&self, state: EventState) -> Option<f64> {
        match state {
            EventState::Start => self.start,
            EventState::Finish => self.finish,
        }
    }

    /// Overwrites the timestamp stored for `state`.
    pub fn set(&mut self, state: EventState, timestamp: f64) {
        match state {
            EventState::Start => self.start = Some(timestamp),
            EventState::Finish => self.finish = Some(timestamp),
        }
    }

    /// Finish minus Start, when both have been registered.
    /// 当两者都已注册时，返回 Finish 减去 Start。
    pub fn elapsed(&self) -> Option<f64> {
        Some(self.finish? - self.start?)
    }
}

/// The aggregate state of one run: every registered event and all metadata.
/// Both top-level keys are always serialized, even when empty.
///
/// 一次运行的聚合状态：所有已注册的事件和全部元数据。
/// 两个顶级键总是会被序列化，即使为空。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunData {
    #[serde(rename = "Events", default)]
    pub events: BTreeMap<String, EventTimes>,
    #[serde(rename = "Metadata", default)]
    pub metadata: Metadata,
}

impl RunData {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.metadata.is_empty()
    }
}

/// One row of the derived report.
///
/// `elapsed_time` and `pct_of_run_time` are `None` (serialized as `null`)
/// when the event lacks a Start or a Finish timestamp. The percentage is
/// also `None` when the run window has zero length.
///
/// 派生报告中的一行。
/// 当事件缺少 Start 或 Finish 时间戳时，`elapsed_time` 和 `pct_of_run_time`
/// 为 `None`（序列化为 `null`）。当运行窗口长度为零时，百分比同样为 `None`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    #[serde(rename = "Start", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(rename = "Finish", default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<f64>,
    #[serde(rename = "Elapsed Time")]
    pub elapsed_time: Option<f64>,
    #[serde(rename = "PCT Of Run Time")]
    pub pct_of_run_time: Option<f64>,
}

/// The report assembled from the current run data.
/// 根据当前运行数据组装的报告。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventReport {
    #[serde(rename = "Events")]
    pub events: BTreeMap<String, EventSummary>,
    #[serde(rename = "Metadata")]
    pub metadata: Metadata,
}

impl EventReport {
    /// Converts the report into its top-level JSON object, the shape consumed
    /// by the text renderer.
    pub fn to_map(&self) -> Result<serde_json::Map<String, Value>, ReportError> {
        let mut map = serde_json::Map::new();
        map.insert("Events".to_string(), serde_json::to_value(&self.events)?);
        map.insert("Metadata".to_string(), serde_json::to_value(&self.metadata)?);
        Ok(map)
    }
}
