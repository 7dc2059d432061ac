//! # Run Report Store / 运行报告存储
//!
//! `RunReport` is the single recorder for one run. The harness owns it and
//! passes it wherever events or metadata are registered; nothing here is
//! global. Every accessor returns an owned copy so callers cannot mutate the
//! recorded state behind the store's back.
//!
//! `RunReport` 是一次运行的唯一记录器。测试框架持有它，并将其传递到注册事件或元数据的任何地方；
//! 这里没有任何全局状态。每个访问器都返回一个拥有所有权的副本，因此调用者无法绕过存储修改已记录的状态。

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::error::ReportError;
use crate::core::models::{EventReport, EventState, EventSummary, EventTimes, Metadata, RunData};
use crate::core::timing::{self, DEFAULT_PCT_PRECISION, MAX_PCT_PRECISION};
use crate::reporting::text::write_report;

/// In-memory recorder of run events and metadata.
/// 运行事件和元数据的内存记录器。
#[derive(Debug, Clone)]
pub struct RunReport {
    data: RunData,
    pct_precision: u32,
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReport {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            data: RunData::default(),
            pct_precision: DEFAULT_PCT_PRECISION,
        }
    }

    /// Creates a store seeded with previously recorded run data.
    /// 使用先前记录的运行数据创建存储。
    pub fn from_run_data(data: RunData) -> Self {
        Self {
            data,
            pct_precision: DEFAULT_PCT_PRECISION,
        }
    }

    /// Sets how many decimal places `PCT Of Run Time` keeps, capped at
    /// [`MAX_PCT_PRECISION`].
    pub fn with_pct_precision(mut self, precision: u32) -> Self {
        self.pct_precision = precision.min(MAX_PCT_PRECISION);
        self
    }

    /// Records `timestamp` as the `state` time of the event `name`.
    ///
    /// When `timestamp` is `None` the current time is captured. Registering
    /// the same name and state again overwrites the earlier value, and a
    /// Finish may be registered before its Start.
    ///
    /// 将 `timestamp` 记录为事件 `name` 的 `state` 时间。
    /// 当 `timestamp` 为 `None` 时，使用当前时间。再次注册相同的名称和状态会覆盖之前的值，
    /// 并且 Finish 可以在其 Start 之前注册。
    pub fn register_event(&mut self, name: &str, state: EventState, timestamp: Option<f64>) {
        let timestamp = timestamp.unwrap_or_else(timing::now_timestamp);
        log::debug!("Registering event '{}' {} at {}", name, state, timestamp);
        self.data
            .events
            .entry(name.to_string())
            .or_default()
            .set(state, timestamp);
    }

    /// Merges `pairs` into the run metadata, overwriting existing keys.
    ///
    /// ```
    /// use run_report::RunReport;
    ///
    /// let mut report = RunReport::new();
    /// report.register_metadata([("cloud_name", "cloud1"), ("model_name", "model2")]);
    /// report.register_metadata([("model_name", "model3")]);
    /// assert_eq!(report.get_metadata()["model_name"], "model3");
    /// ```
    pub fn register_metadata<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            log::debug!("Registering metadata {} = {}", key, value);
            self.data.metadata.insert(key, value);
        }
    }

    /// Records the Start of `name`, runs `f`, then records its Finish.
    ///
    /// 记录 `name` 的 Start，运行 `f`，然后记录其 Finish。
    pub fn time_event<T, F>(&mut self, name: &str, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        self.register_event(name, EventState::Start, None);
        let output = f(self);
        self.register_event(name, EventState::Finish, None);
        output
    }

    pub fn get_events(&self) -> BTreeMap<String, EventTimes> {
        self.data.events.clone()
    }

    pub fn get_metadata(&self) -> Metadata {
        self.data.metadata.clone()
    }

    pub fn get_run_data(&self) -> RunData {
        self.data.clone()
    }

    /// Discards every registered event and all metadata.
    /// 丢弃所有已注册的事件和全部元数据。
    pub fn reset_run_data(&mut self) {
        self.data = RunData::default();
    }

    /// Builds the report for the current run data.
    ///
    /// Each event gets its elapsed time and its share of the overall run
    /// window (earliest Start to latest Finish). Events missing a Start or a
    /// Finish are reported with `null` elapsed time and percentage.
    ///
    /// 为当前运行数据构建报告。
    /// 每个事件都会获得其耗时以及在整体运行窗口（最早的 Start 到最晚的 Finish）中的占比。
    /// 缺少 Start 或 Finish 的事件，其耗时和百分比报告为 `null`。
    ///
    /// # Errors / 错误
    /// Propagates the window errors of [`timing::get_events_start_stop_time`],
    /// so a run with no events cannot be reported.
    pub fn get_event_report(&self) -> Result<EventReport, ReportError> {
        let (start, finish) = timing::get_events_start_stop_time(&self.data.events)?;
        let run_time = finish - start;

        let events = self
            .data
            .events
            .iter()
            .map(|(name, times)| {
                let elapsed_time = times.elapsed();
                let pct_of_run_time = elapsed_time
                    .and_then(|elapsed| timing::percentage_of(elapsed, run_time, self.pct_precision));
                let summary = EventSummary {
                    start: times.start,
                    finish: times.finish,
                    elapsed_time,
                    pct_of_run_time,
                };
                (name.clone(), summary)
            })
            .collect();

        Ok(EventReport {
            events,
            metadata: self.data.metadata.clone(),
        })
    }

    /// Renders the current report, logs it and optionally writes it to
    /// `output_file`. See [`write_report`].
    pub fn write_event_report(&self, output_file: Option<&Path>) -> Result<(), ReportError> {
        let report = self.get_event_report()?;
        write_report(&report.to_map()?, output_file)
    }
}
