//! System configuration types: performance and logging.

use serde::{Deserialize, Serialize};

/// Performance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Target display cadence; the per-tick budget is `1 / frame_rate`.
    pub frame_rate: u32,
    /// Log a warning when an update overruns the frame budget.
    pub warn_on_overrun: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            warn_on_overrun: true,
        }
    }
}

impl PerformanceConfig {
    /// Per-tick time budget.
    pub fn frame_budget(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter level name.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
