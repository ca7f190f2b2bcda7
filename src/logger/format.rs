//! Dispatch log format module
//!
//! One entry per handled request, written as either:
//! - `text`: `[time] METHOD /path -> Module.Controllers.XController::method 200 (123us)`
//! - `json`: one JSON object per line

use chrono::{DateTime, Local};
use serde::Serialize;

/// Everything recorded about one dispatched request
#[derive(Debug, Clone, Serialize)]
pub struct DispatchLogEntry {
    pub time: DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    pub path: String,
    /// Callback descriptor actually dispatched (after default route fallback)
    pub callback: Vec<String>,
    /// 200 on success, otherwise the error record's status
    pub status: u16,
    /// Error message for failed dispatches
    pub message: Option<String>,
    pub elapsed_us: u64,
}

impl DispatchLogEntry {
    /// Create a new entry stamped with the current time
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            time: Local::now(),
            method: method.into(),
            path: path.into(),
            callback: Vec::new(),
            status: 200,
            message: None,
            elapsed_us: 0,
        }
    }

    /// Format as `json`, anything else falls back to the text line
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_text(),
        }
    }

    fn format_text(&self) -> String {
        let target = if self.callback.is_empty() {
            "-".to_string()
        } else {
            self.callback.join("/")
        };
        let mut line = format!(
            "[{}] {} {} -> {} {} ({}us)",
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            target,
            self.status,
            self.elapsed_us,
        );
        if let Some(message) = &self.message {
            line.push_str(&format!(" \"{message}\""));
        }
        line
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"error":"failed to serialize log entry: {e}"}}"#)
        })
    }
}
