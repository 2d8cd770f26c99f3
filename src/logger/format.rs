//! Access log format module
//!
//! One line per handled request:
//! `[2026-10-19 10:00:00] POST /face/v1.0/detect - 200 OK (received 5120 bytes, returned 2 faces)`

use chrono::Local;
use hyper::StatusCode;

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request target, path plus query
    pub target: String,
    /// Response status code
    pub status: StatusCode,
    /// Request body size in bytes (read and discarded)
    pub body_bytes: usize,
    /// Number of faces returned, detection responses only
    pub faces: Option<usize>,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(method: String, target: String) -> Self {
        Self {
            time: Local::now(),
            method,
            target,
            status: StatusCode::OK,
            body_bytes: 0,
            faces: None,
        }
    }

    pub fn format(&self) -> String {
        let mut line = format!(
            "[{}] {} {} - {} {}",
            self.time.format("%Y-%m-%d %H:%M:%S"),
            self.method,
            self.target,
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or(""),
        );

        let mut details = Vec::new();
        if self.body_bytes > 0 {
            details.push(format!("received {} bytes", self.body_bytes));
        }
        if let Some(count) = self.faces {
            details.push(format!("returned {count} faces"));
        }
        if !details.is_empty() {
            line.push_str(&format!(" ({})", details.join(", ")));
        }

        line
    }
}
