//! Logger module
//!
//! Provides logging utilities for the mock server including:
//! - Startup banner with emulator access hints
//! - Per-request access lines through an injectable sink
//! - Error, warning and shutdown messages

mod format;
pub mod writer;

pub use format::AccessLogEntry;
pub use writer::{LogSink, StdoutSink};

use std::net::SocketAddr;

/// Print the operator-facing startup banner
pub fn log_server_start(addr: &SocketAddr) {
    for line in startup_banner(addr) {
        println!("{line}");
    }
    println!();
}

fn startup_banner(addr: &SocketAddr) -> Vec<String> {
    let port = addr.port();
    let rule = "=".repeat(60);
    vec![
        rule.clone(),
        "Mock Face API Server started".to_string(),
        format!("Listening on: {addr}"),
        rule.clone(),
        String::new(),
        "Local test URLs:".to_string(),
        format!("  http://127.0.0.1:{port}/"),
        format!("  http://localhost:{port}/"),
        String::new(),
        "Android emulator access:".to_string(),
        format!("  Option 1 (direct):      http://10.0.2.2:{port}/"),
        "  Option 2 (adb reverse):".to_string(),
        format!("    1. Run: adb reverse tcp:{port} tcp:{port}"),
        format!("    2. Use in the app: http://localhost:{port}/"),
        String::new(),
        "Press Ctrl+C to stop the server".to_string(),
        rule,
    ]
}

/// Write a formatted access line to `sink`
pub fn log_access(sink: &dyn LogSink, entry: &AccessLogEntry) {
    sink.write_access(&entry.format());
}

pub fn log_connection_error(
    sink: &dyn LogSink,
    peer_addr: &SocketAddr,
    err: &impl std::fmt::Debug,
) {
    sink.write_error(&format!("[ERROR] Failed to serve connection from {peer_addr}: {err:?}"));
}

pub fn log_accept_error(sink: &dyn LogSink, err: &std::io::Error) {
    sink.write_error(&format!("[ERROR] Failed to accept connection: {err}"));
}

pub fn log_request_warning(sink: &dyn LogSink, message: &str) {
    sink.write_error(&format!("[WARN] {message}"));
}

/// Process-level errors outside any request
pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_usage_error(err: &impl std::fmt::Display, program: &str) {
    eprintln!("Error: {err}");
    eprintln!("Usage: {program} [port]");
}

pub fn log_shutdown() {
    println!("\n[SHUTDOWN] Stop signal received, closing listener");
}

pub fn log_stopped() {
    println!("[SHUTDOWN] Server stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_hints() {
        let addr: SocketAddr = "0.0.0.0:8123".parse().unwrap();
        let banner = startup_banner(&addr).join("\n");
        assert!(banner.contains("Listening on: 0.0.0.0:8123"));
        assert!(banner.contains("http://127.0.0.1:8123/"));
        assert!(banner.contains("http://localhost:8123/"));
        assert!(banner.contains("http://10.0.2.2:8123/"));
        assert!(banner.contains("adb reverse tcp:8123 tcp:8123"));
    }

    #[test]
    fn test_log_access_goes_to_sink() {
        let sink = writer::MemorySink::default();
        let entry = AccessLogEntry::new("GET".to_string(), "/".to_string());
        log_access(&sink, &entry);
        let lines = sink.access_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("GET / - 200 OK"));
        assert!(sink.error_lines().is_empty());
    }

    #[test]
    fn test_errors_go_to_sink() {
        let sink = writer::MemorySink::default();
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        log_connection_error(&sink, &peer, &"reset by peer");
        log_request_warning(&sink, "short body");

        let errors = sink.error_lines();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("[ERROR] Failed to serve connection from 127.0.0.1:40000"));
        assert_eq!(errors[1], "[WARN] short body");
        assert!(sink.access_lines().is_empty());
    }
}
