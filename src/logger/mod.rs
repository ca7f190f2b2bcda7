//! Logger module
//!
//! Provides logging utilities for the dispatch server including:
//! - Server lifecycle logging
//! - Per-request dispatch logging in text or JSON form
//! - Error, warning and debug logging with a level filter
//! - File-based logging support

mod format;
mod level;
pub mod writer;

pub use format::DispatchLogEntry;
pub use level::LogLevel;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config.logging.level.parse().unwrap_or_else(|e: String| {
        eprintln!("[WARN] {e}, falling back to info");
        LogLevel::Info
    });
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: LogLevel) -> bool {
    writer::get().map_or(LogLevel::default(), writer::LogWriter::level).enables(level)
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, components: usize) {
    write_info("======================================");
    write_info("Dispatch server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    write_info(&format!("Registered components: {components}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&format!(
        "Default callback: [{}]",
        config.dispatch.default_callback.join(", ")
    ));
    write_info("======================================\n");
}

pub fn log_server_stop() {
    write_info("[Shutdown] Stopped accepting connections");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[Connection] Accepted from: {peer_addr}"));
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_info(message: &str) {
    if enabled(LogLevel::Info) {
        write_info(&format!("[INFO] {message}"));
    }
}

pub fn log_debug(message: &str) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

/// Log a dispatched request
pub fn log_dispatch(entry: &DispatchLogEntry, format: &str) {
    write_access(&entry.format(format));
}
