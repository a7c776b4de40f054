use chrono::Local;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// Oldest entries are dropped past this many
const MAX_LOGS: usize = 1000;

// Thread-safe log storage
static LOGS: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

// Current console log level
static LOG_LEVEL: Lazy<Arc<Mutex<LogLevel>>> =
    Lazy::new(|| Arc::new(Mutex::new(LogLevel::Warning)));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Map the CLI verbosity flags to a level; `debug` wins over `verbose`.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            LogLevel::Debug
        } else if verbose {
            LogLevel::Info
        } else {
            LogLevel::Warning
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Warning
    }
}

/// Record a message and echo it to the console if it meets the current level.
///
/// Every message is buffered regardless of level so callers can inspect
/// diagnostics after the fact with [`get_logs`].
pub fn log(level: LogLevel, message: &str) {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    let formatted = format!("[{}] {:<5} {}", timestamp, level.tag(), message);

    if let Ok(mut logs) = LOGS.lock() {
        if logs.len() >= MAX_LOGS {
            logs.pop_front();
        }
        logs.push_back(formatted.clone());
    }

    if level >= get_log_level() {
        // Diagnostics stay off stdout so reports can be piped
        eprintln!("{}", formatted);
    }
}

pub fn get_logs() -> Vec<String> {
    if let Ok(logs) = LOGS.lock() {
        logs.iter().cloned().collect()
    } else {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        vec![format!("[{}] ERROR Error accessing logs", timestamp)]
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
