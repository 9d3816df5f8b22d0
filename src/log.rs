//! Leveled file logging for dev-home.
//!
//! Log levels:
//! - ERROR: Failures that leave the store unusable
//! - WARN: Recoverable problems (storage reads/writes that failed)
//! - INFO: Provider lifecycle (mount, unmount)
//! - DEBUG: Every dispatched action and emitted command
//! - TRACE: Full state snapshots after each transition
//!
//! Debug mode can be enabled with `--debug` or `DEV_HOME_DEBUG=1`;
//! `DEV_HOME_DEBUG=trace` also records TRACE lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::OnceLock;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Environment variable that turns on debug logging.
pub const DEBUG_ENV_VAR: &str = "DEV_HOME_DEBUG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Level requested by a `DEV_HOME_DEBUG` value, if it names one.
fn env_level(value: &str) -> Option<LogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "debug" => Some(LogLevel::Debug),
        "trace" => Some(LogLevel::Trace),
        _ => None,
    }
}

fn resolve_level(debug_flag: bool, env_value: Option<&str>) -> LogLevel {
    match env_value.and_then(env_level) {
        Some(level) => level,
        None if debug_flag => LogLevel::Debug,
        None => LogLevel::Info,
    }
}

/// Initialize logging to ~/.dev-home/dev-home.log
pub fn init_with_debug(debug: bool) {
    let env_value = std::env::var(DEBUG_ENV_VAR).ok();
    let level = resolve_level(debug, env_value.as_deref());

    DEBUG_ENABLED.store(level >= LogLevel::Debug, Ordering::SeqCst);
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);

    if let Some(dir) = dirs::home_dir().map(|h| h.join(".dev-home")) {
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("dev-home.log");
        let _ = std::fs::write(&path, "");
        LOG_PATH.set(path).ok();
    }
}

pub fn is_debug() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

pub fn get_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Log a message at the specified level. A no-op until `init_with_debug` has run.
pub fn log_at(level: LogLevel, msg: &str) {
    if level > get_level() {
        return;
    }

    if let Some(path) = LOG_PATH.get() {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] [{}] {}", timestamp, level.as_str(), msg);
        }
    }
}

pub fn log(msg: &str) {
    log_at(LogLevel::Info, msg);
}

pub fn error(msg: &str) {
    log_at(LogLevel::Error, msg);
}

pub fn warn(msg: &str) {
    log_at(LogLevel::Warn, msg);
}

pub fn debug(msg: &str) {
    log_at(LogLevel::Debug, msg);
}

pub fn trace(msg: &str) {
    log_at(LogLevel::Trace, msg);
}

#[macro_export]
macro_rules! hlog {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! hlog_error {
    ($($arg:tt)*) => {
        $crate::log::error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! hlog_warn {
    ($($arg:tt)*) => {
        $crate::log::warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! hlog_debug {
    ($($arg:tt)*) => {
        $crate::log::debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! hlog_trace {
    ($($arg:tt)*) => {
        $crate::log::trace(&format!($($arg)*))
    };
}
