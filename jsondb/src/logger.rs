//! Pluggable logging capability for the driver
//!
//! The driver never talks to a logging backend directly. It holds an
//! `Arc<dyn Logger>` supplied through [`Options`](crate::Options); the default
//! is a [`TracingLogger`] at [`LogLevel::Info`], which forwards to the
//! `tracing` macros so output goes wherever the host's subscriber sends it.

use std::fmt;
use std::str::FromStr;

/// Severity levels, from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Lowercase name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}' (expected fatal, error, warn, info, debug or trace)")]
pub struct ParseLogLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

/// Logging capability with one method per severity level
pub trait Logger: Send + Sync {
    fn fatal(&self, message: &str);
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn trace(&self, message: &str);

    /// Dispatch to the method matching `level`
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Fatal => self.fatal(message),
            LogLevel::Error => self.error(message),
            LogLevel::Warn => self.warn(message),
            LogLevel::Info => self.info(message),
            LogLevel::Debug => self.debug(message),
            LogLevel::Trace => self.trace(message),
        }
    }
}

/// Console logger backed by `tracing`
///
/// Messages more verbose than `level` are dropped before they reach
/// `tracing`, so the driver's own threshold applies even when the installed
/// subscriber is more permissive.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message at `level` passes this logger's threshold
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for TracingLogger {
    fn fatal(&self, message: &str) {
        if self.enabled(LogLevel::Fatal) {
            tracing::error!(fatal = true, "{}", message);
        }
    }

    fn error(&self, message: &str) {
        if self.enabled(LogLevel::Error) {
            tracing::error!("{}", message);
        }
    }

    fn warn(&self, message: &str) {
        if self.enabled(LogLevel::Warn) {
            tracing::warn!("{}", message);
        }
    }

    fn info(&self, message: &str) {
        if self.enabled(LogLevel::Info) {
            tracing::info!("{}", message);
        }
    }

    fn debug(&self, message: &str) {
        if self.enabled(LogLevel::Debug) {
            tracing::debug!("{}", message);
        }
    }

    fn trace(&self, message: &str) {
        if self.enabled(LogLevel::Trace) {
            tracing::trace!("{}", message);
        }
    }
}

/// Logger that discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn fatal(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
    fn trace(&self, _message: &str) {}
}
