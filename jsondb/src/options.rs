//! Construction-time configuration for [`Driver`](crate::Driver)

use crate::logger::{LogLevel, Logger, TracingLogger};
use std::fmt;
use std::sync::Arc;

/// Options passed to [`Driver::open`](crate::Driver::open)
#[derive(Clone)]
pub struct Options {
    pub(crate) logger: Arc<dyn Logger>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `logger` instead of the default console logger
    pub fn with_logger(self, logger: impl Logger + 'static) -> Self {
        self.with_shared_logger(Arc::new(logger))
    }

    /// Use an already shared logger handle
    pub fn with_shared_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Shorthand for a [`TracingLogger`] at `level`
    pub fn with_log_level(self, level: LogLevel) -> Self {
        self.with_logger(TracingLogger::new(level))
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            logger: Arc::new(TracingLogger::new(LogLevel::Info)),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options").finish_non_exhaustive()
    }
}
