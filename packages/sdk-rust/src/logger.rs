//! Logging interface for the SDK
//!
//! The client only ever emits best-effort debug traces; the host
//! application decides where they go by injecting a [`Logger`].

use serde_json::Value;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Logger trait that can be implemented for custom logging behavior.
///
/// Every method takes a structured-fields value alongside the message.
/// Implementations must not panic; the client treats logging as fire and
/// forget and never lets it affect the call outcome.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, fields: &Value);
    fn info(&self, message: &str, fields: &Value);
    fn warn(&self, message: &str, fields: &Value);
    fn error(&self, message: &str, fields: &Value);
}

/// Console logger that prints to stdout/stderr
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    level: LogLevel,
    prefix: String,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            prefix: "[Bitvavo SDK]".to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn format_message(&self, level: LogLevel, message: &str, fields: &Value) -> String {
        let level_str = match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        if fields.is_null() {
            format!("{} {}: {}", self.prefix, level_str, message)
        } else {
            format!("{} {}: {} {}", self.prefix, level_str, message, fields)
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str, fields: &Value) {
        if self.should_log(LogLevel::Debug) {
            println!("{}", self.format_message(LogLevel::Debug, message, fields));
        }
    }

    fn info(&self, message: &str, fields: &Value) {
        if self.should_log(LogLevel::Info) {
            println!("{}", self.format_message(LogLevel::Info, message, fields));
        }
    }

    fn warn(&self, message: &str, fields: &Value) {
        if self.should_log(LogLevel::Warn) {
            eprintln!("{}", self.format_message(LogLevel::Warn, message, fields));
        }
    }

    fn error(&self, message: &str, fields: &Value) {
        if self.should_log(LogLevel::Error) {
            eprintln!("{}", self.format_message(LogLevel::Error, message, fields));
        }
    }
}

/// No-op logger that discards all log messages
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str, _fields: &Value) {}
    fn info(&self, _message: &str, _fields: &Value) {}
    fn warn(&self, _message: &str, _fields: &Value) {}
    fn error(&self, _message: &str, _fields: &Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_console_logger_filtering() {
        let logger = ConsoleLogger::new(LogLevel::Warn);
        assert!(!logger.should_log(LogLevel::Debug));
        assert!(!logger.should_log(LogLevel::Info));
        assert!(logger.should_log(LogLevel::Warn));
        assert!(logger.should_log(LogLevel::Error));
    }

    #[test]
    fn test_format_includes_fields() {
        let logger = ConsoleLogger::new(LogLevel::Debug);
        let formatted =
            logger.format_message(LogLevel::Debug, "api call", &json!({"path": "/time"}));
        assert!(formatted.contains("api call"));
        assert!(formatted.contains("/time"));
    }

    #[test]
    fn test_noop_logger() {
        let logger = NoopLogger;
        // Should not panic or do anything
        logger.debug("test", &Value::Null);
        logger.info("test", &Value::Null);
        logger.warn("test", &Value::Null);
        logger.error("test", &Value::Null);
    }
}
