use serde::{Deserialize, Serialize};
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(LogLevel::Info) };
}

/// Console logger tagging every line with the component that wrote it
pub struct Logger;

impl Logger {
    pub fn init(level: LogLevel) {
        MIN_LEVEL.with(|min| min.set(level));
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    pub fn enabled(level: LogLevel) -> bool {
        MIN_LEVEL.with(|min| level >= min.get())
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }

        let line = format!("[{}] {}", component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}
