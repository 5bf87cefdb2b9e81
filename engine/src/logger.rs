use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Debug,
}

#[derive(Clone, Debug)]
enum LogTarget {
    Stdout,
    Buffer(Arc<Mutex<Vec<String>>>),
    Discard,
}

/// Line logger handed explicitly to the components that report progress.
#[derive(Clone, Debug)]
pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
    target: LogTarget,
}

impl Logger {
    pub fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self {
            prefix,
            verbose,
            target: LogTarget::Stdout,
        }
    }

    /// Keeps every emitted line in memory; read them back with [`Logger::lines`].
    pub fn buffered(prefix: Option<String>, verbose: bool) -> Self {
        Self {
            prefix,
            verbose,
            target: LogTarget::Buffer(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn silent() -> Self {
        Self {
            prefix: None,
            verbose: false,
            target: LogTarget::Discard,
        }
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        match self.target {
            LogTarget::Discard => false,
            _ => level == LogLevel::Info || self.verbose,
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let formatted = if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        };

        match &self.target {
            LogTarget::Stdout => println!("{}", formatted),
            LogTarget::Buffer(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(formatted);
                }
            }
            LogTarget::Discard => {}
        }
    }

    /// Lines captured by a buffered logger. Other targets return nothing.
    pub fn lines(&self) -> Vec<String> {
        match &self.target {
            LogTarget::Buffer(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::silent()
    }
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        if $logger.is_enabled($crate::logger::LogLevel::Debug) {
            $logger.log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
        }
    };
}
