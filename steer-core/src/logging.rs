//! Append-only channel log files.
//!
//! Entries go to one file per channel under the configured directory,
//! either a single rolling file (`error.log`) or dated files
//! (`error-2026-08-23.log`). Every write is mirrored onto the `tracing`
//! subscriber so structured log collection keeps working; file write
//! failures are reported there instead of bubbling into dispatch.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;

/// Environment switch gating command audit entries.
pub const LOG_COMMANDS_VAR: &str = "LOG.COMMANDS";

/// Environment switch gating controller-reported error entries.
pub const LOG_ERRORS_VAR: &str = "LOG.ERRORS";

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log channel; each channel writes to its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogChannel {
    Info,
    Warning,
    Error,
    Debug,
}

impl LogChannel {
    /// File stem for this channel.
    pub fn stem(self) -> &'static str {
        match self {
            LogChannel::Info => "info",
            LogChannel::Warning => "warning",
            LogChannel::Error => "error",
            LogChannel::Debug => "debug",
        }
    }
}

/// File layout: one file per channel, or one file per channel per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFileStyle {
    #[default]
    Single,
    Daily,
}

impl LogFileStyle {
    /// Parses a configuration value; anything but `daily` maps to
    /// [`LogFileStyle::Single`].
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("daily") {
            LogFileStyle::Daily
        } else {
            LogFileStyle::Single
        }
    }
}

/// Synchronous file logger.
///
/// The log directory is created on the first write, so constructing a
/// logger never touches the filesystem.
#[derive(Debug, Clone)]
pub struct Logger {
    dir: PathBuf,
    style: LogFileStyle,
    timestamp_format: String,
}

impl Logger {
    /// Logger writing single-file channels under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Logger {
            dir: dir.into(),
            style: LogFileStyle::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_style(mut self, style: LogFileStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file a channel entry would land in today.
    pub fn file_path(&self, channel: LogChannel) -> PathBuf {
        let name = match self.style {
            LogFileStyle::Single => format!("{}.log", channel.stem()),
            LogFileStyle::Daily => format!(
                "{}-{}.log",
                channel.stem(),
                chrono::Local::now().format("%Y-%m-%d")
            ),
        };
        self.dir.join(name)
    }

    pub fn info(&self, message: &str) {
        self.log(LogChannel::Info, message, None);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogChannel::Warning, message, None);
    }

    pub fn error(&self, message: &str) {
        self.log(LogChannel::Error, message, None);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogChannel::Debug, message, None);
    }

    pub fn info_with(&self, message: &str, context: &Value) {
        self.log(LogChannel::Info, message, Some(context));
    }

    pub fn error_with(&self, message: &str, context: &Value) {
        self.log(LogChannel::Error, message, Some(context));
    }

    /// Appends one entry and mirrors it onto `tracing`.
    pub fn log(&self, channel: LogChannel, message: &str, context: Option<&Value>) {
        match channel {
            LogChannel::Info => tracing::info!("{message}"),
            LogChannel::Warning => tracing::warn!("{message}"),
            LogChannel::Error => tracing::error!("{message}"),
            LogChannel::Debug => tracing::debug!("{message}"),
        }
        if let Err(err) = self.append(channel, message, context) {
            tracing::warn!(
                "log write to {} failed: {err}",
                self.file_path(channel).display()
            );
        }
    }

    fn append(&self, channel: LogChannel, message: &str, context: Option<&Value>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let timestamp = chrono::Local::now().format(&self.timestamp_format);
        let line = match context {
            Some(ctx) => format!("[{timestamp}] {message} - {ctx}\n"),
            None => format!("[{timestamp}] {message}\n"),
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_path(channel))?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Joins entry segments the way multi-part log lines are stored.
    pub fn join_tabbed(parts: &[&str]) -> String {
        parts.join("\t")
    }
}
