//! `log` facade hook feeding the message store
//!
//! [`ConsoleLogger`] is installed as the global logger. Every enabled
//! record is ingested into the [`SharedStore`] and then forwarded unchanged
//! to the logger that would otherwise have been installed, so the rest of
//! the program keeps seeing the same output.

use crate::severity::Severity;
use crate::shared::SharedStore;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Targets that are forwarded but never ingested
///
/// The console crates log from inside render passes; ingesting those
/// records would re-dirty the console on every frame.
pub const CONSOLE_TARGETS: [&str; 2] = ["xr_console_core", "xr_console_render"];

pub struct ConsoleLogger {
    store: SharedStore,
    previous: Option<Box<dyn Log>>,
    level: LevelFilter,
    ignored_targets: Vec<String>,
}

impl ConsoleLogger {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            previous: None,
            level: LevelFilter::Trace,
            ignored_targets: CONSOLE_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Chain to the sink that was in place before interception
    pub fn with_previous(mut self, previous: Box<dyn Log>) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Forward records under `target` without capturing them
    pub fn ignore_target(mut self, target: impl Into<String>) -> Self {
        self.ignored_targets.push(target.into());
        self
    }

    /// Install as the global logger
    ///
    /// With a previous sink the facade's max level is left at `Trace`, so
    /// the sink keeps filtering by its own level.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let level = if self.previous.is_some() {
            LevelFilter::Trace
        } else {
            self.level
        };
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn captures(&self, target: &str) -> bool {
        !self
            .ignored_targets
            .iter()
            .any(|ignored| {
                target
                    .strip_prefix(ignored.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
            })
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            || self
                .previous
                .as_ref()
                .is_some_and(|previous| previous.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        // the console level only limits capture, forwarding is untouched
        if record.level() <= self.level && self.captures(record.target()) {
            let content = record.args().to_string();
            self.store
                .ingest(Severity::from(record.level()), [content.as_str()]);
        }

        if let Some(previous) = &self.previous {
            if previous.enabled(record.metadata()) {
                previous.log(record);
            }
        }
    }

    fn flush(&self) {
        if let Some(previous) = &self.previous {
            previous.flush();
        }
    }
}
