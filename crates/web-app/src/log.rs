use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

static REPOSITORY: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);
static LOGGER: Logger = Logger;

/// Persistent store for the most recent log entries.
#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    pub level: String,
    pub message: String,
}

impl Entry {
    fn new(record: &Record) -> Self {
        Self {
            time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            level: record.level().to_string(),
            message: record.args().to_string(),
        }
    }
}

/// Installs a logger that mirrors every record to the browser console and
/// appends it to the given repository.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut current) = REPOSITORY.lock() {
        *current = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        match record.level() {
            Level::Error => gloo_console::error!(message),
            Level::Warn => gloo_console::warn!(message),
            Level::Info => gloo_console::info!(message),
            Level::Debug | Level::Trace => gloo_console::debug!(message),
        }

        if let Ok(current) = REPOSITORY.lock() {
            if let Some(repository) = current.as_ref() {
                let _ = repository.lock().unwrap().write_entry(Entry::new(record));
            }
        }
    }

    fn flush(&self) {}
}
