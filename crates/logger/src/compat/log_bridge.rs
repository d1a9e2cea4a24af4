//! Bridge from the `log` crate into the facade

use crate::{CallSite, Category, Logger, Mode, Result};
use log::{Log, Metadata, Record as LogRecord};

/// Wrapper implementing the log crate's `Log` trait over the facade.
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    /// Create a new log bridge.
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        Mode::current().is_active()
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let category = map_level(record.level());
        let message = record.args().to_string();

        // log targets and file paths are not always 'static
        let function: &'static str = Box::leak(record.target().to_string().into_boxed_str());
        let file: &'static str = record
            .file_static()
            .unwrap_or_else(|| match record.file() {
                Some(file) => Box::leak(file.to_string().into_boxed_str()),
                None => "unknown",
            });
        let site = CallSite::new(file, function, record.line().unwrap_or(0));

        self.logger.emit(category, &[&message], " ", site);
    }

    fn flush(&self) {}
}

/// Map log levels to categories. The Error category doubles as the warning
/// channel; it carries the warning glyph.
fn map_level(level: log::Level) -> Category {
    match level {
        log::Level::Error | log::Level::Warn => Category::Error,
        log::Level::Info => Category::Info,
        log::Level::Debug | log::Level::Trace => Category::Debug,
    }
}

/// Initialize the `log` crate to route through the facade.
///
/// Captures all logs emitted via `log` macros. The `log` max level is set
/// from the compile-time mode, so in inactive builds every `log` call is
/// filtered before it reaches the bridge.
///
/// # Errors
///
/// Returns an error if a `log` logger was already installed.
pub fn init_log_bridge(logger: Logger) -> Result<()> {
    // log::set_logger requires 'static
    let bridge = Box::leak(Box::new(LogBridge::new(logger)));
    log::set_logger(bridge)?;

    log::set_max_level(if Mode::current().is_active() {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Off
    });
    Ok(())
}
