//! Process-wide facade instance used by the category macros

use crate::error::{Error, Result};
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide facade.
///
/// May be called at most once, before the first macro emit; later calls
/// return [`Error::AlreadyInitialized`]. If never called, the macros fall
/// back to the stdout-backed [`Logger::default`].
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL.set(logger).map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide facade.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}
