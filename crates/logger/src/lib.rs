//! Categorized console logging facade
//!
//! Emits diagnostic messages under one of six fixed categories, decorated
//! with the caller's file/function/line and routed to a category-scoped
//! platform sink. Entirely compiled out of release builds: in
//! [`Mode::Inactive`] every entry point is a no-op.
//!
//! ```
//! quill_logger::info!("server listening on", 8080);
//! quill_logger::network!(sep = " -> ", "GET /health", 200);
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod callsite;
mod category;
mod console;
mod error;
mod global;
mod logger;
mod macros;
mod mode;
mod record;
mod sink;

#[cfg(any(feature = "log-compat", feature = "tracing-compat"))]
pub mod compat;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use callsite::CallSite;
pub use category::Category;
pub use console::{Console, StdoutConsole};
pub use error::{Error, Result};
pub use global::{init, logger};
pub use logger::Logger;
pub use mode::Mode;
pub use record::{DIVIDER, Record};
pub use sink::{Sink, SinkHandle, StdoutSink};
