//! Platform sink collaborator and the opaque per-category handle

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Opaque identifier routing a record to one category-scoped sink.
///
/// Handles are pairwise distinct across the six categories; downstream
/// consumers can use the name to filter by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SinkHandle(&'static str);

impl SinkHandle {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Category name this handle routes under.
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// External logging backend, consumed through a single write operation.
///
/// The facade does not define the backend's storage, retention, or query
/// behavior; implementations must accept a formatted string and a routing
/// handle, and must be safe for concurrent use.
pub trait Sink: Send + Sync {
    /// Write one formatted record under the given handle.
    fn write(&self, handle: SinkHandle, message: &str);
}

/// Sink that prints each record to standard output, one line break after
/// every write. The default platform sink.
#[derive(Debug)]
pub struct StdoutSink {
    stdout: Mutex<io::Stdout>,
}

impl StdoutSink {
    /// Create a stdout sink.
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn write(&self, _handle: SinkHandle, message: &str) {
        if let Ok(mut stdout) = self.stdout.lock() {
            let _ = writeln!(stdout, "{message}");
            let _ = stdout.flush();
        }
    }
}
