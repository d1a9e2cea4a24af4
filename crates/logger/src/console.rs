//! Console collaborator: print text with or without a trailing line break

use std::io::{self, Write};
use std::sync::Mutex;

/// Minimal console interface the facade prints through.
///
/// Implementations must be safe for concurrent use; the facade itself holds
/// no state across calls.
pub trait Console: Send + Sync {
    /// Print text without a trailing line break.
    fn print(&self, text: &str);

    /// Print text followed by a line break.
    fn println(&self, text: &str);
}

/// Console backed by standard output.
#[derive(Debug)]
pub struct StdoutConsole {
    // Lock to prevent interleaving between concurrent callers
    stdout: Mutex<io::Stdout>,
}

impl StdoutConsole {
    /// Create a stdout console.
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(io::stdout()),
        }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdoutConsole {
    fn print(&self, text: &str) {
        if let Ok(mut stdout) = self.stdout.lock() {
            let _ = stdout.write_all(text.as_bytes());
            let _ = stdout.flush();
        }
    }

    fn println(&self, text: &str) {
        if let Ok(mut stdout) = self.stdout.lock() {
            let _ = writeln!(stdout, "{text}");
            let _ = stdout.flush();
        }
    }
}
