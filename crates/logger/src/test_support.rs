//! Test support utilities
//!
//! In-memory console and sink implementations for asserting on exactly what
//! the facade emitted. Only available when the `test-support` feature is
//! enabled.

use crate::{Console, Sink, SinkHandle};
use std::sync::{Arc, Mutex};

/// Console that captures all printed text in memory.
#[derive(Debug, Clone, Default)]
pub struct CaptureConsole {
    output: Arc<Mutex<String>>,
}

impl CaptureConsole {
    /// Create an empty capture console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far, byte for byte.
    pub fn output(&self) -> String {
        self.output.lock().unwrap().clone()
    }

    /// Check whether the captured text contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.output.lock().unwrap().contains(text)
    }

    /// Discard captured text.
    pub fn clear(&self) {
        self.output.lock().unwrap().clear();
    }
}

impl Console for CaptureConsole {
    fn print(&self, text: &str) {
        if let Ok(mut output) = self.output.lock() {
            output.push_str(text);
        }
    }

    fn println(&self, text: &str) {
        if let Ok(mut output) = self.output.lock() {
            output.push_str(text);
            output.push('\n');
        }
    }
}

/// Sink that captures every write together with its routing handle.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    writes: Arc<Mutex<Vec<(SinkHandle, String)>>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, in order, with the handle each routed under.
    pub fn writes(&self) -> Vec<(SinkHandle, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// Just the written strings, in order.
    pub fn messages(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Check whether any write contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .any(|(_, message)| message.contains(text))
    }

    /// Discard captured writes.
    pub fn clear(&self) {
        self.writes.lock().unwrap().clear();
    }
}

impl Sink for CaptureSink {
    fn write(&self, handle: SinkHandle, message: &str) {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push((handle, message.to_string()));
        }
    }
}
