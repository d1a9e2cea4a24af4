//! The logging facade

use crate::{CallSite, Category, Console, Mode, Record, Sink, StdoutConsole, StdoutSink};
use std::fmt::Display;
use std::sync::Arc;

/// Categorized console logging facade.
///
/// Holds the two external collaborators (console and platform sink) behind
/// trait objects; everything else is immutable compiled-in state, so a
/// `Logger` may be shared freely across threads.
///
/// The six category methods are thin named entry points over
/// [`Logger::emit`]. Application code normally goes through the exported
/// macros instead ([`debug!`](crate::debug!), [`info!`](crate::info!), ...),
/// which capture the call site automatically.
#[derive(Clone)]
pub struct Logger {
    console: Arc<dyn Console>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a facade over the given console and sink.
    pub fn new(console: Arc<dyn Console>, sink: Arc<dyn Sink>) -> Self {
        Self { console, sink }
    }

    /// Format and emit one record.
    ///
    /// Each item is stringified independently and the results are joined
    /// with `separator` in input order; an empty `items` produces an empty
    /// body. Fire-and-forget: formatting cannot fail and nothing is
    /// returned. In [`Mode::Inactive`] builds this is a no-op with no
    /// formatting work, no sink access, and no console output.
    pub fn emit(&self, category: Category, items: &[&dyn Display], separator: &str, site: CallSite) {
        // Compile-time gate first
        if !Mode::current().is_active() {
            return;
        }

        let message = items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator);
        let record = Record::new(category, message, site);

        self.console.print(&format!("\n[{}] ", category.prefix()));
        self.sink.write(category.handle(), &record.render());
        self.console.println("");
    }

    /// Emit under [`Category::Debug`].
    pub fn debug(&self, items: &[&dyn Display], separator: &str, site: CallSite) {
        self.emit(Category::Debug, items, separator, site);
    }

    /// Emit under [`Category::Info`].
    pub fn info(&self, items: &[&dyn Display], separator: &str, site: CallSite) {
        self.emit(Category::Info, items, separator, site);
    }

    /// Emit under [`Category::Error`].
    pub fn error(&self, items: &[&dyn Display], separator: &str, site: CallSite) {
        self.emit(Category::Error, items, separator, site);
    }

    /// Emit under [`Category::Fatal`].
    pub fn fatal(&self, items: &[&dyn Display], separator: &str, site: CallSite) {
        self.emit(Category::Fatal, items, separator, site);
    }

    /// Emit under [`Category::Network`].
    pub fn network(&self, items: &[&dyn Display], separator: &str, site: CallSite) {
        self.emit(Category::Network, items, separator, site);
    }

    /// Emit under [`Category::Database`].
    pub fn database(&self, items: &[&dyn Display], separator: &str, site: CallSite) {
        self.emit(Category::Database, items, separator, site);
    }
}

impl Default for Logger {
    /// Facade over standard output for both collaborators.
    fn default() -> Self {
        Self::new(Arc::new(StdoutConsole::new()), Arc::new(StdoutSink::new()))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
