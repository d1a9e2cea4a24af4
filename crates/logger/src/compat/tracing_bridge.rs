//! Bridge from `tracing` into the facade

use crate::{CallSite, Category, Logger, Mode, Result};
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that forwards events to the facade.
pub struct TracingBridge<S> {
    logger: Logger,
    _phantom: std::marker::PhantomData<S>,
}

impl<S> TracingBridge<S> {
    /// Create a new tracing bridge.
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S> Layer<S> for TracingBridge<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !Mode::current().is_active() {
            return;
        }

        let category = map_level(*event.metadata().level());

        // Collect the message and fields
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        // tracing metadata is 'static, so the call site maps directly
        let metadata = event.metadata();
        let site = CallSite::new(
            metadata.file().unwrap_or("unknown"),
            metadata.target(),
            metadata.line().unwrap_or(0),
        );

        self.logger.emit(category, &[&visitor.message], " ", site);
    }
}

/// Map tracing levels to categories.
fn map_level(level: tracing::Level) -> Category {
    match level {
        tracing::Level::ERROR | tracing::Level::WARN => Category::Error,
        tracing::Level::INFO => Category::Info,
        tracing::Level::DEBUG | tracing::Level::TRACE => Category::Debug,
    }
}

/// Visitor to extract the message from tracing fields
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    // Field visit order is not guaranteed; the message goes up front, other
    // fields append as key=value
    fn set_message(&mut self, rendered: String) {
        if self.message.is_empty() {
            self.message = rendered;
        } else {
            self.message = format!("{rendered} {}", self.message);
        }
    }

    fn push_field(&mut self, field: &tracing::field::Field, value: impl std::fmt::Display) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut self.message, "{}={}", field.name(), value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.set_message(value.to_string());
        } else {
            self.push_field(field, value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.set_message(format!("{value:?}"));
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push_field(field, value);
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push_field(field, value);
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.push_field(field, value);
    }
}

/// Initialize tracing to forward events to the facade.
///
/// Installs a global subscriber consisting of just the bridge layer. For a
/// scoped setup (for example in tests) compose [`TracingBridge`] into a
/// registry directly.
///
/// # Errors
///
/// Returns an error if a global tracing subscriber was already set.
pub fn init_tracing_bridge(logger: Logger) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;

    let subscriber = tracing_subscriber::registry().with(TracingBridge::new(logger));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
