//! The closed set of log categories and their routing table

use crate::sink::SinkHandle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity/domain tag attached to every emitted record.
///
/// The set is closed: categories cannot be registered at runtime. Each
/// variant carries two immutable attributes, a display prefix shown on the
/// console and a [`SinkHandle`] used to route the record to the platform
/// sink, so consumers can filter by category downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Developer chatter
    Debug,
    /// Informational events
    Info,
    /// Recoverable errors and warnings
    Error,
    /// Unrecoverable errors
    Fatal,
    /// Network traffic and connectivity
    Network,
    /// Storage and query activity
    Database,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Debug,
        Category::Info,
        Category::Error,
        Category::Fatal,
        Category::Network,
        Category::Database,
    ];

    /// Human label printed in brackets ahead of each message.
    pub const fn prefix(self) -> &'static str {
        match self {
            Category::Debug => "💬Debug",
            Category::Info => "💡Info",
            Category::Error => "⚠️Error",
            Category::Fatal => "🔥Fatal",
            Category::Network => "📡Network",
            Category::Database => "💾Database",
        }
    }

    /// Handle of the platform sink this category routes to.
    pub const fn handle(self) -> SinkHandle {
        SinkHandle::new(match self {
            Category::Debug => "Debug",
            Category::Info => "Info",
            Category::Error => "Error",
            Category::Fatal => "Fatal",
            Category::Network => "Network",
            Category::Database => "Database",
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handle().name())
    }
}
