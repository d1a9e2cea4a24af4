//! Ephemeral log record, rendered once and discarded

use crate::{CallSite, Category};
use serde::Serialize;
use std::borrow::Cow;

/// Fixed-width divider closing every sink payload.
pub const DIVIDER: &str = "------------------------------";

/// A single log record, composed at call time from a category, the joined
/// message body, and the capturing call site.
///
/// Records have no lifecycle beyond the emitting call: the facade renders
/// the sink payload and drops the record.
#[derive(Debug, Clone, Serialize)]
pub struct Record<'a> {
    /// Category this record routes under
    pub category: Category,
    /// Message body, already joined with the caller's separator
    pub message: Cow<'a, str>,
    /// Where the call originated
    pub site: CallSite,
}

impl<'a> Record<'a> {
    /// Create a record from its parts.
    #[inline]
    pub fn new(category: Category, message: impl Into<Cow<'a, str>>, site: CallSite) -> Self {
        Self {
            category,
            message: message.into(),
            site,
        }
    }

    /// Render the string written to the category sink: location tag, the
    /// `>> `-prefixed body, and the divider line.
    pub fn render(&self) -> String {
        format!("{}\n>> {}\n{}", self.site.location_tag(), self.message, DIVIDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_is_thirty_dashes() {
        assert_eq!(DIVIDER.len(), 30);
        assert!(DIVIDER.bytes().all(|b| b == b'-'));
    }

    #[test]
    fn render_layout() {
        let site = CallSite::new("/a/Widget.rs", "run()", 42);
        let record = Record::new(Category::Info, "hello world", site);
        assert_eq!(
            record.render(),
            format!("[Widget:#42:run()]\n>> hello world\n{DIVIDER}")
        );
    }
}
