//! Caller location metadata

use serde::Serialize;

/// Where a log call originated: source file, enclosing function, line.
///
/// Captured automatically at the call expression by the category macros via
/// [`callsite!`](crate::callsite!); code that cannot use the macros (such as
/// the compat bridges) constructs one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Create a call site from explicit parts.
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Full source file path as captured.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Path of the enclosing function.
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Line number of the call expression.
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Base name of the source file: the last path segment, truncated at the
    /// first `.` (strips one or more extensions).
    pub fn short_file_name(&self) -> &'static str {
        let segment = self.file.rsplit(['/', '\\']).next().unwrap_or("");
        segment.split('.').next().unwrap_or("")
    }

    /// The location tag rendered into every sink payload:
    /// `[<shortFileName>:#<line>:<function>]`.
    pub fn location_tag(&self) -> String {
        format!("[{}:#{}:{}]", self.short_file_name(), self.line, self.function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_strips_directories_and_extensions() {
        let site = CallSite::new("/a/b/Widget.rs", "run()", 1);
        assert_eq!(site.short_file_name(), "Widget");

        // Only the part before the first dot survives
        let site = CallSite::new("Widget.helper.tmp", "run()", 1);
        assert_eq!(site.short_file_name(), "Widget");

        let site = CallSite::new("src\\lib.rs", "run()", 1);
        assert_eq!(site.short_file_name(), "lib");
    }

    #[test]
    fn short_name_without_extension_is_unchanged() {
        let site = CallSite::new("/usr/bin/justfile", "run()", 1);
        assert_eq!(site.short_file_name(), "justfile");
    }

    #[test]
    fn short_name_of_empty_path_is_empty() {
        let site = CallSite::new("", "run()", 1);
        assert_eq!(site.short_file_name(), "");
    }

    #[test]
    fn location_tag_format() {
        let site = CallSite::new("Widget.x", "run()", 42);
        assert_eq!(site.location_tag(), "[Widget:#42:run()]");
    }
}
