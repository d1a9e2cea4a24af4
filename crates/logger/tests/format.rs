//! Formatting and routing tests against capture collaborators

#[cfg(all(feature = "test-support", debug_assertions, not(feature = "force-inactive")))]
mod tests {
    use quill_logger::test_support::{CaptureConsole, CaptureSink};
    use quill_logger::*;
    use std::collections::HashSet;
    use std::fmt;
    use std::sync::Arc;

    fn capture_logger() -> (Logger, CaptureConsole, CaptureSink) {
        let console = CaptureConsole::new();
        let sink = CaptureSink::new();
        let logger = Logger::new(Arc::new(console.clone()), Arc::new(sink.clone()));
        (logger, console, sink)
    }

    fn site() -> CallSite {
        CallSite::new("/a/b/Widget.rs", "run()", 42)
    }

    #[test]
    fn empty_items_still_emit_the_decorated_envelope() {
        let (logger, console, sink) = capture_logger();

        logger.emit(Category::Info, &[], " ", site());

        // Leading blank line, bracketed prefix, trailing space; then the
        // closing blank line from the final print
        assert_eq!(console.output(), "\n[💡Info] \n");

        let writes = sink.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, Category::Info.handle());
        assert_eq!(
            writes[0].1,
            format!("[Widget:#42:run()]\n>> \n{DIVIDER}")
        );
    }

    #[test]
    fn body_joins_items_in_input_order() {
        let (logger, _console, sink) = capture_logger();

        logger.emit(Category::Debug, &[&1, &"two", &3.5], " ", site());
        assert!(sink.contains(">> 1 two 3.5\n"));
    }

    #[test]
    fn changing_the_separator_changes_only_the_joiners() {
        let (logger, _console, sink) = capture_logger();

        logger.emit(Category::Debug, &[&"a", &"b", &"c"], " | ", site());
        assert!(sink.contains(">> a | b | c\n"));

        sink.clear();
        logger.emit(Category::Debug, &[&"a", &"b", &"c"], "", site());
        assert!(sink.contains(">> abc\n"));
    }

    #[test]
    fn stringification_is_total() {
        struct Widget;
        impl fmt::Display for Widget {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("<widget>")
            }
        }

        let (logger, _console, sink) = capture_logger();
        let nested = format!("{:?}", vec![Some(1), None]);
        logger.emit(Category::Database, &[&Widget, &nested], " ", site());
        assert!(sink.contains(">> <widget> [Some(1), None]\n"));
    }

    #[test]
    fn identical_inputs_render_byte_identical_output() {
        let (logger, console, sink) = capture_logger();

        logger.emit(Category::Network, &[&"GET", &"/health"], " ", site());
        let first_console = console.output();
        let first_writes = sink.writes();

        console.clear();
        sink.clear();
        logger.emit(Category::Network, &[&"GET", &"/health"], " ", site());

        assert_eq!(console.output(), first_console);
        assert_eq!(sink.writes(), first_writes);
    }

    #[test]
    fn named_entry_points_fix_their_category() {
        let (logger, console, sink) = capture_logger();

        logger.debug(&[&"x"], " ", site());
        logger.info(&[&"x"], " ", site());
        logger.error(&[&"x"], " ", site());
        logger.fatal(&[&"x"], " ", site());
        logger.network(&[&"x"], " ", site());
        logger.database(&[&"x"], " ", site());

        let handles: Vec<_> = sink.writes().into_iter().map(|(handle, _)| handle).collect();
        let expected: Vec<_> = Category::ALL.iter().map(|c| c.handle()).collect();
        assert_eq!(handles, expected);

        for category in Category::ALL {
            assert!(console.output().contains(&format!("[{}] ", category.prefix())));
        }
    }

    #[test]
    fn prefixes_and_handles_are_pairwise_distinct() {
        let prefixes: HashSet<_> = Category::ALL.iter().map(|c| c.prefix()).collect();
        let handles: HashSet<_> = Category::ALL.iter().map(|c| c.handle()).collect();
        assert_eq!(prefixes.len(), 6);
        assert_eq!(handles.len(), 6);
    }

    #[test]
    fn categories_serialize_by_name() {
        let json = serde_json::to_string(&Category::Network).unwrap();
        assert_eq!(json, "\"Network\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Network);
    }
}
