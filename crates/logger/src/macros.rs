//! Category entry-point macros
//!
//! One macro per category, all with identical shape: any number of
//! `Display` items, optionally preceded by `sep = <expr>` to override the
//! `" "` default joiner. The call site (file, enclosing function, line) is
//! captured automatically at the call expression.

/// Capture the [`CallSite`](crate::CallSite) of the enclosing expression.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new(file!(), $crate::__function_path!(), line!())
    };
}

/// Path of the enclosing function. Implementation detail of [`callsite!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let full = name_of(__here);
        full.strip_suffix("::__here").unwrap_or(full)
    }};
}

/// Emit items under [`Category::Debug`](crate::Category::Debug) through the
/// process-wide facade.
///
/// ```
/// quill_logger::debug!("loaded", 3, "widgets");
/// quill_logger::debug!(sep = ", ", "a", "b");
/// ```
#[macro_export]
macro_rules! debug {
    (sep = $sep:expr $(, $item:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Category::Debug,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $crate::callsite!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::debug!(sep = " " $(, $item)*)
    };
}

/// Emit items under [`Category::Info`](crate::Category::Info) through the
/// process-wide facade.
#[macro_export]
macro_rules! info {
    (sep = $sep:expr $(, $item:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Category::Info,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $crate::callsite!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::info!(sep = " " $(, $item)*)
    };
}

/// Emit items under [`Category::Error`](crate::Category::Error) through the
/// process-wide facade.
#[macro_export]
macro_rules! error {
    (sep = $sep:expr $(, $item:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Category::Error,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $crate::callsite!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::error!(sep = " " $(, $item)*)
    };
}

/// Emit items under [`Category::Fatal`](crate::Category::Fatal) through the
/// process-wide facade.
#[macro_export]
macro_rules! fatal {
    (sep = $sep:expr $(, $item:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Category::Fatal,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $crate::callsite!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::fatal!(sep = " " $(, $item)*)
    };
}

/// Emit items under [`Category::Network`](crate::Category::Network) through
/// the process-wide facade.
#[macro_export]
macro_rules! network {
    (sep = $sep:expr $(, $item:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Category::Network,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $crate::callsite!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::network!(sep = " " $(, $item)*)
    };
}

/// Emit items under [`Category::Database`](crate::Category::Database)
/// through the process-wide facade.
#[macro_export]
macro_rules! database {
    (sep = $sep:expr $(, $item:expr)* $(,)?) => {
        $crate::logger().emit(
            $crate::Category::Database,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            $sep,
            $crate::callsite!(),
        )
    };
    ($($item:expr),* $(,)?) => {
        $crate::database!(sep = " " $(, $item)*)
    };
}
