//! Compile-time build-mode gate

/// Whether logging is compiled in at all.
///
/// The mode is resolved once at compile time and is not runtime-toggleable.
/// Debug builds are [`Active`](Mode::Active); release builds are
/// [`Inactive`](Mode::Inactive) and every emit degenerates to a no-op. The
/// `force-active` and `force-inactive` features override the default in
/// either direction (`force-inactive` wins when both are set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Emits format and write normally
    Active,
    /// Every emit is a no-op with zero observable output
    Inactive,
}

impl Mode {
    /// The mode this crate was compiled with.
    #[inline(always)]
    pub const fn current() -> Self {
        if cfg!(feature = "force-inactive") {
            Mode::Inactive
        } else if cfg!(feature = "force-active") || cfg!(debug_assertions) {
            Mode::Active
        } else {
            Mode::Inactive
        }
    }

    /// True when emits produce output.
    #[inline(always)]
    pub const fn is_active(self) -> bool {
        matches!(self, Mode::Active)
    }
}
