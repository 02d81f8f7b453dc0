//! Configuration for method dispatch.

/// Controls how a [`Dispatcher`](crate::Dispatcher) accepts commands.
///
/// The default is fully permissive: definitions are matched by argument
/// count only and numeric arguments that converted lossily are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Require each fixed-position argument to match its declared kind.
    pub strict_types: bool,

    /// Refuse commands whose argument string held lossy numbers.
    pub reject_lossy_numbers: bool,
}

impl DispatchConfig {
    /// Creates the default, count-only configuration.
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Creates a configuration with kind checking and lossy-number
    /// rejection both enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_types: true,
            reject_lossy_numbers: true,
        }
    }

    /// Builder method to enable/disable kind checking.
    #[must_use]
    pub const fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    /// Builder method to enable/disable lossy-number rejection.
    #[must_use]
    pub const fn with_reject_lossy_numbers(mut self, reject: bool) -> Self {
        self.reject_lossy_numbers = reject;
        self
    }
}
