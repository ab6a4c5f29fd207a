//! Collection configuration.

/// Per-instance settings, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionConfig {
    unique: bool,
}

impl CollectionConfig {
    /// Reject items equal to an existing one. This is the default.
    pub const UNIQUE: Self = Self { unique: true };

    /// Allow equal items.
    pub const NON_UNIQUE: Self = Self { unique: false };

    pub const fn new() -> Self {
        Self::UNIQUE
    }

    /// Set whether duplicate items are rejected.
    #[must_use]
    pub const fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub const fn is_unique(&self) -> bool {
        self.unique
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What a bulk insert does when an item is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnViolation {
    /// Return the first error. Items added before it stay added.
    #[default]
    Abort,
    /// Record the error in the [`ExtendReport`](crate::ExtendReport) and move on.
    Skip,
}

impl From<bool> for OnViolation {
    /// `true` means ignore errors.
    fn from(ignore_errors: bool) -> Self {
        if ignore_errors { Self::Skip } else { Self::Abort }
    }
}
