//! Outcomes of lenient bulk inserts.
//!
//! A lenient extend never fails. Every rejected item is recorded as a
//! [`Skipped`] entry so the caller can see exactly what was left out and why.
//! With the `tracing` feature each skip is also logged at `warn` level.

use alloc::vec::Vec;
use core::fmt;

use crate::error::CollectionError;

/// One rejected item of a bulk insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Position of the item in the input sequence.
    pub index: usize,
    /// Why the item was rejected.
    pub error: CollectionError,
}

impl Skipped {
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::from(&self.error)
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {}: {}", self.index, self.diagnostic())
    }
}

/// Human-facing notice for a skipped item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The item's type is not permitted.
    InvalidType {
        found: &'static str,
    },
    /// The collection is unique and the item is already present.
    Duplicate,
}

impl From<&CollectionError> for Diagnostic {
    fn from(error: &CollectionError) -> Self {
        match error {
            CollectionError::InvalidItemType { found, .. } => Self::InvalidType { found: *found },
            CollectionError::IncompatibleOperand { operand, .. } => Self::InvalidType { found: *operand },
            CollectionError::ItemAlreadyExists => Self::Duplicate,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { found } => write!(
                f,
                "item of type {found} is not valid in this collection and was not added"
            ),
            Self::Duplicate => f.write_str(
                "this collection has a unique constraint and the item passed already exists",
            ),
        }
    }
}

/// Summary of a bulk insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendReport {
    appended: usize,
    skipped: Vec<Skipped>,
}

impl ExtendReport {
    /// Number of items committed.
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// Rejected items, in input order.
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// `true` if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_skipped(self) -> Vec<Skipped> {
        self.skipped
    }

    /// Fold one append outcome into the report.
    pub(crate) fn record(&mut self, index: usize, outcome: Result<(), CollectionError>) {
        match outcome {
            Ok(()) => self.appended += 1,
            Err(error) => {
                let skipped = Skipped { index, error };
                #[cfg(feature = "tracing")]
                tracing::warn!(index, error = %skipped.error, "{}", skipped.diagnostic());
                self.skipped.push(skipped);
            }
        }
    }

    pub(crate) fn record_appended(&mut self) {
        self.appended += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_record_counts_and_skips() {
        let mut report = ExtendReport::default();
        report.record(0, Ok(()));
        report.record(1, Err(CollectionError::ItemAlreadyExists));
        report.record(2, Ok(()));

        assert_eq!(report.appended(), 2);
        assert!(!report.is_clean());
        assert_eq!(report.skipped().len(), 1);
        assert_eq!(report.skipped()[0].index, 1);
        assert_eq!(report.skipped()[0].diagnostic(), Diagnostic::Duplicate);
    }

    #[test]
    fn test_diagnostic_messages() {
        let skipped = Skipped {
            index: 3,
            error: CollectionError::InvalidItemType { found: "&str", permitted: &["i32"] },
        };
        assert_eq!(
            skipped.to_string(),
            "item 3: item of type &str is not valid in this collection and was not added"
        );
        assert_eq!(
            Diagnostic::Duplicate.to_string(),
            "this collection has a unique constraint and the item passed already exists"
        );
    }
}
