//! Collection error types.

use core::fmt;

use thiserror::Error;

/// Result type for collection operations.
pub type Result<T, E = CollectionError> = core::result::Result<T, E>;

/// Rejected mutations and incompatible concatenations.
///
/// A rejected item is never committed, so no variant leaves a collection in
/// a state that breaks its type or uniqueness invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CollectionError {
    /// The value's type is outside the collection's permitted set.
    #[error("object of type '{found}' is not an instance of permitted type(s) ({})", TypeList(.permitted))]
    InvalidItemType {
        /// Type name of the rejected value.
        found: &'static str,
        /// Permitted type names of the collection.
        permitted: &'static [&'static str],
    },

    /// The collection is unique and already holds an equal item.
    #[error("object passed already exists in collection")]
    ItemAlreadyExists,

    /// The right-hand operand of a concatenation is neither a permitted item
    /// nor a collection of the same concrete type.
    #[error(
        "object of type '{operand}' is neither an instance of permitted type(s) ({}) nor a '{collection}'",
        TypeList(.permitted)
    )]
    IncompatibleOperand {
        /// Type name of the right-hand operand.
        operand: &'static str,
        /// Type name of the left-hand collection.
        collection: &'static str,
        /// Permitted type names of the collection.
        permitted: &'static [&'static str],
    },
}

impl CollectionError {
    /// `true` for [`CollectionError::InvalidItemType`].
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidItemType { .. })
    }

    /// `true` for [`CollectionError::ItemAlreadyExists`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::ItemAlreadyExists)
    }
}

/// Displays type names as a comma-separated list.
#[derive(Debug, Clone, Copy)]
pub struct TypeList<'a>(pub &'a [&'a str]);

impl fmt::Display for TypeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
