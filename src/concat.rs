//! Concatenation.
//!
//! Every form builds a new collection with the left operand's
//! [`CollectionConfig`](crate::CollectionConfig) and replays all elements
//! through its append path, left operand first. Duplicates across the two
//! operands therefore fail a unique concatenation with
//! [`CollectionError::ItemAlreadyExists`]. A failed concatenation returns only
//! the error; the partly built result is dropped. Operands are never modified.
//!
//! Since only the left operand's uniqueness applies, `+` is not symmetric:
//! a unique left operand rejects a non-unique right operand holding a
//! duplicate, while the swapped expression succeeds. For `item + coll` the
//! collection supplies the configuration.
//!
//! | Expression | Output |
//! |------------|--------|
//! | `coll + coll`, `&coll + &coll` | left items, then right items |
//! | `coll + item`, `item + coll` | left items, then `item` |
//! | `coll + candidate`, `candidate + coll` | as above, checked at runtime |
//!
//! Mismatched collection types do not compile with the typed operators:
//!
//! ```compile_fail
//! use tola_coll::TypedCollection;
//!
//! let ints = TypedCollection::<i32>::new();
//! let strs = TypedCollection::<String>::new();
//! let _ = ints + strs;
//! ```
//!
//! With a [`Candidate`] they fail at runtime:
//!
//! ```
//! use tola_coll::{Candidate, CollectionError, TypedCollection};
//!
//! let ints = TypedCollection::<i32>::from_items([1, 2, 3])?;
//! let strs = TypedCollection::<String>::new();
//! let err = (ints + Candidate::new(strs)).unwrap_err();
//! assert!(matches!(err, CollectionError::IncompatibleOperand { .. }));
//! # Ok::<(), CollectionError>(())
//! ```

use core::any::type_name;
use core::ops::Add;

use crate::candidate::Candidate;
use crate::collection::TypedCollection;
use crate::config::CollectionConfig;
use crate::error::{CollectionError, Result};
use crate::set::ItemSet;

impl<T: ItemSet> TypedCollection<T> {
    fn replay<L, R>(config: CollectionConfig, left: L, right: R) -> Result<Self>
    where
        L: IntoIterator<Item = T>,
        R: IntoIterator<Item = T>,
    {
        let mut combined = Self::with_config(config);
        combined.extend(left)?;
        combined.extend(right)?;
        Ok(combined)
    }
}

impl<T: ItemSet + Clone> TypedCollection<T> {
    /// Left items followed by `other`'s items.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        Self::replay(self.config(), self.iter().cloned(), other.iter().cloned())
    }

    /// Left items followed by `item`.
    pub fn concat_item(&self, item: impl Into<T>) -> Result<Self> {
        Self::replay(self.config(), self.iter().cloned(), Some(item.into()))
    }

    /// Concatenate with a runtime-typed operand.
    ///
    /// The candidate may hold a `TypedCollection<T>` or a permitted item.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IncompatibleOperand`] for any other value,
    /// [`CollectionError::ItemAlreadyExists`] on a cross-operand duplicate.
    pub fn concat_candidate(&self, candidate: Candidate) -> Result<Self> {
        let candidate = match candidate.downcast::<Self>() {
            Ok(other) => return self.concat(&other),
            Err(candidate) => candidate,
        };
        match T::admit(candidate) {
            Ok(item) => self.concat_item(item),
            Err(rejected) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(operand = rejected.type_name(), "rejected concatenation operand");
                Err(CollectionError::IncompatibleOperand {
                    operand: rejected.type_name(),
                    collection: type_name::<Self>(),
                    permitted: T::PERMITTED,
                })
            }
        }
    }
}

// coll + coll
impl<T: ItemSet> Add for TypedCollection<T> {
    type Output = Result<Self>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::replay(self.config(), self, rhs)
    }
}

// &coll + &coll
impl<T: ItemSet + Clone> Add<&TypedCollection<T>> for &TypedCollection<T> {
    type Output = Result<TypedCollection<T>>;

    fn add(self, rhs: &TypedCollection<T>) -> Self::Output {
        self.concat(rhs)
    }
}

// coll + item
impl<T: ItemSet> Add<T> for TypedCollection<T> {
    type Output = Result<Self>;

    fn add(self, rhs: T) -> Self::Output {
        Self::replay(self.config(), self, Some(rhs))
    }
}

// coll + candidate
impl<T: ItemSet + Clone> Add<Candidate> for TypedCollection<T> {
    type Output = Result<Self>;

    fn add(self, rhs: Candidate) -> Self::Output {
        self.concat_candidate(rhs)
    }
}

// candidate + coll
impl<T: ItemSet + Clone> Add<TypedCollection<T>> for Candidate {
    type Output = Result<TypedCollection<T>>;

    fn add(self, rhs: TypedCollection<T>) -> Self::Output {
        // A boxed collection is the left operand; a bare item goes last
        match self.downcast::<TypedCollection<T>>() {
            Ok(left) => left.concat(&rhs),
            Err(item) => rhs.concat_candidate(item),
        }
    }
}
