//! The typed collection.
//!
//! [`TypedCollection<T>`] stores members of the [`ItemSet`] `T` in insertion
//! order. Every insertion path (seeding, `append`, `extend`, concatenation)
//! funnels into one commit step that enforces uniqueness, so seeds are held to
//! the same rules as later appends.
//!
//! | Input | Type check | Methods |
//! |-------|------------|---------|
//! | `impl Into<T>` | compile time | `append`, `extend*`, `from_items*` |
//! | [`Candidate`] | [`ItemSet::admit`] at runtime | `append_candidate`, `extend_candidates*`, `from_candidates*` |

use alloc::vec::Vec;
use core::iter::Rev;
use core::slice;

use crate::candidate::Candidate;
use crate::config::{CollectionConfig, OnViolation};
use crate::error::{CollectionError, Result};
use crate::report::ExtendReport;
use crate::set::ItemSet;

/// Forward iterator over a collection, in insertion order.
pub type Iter<'a, T> = slice::Iter<'a, T>;

/// Iterator over a collection in reverse insertion order.
pub type Reversed<'a, T> = Rev<slice::Iter<'a, T>>;

/// Ordered collection restricted to the member types of `T`.
///
/// # Example
///
/// ```
/// use tola_coll::{TypedCollection, CollectionError};
///
/// let mut coll = TypedCollection::<i32>::new();
/// coll.append(26)?;
/// assert_eq!(coll.append(26), Err(CollectionError::ItemAlreadyExists));
/// assert_eq!(coll.len(), 1);
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypedCollection<T> {
    items: Vec<T>,
    config: CollectionConfig,
}

impl<T: ItemSet> TypedCollection<T> {
    /// Empty unique collection.
    pub const fn new() -> Self {
        Self::with_config(CollectionConfig::UNIQUE)
    }

    /// Empty collection that allows equal items.
    pub const fn non_unique() -> Self {
        Self::with_config(CollectionConfig::NON_UNIQUE)
    }

    pub const fn with_config(config: CollectionConfig) -> Self {
        Self { items: Vec::new(), config }
    }

    /// Unique collection seeded from `items`.
    ///
    /// Fails on the first seed that is a duplicate.
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        Self::from_items_with(items, CollectionConfig::UNIQUE)
    }

    pub fn from_items_with<I>(items: I, config: CollectionConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let mut coll = Self::with_config(config);
        coll.extend(items)?;
        Ok(coll)
    }

    /// Seed from `items`, skipping rejected ones.
    pub fn from_items_lenient<I>(items: I, config: CollectionConfig) -> (Self, ExtendReport)
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let mut coll = Self::with_config(config);
        let report = coll.extend_lenient(items);
        (coll, report)
    }

    /// Seed from runtime-typed values.
    ///
    /// Fails on the first candidate of a non-permitted type or the first duplicate.
    pub fn from_candidates<I>(candidates: I, config: CollectionConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut coll = Self::with_config(config);
        coll.extend_candidates(candidates)?;
        Ok(coll)
    }

    pub fn from_candidates_lenient<I>(candidates: I, config: CollectionConfig) -> (Self, ExtendReport)
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut coll = Self::with_config(config);
        let report = coll.extend_candidates_lenient(candidates);
        (coll, report)
    }

    pub const fn config(&self) -> CollectionConfig {
        self.config
    }

    pub const fn is_unique(&self) -> bool {
        self.config.is_unique()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate in reverse insertion order.
    pub fn reversed(&self) -> Reversed<'_, T> {
        self.items.iter().rev()
    }

    /// Linear equality search.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    // =========================================================================
    // Single-item inserts
    // =========================================================================

    /// Append `item` to the end.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ItemAlreadyExists`] if the collection is unique and
    /// holds an equal item. Nothing is added in that case.
    pub fn append(&mut self, item: impl Into<T>) -> Result<()> {
        self.commit(item.into())
    }

    /// Append a runtime-typed value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidItemType`] if the candidate's type is not
    /// permitted, [`CollectionError::ItemAlreadyExists`] as in [`append`](Self::append).
    pub fn append_candidate(&mut self, candidate: Candidate) -> Result<()> {
        let item = T::admit(candidate).map_err(|rejected| CollectionError::InvalidItemType {
            found: rejected.type_name(),
            permitted: T::PERMITTED,
        })?;
        self.commit(item)
    }

    fn commit(&mut self, item: T) -> Result<()> {
        if self.config.is_unique() && self.items.contains(&item) {
            return Err(CollectionError::ItemAlreadyExists);
        }
        self.items.push(item);
        Ok(())
    }

    // =========================================================================
    // Bulk inserts
    // =========================================================================

    /// Append every item in order, stopping at the first error.
    ///
    /// Not transactional: items appended before the failing one stay.
    pub fn extend<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        for item in items {
            self.append(item)?;
        }
        Ok(())
    }

    /// Append every acceptable item, recording the rest in the report.
    pub fn extend_lenient<I>(&mut self, items: I) -> ExtendReport
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let mut report = ExtendReport::default();
        for (index, item) in items.into_iter().enumerate() {
            let outcome = self.append(item);
            report.record(index, outcome);
        }
        report
    }

    /// [`extend`](Self::extend) or [`extend_lenient`](Self::extend_lenient), chosen by `mode`.
    pub fn extend_with<I>(&mut self, items: I, mode: OnViolation) -> Result<ExtendReport>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        match mode {
            OnViolation::Skip => Ok(self.extend_lenient(items)),
            OnViolation::Abort => {
                let mut report = ExtendReport::default();
                for item in items {
                    self.append(item)?;
                    report.record_appended();
                }
                Ok(report)
            }
        }
    }

    /// Append every candidate in order, stopping at the first error.
    pub fn extend_candidates<I>(&mut self, candidates: I) -> Result<()>
    where
        I: IntoIterator<Item = Candidate>,
    {
        for candidate in candidates {
            self.append_candidate(candidate)?;
        }
        Ok(())
    }

    pub fn extend_candidates_lenient<I>(&mut self, candidates: I) -> ExtendReport
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut report = ExtendReport::default();
        for (index, candidate) in candidates.into_iter().enumerate() {
            let outcome = self.append_candidate(candidate);
            report.record(index, outcome);
        }
        report
    }

    pub fn extend_candidates_with<I>(&mut self, candidates: I, mode: OnViolation) -> Result<ExtendReport>
    where
        I: IntoIterator<Item = Candidate>,
    {
        match mode {
            OnViolation::Skip => Ok(self.extend_candidates_lenient(candidates)),
            OnViolation::Abort => {
                let mut report = ExtendReport::default();
                for candidate in candidates {
                    self.append_candidate(candidate)?;
                    report.record_appended();
                }
                Ok(report)
            }
        }
    }
}

impl<T: ItemSet> Default for TypedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ItemSet> TryFrom<Vec<T>> for TypedCollection<T> {
    type Error = CollectionError;

    /// Unique collection holding `items`, in order.
    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::from_items(items)
    }
}

impl<T> AsRef<[T]> for TypedCollection<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for TypedCollection<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TypedCollection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
