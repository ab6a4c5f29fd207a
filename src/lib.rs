#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std support in thiserror and tracing
// - tracing: default, logs items skipped by lenient extends

//! # tola-coll
//!
//! Ordered collections whose members are restricted to a declared set of types.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Type Sets                                               |
//! |  - ItemSet (permitted types), Candidate (runtime-typed value)     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Collection Core                                         |
//! |  - TypedCollection: append, extend, iterate, contains             |
//! |  - CollectionConfig (uniqueness), ExtendReport (skipped items)    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Concatenation                                           |
//! |  - `+` between collections, items and candidates                  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### 1. Permitted Types
//! The permitted-type set is the collection's type parameter. A single type
//! (`TypedCollection<i32>`) permits exactly that type. An enum deriving
//! [`ItemSet`] whose variants each wrap one value permits every wrapped type:
//!
//! ```text
//! #[derive(ItemSet)] enum Scalar { Int(i32), Text(String) }
//!   -> PERMITTED = ["i32", "String"]
//!   -> From<i32> for Scalar, From<String> for Scalar
//! ```
//!
//! Typed inserts are checked by the compiler. Values whose type is only known
//! at runtime travel as a [`Candidate`] and are checked by [`ItemSet::admit`].
//!
//! ### 2. Uniqueness
//! Fixed per instance by [`CollectionConfig`]. Unique collections reject an
//! item equal to an existing one with [`CollectionError::ItemAlreadyExists`].
//!
//! ### 3. Bulk Inserts
//! `extend` stops at the first violation and keeps what it already added.
//! `extend_lenient` skips violations and returns them in an [`ExtendReport`].
//!
//! ## Quick Start
//!
//! ```
//! use tola_coll::prelude::*;
//!
//! type IntCollection = TypedCollection<i32>;
//!
//! let coll = IntCollection::from_items([1, 2, 3, 4, 5, 26])?;
//! let reversed: Vec<_> = coll.reversed().copied().collect();
//! assert_eq!(reversed, [26, 5, 4, 3, 2, 1]);
//!
//! let combined = (coll + IntCollection::from_items([6, 8])?)?;
//! assert_eq!(combined.as_slice(), &[1, 2, 3, 4, 5, 26, 6, 8]);
//!
//! // Runtime-typed values are checked on the way in
//! let mut dynamic = IntCollection::new();
//! let report = dynamic.extend_candidates_lenient(candidates![1, "two", 3]);
//! assert_eq!(dynamic.as_slice(), &[1, 3]);
//! assert_eq!(report.skipped()[0].index, 1);
//! # Ok::<(), tola_coll::CollectionError>(())
//! ```

// Allow `::tola_coll` to work inside the crate itself
extern crate self as tola_coll;

extern crate alloc;

// Re-export paste for item_set!
pub use paste;

// =============================================================================
// Layer 0: Type Sets
// =============================================================================
pub mod candidate;
pub mod set;

// =============================================================================
// Layer 1: Collection Core
// =============================================================================
pub mod collection;
pub mod config;
pub mod error;
pub mod report;

// =============================================================================
// Layer 2: Concatenation
// =============================================================================
pub mod concat;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use candidate::Candidate;
pub use collection::{Iter, Reversed, TypedCollection};
pub use config::{CollectionConfig, OnViolation};
pub use error::{CollectionError, Result, TypeList};
pub use report::{Diagnostic, ExtendReport, Skipped};
pub use set::ItemSet;

// Re-export proc-macros
pub use macros::ItemSet;

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}

/// Common items for typed collections.
pub mod prelude {
    pub use crate::candidate::Candidate;
    pub use crate::collection::TypedCollection;
    pub use crate::config::{CollectionConfig, OnViolation};
    pub use crate::error::CollectionError;
    pub use crate::report::ExtendReport;
    pub use crate::set::ItemSet;
    pub use macros::ItemSet;
    // Note: candidates! and item_set! are #[macro_export] so they're at crate root
    pub use crate::{candidates, item_set};
}
