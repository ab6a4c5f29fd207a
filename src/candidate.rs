//! Runtime-typed values offered to a collection.
//!
//! A [`Candidate`] carries a value whose concrete type is only known at
//! runtime, together with that type's name for diagnostics. Collections
//! accept candidates through `append_candidate` / `extend_candidates` and
//! check them against their [`ItemSet`](crate::ItemSet).

use alloc::boxed::Box;
use core::any::{Any, type_name};
use core::fmt;

/// A boxed value of any `'static` type, tagged with its type name.
pub struct Candidate {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Candidate {
    /// Box `value` as a candidate.
    pub fn new<V: Any>(value: V) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<V>(),
        }
    }

    /// Name of the wrapped value's type, as reported by [`core::any::type_name`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped value is a `V`.
    pub fn is<V: Any>(&self) -> bool {
        self.value.is::<V>()
    }

    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Take the wrapped value out as a `V`, or get the candidate back unchanged.
    pub fn downcast<V: Any>(self) -> Result<V, Self> {
        let Self { value, type_name } = self;
        match value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, type_name }),
        }
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Build a `Vec<Candidate>` from values of mixed types.
///
/// # Example
///
/// ```
/// use tola_coll::candidates;
///
/// let values = candidates![1, 2, 3, "This is a string", 5, 26];
/// assert_eq!(values.len(), 6);
/// assert!(values[3].is::<&str>());
/// ```
#[macro_export]
macro_rules! candidates {
    ($($value:expr),* $(,)?) => {
        $crate::__private::vec![$($crate::Candidate::new($value)),*]
    };
}
