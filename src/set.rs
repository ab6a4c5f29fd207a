//! Permitted-type sets.
//!
//! An [`ItemSet`] is the element type of a [`TypedCollection`] and, at the
//! same time, the declaration of which types the collection accepts.
//!
//! - Std scalars (`i32`, `String`, `bool`, ...) are single-type sets.
//! - `#[derive(ItemSet)]` on a struct makes a single-type set of that struct.
//! - `#[derive(ItemSet)]` on an enum whose variants each wrap one value makes a
//!   set of all wrapped types; [`item_set!`](crate::item_set) writes such an enum
//!   from a list of type names.

use alloc::string::String;
use core::ops::Add;

use crate::candidate::Candidate;
use crate::collection::TypedCollection;
use crate::error::Result;

/// A closed set of permitted member types.
///
/// `PartialEq` drives the uniqueness check and [`TypedCollection::contains`].
pub trait ItemSet: PartialEq + Sized + 'static {
    /// Names of the permitted types, in declaration order.
    const PERMITTED: &'static [&'static str];

    /// Convert a runtime-typed value into a member.
    ///
    /// Returns the candidate untouched when it holds none of the permitted
    /// types (nor `Self`).
    fn admit(candidate: Candidate) -> core::result::Result<Self, Candidate>;
}

macro_rules! impl_single_item_set {
    (@impl $ty:ty, $name:expr) => {
        impl ItemSet for $ty {
            const PERMITTED: &'static [&'static str] = &[$name];

            fn admit(candidate: Candidate) -> core::result::Result<Self, Candidate> {
                candidate.downcast::<$ty>()
            }
        }

        // `item + collection`
        impl Add<TypedCollection<$ty>> for $ty {
            type Output = Result<TypedCollection<$ty>>;

            fn add(self, rhs: TypedCollection<$ty>) -> Self::Output {
                rhs + self
            }
        }
    };
    ($($ty:ty),* $(,)?) => {
        $( impl_single_item_set!(@impl $ty, stringify!($ty)); )*
    };
}

impl_single_item_set!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String, (),
);

// Named the way `type_name` reports it
impl_single_item_set!(@impl &'static str, "&str");

/// Declare an enum [`ItemSet`] from a list of type names.
///
/// Each type becomes a variant named after it in upper camel case, and the
/// enum derives `Debug`, `Clone`, `PartialEq` and [`ItemSet`].
///
/// # Example
///
/// ```
/// use tola_coll::{item_set, TypedCollection, ItemSet};
///
/// item_set! {
///     /// Integers or text.
///     pub enum Scalar { i32, String }
/// }
///
/// assert_eq!(Scalar::PERMITTED, &["i32", "String"]);
///
/// let mut coll = TypedCollection::<Scalar>::new();
/// coll.append(26)?;
/// coll.append(String::from("Once"))?;
/// assert!(coll.contains(&Scalar::I32(26)));
/// # Ok::<(), tola_coll::CollectionError>(())
/// ```
#[macro_export]
macro_rules! item_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($ty:ident),+ $(,)? }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, $crate::ItemSet)]
            $vis enum $name {
                $( [<$ty:camel>]($ty), )+
            }
        }
    };
}
