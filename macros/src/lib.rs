//! Procedural macros for tola-coll typed collections
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(ItemSet)]` | struct/enum | Declare the permitted types of a collection |
//!
//! ## Example
//!
//! ```ignore
//! // Single-type set: only `Point` is permitted
//! #[derive(Debug, Clone, PartialEq, ItemSet)]
//! struct Point { x: i32, y: i32 }
//!
//! // Union set: `i32` and `String` are permitted
//! #[derive(Debug, Clone, PartialEq, ItemSet)]
//! enum Scalar { Int(i32), Text(String) }
//!
//! let mut coll = TypedCollection::<Scalar>::new();
//! coll.append(26)?;
//! coll.append_candidate(Candidate::new(String::from("Once")))?;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to implement the `ItemSet` trait.
///
/// - On an enum whose every variant wraps exactly one value, the permitted
///   types are the wrapped types. Also generates `From<Payload>` per variant.
///   Two variants wrapping the same type are rejected.
/// - On any other struct or enum, the only permitted type is the type itself.
///
/// Either way, `item + collection` becomes available for the derived type.
///
/// # Usage
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, ItemSet)]
/// enum Scalar {
///     Int(i32),
///     Text(String),
/// }
///
/// assert_eq!(Scalar::PERMITTED, &["i32", "String"]);
/// ```
#[proc_macro_derive(ItemSet)]
pub fn derive_item_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_item_set(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
