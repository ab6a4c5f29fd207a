//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(ItemSet)]` | on struct/enum | Declare a permitted-type set |

pub mod item_set;

pub use item_set::expand_derive_item_set;
