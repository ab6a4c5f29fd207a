// Common utilities shared by the derive macros
//
// This module contains:
// - parse_utils: type rendering, duplicate detection, variant shapes

mod parse_utils;

pub use parse_utils::*;
