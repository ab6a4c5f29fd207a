//! Common parsing utilities
//!
//! Shared helpers for inspecting derive input.

use quote::ToTokens;
use syn::{DataEnum, Fields, Type, Variant};

// =============================================================================
// Type Names
// =============================================================================

/// Render a type the way it reads in source, without token spacing.
///
/// Spaces survive only between two words, so `Vec < u8 >` becomes `Vec<u8>`
/// and `& 'static str` becomes `&'static str`.
pub fn display_type(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let prev_word = out.chars().last().is_some_and(is_word_char);
            let next_word = chars.peek().copied().is_some_and(is_word_char);
            // Keep the space only between two words (`dyn Trait`, `'static str`)
            if prev_word && next_word {
                out.push(' ');
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// =============================================================================
// Duplicate Detection
// =============================================================================

/// Check for duplicate payload types in an enum item set
pub fn check_duplicates(types: &[&Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ty in types {
        let ty_str = display_type(ty);
        if !seen.insert(ty_str.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate permitted type `{}`\n\
                     \n\
                     Each type should wrap exactly one variant of an item set.\n\
                     A second variant would make `From<{}>` ambiguous.",
                    ty_str, ty_str
                ),
            ));
        }
    }
    Ok(())
}

// =============================================================================
// Variant Shape
// =============================================================================

/// The single unnamed field of a `Variant(T)` variant
pub fn single_payload(variant: &Variant) -> Option<&Type> {
    match &variant.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            fields.unnamed.first().map(|field| &field.ty)
        }
        _ => None,
    }
}

/// `true` if every variant wraps exactly one unnamed value
pub fn is_union_enum(data: &DataEnum) -> bool {
    !data.variants.is_empty() && data.variants.iter().all(|v| single_payload(v).is_some())
}
