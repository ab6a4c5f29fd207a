use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Ident};

use crate::common::{check_duplicates, display_type, is_union_enum, single_payload};

/// #[derive(ItemSet)] picks one of two shapes:
///
/// 1. Enum whose every variant wraps one value -> union of the payload types
/// 2. Any other struct or enum -> single-type set of `Self`
///
/// Both shapes also get `Self + TypedCollection<Self>`.
pub fn expand_derive_item_set(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ItemSet cannot be derived for generic types\n\
             \n\
             A permitted-type set must name concrete types.",
        ));
    }

    let ident = &input.ident;
    let body = match &input.data {
        Data::Enum(data) if is_union_enum(data) => expand_union(ident, data)?,
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "ItemSet cannot be derived for unions",
            ));
        }
        _ => expand_single(ident),
    };
    let item_plus_collection = expand_item_plus_collection(ident);

    Ok(quote! {
        #body
        #item_plus_collection
    })
}

fn expand_single(ident: &Ident) -> TokenStream2 {
    let name = ident.to_string();

    quote! {
        impl ::tola_coll::ItemSet for #ident {
            const PERMITTED: &'static [&'static str] = &[#name];

            fn admit(
                candidate: ::tola_coll::Candidate,
            ) -> ::core::result::Result<Self, ::tola_coll::Candidate> {
                candidate.downcast::<Self>()
            }
        }
    }
}

fn expand_union(ident: &Ident, data: &DataEnum) -> syn::Result<TokenStream2> {
    let (variants, payloads): (Vec<_>, Vec<_>) = data
        .variants
        .iter()
        .filter_map(|variant| single_payload(variant).map(|ty| (&variant.ident, ty)))
        .unzip();

    check_duplicates(&payloads)?;

    let names: Vec<String> = payloads.iter().map(|ty| display_type(ty)).collect();

    Ok(quote! {
        impl ::tola_coll::ItemSet for #ident {
            const PERMITTED: &'static [&'static str] = &[#(#names),*];

            fn admit(
                candidate: ::tola_coll::Candidate,
            ) -> ::core::result::Result<Self, ::tola_coll::Candidate> {
                // Already a member
                let candidate = match candidate.downcast::<Self>() {
                    ::core::result::Result::Ok(item) => return ::core::result::Result::Ok(item),
                    ::core::result::Result::Err(candidate) => candidate,
                };
                #(
                    let candidate = match candidate.downcast::<#payloads>() {
                        ::core::result::Result::Ok(value) => {
                            return ::core::result::Result::Ok(Self::#variants(value));
                        }
                        ::core::result::Result::Err(candidate) => candidate,
                    };
                )*
                ::core::result::Result::Err(candidate)
            }
        }

        #(
            impl ::core::convert::From<#payloads> for #ident {
                fn from(value: #payloads) -> Self {
                    Self::#variants(value)
                }
            }
        )*
    })
}

/// `item + collection` for the derived type.
fn expand_item_plus_collection(ident: &Ident) -> TokenStream2 {
    quote! {
        impl ::core::ops::Add<::tola_coll::TypedCollection<#ident>> for #ident {
            type Output = ::tola_coll::Result<::tola_coll::TypedCollection<#ident>>;

            fn add(self, rhs: ::tola_coll::TypedCollection<#ident>) -> Self::Output {
                rhs + self
            }
        }
    }
}
