//! Derive macros for `fieldguard`.
//!
//! This crate generates the discovery code behind `#[derive(Guarded)]`. It:
//! - reads `#[guard(...)]` field attributes
//! - emits a `GuardedRecord` implementation that registers tagged fields
//! - emits a `Debug` implementation that masks guarded fields
//!
//! It does **not** define tags or the sanitize/validate rules. Those live in
//! the main `fieldguard` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_struct::derive_struct;
use generics::with_predicates;
use transform::DeriveContext;

/// Derives `fieldguard::GuardedRecord` (and a masking `Debug`) for structs.
///
/// # Container Attributes
///
/// - `#[guard(skip_debug)]` - Opt out of `Debug` impl generation. Use this when
///   the type already derives `Debug` or needs a custom one.
///
/// # Field Attributes
///
/// - **No annotation**: the field is not discovered; both passes ignore it.
///
/// - `#[guard(Tag)]`: the field is discovered under `Tag`, one of `TaxId`,
///   `PaymentCard`, `Phone` or `Numeric`. The field type must implement
///   `GuardedValue` (`String`, `Option<String>`, `Cow<str>`, `Box<_>`).
///
/// - `#[guard]`: the field is a nested `GuardedRecord`; its fields are
///   discovered with names prefixed by `field.`.
///
/// A field carries at most one `#[guard]` attribute. Tagging or walking a
/// scalar primitive is a compile error. Tuple struct fields are reported by
/// index. Enums and unions are rejected.
///
/// # Additional Generated Impls
///
/// - `Debug`: guarded fields are formatted as `"[GUARDED]"`, other fields with
///   their own `Debug`.
#[proc_macro_derive(Guarded, attributes(guard))]
pub fn derive_guarded(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the fieldguard crate root.
///
/// Handles crate renaming (e.g., `guard = { package = "fieldguard", ... }`).
/// Inside `fieldguard` itself the path resolves through its
/// `extern crate self as fieldguard` alias, which also covers its doctests and
/// examples.
fn crate_root() -> TokenStream {
    match crate_name("fieldguard") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::fieldguard },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { skip_debug } = parse_container_options(&attrs)?;

    let mut ctx = DeriveContext::new(&generics);
    let output = match data {
        Data::Struct(data) => derive_struct(&ident, data, &mut ctx)?,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`Guarded` cannot be derived for enums; move the tagged fields into a struct",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Guarded` cannot be derived for unions",
            ));
        }
    };

    let crate_root = crate_root();
    let collect_body = &output.collect_body;
    let debug_body = &output.debug_body;

    let record_generics = with_predicates(generics.clone(), &ctx.record_predicates);
    let (impl_generics, ty_generics, where_clause) = record_generics.split_for_impl();

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        let debug_generics = with_predicates(generics.clone(), &ctx.debug_predicates);
        let (impl_generics, ty_generics, where_clause) = debug_generics.split_for_impl();
        quote! {
            impl #impl_generics ::core::fmt::Debug for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_body
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #crate_root::GuardedRecord for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn collect_fields<'__guard>(
                &'__guard mut self,
                fields: &mut #crate_root::FieldSet<'__guard>,
            ) {
                #collect_body
            }
        }

        #debug_impl
    })
}
