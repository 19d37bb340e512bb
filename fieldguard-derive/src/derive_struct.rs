//! Struct-specific `GuardedRecord` derivation.
//!
//! This module generates the field registration body and the masked `Debug`
//! body for named, tuple and unit structs. Fields are reached through
//! `self.member` so registration borrows each field disjointly.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, Index, LitStr, Member, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{generate_field_collect, DeriveContext},
};

/// Placeholder printed by the generated `Debug` impl for guarded fields.
const MASK: &str = "[GUARDED]";

pub(crate) struct StructDeriveOutput {
    pub(crate) collect_body: TokenStream,
    pub(crate) debug_body: TokenStream,
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    ctx: &mut DeriveContext<'_>,
) -> Result<StructDeriveOutput> {
    let named = matches!(data.fields, Fields::Named(_));
    if matches!(data.fields, Fields::Unit) {
        return Ok(StructDeriveOutput {
            collect_body: quote! {},
            debug_body: quote! { f.write_str(stringify!(#name)) },
        });
    }

    let mut collects = Vec::new();
    let mut debug_fields = Vec::new();

    for (index, field) in data.fields.iter().enumerate() {
        let span = field.span();
        let (member, label) = match &field.ident {
            Some(ident) => (
                Member::Named(ident.clone()),
                LitStr::new(&ident.unraw().to_string(), ident.span()),
            ),
            None => (
                Member::Unnamed(Index {
                    index: u32::try_from(index)
                        .map_err(|_| syn::Error::new(span, "too many fields"))?,
                    span,
                }),
                LitStr::new(&index.to_string(), span),
            ),
        };

        let strategy = parse_field_strategy(&field.attrs)?;
        let access = quote_spanned! { span => &mut self.#member };
        if let Some(collect) =
            generate_field_collect(ctx, &field.ty, &access, &label, span, &strategy)?
        {
            collects.push(collect);
        }

        let shown = if strategy.is_guarded() {
            quote! { &#MASK }
        } else {
            quote_spanned! { span => &self.#member }
        };
        debug_fields.push(if named {
            quote! { debug.field(#label, #shown); }
        } else {
            quote! { debug.field(#shown); }
        });
    }

    let debug_builder = if named {
        quote! { f.debug_struct(stringify!(#name)) }
    } else {
        quote! { f.debug_tuple(stringify!(#name)) }
    };

    Ok(StructDeriveOutput {
        collect_body: quote! { #(#collects)* },
        debug_body: quote! {
            let mut debug = #debug_builder;
            #(#debug_fields)*
            debug.finish()
        },
    })
}
