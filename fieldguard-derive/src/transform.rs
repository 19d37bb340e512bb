//! Per-field code generation and the bounds each field requires.

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{LitStr, Result, WherePredicate};

use crate::{crate_path, generics::field_bound, strategy::Strategy, types::is_scalar_type};

/// Accumulated where-clause predicates while processing fields.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) record_predicates: Vec<WherePredicate>,
    pub(crate) debug_predicates: Vec<WherePredicate>,
}

impl<'a> DeriveContext<'a> {
    pub(crate) fn new(generics: &'a syn::Generics) -> Self {
        Self {
            generics,
            record_predicates: Vec::new(),
            debug_predicates: Vec::new(),
        }
    }

    fn require(&mut self, ty: &syn::Type, bound: &TokenStream) {
        if let Some(predicate) = field_bound(ty, self.generics, bound) {
            self.record_predicates.push(predicate);
        }
    }

    fn require_debug(&mut self, ty: &syn::Type) {
        let debug = quote! { ::core::fmt::Debug };
        if let Some(predicate) = field_bound(ty, self.generics, &debug) {
            self.debug_predicates.push(predicate);
        }
    }
}

/// Generates the `FieldSet` registration for a single field.
///
/// | Strategy | Generated |
/// |----------|-----------|
/// | `Skip` | nothing |
/// | `Walk` | `fields.nested("name", &mut self.name)` |
/// | `Tagged(Tag)` | `fields.push("name", Tag::Tag, &mut self.name)` |
///
/// Also records the where-clause predicates the field needs: guarded fields
/// bound the `GuardedRecord` impl, skipped fields bound the masked `Debug` impl
/// (guarded fields are never formatted).
pub(crate) fn generate_field_collect(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    access: &TokenStream,
    name: &LitStr,
    span: Span,
    strategy: &Strategy,
) -> Result<Option<TokenStream>> {
    match strategy {
        Strategy::Skip => {
            ctx.require_debug(ty);
            Ok(None)
        }
        Strategy::Walk => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "bare #[guard] walks into a nested record; scalar fields cannot be walked",
                ));
            }
            ctx.require(ty, &crate_path("GuardedRecord"));
            Ok(Some(quote_spanned! { span =>
                fields.nested(#name, #access);
            }))
        }
        Strategy::Tagged(tag) => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "scalar fields cannot carry a tag: tags apply to string fields \
                    (String, Option<String>, Cow<str>, ...)",
                ));
            }
            ctx.require(ty, &crate_path("GuardedValue"));
            let tag_path = crate_path("Tag");
            Ok(Some(quote_spanned! { span =>
                fields.push(#name, #tag_path::#tag, #access);
            }))
        }
    }
}
