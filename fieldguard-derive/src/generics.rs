//! Generic type parameter handling and where-clause management.
//!
//! Bounds are added on field types, not on bare parameters: a field of type
//! `Option<T>` needs `Option<T>: GuardedValue`, which `T: GuardedValue` would
//! not express. Only field types that mention a type parameter get a predicate;
//! concrete types are checked at the `FieldSet::push` call site instead.
//!
//! `PhantomData<T>` never counts as mentioning `T`, so marker fields add no
//! bounds.

use syn::{parse_quote, Ident, WherePredicate};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        _ => {}
    }
}

fn mentions_generics(ty: &syn::Type, generics: &syn::Generics) -> bool {
    let mut found = Vec::new();
    collect_generics_from_type(ty, generics, &mut found);
    !found.is_empty()
}

/// Returns `ty: bound` when `ty` depends on a type parameter of `generics`.
pub(crate) fn field_bound(
    ty: &syn::Type,
    generics: &syn::Generics,
    bound: &proc_macro2::TokenStream,
) -> Option<WherePredicate> {
    mentions_generics(ty, generics).then(|| parse_quote!(#ty: #bound))
}

/// Appends `predicates` to the where clause of `generics`.
pub(crate) fn with_predicates(
    mut generics: syn::Generics,
    predicates: &[WherePredicate],
) -> syn::Generics {
    if !predicates.is_empty() {
        generics
            .make_where_clause()
            .predicates
            .extend(predicates.iter().cloned());
    }
    generics
}
