//! Parsing of `#[guard(...)]` field attributes.
//!
//! This module maps attribute syntax to discovery decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Ident, Meta, Result};

/// Tag names accepted inside `#[guard(...)]`, matching `fieldguard::Tag`.
pub(crate) const TAG_NAMES: [&str; 4] = ["TaxId", "PaymentCard", "Phone", "Numeric"];

/// How a field takes part in discovery.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Skip` | Field is not discovered |
/// | `#[guard]` | `Walk` | Walk into a nested record |
/// | `#[guard(Tag)]` | `Tagged(Tag)` | Field is discovered under `Tag` |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation. Untagged fields are ignored by both passes.
    Skip,
    /// Bare `#[guard]`: the field is itself a `GuardedRecord`.
    Walk,
    /// `#[guard(Tag)]`: the field is a `GuardedValue` carrying `Tag`.
    Tagged(Ident),
}

impl Strategy {
    pub(crate) fn is_guarded(&self) -> bool {
        !matches!(self, Strategy::Skip)
    }
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[guard] attributes specified on the same field; a field carries exactly one tag",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn parse_tag(tokens: proc_macro2::TokenStream, span: Span) -> Result<Ident> {
    let Ok(ident) = syn::parse2::<Ident>(tokens) else {
        return Err(syn::Error::new(
            span,
            "expected a single tag (e.g., #[guard(TaxId)])",
        ));
    };
    if !TAG_NAMES.iter().any(|name| ident == name) {
        return Err(syn::Error::new(
            ident.span(),
            format!(
                "unknown tag `{ident}`; expected one of {}",
                TAG_NAMES.join(", ")
            ),
        ));
    }
    Ok(ident)
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("guard") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_strategy(&mut strategy, Strategy::Walk, attr.span())?;
            }
            Meta::List(list) => {
                let tag = parse_tag(list.tokens.clone(), attr.span())?;
                set_strategy(&mut strategy, Strategy::Tagged(tag), attr.span())?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[guard]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Skip))
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    fn error_for(tokens: proc_macro2::TokenStream) -> String {
        parse_field_strategy(&parse_attrs(tokens))
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn no_attribute_returns_skip() {
        let strategy = parse_field_strategy(&parse_attrs(quote! {})).unwrap();
        assert!(matches!(strategy, Strategy::Skip));
        assert!(!strategy.is_guarded());
    }

    #[test]
    fn bare_guard_returns_walk() {
        let strategy = parse_field_strategy(&parse_attrs(quote! { #[guard] })).unwrap();
        assert!(matches!(strategy, Strategy::Walk));
    }

    #[test]
    fn every_tag_name_is_accepted() {
        for name in TAG_NAMES {
            let ident = Ident::new(name, Span::call_site());
            let strategy =
                parse_field_strategy(&parse_attrs(quote! { #[guard(#ident)] })).unwrap();
            match strategy {
                Strategy::Tagged(tag) => assert_eq!(tag, name),
                other => panic!("expected Tagged, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_tag_error() {
        let err = error_for(quote! { #[guard(Email)] });
        assert!(err.contains("unknown tag `Email`"));
        assert!(err.contains("TaxId, PaymentCard, Phone, Numeric"));
    }

    #[test]
    fn combined_tags_error() {
        let err = error_for(quote! { #[guard(TaxId, Phone)] });
        assert!(err.contains("expected a single tag"));
    }

    #[test]
    fn multiple_guard_attributes_error() {
        let err = error_for(quote! {
            #[guard(TaxId)]
            #[guard(Phone)]
        });
        assert!(err.contains("multiple #[guard] attributes"));
    }

    #[test]
    fn name_value_syntax_error() {
        let err = error_for(quote! { #[guard = "TaxId"] });
        assert!(err.contains("name-value syntax is not supported"));
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[serde(skip)]
            #[doc = "note"]
        });
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Skip));
    }
}
