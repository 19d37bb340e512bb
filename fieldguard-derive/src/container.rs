//! Parsing of `#[guard(...)]` attributes on the struct itself.
//!
//! Field attributes choose a tag; on the container the same attribute carries
//! derive options instead. The only option today is `skip_debug`.

use syn::{punctuated::Punctuated, Attribute, Ident, Meta, Result, Token};

/// Option names accepted inside a container-level `#[guard(...)]`.
const OPTION_NAMES: [&str; 1] = ["skip_debug"];

/// Options parsed from container-level `#[guard(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// If true, skip generating the masked `Debug` impl.
    pub(crate) skip_debug: bool,
}

fn set_flag(flag: &mut bool, ident: &Ident) -> Result<()> {
    if *flag {
        return Err(syn::Error::new(
            ident.span(),
            format!("container option `{ident}` is specified more than once"),
        ));
    }
    *flag = true;
    Ok(())
}

fn apply_option(options: &mut ContainerOptions, ident: &Ident) -> Result<()> {
    if ident == "skip_debug" {
        return set_flag(&mut options.skip_debug, ident);
    }
    Err(syn::Error::new(
        ident.span(),
        format!(
            "unknown container option `{ident}`; expected one of {}",
            OPTION_NAMES.join(", ")
        ),
    ))
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("guard") {
            continue;
        }

        match &attr.meta {
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "bare #[guard] is a field attribute; on the container use #[guard(skip_debug)]",
                ));
            }
            Meta::List(_) => {
                let idents =
                    attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
                for ident in &idents {
                    apply_option(&mut options, ident)?;
                }
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[guard]",
                ));
            }
        }
    }

    Ok(options)
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
        parse_container_options(&parse_attrs(tokens))
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn no_attribute_returns_defaults() {
        let options = parse_container_options(&parse_attrs(quote! {})).unwrap();
        assert!(!options.skip_debug);
    }

    #[test]
    fn skip_debug_is_parsed() {
        let attrs = parse_attrs(quote! { #[guard(skip_debug)] });
        let options = parse_container_options(&attrs).unwrap();
        assert!(options.skip_debug);
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[derive(Debug)]
            #[doc = "record"]
        });
        assert!(!parse_container_options(&attrs).unwrap().skip_debug);
    }

    #[test]
    fn tag_on_container_errors() {
        let err = error_for(quote! { #[guard(TaxId)] });
        assert!(err.contains("unknown container option `TaxId`"));
        assert!(err.contains("expected one of skip_debug"));
    }

    #[test]
    fn repeated_option_errors() {
        let err = error_for(quote! {
            #[guard(skip_debug)]
            #[guard(skip_debug)]
        });
        assert!(err.contains("`skip_debug` is specified more than once"));
    }

    #[test]
    fn bare_guard_on_container_errors() {
        let err = error_for(quote! { #[guard] });
        assert!(err.contains("bare #[guard] is a field attribute"));
    }

    #[test]
    fn name_value_on_container_errors() {
        let err = error_for(quote! { #[guard = "skip_debug"] });
        assert!(err.contains("name-value syntax is not supported"));
    }
}
