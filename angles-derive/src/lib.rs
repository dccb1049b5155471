//! Derive macro implementation used by `angles-core`.
//!
//! `angles-derive` is an implementation detail of this workspace. The `Variant` derive expands in terms of
//! `crate::Variant` and `crate::Notation`, so it is intended to be used by `angles-core` (or by crates that expose an
//! identical crate-root API).
//!
//! Most users should depend on `angles` instead and use the predefined variants.
//!
//! # Generated impls
//!
//! For a variant marker type `MyVariant`, the derive implements `crate::Variant for MyVariant`. Display, parsing, and
//! arithmetic come from the generic `crate::Bounded<V>`.
//!
//! # Attributes
//!
//! The derive reads a required `#[variant(...)]` attribute:
//!
//! - `name = "Declination"`: public name of the variant
//! - `minimum = -90.0`: default inclusive lower bound
//! - `maximum = 90.0`: default inclusive upper bound
//! - `notation = Dms`: `Dms` or `Hms`

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Variant` for a range-limited angle marker.
///
/// The derive must be paired with a `#[variant(...)]` attribute providing `name`, `minimum`, `maximum`, and
/// `notation`.
///
/// This macro is intended for use by `angles-core`.
#[proc_macro_derive(Variant, attributes(variant))]
pub fn derive_variant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_variant_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_variant_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let marker = &input.ident;
    let attr = parse_variant_attribute(&input.attrs)?;

    let name = &attr.name;
    let minimum = &attr.minimum;
    let maximum = &attr.maximum;
    let notation = &attr.notation;

    Ok(quote! {
        impl crate::Variant for #marker {
            const NAME: &'static str = #name;
            const MINIMUM: f64 = #minimum;
            const MAXIMUM: f64 = #maximum;
            const NOTATION: crate::Notation = crate::Notation::#notation;
        }
    })
}

/// Parsed contents of the `#[variant(...)]` attribute.
struct VariantAttribute {
    name: LitStr,
    minimum: Expr,
    maximum: Expr,
    notation: Ident,
}

impl Parse for VariantAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut minimum: Option<Expr> = None;
        let mut maximum: Option<Expr> = None;
        let mut notation: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => name = Some(input.parse()?),
                "minimum" => minimum = Some(input.parse()?),
                "maximum" => maximum = Some(input.parse()?),
                "notation" => {
                    let value: Ident = input.parse()?;
                    if value != "Dms" && value != "Hms" {
                        return Err(syn::Error::new(
                            value.span(),
                            format!("unknown notation `{}`, expected `Dms` or `Hms`", value),
                        ));
                    }
                    notation = Some(value);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let missing = |field: &str| syn::Error::new(input.span(), format!("missing required attribute `{}`", field));

        Ok(VariantAttribute {
            name: name.ok_or_else(|| missing("name"))?,
            minimum: minimum.ok_or_else(|| missing("minimum"))?,
            maximum: maximum.ok_or_else(|| missing("maximum"))?,
            notation: notation.ok_or_else(|| missing("notation"))?,
        })
    }
}

fn parse_variant_attribute(attrs: &[Attribute]) -> syn::Result<VariantAttribute> {
    for attr in attrs {
        if attr.path().is_ident("variant") {
            return attr.parse_args::<VariantAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[variant(...)] attribute",
    ))
}
