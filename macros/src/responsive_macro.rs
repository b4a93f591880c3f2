//! responsive! macro: `key: value` pairs to a `ResponsiveProp::Map`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A single `breakpoint: value` entry.
struct Entry {
    key: String,
    key_span: Span,
    value: Expr,
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> Result<Self> {
        let (key, key_span) = if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            (lit.value(), lit.span())
        } else {
            let ident: Ident = input.parse()?;
            (ident.to_string(), ident.span())
        };
        input.parse::<Token![:]>()?;
        let value: Expr = input.parse()?;
        Ok(Entry {
            key,
            key_span,
            value,
        })
    }
}

struct ResponsiveInput {
    entries: Punctuated<Entry, Token![,]>,
}

impl Parse for ResponsiveInput {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(ResponsiveInput {
            entries: Punctuated::parse_terminated(input)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Reject empty input and repeated breakpoint keys.
fn validate(input: &ResponsiveInput) -> Result<()> {
    if input.entries.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "responsive! needs at least one `breakpoint: value` entry",
        ));
    }
    let mut seen: Vec<&str> = Vec::with_capacity(input.entries.len());
    for entry in &input.entries {
        if seen.contains(&entry.key.as_str()) {
            return Err(Error::new(
                entry.key_span,
                format!("breakpoint `{}` is given more than once", entry.key),
            ));
        }
        seen.push(&entry.key);
    }
    Ok(())
}

pub(crate) fn responsive_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ResponsiveInput = syn::parse2(input)?;
    validate(&parsed)?;

    let pairs = parsed.entries.iter().map(|entry| {
        let key = &entry.key;
        let value = &entry.value;
        quote! { (#key, #value) }
    });

    Ok(quote! {
        ::strata::style::ResponsiveProp::from_pairs([#(#pairs),*])
    })
}
