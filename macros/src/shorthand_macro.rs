//! shorthand! macro: compile-time 1-4 slot expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, LitStr, Result};

/// Expand slots to `[top, right, bottom, left]`, or `None` for an invalid count.
///
/// Mirrors `strata::style::shorthand::expand`, which this crate cannot depend on;
/// keep the two in sync (`tests/macros.rs` in `strata` compares them).
fn edges(raw: &str) -> Option<[&str; 4]> {
    let slots: Vec<&str> = raw.split_whitespace().collect();
    match slots.as_slice() {
        [a] => Some([*a, *a, *a, *a]),
        [v, h] => Some([*v, *h, *v, *h]),
        [t, h, b] => Some([*t, *h, *b, *h]),
        [t, r, b, l] => Some([*t, *r, *b, *l]),
        _ => None,
    }
}

pub(crate) fn shorthand_impl(input: TokenStream) -> Result<TokenStream> {
    let lit: LitStr = syn::parse2(input)?;
    let raw = lit.value();
    let [top, right, bottom, left] = edges(&raw).ok_or_else(|| {
        Error::new(
            lit.span(),
            format!(
                "invalid shorthand {raw:?}: expected 1-4 values, got {}",
                raw.split_whitespace().count()
            ),
        )
    })?;

    Ok(quote! {
        ::strata::style::ShorthandQuad::<::std::string::String>::new(
            ::std::string::String::from(#top),
            ::std::string::String::from(#right),
            ::std::string::String::from(#bottom),
            ::std::string::String::from(#left),
        )
    })
}
