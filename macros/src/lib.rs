//! Proc macros for strata: `responsive!` and `shorthand!` compile-time checked constructors.
//!
//! This crate is not meant to be used directly — enable the `macros` feature on `strata`.

use proc_macro::TokenStream;

mod responsive_macro;
mod shorthand_macro;

/// Build a per-breakpoint `ResponsiveProp`.
///
/// Keys are breakpoint names (identifiers or string literals), values are any
/// expressions convertible into the prop's value type. A key given twice is a
/// compile error.
///
/// # Example
///
/// ```ignore
/// let padding: ResponsiveProp<String> = responsive! { base: "sm", tablet: "md", "hd": "xl" };
/// let direction = responsive! { base: Direction::Column, desktop: Direction::Row };
/// ```
#[proc_macro]
pub fn responsive(input: TokenStream) -> TokenStream {
    responsive_macro::responsive_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Expand a box-model shorthand at compile time into a `ShorthandQuad<String>`.
///
/// The literal must have 1 to 4 whitespace-separated slots.
///
/// # Example
///
/// ```ignore
/// let quad = shorthand!("sm md lg");
/// assert_eq!(quad.left, "md");
/// ```
#[proc_macro]
pub fn shorthand(input: TokenStream) -> TokenStream {
    shorthand_macro::shorthand_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
