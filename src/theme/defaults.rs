//! Stock design tokens and breakpoints.
//!
//! Hosts that ship their own scales load a theme file instead; see
//! [`Theme::from_json_str`](crate::theme::Theme::from_json_str).

use crate::theme::breakpoints::Breakpoint;
use crate::theme::tokens::{Category, TokenRegistry};

/// `(name, min width)` of the stock breakpoints, ascending.
pub const BREAKPOINTS: &[(&str, u32)] = &[
    ("base", 0),
    ("tablet", 768),
    ("desktop", 1024),
    ("hd", 1440),
];

pub const SPACING: &[&str] = &["0", "xs", "sm", "md", "lg", "xl", "2xl", "3xl"];

/// Palette families; each gets a bare token plus `-100` through `-900` shades.
pub const COLOR_FAMILIES: &[&str] = &["primary", "secondary", "success", "warning", "danger", "neutral"];

pub const COLOR_EXTRAS: &[&str] = &["white", "black", "transparent", "inherit"];

pub const FONT_SIZE: &[&str] = &["xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl"];
pub const FONT_WEIGHT: &[&str] = &["light", "regular", "medium", "semibold", "bold"];
pub const LINE_HEIGHT: &[&str] = &["none", "tight", "normal", "relaxed", "loose"];
pub const BORDER_RADIUS: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "full"];
pub const BORDER_WIDTH: &[&str] = &["none", "thin", "medium", "thick"];
pub const SHADOW: &[&str] = &["none", "xs", "sm", "md", "lg", "xl"];
pub const Z_INDEX: &[&str] = &["base", "dropdown", "sticky", "overlay", "modal", "popover", "toast"];
pub const DIMENSION: &[&str] = &[
    "auto", "full", "screen", "fit", "min", "max", "xs", "sm", "md", "lg", "xl", "2xl",
];

pub const DISPLAY: &[&str] = &["block", "inline", "inline-block", "flex", "inline-flex", "grid", "none"];
pub const DIRECTION: &[&str] = &["row", "column", "row-reverse", "column-reverse"];
pub const ALIGN: &[&str] = &["start", "center", "end", "stretch", "baseline"];
pub const JUSTIFY: &[&str] = &["start", "center", "end", "between", "around", "evenly"];
pub const WRAP: &[&str] = &["wrap", "nowrap", "wrap-reverse"];
pub const POSITION: &[&str] = &["static", "relative", "absolute", "fixed", "sticky"];
pub const OVERFLOW: &[&str] = &["visible", "hidden", "scroll", "auto"];
pub const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify"];

/// The stock breakpoint entries.
pub fn breakpoints() -> Vec<Breakpoint> {
    BREAKPOINTS
        .iter()
        .map(|(name, px)| Breakpoint::new(*name, *px))
        .collect()
}

/// Every color token: families, their shades, and the extras.
pub fn colors() -> Vec<String> {
    let mut colors = Vec::with_capacity(COLOR_FAMILIES.len() * 10 + COLOR_EXTRAS.len());
    for family in COLOR_FAMILIES {
        colors.push((*family).to_string());
        for shade in (100..=900).step_by(100) {
            colors.push(format!("{family}-{shade}"));
        }
    }
    colors.extend(COLOR_EXTRAS.iter().map(|c| (*c).to_string()));
    colors
}

/// The stock token registry.
pub fn registry() -> TokenRegistry {
    TokenRegistry::new()
        .with_tokens(Category::Spacing, SPACING.iter().copied())
        .with_tokens(Category::Color, colors())
        .with_tokens(Category::FontSize, FONT_SIZE.iter().copied())
        .with_tokens(Category::FontWeight, FONT_WEIGHT.iter().copied())
        .with_tokens(Category::LineHeight, LINE_HEIGHT.iter().copied())
        .with_tokens(Category::BorderRadius, BORDER_RADIUS.iter().copied())
        .with_tokens(Category::BorderWidth, BORDER_WIDTH.iter().copied())
        .with_tokens(Category::Shadow, SHADOW.iter().copied())
        .with_tokens(Category::ZIndex, Z_INDEX.iter().copied())
        .with_tokens(Category::Dimension, DIMENSION.iter().copied())
        .with_tokens(Category::Display, DISPLAY.iter().copied())
        .with_tokens(Category::Direction, DIRECTION.iter().copied())
        .with_tokens(Category::Align, ALIGN.iter().copied())
        .with_tokens(Category::Justify, JUSTIFY.iter().copied())
        .with_tokens(Category::Wrap, WRAP.iter().copied())
        .with_tokens(Category::Position, POSITION.iter().copied())
        .with_tokens(Category::Overflow, OVERFLOW.iter().copied())
        .with_tokens(Category::TextAlign, TEXT_ALIGN.iter().copied())
}
