//! The fixed, typed set of style props the engine understands.
//!
//! Each property knows its class prefix (`p`, `m-right`, `bg`, ...), the CSS
//! property it stands for, and the token [`Category`] its values are checked
//! against. Box-model shorthands additionally know their four edge properties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::theme::tokens::Category;

/// A style prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    BorderWidth,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    BorderRadius,
    BorderTopLeftRadius,
    BorderTopRightRadius,
    BorderBottomRightRadius,
    BorderBottomLeftRadius,
    Background,
    Color,
    BorderColor,
    FontSize,
    FontWeight,
    LineHeight,
    Shadow,
    ZIndex,
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    Display,
    Direction,
    Align,
    Justify,
    Wrap,
    Position,
    Overflow,
    TextAlign,
    Gap,
}

/// Static description of a [`StyleProperty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// Prop name as written by components (kebab-case).
    pub name: &'static str,
    /// Prefix of emitted class names.
    pub class_prefix: &'static str,
    /// CSS property the rendering layer binds literal custom properties to.
    pub css_name: &'static str,
    pub category: Category,
}

const fn spec(
    name: &'static str,
    class_prefix: &'static str,
    css_name: &'static str,
    category: Category,
) -> PropertySpec {
    PropertySpec {
        name,
        class_prefix,
        css_name,
        category,
    }
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 43] = [
        StyleProperty::Padding,
        StyleProperty::PaddingTop,
        StyleProperty::PaddingRight,
        StyleProperty::PaddingBottom,
        StyleProperty::PaddingLeft,
        StyleProperty::Margin,
        StyleProperty::MarginTop,
        StyleProperty::MarginRight,
        StyleProperty::MarginBottom,
        StyleProperty::MarginLeft,
        StyleProperty::BorderWidth,
        StyleProperty::BorderTopWidth,
        StyleProperty::BorderRightWidth,
        StyleProperty::BorderBottomWidth,
        StyleProperty::BorderLeftWidth,
        StyleProperty::BorderRadius,
        StyleProperty::BorderTopLeftRadius,
        StyleProperty::BorderTopRightRadius,
        StyleProperty::BorderBottomRightRadius,
        StyleProperty::BorderBottomLeftRadius,
        StyleProperty::Background,
        StyleProperty::Color,
        StyleProperty::BorderColor,
        StyleProperty::FontSize,
        StyleProperty::FontWeight,
        StyleProperty::LineHeight,
        StyleProperty::Shadow,
        StyleProperty::ZIndex,
        StyleProperty::Width,
        StyleProperty::Height,
        StyleProperty::MinWidth,
        StyleProperty::MaxWidth,
        StyleProperty::MinHeight,
        StyleProperty::MaxHeight,
        StyleProperty::Display,
        StyleProperty::Direction,
        StyleProperty::Align,
        StyleProperty::Justify,
        StyleProperty::Wrap,
        StyleProperty::Position,
        StyleProperty::Overflow,
        StyleProperty::TextAlign,
        StyleProperty::Gap,
    ];

    pub const fn spec(self) -> PropertySpec {
        use Category as C;
        match self {
            StyleProperty::Padding => spec("padding", "p", "padding", C::Spacing),
            StyleProperty::PaddingTop => spec("padding-top", "p-top", "padding-top", C::Spacing),
            StyleProperty::PaddingRight => spec("padding-right", "p-right", "padding-right", C::Spacing),
            StyleProperty::PaddingBottom => spec("padding-bottom", "p-bottom", "padding-bottom", C::Spacing),
            StyleProperty::PaddingLeft => spec("padding-left", "p-left", "padding-left", C::Spacing),
            StyleProperty::Margin => spec("margin", "m", "margin", C::Spacing),
            StyleProperty::MarginTop => spec("margin-top", "m-top", "margin-top", C::Spacing),
            StyleProperty::MarginRight => spec("margin-right", "m-right", "margin-right", C::Spacing),
            StyleProperty::MarginBottom => spec("margin-bottom", "m-bottom", "margin-bottom", C::Spacing),
            StyleProperty::MarginLeft => spec("margin-left", "m-left", "margin-left", C::Spacing),
            StyleProperty::BorderWidth => spec("border-width", "bw", "border-width", C::BorderWidth),
            StyleProperty::BorderTopWidth => {
                spec("border-top-width", "bw-top", "border-top-width", C::BorderWidth)
            }
            StyleProperty::BorderRightWidth => {
                spec("border-right-width", "bw-right", "border-right-width", C::BorderWidth)
            }
            StyleProperty::BorderBottomWidth => {
                spec("border-bottom-width", "bw-bottom", "border-bottom-width", C::BorderWidth)
            }
            StyleProperty::BorderLeftWidth => {
                spec("border-left-width", "bw-left", "border-left-width", C::BorderWidth)
            }
            StyleProperty::BorderRadius => spec("border-radius", "br", "border-radius", C::BorderRadius),
            StyleProperty::BorderTopLeftRadius => spec(
                "border-top-left-radius",
                "br-top-left",
                "border-top-left-radius",
                C::BorderRadius,
            ),
            StyleProperty::BorderTopRightRadius => spec(
                "border-top-right-radius",
                "br-top-right",
                "border-top-right-radius",
                C::BorderRadius,
            ),
            StyleProperty::BorderBottomRightRadius => spec(
                "border-bottom-right-radius",
                "br-bottom-right",
                "border-bottom-right-radius",
                C::BorderRadius,
            ),
            StyleProperty::BorderBottomLeftRadius => spec(
                "border-bottom-left-radius",
                "br-bottom-left",
                "border-bottom-left-radius",
                C::BorderRadius,
            ),
            StyleProperty::Background => spec("background", "bg", "background-color", C::Color),
            StyleProperty::Color => spec("color", "c", "color", C::Color),
            StyleProperty::BorderColor => spec("border-color", "bc", "border-color", C::Color),
            StyleProperty::FontSize => spec("font-size", "fs", "font-size", C::FontSize),
            StyleProperty::FontWeight => spec("font-weight", "fw", "font-weight", C::FontWeight),
            StyleProperty::LineHeight => spec("line-height", "lh", "line-height", C::LineHeight),
            StyleProperty::Shadow => spec("shadow", "shadow", "box-shadow", C::Shadow),
            StyleProperty::ZIndex => spec("z-index", "z", "z-index", C::ZIndex),
            StyleProperty::Width => spec("width", "w", "width", C::Dimension),
            StyleProperty::Height => spec("height", "h", "height", C::Dimension),
            StyleProperty::MinWidth => spec("min-width", "min-w", "min-width", C::Dimension),
            StyleProperty::MaxWidth => spec("max-width", "max-w", "max-width", C::Dimension),
            StyleProperty::MinHeight => spec("min-height", "min-h", "min-height", C::Dimension),
            StyleProperty::MaxHeight => spec("max-height", "max-h", "max-height", C::Dimension),
            StyleProperty::Display => spec("display", "display", "display", C::Display),
            StyleProperty::Direction => spec("direction", "direction", "flex-direction", C::Direction),
            StyleProperty::Align => spec("align", "align", "align-items", C::Align),
            StyleProperty::Justify => spec("justify", "justify", "justify-content", C::Justify),
            StyleProperty::Wrap => spec("wrap", "wrap", "flex-wrap", C::Wrap),
            StyleProperty::Position => spec("position", "position", "position", C::Position),
            StyleProperty::Overflow => spec("overflow", "overflow", "overflow", C::Overflow),
            StyleProperty::TextAlign => spec("text-align", "text-align", "text-align", C::TextAlign),
            StyleProperty::Gap => spec("gap", "gap", "gap", C::Spacing),
        }
    }

    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    pub const fn class_prefix(self) -> &'static str {
        self.spec().class_prefix
    }

    pub const fn css_name(self) -> &'static str {
        self.spec().css_name
    }

    pub const fn category(self) -> Category {
        self.spec().category
    }

    /// Edge properties of a box-model shorthand, in `top, right, bottom, left`
    /// order (`top-left, top-right, bottom-right, bottom-left` for radii).
    pub const fn edges(self) -> Option<[StyleProperty; 4]> {
        use StyleProperty as P;
        match self {
            P::Padding => Some([P::PaddingTop, P::PaddingRight, P::PaddingBottom, P::PaddingLeft]),
            P::Margin => Some([P::MarginTop, P::MarginRight, P::MarginBottom, P::MarginLeft]),
            P::BorderWidth => Some([
                P::BorderTopWidth,
                P::BorderRightWidth,
                P::BorderBottomWidth,
                P::BorderLeftWidth,
            ]),
            P::BorderRadius => Some([
                P::BorderTopLeftRadius,
                P::BorderTopRightRadius,
                P::BorderBottomRightRadius,
                P::BorderBottomLeftRadius,
            ]),
            _ => None,
        }
    }

    pub const fn is_shorthand(self) -> bool {
        self.edges().is_some()
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a prop name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style property: {0}")]
pub struct UnknownProperty(pub String);

impl FromStr for StyleProperty {
    type Err = UnknownProperty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProperty::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownProperty(s.to_string()))
    }
}
