//! Token registry: the legal token names for each style category.
//!
//! The registry is built once (from [`defaults`](crate::theme::defaults) or a
//! theme file) and is read-only afterwards. Registration is a set union, so
//! registering the same tokens twice leaves the registry unchanged.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::literal::LiteralKind;

/// A style-property category. Every [`StyleProperty`](crate::style::property::StyleProperty)
/// belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Spacing,
    Color,
    FontSize,
    FontWeight,
    LineHeight,
    BorderRadius,
    BorderWidth,
    Shadow,
    ZIndex,
    Dimension,
    Display,
    Direction,
    Align,
    Justify,
    Wrap,
    Position,
    Overflow,
    TextAlign,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::Spacing,
        Category::Color,
        Category::FontSize,
        Category::FontWeight,
        Category::LineHeight,
        Category::BorderRadius,
        Category::BorderWidth,
        Category::Shadow,
        Category::ZIndex,
        Category::Dimension,
        Category::Display,
        Category::Direction,
        Category::Align,
        Category::Justify,
        Category::Wrap,
        Category::Position,
        Category::Overflow,
        Category::TextAlign,
    ];

    /// Kebab-case name, as used in theme files.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Spacing => "spacing",
            Category::Color => "color",
            Category::FontSize => "font-size",
            Category::FontWeight => "font-weight",
            Category::LineHeight => "line-height",
            Category::BorderRadius => "border-radius",
            Category::BorderWidth => "border-width",
            Category::Shadow => "shadow",
            Category::ZIndex => "z-index",
            Category::Dimension => "dimension",
            Category::Display => "display",
            Category::Direction => "direction",
            Category::Align => "align",
            Category::Justify => "justify",
            Category::Wrap => "wrap",
            Category::Position => "position",
            Category::Overflow => "overflow",
            Category::TextAlign => "text-align",
        }
    }

    /// The literal grammar accepted when a value is not a token, or `None` for
    /// enumerated-only categories.
    pub fn literal_kind(self) -> Option<LiteralKind> {
        match self {
            Category::Spacing
            | Category::FontSize
            | Category::BorderRadius
            | Category::BorderWidth
            | Category::Dimension => Some(LiteralKind::Length),
            Category::Color => Some(LiteralKind::Color),
            Category::LineHeight => Some(LiteralKind::Number),
            Category::FontWeight | Category::ZIndex => Some(LiteralKind::Integer),
            Category::Shadow
            | Category::Display
            | Category::Direction
            | Category::Align
            | Category::Justify
            | Category::Wrap
            | Category::Position
            | Category::Overflow
            | Category::TextAlign => None,
        }
    }

    pub fn accepts_literals(self) -> bool {
        self.literal_kind().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a category name that is not one of [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Per-category sets of legal token names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenRegistry {
    categories: HashMap<Category, BTreeSet<String>>,
}

impl TokenRegistry {
    /// An empty registry: every value classifies as a literal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add tokens to a category (builder style).
    pub fn with_tokens<I, S>(mut self, category: Category, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(category, tokens);
        self
    }

    /// Add tokens to a category. Already-present tokens are left as they are.
    pub fn register<I, S>(&mut self, category: Category, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .entry(category)
            .or_default()
            .extend(tokens.into_iter().map(Into::into));
    }

    /// Merge another registry into this one (set union per category).
    pub fn extend(&mut self, other: TokenRegistry) {
        for (category, tokens) in other.categories {
            self.register(category, tokens);
        }
    }

    /// Returns `true` if `value` is a registered token of `category`.
    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|tokens| tokens.contains(value))
    }

    /// The legal tokens of `category`, in sorted order.
    pub fn tokens(&self, category: Category) -> impl Iterator<Item = &str> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
    }

    /// Returns `true` if the category has at least one token registered.
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.get(&category).is_some_and(|t| !t.is_empty())
    }
}
