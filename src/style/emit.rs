//! Class and style emission for one resolved value.
//!
//! Tokens become class names, `{prefix}-{token}` at the base breakpoint and
//! `{prefix}-{token}-{breakpoint}` elsewhere. Literals become style entries
//! keyed by the custom property `--{prefix}-{breakpoint}` at every breakpoint,
//! `base` included; the rendering layer binds each one to its CSS property
//! inside the breakpoint's media query, so a literal never outranks a class
//! from a wider breakpoint. Values that are neither emit nothing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::style::property::StyleProperty;
use crate::style::value::StyleValue;
use crate::theme::breakpoints::Breakpoint;
use crate::theme::tokens::TokenRegistry;

/// A single inline style declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StyleEntry {
    /// CSS property or custom property name.
    pub name: String,
    pub value: String,
}

/// Output of [`emit`]: at most one class and at most one style entry, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Emission {
    pub class: Option<String>,
    pub style: Option<StyleEntry>,
}

impl Emission {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn class(name: String) -> Self {
        Self {
            class: Some(name),
            style: None,
        }
    }

    pub fn style(name: String, value: String) -> Self {
        Self {
            class: None,
            style: Some(StyleEntry { name, value }),
        }
    }

    pub fn is_none(&self) -> bool {
        self.class.is_none() && self.style.is_none()
    }
}

/// Classes and inline styles for one component instance (or one child).
///
/// Classes keep emission order (property declaration order, then breakpoint
/// order) and may repeat. The style map is merged key-wise, later wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmissionResult {
    pub classes: Vec<String>,
    pub style: BTreeMap<String, String>,
}

impl EmissionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one emission.
    pub fn push(&mut self, emission: Emission) {
        if let Some(class) = emission.class {
            self.classes.push(class);
        }
        if let Some(StyleEntry { name, value }) = emission.style {
            self.style.insert(name, value);
        }
    }

    /// Concatenate another fragment after this one.
    pub fn merge(&mut self, other: EmissionResult) {
        self.classes.extend(other.classes);
        self.style.extend(other.style);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.style.is_empty()
    }

    /// Space-separated class attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

impl FromIterator<Emission> for EmissionResult {
    fn from_iter<I: IntoIterator<Item = Emission>>(iter: I) -> Self {
        let mut result = EmissionResult::new();
        for emission in iter {
            result.push(emission);
        }
        result
    }
}

impl Extend<Emission> for EmissionResult {
    fn extend<I: IntoIterator<Item = Emission>>(&mut self, iter: I) {
        for emission in iter {
            self.push(emission);
        }
    }
}

/// `{prefix}-{value}` at base, `{prefix}-{value}-{breakpoint}` elsewhere.
pub fn class_name(prefix: &str, value: &str, breakpoint: &Breakpoint) -> String {
    if breakpoint.is_base() {
        format!("{prefix}-{value}")
    } else {
        format!("{prefix}-{value}-{}", breakpoint.name)
    }
}

/// Style key for a literal of `property` at `breakpoint`: `--{prefix}-{breakpoint}`.
pub fn style_key(property: StyleProperty, breakpoint: &Breakpoint) -> String {
    format!("--{}-{}", property.class_prefix(), breakpoint.name)
}

/// Emit an already-classified value.
pub fn emit_value(property: StyleProperty, value: &StyleValue, breakpoint: &Breakpoint) -> Emission {
    let category = property.category();
    if !value.is_emittable(category) {
        tracing::debug!(
            property = %property,
            %category,
            value = %value,
            breakpoint = %breakpoint.name,
            "dropping value that is neither a token nor a valid literal"
        );
        return Emission::none();
    }
    match value {
        StyleValue::Token(token) => {
            Emission::class(class_name(property.class_prefix(), token, breakpoint))
        }
        StyleValue::Literal(literal) => {
            Emission::style(style_key(property, breakpoint), literal.clone())
        }
    }
}

/// Classify `value` against the registry and emit it.
pub fn emit(
    registry: &TokenRegistry,
    property: StyleProperty,
    value: &str,
    breakpoint: &Breakpoint,
) -> Emission {
    let classified = StyleValue::classify(registry, property.category(), value);
    emit_value(property, &classified, breakpoint)
}
