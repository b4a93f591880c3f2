//! Token-vs-literal classification of a single resolved value.

use std::fmt;

use serde::Serialize;

use crate::theme::tokens::{Category, TokenRegistry};

/// A resolved style value.
///
/// Which variant a raw string becomes is decided only by registry membership;
/// callers never declare it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StyleValue {
    /// A registered token, emitted as a class name.
    Token(String),
    /// Anything else, emitted as a style entry if the category allows literals.
    Literal(String),
}

impl StyleValue {
    /// Classify `raw` against the tokens registered for `category`.
    pub fn classify(registry: &TokenRegistry, category: Category, raw: &str) -> Self {
        if registry.contains(category, raw) {
            StyleValue::Token(raw.to_string())
        } else {
            StyleValue::Literal(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StyleValue::Token(s) | StyleValue::Literal(s) => s,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, StyleValue::Token(_))
    }

    /// Returns `true` if this value produces any output for `category`:
    /// tokens always do, literals only when the category's literal grammar
    /// accepts them.
    pub fn is_emittable(&self, category: Category) -> bool {
        match self {
            StyleValue::Token(_) => true,
            StyleValue::Literal(raw) => category
                .literal_kind()
                .is_some_and(|kind| kind.accepts(raw)),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
