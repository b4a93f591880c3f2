//! Responsive props: a single value, or one value per breakpoint.
//!
//! Resolution always follows the [`BreakpointTable`] order. The key order of a
//! map carries no meaning, and keys that are not known breakpoints are dropped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::theme::breakpoints::{Breakpoint, BreakpointTable};

/// A prop value that is either unconditional or keyed by breakpoint name.
///
/// Deserializes untagged: a bare value is a [`Scalar`](ResponsiveProp::Scalar),
/// an object is a [`Map`](ResponsiveProp::Map).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveProp<T> {
    /// Applies at the base breakpoint (and, through the cascade, everywhere).
    Scalar(T),
    /// Values for a subset of breakpoints.
    Map(HashMap<String, T>),
}

/// One `(breakpoint, value)` pair produced by [`ResponsiveProp::resolve`].
#[derive(Debug, PartialEq, Eq)]
pub struct Resolved<'a, T> {
    pub breakpoint: &'a Breakpoint,
    pub value: &'a T,
}

impl<T> Clone for Resolved<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<'_, T> {}

impl<T> ResponsiveProp<T> {
    pub fn scalar(value: T) -> Self {
        ResponsiveProp::Scalar(value)
    }

    /// Build a map from `(breakpoint, value)` pairs. A repeated key keeps its
    /// last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<T>,
    {
        ResponsiveProp::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Ordered `(breakpoint, value)` pairs in canonical breakpoint order.
    ///
    /// A scalar resolves to a single pair at the base breakpoint. A map yields
    /// only the breakpoints it names; nothing is synthesized for the others.
    pub fn resolve<'a>(&'a self, table: &'a BreakpointTable) -> Vec<Resolved<'a, T>> {
        match self {
            ResponsiveProp::Scalar(value) => vec![Resolved {
                breakpoint: table.base(),
                value,
            }],
            ResponsiveProp::Map(map) => {
                for key in map.keys().filter(|k| !table.contains(k)) {
                    tracing::debug!(breakpoint = %key, "dropping value for unknown breakpoint");
                }
                table
                    .iter()
                    .filter_map(|breakpoint| {
                        map.get(&breakpoint.name)
                            .map(|value| Resolved { breakpoint, value })
                    })
                    .collect()
            }
        }
    }

    /// Transform every value, keeping the breakpoint keys.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ResponsiveProp<U> {
        match self {
            ResponsiveProp::Scalar(value) => ResponsiveProp::Scalar(f(value)),
            ResponsiveProp::Map(map) => {
                ResponsiveProp::Map(map.iter().map(|(k, v)| (k.clone(), f(v))).collect())
            }
        }
    }
}

impl From<&str> for ResponsiveProp<String> {
    fn from(value: &str) -> Self {
        ResponsiveProp::Scalar(value.to_string())
    }
}

impl From<String> for ResponsiveProp<String> {
    fn from(value: String) -> Self {
        ResponsiveProp::Scalar(value)
    }
}

impl<T, K, V, const N: usize> From<[(K, V); N]> for ResponsiveProp<T>
where
    K: Into<String>,
    V: Into<T>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        ResponsiveProp::from_pairs(pairs)
    }
}

impl<T> From<HashMap<String, T>> for ResponsiveProp<T> {
    fn from(map: HashMap<String, T>) -> Self {
        ResponsiveProp::Map(map)
    }
}
