//! Breakpoint table: named viewport thresholds in canonical (ascending) order.
//!
//! The first entry is always the unconditional breakpoint at `0px` (conventionally
//! named `base`). Every responsive value in the engine is ordered by this table,
//! never by the order in which a caller wrote its keys.

use serde::{Deserialize, Serialize};

use crate::theme::defaults;

/// Errors from building a [`BreakpointTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreakpointError {
    #[error("breakpoint table is empty")]
    Empty,
    #[error("first breakpoint `{name}` must have a minimum width of 0, got {min_width_px}")]
    MissingBase { name: String, min_width_px: u32 },
    #[error("duplicate breakpoint name: {0}")]
    DuplicateName(String),
    #[error("breakpoint `{name}` ({min_width_px}px) must be wider than `{previous}`")]
    NotIncreasing {
        name: String,
        min_width_px: u32,
        previous: String,
    },
}

/// A named viewport-width threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub name: String,
    pub min_width_px: u32,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width_px: u32) -> Self {
        Self {
            name: name.into(),
            min_width_px,
        }
    }

    /// Returns `true` for the unconditional breakpoint.
    pub fn is_base(&self) -> bool {
        self.min_width_px == 0
    }
}

/// Validated, strictly ascending list of breakpoints.
///
/// Invariants upheld by [`BreakpointTable::new`]:
/// - at least one entry, the first at `0px`
/// - names unique
/// - `min_width_px` strictly increasing (so exactly one entry sits at `0px`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Build a table, rejecting anything that violates the ordering invariants.
    pub fn new(entries: Vec<Breakpoint>) -> Result<Self, BreakpointError> {
        let first = entries.first().ok_or(BreakpointError::Empty)?;
        if !first.is_base() {
            return Err(BreakpointError::MissingBase {
                name: first.name.clone(),
                min_width_px: first.min_width_px,
            });
        }

        for (i, bp) in entries.iter().enumerate().skip(1) {
            if entries[..i].iter().any(|prev| prev.name == bp.name) {
                return Err(BreakpointError::DuplicateName(bp.name.clone()));
            }
            let previous = &entries[i - 1];
            if bp.min_width_px <= previous.min_width_px {
                return Err(BreakpointError::NotIncreasing {
                    name: bp.name.clone(),
                    min_width_px: bp.min_width_px,
                    previous: previous.name.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// The unconditional breakpoint (first entry).
    pub fn base(&self) -> &Breakpoint {
        &self.entries[0]
    }

    /// Returns `true` if `name` is the unconditional breakpoint.
    pub fn is_base(&self, name: &str) -> bool {
        self.base().name == name
    }

    /// Look up a breakpoint by name.
    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.entries.iter().find(|bp| bp.name == name)
    }

    /// Canonical position of `name`, if it is a known breakpoint.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|bp| bp.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate in canonical (ascending width) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a valid table has at least the base entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BreakpointTable {
    /// The stock table from [`defaults::BREAKPOINTS`].
    fn default() -> Self {
        Self {
            entries: defaults::breakpoints(),
        }
    }
}

impl<'a> IntoIterator for &'a BreakpointTable {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for BreakpointTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<Breakpoint>::deserialize(deserializer)?;
        BreakpointTable::new(entries).map_err(serde::de::Error::custom)
    }
}
