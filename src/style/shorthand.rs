//! Box-model shorthand expansion (margin, padding, border-width, border-radius).
//!
//! - 1 value: all sides
//! - 2 values: vertical, horizontal
//! - 3 values: top, horizontal, bottom
//! - 4 values: top, right, bottom, left
//!
//! Slots are passed through untouched; whether each one is a token or a literal
//! is decided per edge afterwards.

use serde::Serialize;

/// Errors from shorthand expansion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShorthandError {
    #[error("invalid shorthand {raw:?}: expected 1-4 values, got {slots}")]
    InvalidShorthand { raw: String, slots: usize },
}

/// Four per-edge values (top, right, bottom, left).
///
/// For border radii the slots stand for the corners top-left, top-right,
/// bottom-right, bottom-left, in the same positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShorthandQuad<T = String> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> ShorthandQuad<T> {
    /// Same value on all four sides.
    pub fn all(v: T) -> Self {
        Self {
            top: v.clone(),
            right: v.clone(),
            bottom: v.clone(),
            left: v,
        }
    }

    /// Symmetric vertical and horizontal values.
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl<T> ShorthandQuad<T> {
    /// Explicit values for all four sides.
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Edges in `top, right, bottom, left` order.
    pub fn edges(&self) -> [&T; 4] {
        [&self.top, &self.right, &self.bottom, &self.left]
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ShorthandQuad<U> {
        ShorthandQuad {
            top: f(&self.top),
            right: f(&self.right),
            bottom: f(&self.bottom),
            left: f(&self.left),
        }
    }
}

impl<T: PartialEq> ShorthandQuad<T> {
    /// Returns `true` if all four edges hold the same value.
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.top == self.bottom && self.top == self.left
    }
}

/// Expand a 1-4 slot whitespace-separated shorthand into four edges.
pub fn expand(raw: &str) -> Result<ShorthandQuad, ShorthandError> {
    let slots: Vec<&str> = raw.split_whitespace().collect();
    match slots.as_slice() {
        [all] => Ok(ShorthandQuad::all((*all).to_string())),
        [vertical, horizontal] => Ok(ShorthandQuad::symmetric(
            (*vertical).to_string(),
            (*horizontal).to_string(),
        )),
        [top, horizontal, bottom] => Ok(ShorthandQuad::new(
            (*top).to_string(),
            (*horizontal).to_string(),
            (*bottom).to_string(),
            (*horizontal).to_string(),
        )),
        [top, right, bottom, left] => Ok(ShorthandQuad::new(
            (*top).to_string(),
            (*right).to_string(),
            (*bottom).to_string(),
            (*left).to_string(),
        )),
        other => Err(ShorthandError::InvalidShorthand {
            raw: raw.to_string(),
            slots: other.len(),
        }),
    }
}
