//! # strata
//!
//! Responsive style resolution for a token-driven component library.
//!
//! Components describe their styling with props such as `padding`, `bg` or
//! `direction`, each either a single value or a map of per-breakpoint values.
//! strata turns those props into a deterministic list of utility class names
//! plus an inline style map for values that are not design tokens.
//!
//! ## Core Systems
//!
//! - **[`theme`]** — Token registry, breakpoint table, stock defaults, JSON theme files
//! - **[`style`]** — Responsive resolution, shorthand expansion, classification, emission, child gaps
//! - **[`engine`]** — [`StyleEngine`](engine::StyleEngine) entry points and per-component [`StyleProps`](engine::StyleProps)
//! - **[`testing`]** — Fixture themes and single-line rendering for assertions
//!
//! ## Example
//!
//! ```
//! use strata::engine::StyleEngine;
//! use strata::style::{ResponsiveProp, StyleProperty};
//! use strata::theme::Theme;
//!
//! let theme = Theme::default();
//! let engine = StyleEngine::new(&theme);
//!
//! let padding: ResponsiveProp<String> = [("tablet", "md"), ("base", "sm")].into();
//! let result = engine.resolve_prop(StyleProperty::Padding, &padding).unwrap();
//! assert_eq!(result.classes, vec!["p-sm", "p-md-tablet"]);
//! ```

// Foundation
pub mod theme;

// Resolution
pub mod style;
pub mod engine;

// Test support
pub mod testing;

pub use engine::{StyleEngine, StyleError, StyleProps};
pub use style::{EmissionResult, ResponsiveProp, StyleProperty};
pub use theme::Theme;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use strata_macros::{responsive, shorthand};
