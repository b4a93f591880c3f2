//! Theme: the token registry and breakpoint table the engine resolves against.
//!
//! A [`Theme`] is built once by the host, either from the stock
//! [`defaults`] or from a JSON theme file, and is never mutated afterwards.
//! The engine only ever borrows it.
//!
//! Theme file format:
//!
//! ```json
//! {
//!   "breakpoints": [{ "name": "base", "minWidthPx": 0 }, { "name": "tablet", "minWidthPx": 768 }],
//!   "tokens": { "spacing": ["sm", "md"], "font-size": ["sm", "lg"] }
//! }
//! ```
//!
//! Both sections are optional. A missing `breakpoints` section uses the stock
//! table; each category listed under `tokens` replaces the stock tokens of that
//! category, and unlisted categories keep their stock tokens.

pub mod breakpoints;
pub mod defaults;
pub mod tokens;

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use breakpoints::{Breakpoint, BreakpointError, BreakpointTable};
pub use tokens::{Category, TokenRegistry};

/// Errors from loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse theme file")]
    ParseConfig(#[from] serde_json::Error),
    #[error("invalid breakpoint table")]
    Breakpoints(#[from] BreakpointError),
    #[error("unknown token category in theme file: {0}")]
    UnknownCategory(String),
}

/// Token registry plus breakpoint table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub breakpoints: BreakpointTable,
    pub tokens: TokenRegistry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    breakpoints: Option<Vec<Breakpoint>>,
    #[serde(default)]
    tokens: HashMap<String, Vec<String>>,
}

impl Theme {
    pub fn new(breakpoints: BreakpointTable, tokens: TokenRegistry) -> Self {
        Self { breakpoints, tokens }
    }

    /// Parse a theme document, filling omitted sections from the stock theme.
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_str(json)?;

        let breakpoints = match file.breakpoints {
            Some(entries) => BreakpointTable::new(entries)?,
            None => BreakpointTable::default(),
        };

        let mut custom_tokens = HashMap::with_capacity(file.tokens.len());
        for (name, values) in file.tokens {
            let category = name
                .parse::<Category>()
                .map_err(|tokens::UnknownCategory(name)| ThemeError::UnknownCategory(name))?;
            custom_tokens.insert(category, values);
        }

        let stock = defaults::registry();
        let mut tokens = TokenRegistry::new();
        for category in Category::ALL {
            match custom_tokens.get(&category) {
                Some(custom) => tokens.register(category, custom.iter().cloned()),
                None => tokens.register(category, stock.tokens(category)),
            }
        }

        Ok(Self { breakpoints, tokens })
    }

    /// Read and parse a theme file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Like [`Theme::load`], but falls back to the stock theme on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to load theme file; using defaults");
            Self::default()
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointTable::default(),
            tokens: defaults::registry(),
        }
    }
}
