//! Fixture themes.

use crate::theme::breakpoints::BreakpointTable;
use crate::theme::defaults;
use crate::theme::tokens::{Category, TokenRegistry};
use crate::theme::Theme;

/// Spacing scale of the fixture theme (no `0` token, so `0` is a literal).
pub const SCENARIO_SPACING: &[&str] = &["xs", "sm", "md", "lg", "xl"];

/// Stock breakpoints (`base`, `tablet`, `desktop`, `hd`) and stock tokens,
/// except that spacing is limited to [`SCENARIO_SPACING`].
pub fn scenario_theme() -> Theme {
    let stock = defaults::registry();
    let mut tokens =
        TokenRegistry::new().with_tokens(Category::Spacing, SCENARIO_SPACING.iter().copied());
    for category in Category::ALL
        .into_iter()
        .filter(|c| *c != Category::Spacing)
    {
        tokens.register(category, stock.tokens(category));
    }
    Theme::new(BreakpointTable::default(), tokens)
}
