//! Child-gap translation: inter-child spacing as margins on all but the last child.
//!
//! CSS margins cascade upward through breakpoints, so a margin set for one
//! direction at a narrow breakpoint would leak into a wider breakpoint that
//! switches direction. At every breakpoint where `direction` or `gap` has an
//! explicit entry, both margin axes are therefore re-asserted: the active axis
//! gets the gap, the other axis gets `0`.
//!
//! Between explicit entries each input carries its last explicit value forward;
//! direction starts as [`Direction::Row`], gap starts unset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::emit::{class_name, emit_value, style_key, Emission, EmissionResult};
use crate::style::property::StyleProperty;
use crate::style::responsive::ResponsiveProp;
use crate::style::value::StyleValue;
use crate::theme::breakpoints::{Breakpoint, BreakpointTable};
use crate::theme::tokens::{Category, TokenRegistry};

/// Flex direction of a layout container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
            Direction::RowReverse => "row-reverse",
            Direction::ColumnReverse => "column-reverse",
        }
    }

    /// The main axis. Reversed directions share their forward counterpart's axis.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Row | Direction::RowReverse => Axis::Row,
            Direction::Column | Direction::ColumnReverse => Axis::Column,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a direction string that is not one of the four flex directions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Direction::Row),
            "column" => Ok(Direction::Column),
            "row-reverse" => Ok(Direction::RowReverse),
            "column-reverse" => Ok(Direction::ColumnReverse),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

impl From<Direction> for ResponsiveProp<Direction> {
    fn from(direction: Direction) -> Self {
        ResponsiveProp::Scalar(direction)
    }
}

/// Parse a string-valued direction prop. Entries that are not flex directions
/// are dropped, so they behave as if the breakpoint were absent.
pub fn parse_directions(prop: &ResponsiveProp<String>) -> ResponsiveProp<Direction> {
    let parse = |raw: &String| match raw.parse::<Direction>() {
        Ok(direction) => Some(direction),
        Err(err) => {
            tracing::debug!(%err, "dropping direction");
            None
        }
    };
    match prop {
        ResponsiveProp::Scalar(raw) => match parse(raw) {
            Some(direction) => ResponsiveProp::Scalar(direction),
            None => ResponsiveProp::Map(Default::default()),
        },
        ResponsiveProp::Map(map) => ResponsiveProp::Map(
            map.iter()
                .filter_map(|(bp, raw)| parse(raw).map(|d| (bp.clone(), d)))
                .collect(),
        ),
    }
}

/// Layout axis a gap is applied along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// Margin that separates a child from its next sibling along this axis.
    pub fn margin(self) -> StyleProperty {
        match self {
            Axis::Row => StyleProperty::MarginRight,
            Axis::Column => StyleProperty::MarginBottom,
        }
    }
}

/// Gap to apply at one breakpoint, before lowering into margin classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapDirective {
    pub breakpoint: Breakpoint,
    pub axis: Axis,
    pub gap_value: StyleValue,
}

impl GapDirective {
    /// The active-axis margin followed by the explicit zero on the other axis.
    ///
    /// The zero goes through the same channel as the gap (class for a token,
    /// custom property for a literal), so a later breakpoint can always
    /// override what an earlier one set.
    pub fn lower(&self) -> [Emission; 2] {
        let active = emit_value(self.axis.margin(), &self.gap_value, &self.breakpoint);
        let other = self.axis.other().margin();
        let zero = if self.gap_value.is_token() {
            Emission::class(class_name(other.class_prefix(), "0", &self.breakpoint))
        } else {
            Emission::style(style_key(other, &self.breakpoint), "0".to_string())
        };
        [active, zero]
    }
}

/// Effective `(direction, gap)` at every breakpoint where either input is explicit.
pub fn gap_directives(
    table: &BreakpointTable,
    registry: &TokenRegistry,
    direction: &ResponsiveProp<Direction>,
    gap: &ResponsiveProp<String>,
) -> Vec<GapDirective> {
    let directions = direction.resolve(table);
    let gaps = gap.resolve(table);

    let mut effective_direction = Direction::default();
    let mut effective_gap: Option<&String> = None;
    let mut directives = Vec::new();

    for breakpoint in table {
        let direction_here = directions
            .iter()
            .find(|r| r.breakpoint.name == breakpoint.name);
        let gap_here = gaps.iter().find(|r| r.breakpoint.name == breakpoint.name);
        if direction_here.is_none() && gap_here.is_none() {
            continue;
        }

        if let Some(r) = direction_here {
            effective_direction = *r.value;
        }
        if let Some(r) = gap_here {
            effective_gap = Some(r.value);
        }

        let Some(raw) = effective_gap else {
            continue;
        };
        let gap_value = StyleValue::classify(registry, Category::Spacing, raw);
        if !gap_value.is_emittable(Category::Spacing) {
            tracing::debug!(
                gap = %raw,
                breakpoint = %breakpoint.name,
                "skipping child gap: not a spacing token or length"
            );
            continue;
        }

        directives.push(GapDirective {
            breakpoint: breakpoint.clone(),
            axis: effective_direction.axis(),
            gap_value,
        });
    }

    directives
}

/// Margin classes (and literal styles) for every child except the last.
pub fn translate_gap(
    table: &BreakpointTable,
    registry: &TokenRegistry,
    direction: &ResponsiveProp<Direction>,
    gap: &ResponsiveProp<String>,
) -> EmissionResult {
    gap_directives(table, registry, direction, gap)
        .iter()
        .flat_map(GapDirective::lower)
        .collect()
}

/// One result per child in render order; the last child gets an empty result.
pub fn child_gaps(
    table: &BreakpointTable,
    registry: &TokenRegistry,
    direction: &ResponsiveProp<Direction>,
    gap: &ResponsiveProp<String>,
    child_count: usize,
) -> Vec<EmissionResult> {
    if child_count == 0 {
        return Vec::new();
    }
    let shared = translate_gap(table, registry, direction, gap);
    let mut children = vec![shared; child_count - 1];
    children.push(EmissionResult::new());
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> BreakpointTable {
        BreakpointTable::default()
    }

    fn registry() -> TokenRegistry {
        TokenRegistry::new().with_tokens(Category::Spacing, ["xs", "sm", "md", "lg", "xl"])
    }

    fn classes(direction: ResponsiveProp<Direction>, gap: ResponsiveProp<String>) -> Vec<String> {
        translate_gap(&table(), &registry(), &direction, &gap).classes
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("column-reverse".parse::<Direction>(), Ok(Direction::ColumnReverse));
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(UnknownDirection("diagonal".into()))
        );
    }

    #[test]
    fn test_parse_directions_drops_invalid() {
        let parsed = parse_directions(&[("base", "column"), ("tablet", "sideways")].into());
        assert_eq!(parsed, ResponsiveProp::from_pairs([("base", Direction::Column)]));

        let parsed = parse_directions(&"sideways".into());
        assert_eq!(parsed, ResponsiveProp::Map(Default::default()));
    }

    #[test]
    fn test_axis_margins() {
        assert_eq!(Axis::Row.margin(), StyleProperty::MarginRight);
        assert_eq!(Axis::Column.margin(), StyleProperty::MarginBottom);
        assert_eq!(Direction::RowReverse.axis(), Axis::Row);
        assert_eq!(Direction::ColumnReverse.axis(), Axis::Column);
    }

    #[test]
    fn test_scalar_row_gap() {
        assert_eq!(
            classes(Direction::Row.into(), "md".into()),
            vec!["m-right-md", "m-bottom-0"]
        );
    }

    #[test]
    fn test_default_direction_is_row() {
        let direction = ResponsiveProp::Map(Default::default());
        assert_eq!(classes(direction, "sm".into()), vec!["m-right-sm", "m-bottom-0"]);
    }

    #[test]
    fn test_dual_axis_per_breakpoint() {
        let direction = ResponsiveProp::from_pairs([
            ("base", Direction::Column),
            ("desktop", Direction::Row),
        ]);
        let gap: ResponsiveProp<String> = [("base", "sm"), ("desktop", "lg")].into();
        assert_eq!(
            classes(direction, gap),
            vec![
                "m-bottom-sm",
                "m-right-0",
                "m-right-lg-desktop",
                "m-bottom-0-desktop",
            ]
        );
    }

    #[test]
    fn test_direction_change_carries_gap_forward() {
        let direction = ResponsiveProp::from_pairs([
            ("base", Direction::Column),
            ("tablet", Direction::Row),
        ]);
        assert_eq!(
            classes(direction, "md".into()),
            vec![
                "m-bottom-md",
                "m-right-0",
                "m-right-md-tablet",
                "m-bottom-0-tablet",
            ]
        );
    }

    #[test]
    fn test_gap_change_carries_direction_forward() {
        let gap: ResponsiveProp<String> = [("base", "xs"), ("hd", "xl")].into();
        assert_eq!(
            classes(Direction::Column.into(), gap),
            vec!["m-bottom-xs", "m-right-0", "m-bottom-xl-hd", "m-right-0-hd"]
        );
    }

    #[test]
    fn test_no_gap_before_first_gap_entry() {
        let direction = ResponsiveProp::from_pairs([
            ("base", Direction::Row),
            ("desktop", Direction::Column),
        ]);
        let gap: ResponsiveProp<String> = [("tablet", "sm")].into();
        assert_eq!(
            classes(direction, gap),
            vec![
                "m-right-sm-tablet",
                "m-bottom-0-tablet",
                "m-bottom-sm-desktop",
                "m-right-0-desktop",
            ]
        );
    }

    #[test]
    fn test_literal_gap_emits_style() {
        let result = translate_gap(&table(), &registry(), &Direction::Row.into(), &"12px".into());
        assert!(result.classes.is_empty());
        assert_eq!(result.style.get("--m-right-base").map(String::as_str), Some("12px"));
        assert_eq!(result.style.get("--m-bottom-base").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_literal_gap_across_direction_change() {
        let direction = ResponsiveProp::from_pairs([
            ("base", Direction::Row),
            ("tablet", Direction::Column),
        ]);
        let result = translate_gap(&table(), &registry(), &direction, &"12px".into());
        assert!(result.classes.is_empty());
        assert_eq!(
            result.style.into_iter().collect::<Vec<_>>(),
            vec![
                ("--m-bottom-base".to_string(), "0".to_string()),
                ("--m-bottom-tablet".to_string(), "12px".to_string()),
                ("--m-right-base".to_string(), "12px".to_string()),
                ("--m-right-tablet".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_literal_then_token_gap() {
        let direction = ResponsiveProp::from_pairs([
            ("base", Direction::Row),
            ("desktop", Direction::Column),
        ]);
        let gap: ResponsiveProp<String> = [("base", "12px"), ("desktop", "md")].into();
        let result = translate_gap(&table(), &registry(), &direction, &gap);
        assert_eq!(result.classes, vec!["m-bottom-md-desktop", "m-right-0-desktop"]);
        assert_eq!(
            result.style.into_iter().collect::<Vec<_>>(),
            vec![
                ("--m-bottom-base".to_string(), "0".to_string()),
                ("--m-right-base".to_string(), "12px".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_gap_skips_breakpoint() {
        let gap: ResponsiveProp<String> = [("base", "sm"), ("tablet", "enormous")].into();
        assert_eq!(
            classes(Direction::Row.into(), gap),
            vec!["m-right-sm", "m-bottom-0"]
        );
    }

    #[test]
    fn test_directives() {
        let direction = ResponsiveProp::from_pairs([("tablet", Direction::Column)]);
        let directives = gap_directives(&table(), &registry(), &direction, &"lg".into());
        assert_eq!(
            directives,
            vec![
                GapDirective {
                    breakpoint: Breakpoint::new("base", 0),
                    axis: Axis::Row,
                    gap_value: StyleValue::Token("lg".into()),
                },
                GapDirective {
                    breakpoint: Breakpoint::new("tablet", 768),
                    axis: Axis::Column,
                    gap_value: StyleValue::Token("lg".into()),
                },
            ]
        );
    }

    #[test]
    fn test_last_child_is_bare() {
        let children = child_gaps(&table(), &registry(), &Direction::Row.into(), &"md".into(), 3);
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].classes, vec!["m-right-md", "m-bottom-0"]);
        assert_eq!(children[0], children[1]);
        assert!(children[2].is_empty());
    }

    #[test]
    fn test_no_children() {
        let children = child_gaps(&table(), &registry(), &Direction::Row.into(), &"md".into(), 0);
        assert!(children.is_empty());
    }
}
