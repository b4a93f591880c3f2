//! Integration tests for strata.
//!
//! These tests exercise the public API from outside the crate, the way a
//! component layer would: build a theme, resolve props, translate child gaps.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use strata::engine::{StyleEngine, StyleProps};
use strata::style::gap::parse_directions;
use strata::style::{Direction, Emission, ResponsiveProp, ShorthandError, StyleProperty};
use strata::testing::{render_emission, scenario_theme};
use strata::theme::{Category, Theme, TokenRegistry};

// ---------------------------------------------------------------------------
// Responsive resolution
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_padding() {
    let theme = scenario_theme();
    let engine = StyleEngine::new(&theme);
    let padding: ResponsiveProp<String> =
        [("base", "sm"), ("tablet", "md"), ("desktop", "lg"), ("hd", "xl")].into();

    let result = engine.resolve_prop(StyleProperty::Padding, &padding).unwrap();

    insta::assert_snapshot!(render_emission(&result), @"p-sm p-md-tablet p-lg-desktop p-xl-hd | -");
}

#[test]
fn test_map_order_independence() {
    let theme = scenario_theme();
    let engine = StyleEngine::new(&theme);
    let a: ResponsiveProp<String> = [("tablet", "md"), ("base", "sm"), ("hd", "xl")].into();
    let b: ResponsiveProp<String> = [("hd", "xl"), ("base", "sm"), ("tablet", "md")].into();

    let names = |prop: &ResponsiveProp<String>| -> Vec<(String, String)> {
        engine
            .resolve(prop)
            .into_iter()
            .map(|r| (r.breakpoint.name.clone(), r.value.clone()))
            .collect()
    };
    let expected = vec![
        ("base".to_string(), "sm".to_string()),
        ("tablet".to_string(), "md".to_string()),
        ("hd".to_string(), "xl".to_string()),
    ];
    assert_eq!(names(&a), expected);
    assert_eq!(names(&b), expected);
    assert_eq!(
        engine.resolve_prop(StyleProperty::Margin, &a).unwrap(),
        engine.resolve_prop(StyleProperty::Margin, &b).unwrap()
    );
}

#[test]
fn test_props_from_json() {
    let theme = Theme::default();
    let engine = StyleEngine::new(&theme);
    let raw: HashMap<StyleProperty, ResponsiveProp<String>> = serde_json::from_str(
        r##"{"background": {"base": "primary-100", "desktop": "#101010"}, "z-index": "modal"}"##,
    )
    .unwrap();

    let props: StyleProps = [StyleProperty::Background, StyleProperty::ZIndex]
        .into_iter()
        .filter_map(|p| raw.get(&p).map(|v| (p, v.clone())))
        .collect();
    let result = engine.resolve_props(&props).unwrap();

    insta::assert_snapshot!(
        render_emission(&result),
        @"bg-primary-100 z-modal | --bg-desktop: #101010"
    );
}

// ---------------------------------------------------------------------------
// Shorthand and classification
// ---------------------------------------------------------------------------

#[test]
fn test_shorthand_laws() {
    let theme = scenario_theme();
    let engine = StyleEngine::new(&theme);

    let q = engine.expand_shorthand("md").unwrap();
    assert_eq!(q.edges(), [&"md".to_string(); 4]);

    let q = engine.expand_shorthand("sm md").unwrap();
    assert_eq!((q.top.as_str(), q.bottom.as_str()), ("sm", "sm"));
    assert_eq!((q.left.as_str(), q.right.as_str()), ("md", "md"));

    let q = engine.expand_shorthand("sm md lg").unwrap();
    assert_eq!(
        [q.top.as_str(), q.right.as_str(), q.bottom.as_str(), q.left.as_str()],
        ["sm", "md", "lg", "md"]
    );

    let q = engine.expand_shorthand("sm md lg 0").unwrap();
    assert_eq!(
        [q.top.as_str(), q.right.as_str(), q.bottom.as_str(), q.left.as_str()],
        ["sm", "md", "lg", "0"]
    );

    assert!(matches!(
        engine.expand_shorthand("a b c d e"),
        Err(ShorthandError::InvalidShorthand { slots: 5, .. })
    ));
}

#[test]
fn test_token_vs_literal() {
    let tokens = TokenRegistry::new().with_tokens(Category::Spacing, ["sm", "md", "lg"]);
    let theme = Theme::new(Default::default(), tokens);
    let engine = StyleEngine::new(&theme);

    assert_eq!(
        engine.emit(StyleProperty::Padding, "md", "base"),
        Emission::class("p-md".into())
    );
    assert_eq!(
        engine.emit(StyleProperty::Padding, "227px", "base"),
        Emission::style("--p-base".into(), "227px".into())
    );
    assert!(engine.emit(StyleProperty::Direction, "invalid", "base").is_none());
}

#[test]
fn test_nested_function_literals() {
    let theme = Theme::default();
    let engine = StyleEngine::new(&theme);

    for literal in ["calc(100% - var(--gap))", "calc((100% - 2rem) / 3)"] {
        assert_eq!(
            engine.emit(StyleProperty::Width, literal, "base"),
            Emission::style("--w-base".into(), literal.into())
        );
    }
}

#[test]
fn test_literal_gap_never_outranks_later_breakpoints() {
    let theme = scenario_theme();
    let engine = StyleEngine::new(&theme);
    let direction =
        ResponsiveProp::from_pairs([("base", Direction::Row), ("tablet", Direction::Column)]);

    let gap = engine.translate_gap(&direction, &"12px".into());
    insta::assert_snapshot!(
        render_emission(&gap),
        @"- | --m-bottom-base: 0; --m-bottom-tablet: 12px; --m-right-base: 12px; --m-right-tablet: 0"
    );

    let padding: ResponsiveProp<String> = [("base", "227px"), ("tablet", "md")].into();
    let result = engine.resolve_prop(StyleProperty::Padding, &padding).unwrap();
    insta::assert_snapshot!(render_emission(&result), @"p-md-tablet | --p-base: 227px");
}

#[test]
fn test_invalid_enumerated_prop_does_not_blank_component() {
    let theme = Theme::default();
    let engine = StyleEngine::new(&theme);
    let props = StyleProps::new()
        .with(StyleProperty::Direction, "invalid")
        .with(StyleProperty::Display, "flex")
        .with(StyleProperty::Padding, "0 10px");

    let result = engine.resolve_props(&props).unwrap();

    insta::assert_snapshot!(
        render_emission(&result),
        @"display-flex p-top-0 p-bottom-0 | --p-left-base: 10px; --p-right-base: 10px"
    );
}

#[test]
fn test_reregistering_tokens_is_idempotent() {
    let once = TokenRegistry::new().with_tokens(Category::Spacing, ["sm", "md"]);
    let twice = once.clone().with_tokens(Category::Spacing, ["sm", "md"]);
    let theme_once = Theme::new(Default::default(), once);
    let theme_twice = Theme::new(Default::default(), twice);

    let prop: ResponsiveProp<String> = [("base", "sm"), ("tablet", "12px")].into();
    assert_eq!(
        StyleEngine::new(&theme_once).resolve_prop(StyleProperty::Gap, &prop),
        StyleEngine::new(&theme_twice).resolve_prop(StyleProperty::Gap, &prop)
    );
}

// ---------------------------------------------------------------------------
// Child gap
// ---------------------------------------------------------------------------

#[test]
fn test_child_gap_dual_axis() {
    let theme = scenario_theme();
    let engine = StyleEngine::new(&theme);
    let direction =
        ResponsiveProp::from_pairs([("base", Direction::Column), ("desktop", Direction::Row)]);
    let gap: ResponsiveProp<String> = [("base", "sm"), ("desktop", "lg")].into();

    let children = engine.child_gaps(&direction, &gap, 3);

    for child in &children[..2] {
        assert_eq!(
            child.classes,
            vec!["m-bottom-sm", "m-right-0", "m-right-lg-desktop", "m-bottom-0-desktop"]
        );
    }
    assert!(children[2].is_empty());
}

#[test]
fn test_child_gap_from_string_directions() {
    let theme = scenario_theme();
    let engine = StyleEngine::new(&theme);
    let direction = parse_directions(&[("base", "column"), ("tablet", "bogus")].into());

    let result = engine.translate_gap(&direction, &"md".into());

    insta::assert_snapshot!(render_emission(&result), @"m-bottom-md m-right-0 | -");
}

// ---------------------------------------------------------------------------
// Theme files
// ---------------------------------------------------------------------------

#[test]
fn test_theme_file_drives_resolution() {
    let theme = Theme::from_json_str(
        r#"{
            "breakpoints": [
                {"name": "mobile", "minWidthPx": 0},
                {"name": "wide", "minWidthPx": 1280}
            ],
            "tokens": {"spacing": ["tight", "loose"]}
        }"#,
    )
    .unwrap();
    let engine = StyleEngine::new(&theme);
    let padding: ResponsiveProp<String> =
        [("wide", "loose"), ("mobile", "tight"), ("tablet", "md")].into();

    let result = engine.resolve_prop(StyleProperty::Padding, &padding).unwrap();

    assert_eq!(result.classes, vec!["p-tight", "p-loose-wide"]);
}

// ---------------------------------------------------------------------------
// Determinism and sharing
// ---------------------------------------------------------------------------

#[test]
fn test_determinism_across_threads() {
    let theme = Theme::default();
    let engine = StyleEngine::new(&theme);
    let props = StyleProps::new()
        .with(StyleProperty::Padding, [("hd", "xl"), ("base", "sm 10px")])
        .with(StyleProperty::Background, [("tablet", "danger-500"), ("base", "#fff")])
        .with(StyleProperty::Width, "50%");

    let expected = engine.resolve_props(&props).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| engine.resolve_props(&props).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
