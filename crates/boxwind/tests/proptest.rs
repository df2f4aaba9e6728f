//! Property-based tests for the parsers and the aggregator.

use std::collections::HashSet;

use boxwind::{
    parse_appearance, parse_fill, parse_layout, parse_position, parse_stroke, translate,
    StyleProps,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn hex_color() -> impl Strategy<Value = String> {
    prop_oneof!["#[0-9a-f]{3}", "#[0-9a-f]{6}"]
}

fn palette_color() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["red", "blue", "slate", "emerald", "rose"]),
        prop::sample::select(vec![50u32, 100, 200, 500, 900, 950]),
    )
        .prop_map(|(family, shade)| format!("{family}-{shade}"))
}

fn color() -> impl Strategy<Value = String> {
    prop_oneof![hex_color(), palette_color()]
}

/// Loosely shaped property strings mixing known and unknown fragments.
fn property_string() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("Auto".to_string()),
        Just("flow=row".to_string()),
        Just("↵".to_string()),
        Just("gap=auto".to_string()),
        Just("clip".to_string()),
        Just("detached=true".to_string()),
        Just("rotation=(flip-h, 90)".to_string()),
        Just("constraint-x=center".to_string()),
        Just("radius=(1,2,3)".to_string()),
        Just("type=image".to_string()),
        Just("url(/a b.png)".to_string()),
        Just("weight-t=2".to_string()),
        "[a-z]{1,6}=[a-z0-9#%()-]{0,8}",
        "[a-z0-9#%-]{1,8}",
        color(),
    ];
    prop::collection::vec(fragment, 0..8).prop_map(|parts| parts.join(", "))
}

fn is_duplicate_free(classes: &[String]) -> bool {
    let unique: HashSet<&String> = classes.iter().collect();
    unique.len() == classes.len()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every parser returns the same result for the same input.
    #[test]
    fn parsers_are_pure(input in property_string()) {
        let input = Some(input.as_str());
        prop_assert_eq!(parse_layout(input), parse_layout(input));
        prop_assert_eq!(parse_position(input), parse_position(input));
        prop_assert_eq!(parse_appearance(input), parse_appearance(input));
        prop_assert_eq!(parse_fill(input), parse_fill(input));
        prop_assert_eq!(parse_stroke(input), parse_stroke(input));
    }

    /// No parser ever emits the same class twice.
    #[test]
    fn classes_are_duplicate_free(input in property_string()) {
        let input = Some(input.as_str());
        prop_assert!(is_duplicate_free(&parse_layout(input).result.classes));
        prop_assert!(is_duplicate_free(&parse_position(input).result.classes));
        prop_assert!(is_duplicate_free(&parse_appearance(input).classes));
        prop_assert!(is_duplicate_free(&parse_fill(input).classes));
        prop_assert!(is_duplicate_free(&parse_stroke(input).classes));
    }

    /// The aggregate holds every class of every part, once, in first-seen order.
    #[test]
    fn aggregate_is_an_ordered_union(a in property_string(), b in property_string()) {
        let props = StyleProps::new().with_layout(a.clone()).with_stroke(b.clone());
        let result = translate(&props);

        let mut expected: Vec<String> = Vec::new();
        let layout = parse_layout(Some(&a)).result.classes;
        let parts = layout.into_iter().chain(parse_stroke(Some(&b)).classes);
        for class in parts {
            if !expected.contains(&class) {
                expected.push(class);
            }
        }
        prop_assert_eq!(result.classes, expected);
    }

    /// The second stroke color replaces the first.
    #[test]
    fn last_stroke_color_wins(first in color(), second in color()) {
        let result = parse_stroke(Some(&format!("color={first}, weight=1, color={second}")));
        let colors: Vec<&String> = result
            .classes
            .iter()
            .filter(|c| c.starts_with("border-"))
            .collect();
        prop_assert_eq!(colors.len(), 1);
        prop_assert!(colors[0].contains(&second.to_ascii_lowercase()));
    }

    /// The second fill color replaces the first.
    #[test]
    fn last_fill_color_wins(first in color(), second in color()) {
        let result = parse_fill(Some(&format!("{first}, {second}, opacity=100")));
        let colors: Vec<&String> = result
            .classes
            .iter()
            .filter(|c| !c.starts_with("bg-opacity"))
            .collect();
        prop_assert_eq!(colors.len(), 1);
        prop_assert!(colors[0].contains(&second.to_ascii_lowercase()));
    }

    /// Any uniform stroke weight yields exactly one weight class.
    #[test]
    fn uniform_weight_is_single(first in 0u32..20, second in 0u32..20) {
        let input = format!("color=black, weight={first}, weight-t=3, weight={second}");
        let result = parse_stroke(Some(&input));
        prop_assert!(result.errors.is_empty());
        prop_assert_eq!(result.classes.len(), 2);
        prop_assert!(!result.classes.iter().any(|c| c.starts_with("border-t")));
    }

    /// Rotations that differ by whole turns render the same class.
    #[test]
    fn rotation_is_periodic(degrees in -720i32..720, turns in -2i32..3) {
        let base = parse_position(Some(&format!("detached=false, rotation={degrees}")));
        let turned_degrees = degrees + 360 * turns;
        let turned = parse_position(Some(&format!("detached=false, rotation={turned_degrees}")));
        prop_assert_eq!(base.result.classes, turned.result.classes);
    }
}
