//! Property-based tests for the expansion engine.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated templates.

use std::collections::HashSet;

use proptest::prelude::*;

use guesswork::core::arrangement::{arrangement_count, ArrangementBounds, Arrangements};
use guesswork::core::combine::{candidate_count, combine};
use guesswork::core::parser::parse;
use guesswork::core::template::Template;
use guesswork::core::types::Delimiters;
use guesswork::engine::{generate, tally, Candidates};

/// Strategy for generating plain template characters (never delimiters).
fn plain_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('!'),
        Just('@'),
        Just('$'),
        Just('é'),
    ]
}

/// Strategy for one template position: a plain character or a group.
fn position() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => plain_char().prop_map(|c| c.to_string()),
        1 => prop::collection::vec(plain_char(), 1..3)
            .prop_map(|cs| format!("[{}]", cs.into_iter().collect::<String>())),
    ]
}

/// Strategy for a well-formed template with no empty groups.
fn template_string() -> impl Strategy<Value = String> {
    prop::collection::vec(position(), 0..4).prop_map(|parts| parts.concat())
}

/// Strategy for a small list of templates (output grows factorially).
fn template_list() -> impl Strategy<Value = Vec<Template>> {
    prop::collection::vec(template_string(), 0..4).prop_map(|raws| {
        Template::parse_all(raws, Delimiters::default()).expect("strategy yields valid templates")
    })
}

fn factorial_sum(n: usize) -> u128 {
    (1..=n)
        .map(|k| ((n - k + 1)..=n).map(|x| x as u128).product::<u128>())
        .sum()
}

proptest! {
    /// Every concrete string has one character per slot.
    #[test]
    fn concrete_length_equals_slot_count(raw in template_string()) {
        let t = Template::new(raw, Delimiters::default()).unwrap();
        let slots = t.slots().len();
        for s in t.concrete() {
            prop_assert_eq!(s.chars().count(), slots);
        }
    }

    /// Expansion size is the product of slot sizes.
    #[test]
    fn expansion_size_is_product(raw in template_string()) {
        let t = Template::new(raw, Delimiters::default()).unwrap();
        let expected: usize = t.slots().slots().iter().map(|s| s.len()).product();
        prop_assert_eq!(t.concrete().len(), expected);
        prop_assert_eq!(t.slots().expansion_size(), Some(expected as u128));
    }

    /// Each expansion picks an allowed character at every position.
    #[test]
    fn concrete_strings_draw_from_slots(raw in template_string()) {
        let slots = parse(&raw, Delimiters::default()).unwrap();
        let t = Template::new(raw, Delimiters::default()).unwrap();
        for s in t.concrete() {
            for (c, slot) in s.chars().zip(slots.slots()) {
                prop_assert!(slot.alternatives().contains(&c));
            }
        }
    }

    /// A template without groups expands to itself.
    #[test]
    fn plain_template_is_identity(chars in prop::collection::vec(plain_char(), 0..8)) {
        let raw: String = chars.into_iter().collect();
        let t = Template::new(raw.clone(), Delimiters::default()).unwrap();
        prop_assert_eq!(t.concrete(), &[raw]);
    }

    /// Arrangement count is the sum of falling factorials.
    #[test]
    fn arrangement_count_invariant(n in 0usize..7) {
        let enumerated = Arrangements::new(n).count() as u128;
        prop_assert_eq!(enumerated, factorial_sum(n));
        prop_assert_eq!(arrangement_count(n, ArrangementBounds::default()), Some(enumerated));
    }

    /// Arrangements are distinct and never repeat an index.
    #[test]
    fn arrangements_are_injective_and_unique(n in 0usize..6) {
        let mut seen = HashSet::new();
        for a in Arrangements::new(n) {
            let distinct: HashSet<_> = a.iter().collect();
            prop_assert_eq!(distinct.len(), a.len());
            prop_assert!(a.iter().all(|&i| i < n));
            prop_assert!(seen.insert(a));
        }
    }

    /// Bounded enumeration is the unbounded one, filtered by length.
    #[test]
    fn bounds_filter_preserves_order(n in 0usize..6, min in 1usize..5, extra in 0usize..4) {
        let bounds = ArrangementBounds { min, max: Some(min + extra) };
        let bounded: Vec<_> = Arrangements::with_bounds(n, bounds).collect();
        let filtered: Vec<_> = Arrangements::new(n)
            .filter(|a| a.len() >= min && a.len() <= min + extra)
            .collect();
        prop_assert_eq!(bounded, filtered);
    }

    /// Candidate length is the sum of the arrangement's slot counts.
    #[test]
    fn combiner_length_invariant(templates in template_list()) {
        for a in Arrangements::new(templates.len()) {
            let selected: Vec<&Template> = a.iter().map(|&i| &templates[i]).collect();
            let expected: usize = selected.iter().map(|t| t.slots().len()).sum();
            for candidate in combine(&selected) {
                prop_assert_eq!(candidate.chars().count(), expected);
            }
        }
    }

    /// Generation is deterministic and the lazy stream matches the materialized one.
    #[test]
    fn generation_is_deterministic(templates in template_list()) {
        let first = generate(&templates);
        let second: Vec<String> = Candidates::new(&templates).collect();
        prop_assert_eq!(first, second);
    }

    /// Closed-form counts agree with what is generated.
    #[test]
    fn tally_agrees_with_generation(templates in template_list(), min in 1usize..4, extra in 0usize..3) {
        let bounds = ArrangementBounds { min, max: Some(min + extra) };
        let counted = tally(&templates, bounds);
        let generated = Candidates::with_bounds(&templates, bounds).count() as u128;
        prop_assert_eq!(counted.candidates, Some(generated));

        let sizes: Vec<u128> = templates.iter().map(|t| t.concrete().len() as u128).collect();
        prop_assert_eq!(candidate_count(&sizes, bounds), Some(generated));
    }

    /// Any unbalanced delimiter is rejected.
    #[test]
    fn unbalanced_templates_rejected(prefix in template_string(), suffix in prop::collection::vec(plain_char(), 0..4)) {
        let tail: String = suffix.into_iter().collect();
        let unclosed = format!("{}[{}", prefix, tail);
        let stray = format!("{}]{}", prefix, tail);
        prop_assert!(parse(&unclosed, Delimiters::default()).is_err());
        prop_assert!(parse(&stray, Delimiters::default()).is_err());
    }
}
