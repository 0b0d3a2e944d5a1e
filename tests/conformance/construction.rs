//! Construction Conformance Tests
//!
//! Property-based tests verifying every construction shape normalizes to
//! the same content, and that invalid shapes are rejected without producing
//! a partial coordinate.

use coordinates::prelude::*;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

declare_space!(Xyzc(XyzcKeys), ["x", "y", "z", "c"]);

fn entries_strategy() -> impl Strategy<Value = BTreeMap<String, f64>> {
    prop::collection::btree_map("[a-z]{1,3}", -1.0e6f64..1.0e6, 0..8)
}

proptest! {
    #[test]
    fn test_mapping_pairs_and_keywords_agree(entries in entries_strategy()) {
        let hashed: HashMap<String, f64> = entries.clone().into_iter().collect();
        let from_mapping = Coordinate::<f64>::from_mapping(hashed).unwrap();
        let from_pairs = Coordinate::<f64>::from_pairs(entries.clone()).unwrap();
        let from_keywords = Coordinate::<f64>::from_keywords(entries).unwrap();
        prop_assert_eq!(&from_mapping, &from_pairs);
        prop_assert_eq!(&from_pairs, &from_keywords);
    }

    #[test]
    fn test_items_round_trip(entries in entries_strategy()) {
        let m = Coordinate::new(entries);
        let rebuilt = Coordinate::<f64>::from_pairs(m.items()).unwrap();
        prop_assert_eq!(rebuilt, m);
    }

    #[test]
    fn test_sequence_with_order_names_values(entries in entries_strategy()) {
        let keys: Vec<String> = entries.keys().cloned().collect();
        let values: Vec<f64> = entries.values().copied().collect();
        let c = Coordinate::<f64>::from_sequence(values.clone(), Order::new(keys.clone())).unwrap();
        prop_assert_eq!(c.to_list_in(Order::new(keys)).unwrap(), values);
        prop_assert_eq!(c, Coordinate::new(entries));
    }

    #[test]
    fn test_length_mismatch_rejected(entries in entries_strategy(), extra in 1usize..4) {
        let keys: Vec<String> = entries.keys().cloned().collect();
        let values = vec![0.0; keys.len() + extra];
        let err = Coordinate::<f64>::from_sequence(values, Order::new(keys.clone())).unwrap_err();
        prop_assert_eq!(err, Error::LengthMismatch { expected: keys.len(), actual: keys.len() + extra });
    }

    #[test]
    fn test_keywords_override_pairs(entries in entries_strategy(), bump in 1.0f64..10.0) {
        prop_assume!(!entries.is_empty());
        let overrides: Vec<(String, f64)> =
            entries.iter().map(|(k, v)| (k.clone(), v + bump)).collect();
        let c = Coordinate::<f64>::from_mixed(entries.clone(), overrides).unwrap();
        for (k, v) in &entries {
            prop_assert_eq!(c[k.as_str()], v + bump);
        }
    }

    #[test]
    fn test_fixed_key_space_rejects_other_sets(entries in entries_strategy()) {
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        prop_assume!(keys != ["c", "x", "y", "z"]);
        let result = Xyzc::<f64>::from_pairs(entries.clone());
        prop_assert!(
            matches!(result, Err(Error::FixedKeySetViolation { .. })),
            "accepted keys {:?}",
            keys
        );
    }
}

#[test]
fn test_ambiguous_shapes() {
    let registry = OrderRegistry::new();

    let keywords_and_values = Coordinate::<i32>::builder()
        .args([1, 2])
        .order("ab")
        .kwarg("c", 3)
        .build_with(&registry);
    assert!(matches!(keywords_and_values, Err(Error::AmbiguousConstruction(_))));

    let pairs_and_values = Coordinate::<i32>::builder()
        .source([("a", 1)])
        .arg(2)
        .build_with(&registry);
    assert!(matches!(pairs_and_values, Err(Error::AmbiguousConstruction(_))));
}

#[test]
fn test_unresolved_positional_order() {
    let registry = OrderRegistry::new();
    let err = Coordinate::<i32>::builder()
        .args([1, 2, 3])
        .build_with(&registry)
        .unwrap_err();
    assert_eq!(err, Error::OrderUnresolved);
}

#[test]
fn test_fixed_key_space_accepts_any_construction_order() {
    let registry = OrderRegistry::new();
    let p = Xyzc::<i32>::builder()
        .args([4, 3, 2, 1])
        .order("cxyz")
        .build_with(&registry)
        .unwrap();
    assert_eq!(p.to_list_in("xyzc").unwrap(), vec![3, 2, 1, 4]);
}
