//! Ordering Conformance Tests
//!
//! Property-based tests verifying order resolution and ordered extraction.
//! Every test injects its own registry so none depend on process state.

use coordinates::prelude::*;
use proptest::prelude::*;

declare_space!(Lonlat(LonlatKeys), ["lat", "lon"], order = ["lon", "lat"]);

fn coordinate_strategy() -> impl Strategy<Value = Coordinate<i32>> {
    prop::collection::btree_map("[a-h]{1,2}", any::<i32>(), 1..8).prop_map(Coordinate::new)
}

// A coordinate together with a shuffled permutation of its keys
fn with_permutation() -> impl Strategy<Value = (Coordinate<i32>, Vec<String>)> {
    coordinate_strategy().prop_flat_map(|c| {
        let keys: Vec<String> = c.iter().map(|(k, _)| k.to_owned()).collect();
        (Just(c), Just(keys).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn test_fallback_is_reverse_lexicographic(c in coordinate_strategy()) {
        let registry = OrderRegistry::new();
        let mut expected: Vec<&str> = c.iter().map(|(k, _)| k).collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        let resolved = c.resolve_order(&registry);
        prop_assert_eq!(resolved.as_slice().to_vec(), expected);
    }

    #[test]
    fn test_explicit_extraction_follows_request((c, keys) in with_permutation()) {
        let values = c.to_list_in(Order::new(keys.clone())).unwrap();
        for (key, value) in keys.iter().zip(values) {
            prop_assert_eq!(c[key.as_str()], value);
        }
    }

    #[test]
    fn test_instance_order_beats_registry((c, keys) in with_permutation()) {
        let registry = OrderRegistry::new();
        let mut reversed = keys.clone();
        reversed.reverse();
        registry.set_default_order(reversed);

        let own = c.clone().with_order(Order::new(keys.clone())).unwrap();
        prop_assert_eq!(own.resolve_order(&registry), Order::new(keys));
    }

    #[test]
    fn test_registry_used_only_on_exact_match((c, keys) in with_permutation()) {
        let registry = OrderRegistry::new();
        registry.set_default_order(Order::new(keys.clone()));
        prop_assert_eq!(c.resolve_order(&registry), Order::new(keys.clone()));

        let mut extended = keys;
        extended.push("zzz".to_string());
        registry.set_default_order(extended);
        prop_assert_eq!(c.resolve_order(&registry), Order::reverse_lexicographic(c.native_keys()));
    }

    #[test]
    fn test_order_never_affects_equality((c, keys) in with_permutation()) {
        let ordered = c.clone().with_order(Order::new(keys)).unwrap();
        prop_assert_eq!(ordered, c);
    }

    #[test]
    fn test_extraction_rejects_non_permutations((c, mut keys) in with_permutation()) {
        keys.pop();
        prop_assert!(
            matches!(c.to_list_in(Order::new(keys)), Err(Error::KeySetMismatch { .. })),
            "partial order accepted"
        );
    }
}

#[test]
fn test_declared_order_sits_between_instance_and_registry() {
    let registry = OrderRegistry::new();
    registry.set_default_order(["lat", "lon"]);

    let p = Lonlat::<f64>::from_keywords([("lat", 1.0), ("lon", 2.0)]).unwrap();
    assert_eq!(p.resolve_order(&registry), Order::new(["lon", "lat"]));

    let own = p.with_order(["lat", "lon"]).unwrap();
    assert_eq!(own.resolve_order(&registry), Order::new(["lat", "lon"]));
}

#[test]
fn test_clearing_order_restores_fallback() {
    let registry = OrderRegistry::new();
    let mut c = coordinate!(a = 1, b = 2).with_order("ab").unwrap();
    assert_eq!(c.resolve_order(&registry), Order::from("ab"));
    c.clear_order();
    assert_eq!(c.resolve_order(&registry), Order::from("ba"));
}
