//! Arithmetic Law Conformance Tests
//!
//! Property-based tests verifying elementwise arithmetic behaves like the
//! underlying scalar ring, key by key.

use coordinates::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Strategy for integer coordinates over a small key pool
fn int_coordinate_strategy() -> impl Strategy<Value = Coordinate<i64>> {
    prop::collection::btree_map("[a-f]", -1000i64..1000, 0..6).prop_map(Coordinate::new)
}

// Two integer coordinates sharing one key set
fn int_pair_strategy() -> impl Strategy<Value = (Coordinate<i64>, Coordinate<i64>)> {
    prop::collection::btree_map("[a-f]", (-1000i64..1000, -1000i64..1000), 0..6).prop_map(
        |entries: BTreeMap<String, (i64, i64)>| {
            let left = entries.iter().map(|(k, (l, _))| (k.clone(), *l));
            let right = entries.iter().map(|(k, (_, r))| (k.clone(), *r));
            (Coordinate::new(left), Coordinate::new(right))
        },
    )
}

proptest! {
    #[test]
    fn test_additive_identity(m in int_coordinate_strategy()) {
        prop_assert_eq!(&m + 0, m.clone());
        prop_assert_eq!(0 + &m, m);
    }

    #[test]
    fn test_multiplicative_identity(m in int_coordinate_strategy()) {
        prop_assert_eq!(&m * 1, m);
    }

    #[test]
    fn test_self_difference_is_zero(m in int_coordinate_strategy()) {
        let zero = (&m - &m).unwrap();
        prop_assert!(zero.same_keys(&m));
        prop_assert_eq!(zero.sum(), 0);
        prop_assert!(zero.cmp_eq(0).unwrap().all());
    }

    #[test]
    fn test_addition_commutativity((a, b) in int_pair_strategy()) {
        prop_assert_eq!((&a + &b).unwrap(), (&b + &a).unwrap());
    }

    #[test]
    fn test_negation_is_reflected_subtraction(m in int_coordinate_strategy()) {
        prop_assert_eq!(-&m, 0 - &m);
        prop_assert_eq!(-(-&m), m);
    }

    #[test]
    fn test_division_identity((a, b) in int_pair_strategy()) {
        prop_assume!(b.iter().all(|(_, &v)| v != 0));
        let (quot, rem) = a.try_div_mod(&b).unwrap();
        let rebuilt = ((&b * &quot).unwrap() + rem).unwrap();
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn test_sum_is_additive((a, b) in int_pair_strategy()) {
        prop_assert_eq!((&a + &b).unwrap().sum(), a.sum() + b.sum());
    }

    #[test]
    fn test_results_keep_left_order((a, b) in int_pair_strategy()) {
        let keys: Vec<String> = a.iter().map(|(k, _)| k.to_owned()).rev().collect();
        let ordered = a.clone().with_order(Order::new(keys.clone())).unwrap();
        let sum = (&ordered + &b).unwrap();
        prop_assert_eq!(sum.explicit_order(), Some(&Order::new(keys)));
    }

    #[test]
    fn test_norm_bounds(m in int_coordinate_strategy()) {
        let l1 = m.norm(1.0).unwrap();
        let l2 = m.norm(2.0).unwrap();
        let linf = m.norm(f64::INFINITY).unwrap();
        prop_assert!(linf <= l2 + 1e-9);
        prop_assert!(l2 <= l1 + 1e-9);
        prop_assert!((m.magnitude() - l2).abs() < 1e-9);
    }
}

#[test]
fn test_mismatched_key_sets_never_combine() {
    let a = coordinate!(x = 1);
    let b = coordinate!(y = 1);
    assert!(matches!(&a + &b, Err(Error::KeySetMismatch { .. })));
    assert!(matches!(a.try_pow(&b), Err(Error::KeySetMismatch { .. })));
    assert!(matches!(a.cmp_lt(&b), Err(Error::KeySetMismatch { .. })));
}
