//! Ordered extraction
//!
//! Sequences of keys, values or items in either the resolved order or an
//! explicitly requested one. A requested order must be an exact permutation
//! of the coordinate's keys.

use super::Coordinate;
use crate::error::{Error, Result};
use crate::order::Order;
use crate::space::KeySpace;

impl<V, S: KeySpace> Coordinate<V, S> {
    fn checked(&self, order: impl Into<Order>) -> Result<Order> {
        let order = order.into();
        if order.is_permutation_of(self.native_keys()) {
            Ok(order)
        } else {
            Err(Error::key_set_mismatch(self.native_keys(), order.iter()))
        }
    }

    /// Keys in resolved order
    pub fn keys(&self) -> Vec<&str> {
        let order = self.order();
        order
            .iter()
            .filter_map(|key| self.store().get_key_value(key))
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Keys in `order`
    pub fn keys_in(&self, order: impl Into<Order>) -> Result<Vec<&str>> {
        let order = self.checked(order)?;
        Ok(order
            .iter()
            .filter_map(|key| self.store().get_key_value(key))
            .map(|(k, _)| k.as_str())
            .collect())
    }

    /// Values in resolved order
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.collect_values(&self.order())
    }

    /// Values in `order`
    pub fn values_in(&self, order: impl Into<Order>) -> Result<Vec<V>>
    where
        V: Clone,
    {
        let order = self.checked(order)?;
        Ok(self.collect_values(&order))
    }

    /// `(key, value)` pairs in resolved order
    pub fn items(&self) -> Vec<(&str, V)>
    where
        V: Clone,
    {
        self.collect_items(&self.order())
    }

    /// `(key, value)` pairs in `order`
    pub fn items_in(&self, order: impl Into<Order>) -> Result<Vec<(&str, V)>>
    where
        V: Clone,
    {
        let order = self.checked(order)?;
        Ok(self.collect_items(&order))
    }

    /// Values as a list in resolved order
    pub fn to_list(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values()
    }

    /// Values as a list in `order`
    pub fn to_list_in(&self, order: impl Into<Order>) -> Result<Vec<V>>
    where
        V: Clone,
    {
        self.values_in(order)
    }

    fn collect_values(&self, order: &Order) -> Vec<V>
    where
        V: Clone,
    {
        order
            .iter()
            .filter_map(|key| self.store().get(key).cloned())
            .collect()
    }

    fn collect_items(&self, order: &Order) -> Vec<(&str, V)>
    where
        V: Clone,
    {
        order
            .iter()
            .filter_map(|key| self.store().get_key_value(key))
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Coordinate, Error, Order};

    fn abc() -> Coordinate<f64> {
        Coordinate::new([("a", 10.0), ("b", -20.0), ("c", 1.5)])
    }

    #[test]
    fn test_explicit_orders() {
        let c = abc();
        assert_eq!(c.to_list_in("cba").unwrap(), vec![1.5, -20.0, 10.0]);
        assert_eq!(c.to_list_in("abc").unwrap(), vec![10.0, -20.0, 1.5]);
        assert_eq!(c.keys_in("bca").unwrap(), vec!["b", "c", "a"]);
        assert_eq!(
            c.items_in("bac").unwrap(),
            vec![("b", -20.0), ("a", 10.0), ("c", 1.5)]
        );
    }

    #[test]
    fn test_instance_order_drives_resolved_views() {
        let c = abc().with_order("bac").unwrap();
        assert_eq!(c.keys(), vec!["b", "a", "c"]);
        assert_eq!(c.values(), vec![-20.0, 10.0, 1.5]);
        assert_eq!(c.items()[0], ("b", -20.0));
        assert_eq!(c.to_list(), c.values());
    }

    #[test]
    fn test_requested_order_must_be_permutation() {
        let c = abc();
        let missing = c.to_list_in("ab");
        assert_eq!(
            missing,
            Err(Error::KeySetMismatch {
                left: vec!["a".into(), "b".into(), "c".into()],
                right: vec!["a".into(), "b".into()],
            })
        );
        assert!(c.keys_in("abcd").is_err());
        assert!(c.items_in(Order::new(["a", "b", "z"])).is_err());
    }

    #[test]
    fn test_two_keys_reversed() {
        let c = Coordinate::<i32>::from_sequence([1, 2], "xy").unwrap();
        assert_eq!(c.to_list_in("yx").unwrap(), vec![2, 1]);
    }
}
