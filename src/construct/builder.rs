//! Construction Disambiguation
//!
//! [`CoordinateBuilder`] collects the pieces of one construction call and
//! normalizes them into a canonical key→value store:
//!
//! | positional source | bare values | keywords | result |
//! |---|---|---|---|
//! | pairs | none | any | pairs, then keywords (keyword wins) |
//! | values | none | none | values named by the order |
//! | none | some | none | values named by the order |
//! | none | none | any | keywords |
//! | values, or none | some / values | some | `AmbiguousConstruction` |
//! | pairs | some | any | `AmbiguousConstruction` |
//!
//! The order naming positional values is the explicit `order`, else the
//! space's declared order, else the registry default.

use super::source::Source;
use crate::coordinate::{Coordinate, Store};
use crate::error::{Error, Result};
use crate::order::{positional_order, Order, OrderRegistry};
use crate::space::{AnyKeys, KeySpace};
use std::marker::PhantomData;

/// Accumulates the arguments of one coordinate construction
#[derive(Debug)]
pub struct CoordinateBuilder<V, S: KeySpace = AnyKeys> {
    sources: Vec<Source<V>>,
    positional: Vec<V>,
    keywords: Vec<(String, V)>,
    order: Option<Order>,
    space: PhantomData<fn() -> S>,
}

impl<V, S: KeySpace> Default for CoordinateBuilder<V, S> {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            positional: Vec::new(),
            keywords: Vec::new(),
            order: None,
            space: PhantomData,
        }
    }
}

impl<V, S: KeySpace> CoordinateBuilder<V, S> {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional source: a mapping, pairs, or a flat value sequence
    pub fn source(mut self, source: impl Into<Source<V>>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// One bare positional value
    pub fn arg(mut self, value: V) -> Self {
        self.positional.push(value);
        self
    }

    /// Several bare positional values
    pub fn args<I: IntoIterator<Item = V>>(mut self, values: I) -> Self {
        self.positional.extend(values);
        self
    }

    /// One keyword value
    pub fn kwarg(mut self, key: impl Into<String>, value: V) -> Self {
        self.keywords.push((key.into(), value));
        self
    }

    /// Several keyword values
    pub fn kwargs<I, K>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        self.keywords
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Explicit order: names positional values and becomes the instance order
    pub fn order(mut self, order: impl Into<Order>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Same as [`order`](Self::order) when `Some`, no-op otherwise
    pub fn maybe_order(mut self, order: Option<Order>) -> Self {
        if order.is_some() {
            self.order = order;
        }
        self
    }

    /// Build against the process-wide order registry
    pub fn build(self) -> Result<Coordinate<V, S>> {
        self.build_with(OrderRegistry::global())
    }

    /// Build against `registry`
    pub fn build_with(self, registry: &OrderRegistry) -> Result<Coordinate<V, S>> {
        let outcome = self
            .disambiguate(registry)
            .and_then(|(store, order)| Coordinate::from_parts(store, order));
        if let Err(err) = &outcome {
            tracing::debug!(space = S::NAME, error = %err, "coordinate construction failed");
        }
        outcome
    }

    #[tracing::instrument(level = "trace", skip_all, fields(space = S::NAME))]
    fn disambiguate(mut self, registry: &OrderRegistry) -> Result<(Store<V>, Option<Order>)> {
        if self.sources.len() > 1 {
            return Err(Error::AmbiguousConstruction(format!(
                "{} positional sources given, at most one is allowed",
                self.sources.len()
            )));
        }

        let source = self.sources.pop();
        let has_positional = !self.positional.is_empty();
        match source {
            Some(Source::Pairs(_)) if has_positional => Err(Error::AmbiguousConstruction(
                "a key-value source cannot be combined with positional values".into(),
            )),
            Some(Source::Values(_)) if has_positional => Err(Error::AmbiguousConstruction(
                "a value sequence cannot be combined with further positional values".into(),
            )),
            Some(Source::Pairs(pairs)) => {
                let mut store: Store<V> = pairs.into_iter().collect();
                store.extend(self.keywords);
                Ok((store, self.order))
            }
            Some(Source::Values(values)) => self.name_positional(values, registry),
            None if has_positional => {
                let values = std::mem::take(&mut self.positional);
                self.name_positional(values, registry)
            }
            None => Ok((self.keywords.into_iter().collect(), self.order)),
        }
    }

    fn name_positional(
        self,
        values: Vec<V>,
        registry: &OrderRegistry,
    ) -> Result<(Store<V>, Option<Order>)> {
        if !self.keywords.is_empty() {
            return Err(Error::AmbiguousConstruction(
                "keyword values cannot be combined with order-driven positional values".into(),
            ));
        }

        let keys = positional_order(self.order.as_ref(), S::DEFAULT_ORDER, registry)
            .ok_or(Error::OrderUnresolved)?;
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                expected: keys.len(),
                actual: values.len(),
            });
        }

        let store: Store<V> = keys.iter().map(str::to_owned).zip(values).collect();
        if store.len() != keys.len() {
            // Repeated keys would silently drop values
            return Err(Error::InvalidOrderAssignment {
                order: keys.to_vec(),
                keys: store.keys().cloned().collect(),
            });
        }
        Ok((store, self.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Builder = CoordinateBuilder<i64>;

    fn abc() -> Coordinate<i64> {
        Coordinate::new([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn test_pairs_then_keywords_win() {
        let registry = OrderRegistry::new();
        let c = Builder::new()
            .source([("a", 1), ("b", 20)])
            .kwarg("b", 2)
            .kwarg("c", 3)
            .build_with(&registry)
            .unwrap();
        assert_eq!(c, abc());
    }

    #[test]
    fn test_keywords_only() {
        let registry = OrderRegistry::new();
        let c = Builder::new()
            .kwargs([("a", 1), ("b", 2), ("c", 3)])
            .build_with(&registry)
            .unwrap();
        assert_eq!(c, abc());
        assert!(c.explicit_order().is_none());
    }

    #[test]
    fn test_positional_values_with_explicit_order() {
        let registry = OrderRegistry::new();
        let c = Builder::new().args([1, 2, 3]).order("abc").build_with(&registry).unwrap();
        assert_eq!(c, abc());
        assert_eq!(c.explicit_order(), Some(&Order::from("abc")));

        let c = Builder::new()
            .source(Source::values([1, 2, 3]))
            .order("abc")
            .build_with(&registry)
            .unwrap();
        assert_eq!(c, abc());
    }

    #[test]
    fn test_positional_values_with_registry_default() {
        let registry = OrderRegistry::new();
        registry.set_default_order("abc");
        let c = Builder::new().args([1, 2, 3]).build_with(&registry).unwrap();
        assert_eq!(c, abc());
        // The registry named the values but is not the instance's own order
        assert!(c.explicit_order().is_none());
    }

    #[test]
    fn test_order_unresolved() {
        let registry = OrderRegistry::new();
        let err = Builder::new().args([1, 2, 3]).build_with(&registry).unwrap_err();
        assert_eq!(err, Error::OrderUnresolved);

        let err = Builder::new()
            .source(Source::values([1, 2]))
            .build_with(&registry)
            .unwrap_err();
        assert_eq!(err, Error::OrderUnresolved);
    }

    #[test]
    fn test_length_mismatch() {
        let registry = OrderRegistry::new();
        let err = Builder::new().args([1, 2]).order("abc").build_with(&registry).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn test_keywords_with_positional_are_ambiguous() {
        let registry = OrderRegistry::new();
        let err = Builder::new()
            .args([1, 2])
            .order("ab")
            .kwarg("c", 3)
            .build_with(&registry)
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousConstruction(_)));
    }

    #[test]
    fn test_mixed_positional_shapes_are_ambiguous() {
        let registry = OrderRegistry::new();
        let two_sources = Builder::new()
            .source([("a", 1)])
            .source([("b", 2)])
            .build_with(&registry);
        assert!(matches!(two_sources, Err(Error::AmbiguousConstruction(_))));

        let pairs_and_args = Builder::new().source([("a", 1)]).arg(2).build_with(&registry);
        assert!(matches!(pairs_and_args, Err(Error::AmbiguousConstruction(_))));

        let values_and_args = Builder::new()
            .source(Source::values([1]))
            .arg(2)
            .order("ab")
            .build_with(&registry);
        assert!(matches!(values_and_args, Err(Error::AmbiguousConstruction(_))));
    }

    #[test]
    fn test_explicit_order_must_match_built_keys() {
        let registry = OrderRegistry::new();
        let err = Builder::new()
            .kwargs([("a", 1), ("b", 2)])
            .order("abc")
            .build_with(&registry)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOrderAssignment { .. }));

        let ok = Builder::new()
            .kwargs([("a", 1), ("b", 2)])
            .order("ba")
            .build_with(&registry)
            .unwrap();
        assert_eq!(ok.to_list(), vec![2, 1]);
    }

    #[test]
    fn test_repeated_order_keys_rejected() {
        let registry = OrderRegistry::new();
        let err = Builder::new().args([1, 2]).order("aa").build_with(&registry).unwrap_err();
        assert!(matches!(err, Error::InvalidOrderAssignment { .. }));
    }

    #[test]
    fn test_empty_construction() {
        let registry = OrderRegistry::new();
        let c = Builder::new().build_with(&registry).unwrap();
        assert!(c.is_empty());
    }
}
