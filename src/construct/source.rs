//! Construction Sources
//!
//! The single positional argument of a construction is one of two shapes:
//! key-value bearing ([`Source::Pairs`]) or a flat value sequence that needs
//! an order to name its elements ([`Source::Values`]).
//!
//! A sequence of 2-tuples always converts to `Pairs`. Values are never
//! guessed from tuple shape; name a flat sequence with [`Source::values`].

use crate::coordinate::Coordinate;
use crate::space::KeySpace;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// The positional source of a coordinate construction
#[derive(Debug, Clone, PartialEq)]
pub enum Source<V> {
    /// Key-value pairs; later duplicates win
    Pairs(Vec<(String, V)>),
    /// Values named positionally by an order
    Values(Vec<V>),
}

impl<V> Source<V> {
    /// Key-value source from any pair iterator
    pub fn pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Source::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Flat value sequence
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Source::Values(values.into_iter().collect())
    }
}

impl<V, K: Into<String>> From<Vec<(K, V)>> for Source<V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Source::pairs(pairs)
    }
}

impl<V, K: Into<String>, const N: usize> From<[(K, V); N]> for Source<V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Source::pairs(pairs)
    }
}

impl<V, K: Into<String>, H> From<HashMap<K, V, H>> for Source<V> {
    fn from(map: HashMap<K, V, H>) -> Self {
        Source::pairs(map)
    }
}

impl<V, K: Into<String>> From<BTreeMap<K, V>> for Source<V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Source::pairs(map)
    }
}

impl<V, K: Into<String>, H> From<IndexMap<K, V, H>> for Source<V> {
    fn from(map: IndexMap<K, V, H>) -> Self {
        Source::pairs(map)
    }
}

impl<V: Clone, S: KeySpace> From<&Coordinate<V, S>> for Source<V> {
    fn from(coordinate: &Coordinate<V, S>) -> Self {
        Source::pairs(coordinate.iter().map(|(k, v)| (k, v.clone())))
    }
}
