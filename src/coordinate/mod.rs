//! Immutable Coordinates
//!
//! [`Coordinate`] maps axis labels to values. Content is fixed at
//! construction: there is no public way to insert, remove or overwrite a
//! value, and every arithmetic operation returns a new coordinate. The only
//! per-instance state that may change is the explicit order, which affects
//! presentation and never equality or hashing.

mod render;
mod view;

use crate::error::{Error, Result};
use crate::order::{resolve_order, Order, OrderRegistry, OrderSources};
use crate::space::{check_keys, AnyKeys, KeySpace};
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Key→value storage in insertion order
pub(crate) type Store<V> = IndexMap<String, V, ahash::RandomState>;

/// An immutable mapping from axis labels to values.
///
/// `S` fixes the legal key set (see [`declare_space!`](crate::declare_space));
/// the default [`AnyKeys`] accepts any keys.
///
/// # Example
///
/// ```
/// use coordinates::{coordinate, Coordinate};
///
/// let a = coordinate!(x = 1.0, y = 2.0, z = 3.0);
/// let b = Coordinate::<f64>::from_sequence([3.0, 2.0, 1.0], "zyx")?;
///
/// assert_eq!(a, b);
/// assert_eq!(a.attr("y")?, 2.0);
/// assert_eq!((&a * 2.0).to_list_in("xyz")?, vec![2.0, 4.0, 6.0]);
/// # Ok::<(), coordinates::Error>(())
/// ```
pub struct Coordinate<V = f64, S: KeySpace = AnyKeys> {
    store: Store<V>,
    order: Option<Order>,
    space: PhantomData<fn() -> S>,
}

impl<V> Coordinate<V, AnyKeys> {
    /// Unconstrained coordinate from key-value pairs; later duplicates win.
    ///
    /// Infallible counterpart of [`Coordinate::from_pairs`] for coordinates
    /// without a fixed key set.
    pub fn new<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Self::from_store(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(), None)
    }
}

impl<V, S: KeySpace> Coordinate<V, S> {
    /// Validated constructor: key set against `S`, then the explicit order
    /// against the key set.
    pub(crate) fn from_parts(store: Store<V>, order: Option<Order>) -> Result<Self> {
        check_keys::<S, _>(store.keys().map(String::as_str))?;
        if let Some(order) = &order {
            check_order(order, &store)?;
        }
        Ok(Self::from_store(store, order))
    }

    /// Constructor for content whose key set is already known to be valid
    pub(crate) fn from_store(store: Store<V>, order: Option<Order>) -> Self {
        Self {
            store,
            order,
            space: PhantomData,
        }
    }

    pub(crate) fn store(&self) -> &Store<V> {
        &self.store
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the coordinate holds no keys
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&V> {
        self.store.get(key)
    }

    /// Value for `key`, or `default` when absent
    pub fn get_or(&self, key: &str, default: V) -> V
    where
        V: Clone,
    {
        self.store.get(key).cloned().unwrap_or(default)
    }

    /// Value for `key`, or [`Error::KeyNotFound`]
    pub fn value(&self, key: &str) -> Result<V>
    where
        V: Clone,
    {
        self.store
            .get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// Attribute-style lookup: `name` must look like an identifier
    /// (`[A-Za-z_][A-Za-z0-9_]*`, Unicode letters allowed).
    pub fn attr(&self, name: &str) -> Result<V>
    where
        V: Clone,
    {
        if !is_identifier(name) {
            return Err(Error::InvalidIdentifier(name.to_owned()));
        }
        self.value(name)
    }

    /// Iterate `(key, value)` in native (insertion) order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.store.iter(),
        }
    }

    /// Keys in native (insertion) order
    pub fn native_keys(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.store.keys().map(String::as_str)
    }

    /// Name of the coordinate's key space
    pub fn space_name(&self) -> &'static str {
        S::NAME
    }

    /// The order set on this instance, if any
    pub fn explicit_order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Set this instance's order.
    ///
    /// The order must list exactly this coordinate's keys; otherwise
    /// [`Error::InvalidOrderAssignment`] is returned and nothing changes.
    /// Content is never affected.
    pub fn set_order(&mut self, order: impl Into<Order>) -> Result<()> {
        let order = order.into();
        check_order(&order, &self.store)?;
        self.order = Some(order);
        Ok(())
    }

    /// Drop this instance's order so resolution falls through to the
    /// declared and process-wide defaults
    pub fn clear_order(&mut self) -> Option<Order> {
        self.order.take()
    }

    /// By-value form of [`set_order`](Self::set_order)
    pub fn with_order(mut self, order: impl Into<Order>) -> Result<Self> {
        self.set_order(order)?;
        Ok(self)
    }

    /// Resolved order against the process-wide registry
    pub fn order(&self) -> Order {
        self.resolve_order(OrderRegistry::global())
    }

    /// Resolved order against `registry`
    pub fn resolve_order(&self, registry: &OrderRegistry) -> Order {
        let sources = OrderSources {
            explicit: self.order.as_ref(),
            declared: S::DEFAULT_ORDER,
        };
        resolve_order(sources, registry, self.native_keys())
    }

    /// Apply `f` to every value, keeping keys, native order and explicit order
    pub fn map<U, F>(&self, mut f: F) -> Coordinate<U, S>
    where
        F: FnMut(&V) -> U,
    {
        let store = self.store.iter().map(|(k, v)| (k.clone(), f(v))).collect();
        Coordinate::from_store(store, self.order.clone())
    }

    /// Whether `other` holds exactly the same keys
    pub fn same_keys<U, T: KeySpace>(&self, other: &Coordinate<U, T>) -> bool {
        self.len() == other.len() && self.store.keys().all(|k| other.store.contains_key(k))
    }
}

fn check_order<V>(order: &Order, store: &Store<V>) -> Result<()> {
    if order.is_permutation_of(store.keys().map(String::as_str)) {
        Ok(())
    } else {
        Err(Error::InvalidOrderAssignment {
            order: order.to_vec(),
            keys: store.keys().cloned().collect(),
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

impl<V: Clone, S: KeySpace> Clone for Coordinate<V, S> {
    fn clone(&self) -> Self {
        Self::from_store(self.store.clone(), self.order.clone())
    }
}

/// Equal iff same key set and same value per key; orders are ignored
impl<V: PartialEq, S: KeySpace> PartialEq for Coordinate<V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<V: Eq, S: KeySpace> Eq for Coordinate<V, S> {}

/// Order-independent: entries are hashed sorted by key
impl<V: Hash, S: KeySpace> Hash for Coordinate<V, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<(&String, &V)> = self.store.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.hash(state);
    }
}

impl<V, S: KeySpace> std::ops::Index<&str> for Coordinate<V, S> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present; use [`Coordinate::value`] to get an
    /// error instead.
    fn index(&self, key: &str) -> &V {
        match self.store.get(key) {
            Some(value) => value,
            None => panic!("key not found: '{}'", key),
        }
    }
}

/// Native-order iterator over `(key, value)`
pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V, S: KeySpace> IntoIterator for &'a Coordinate<V, S> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
