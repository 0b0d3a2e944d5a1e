//! Key Orders
//!
//! An [`Order`] is a sequence of keys used to present a coordinate as a list.
//! It carries no identity: two coordinates with the same content and
//! different orders are equal.

use ahash::HashSet;
use std::fmt;
use std::sync::Arc;

/// An ordered sequence of keys, cheap to clone
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Order {
    keys: Arc<[String]>,
}

impl Order {
    /// Order from any sequence of key labels
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Order reading one single-character key per `char`, so `"xyz"` names
    /// the keys `x`, `y` and `z`
    pub fn from_chars(chars: &str) -> Self {
        Self {
            keys: chars.chars().map(String::from).collect(),
        }
    }

    /// Fallback order: keys sorted in reverse lexicographic order
    pub fn reverse_lexicographic<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut keys: Vec<&str> = keys.into_iter().collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        Self::new(keys)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the order names no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    /// Iterate keys in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Whether the order lists every key of `keys` exactly once and nothing else
    pub fn is_permutation_of<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let expected: HashSet<&str> = keys.into_iter().collect();
        if expected.len() != self.keys.len() {
            return false;
        }
        let mut seen = HashSet::default();
        self.iter().all(|key| expected.contains(key) && seen.insert(key))
    }

    /// Owned copy of the keys, for error reporting
    pub(crate) fn to_vec(&self) -> Vec<String> {
        self.keys.to_vec()
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Order").field(&self.keys).finish()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]")
    }
}

impl From<&str> for Order {
    fn from(chars: &str) -> Self {
        Self::from_chars(chars)
    }
}

impl From<&String> for Order {
    fn from(chars: &String) -> Self {
        Self::from_chars(chars)
    }
}

impl From<Vec<String>> for Order {
    fn from(keys: Vec<String>) -> Self {
        Self { keys: keys.into() }
    }
}

impl From<&[&str]> for Order {
    fn from(keys: &[&str]) -> Self {
        Self::new(keys.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Order {
    fn from(keys: [&str; N]) -> Self {
        Self::new(keys)
    }
}

impl From<&Order> for Order {
    fn from(order: &Order) -> Self {
        order.clone()
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
