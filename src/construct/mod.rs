//! Coordinate Construction
//!
//! Every entry point funnels into [`CoordinateBuilder`], which resolves the
//! call shape into one canonical key→value store before any coordinate
//! exists. Construction either fully succeeds or returns an error.

pub mod builder;
pub mod bulk;
pub mod source;

pub use builder::CoordinateBuilder;
pub use bulk::FromSources;
pub use source::Source;

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::order::{Order, OrderRegistry};
use crate::space::KeySpace;

impl<V, S: KeySpace> Coordinate<V, S> {
    /// Builder accepting any combination of construction arguments
    pub fn builder() -> CoordinateBuilder<V, S> {
        CoordinateBuilder::new()
    }

    /// From a mapping (`HashMap`, `BTreeMap`, `IndexMap`) or anything else
    /// convertible to a [`Source`]
    pub fn from_mapping(mapping: impl Into<Source<V>>) -> Result<Self> {
        Self::builder().source(mapping).build()
    }

    /// From `(key, value)` pairs; later duplicates win
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Self::builder().source(Source::pairs(pairs)).build()
    }

    /// From keyword values only
    pub fn from_keywords<I, K>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Self::builder().kwargs(keywords).build()
    }

    /// From a key-value source with keyword values merged over it
    pub fn from_mixed<I, K>(source: impl Into<Source<V>>, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        Self::builder().source(source).kwargs(keywords).build()
    }

    /// From a flat value sequence named by `order`, which also becomes the
    /// instance order
    pub fn from_sequence<I>(values: I, order: impl Into<Order>) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        Self::builder()
            .source(Source::values(values))
            .order(order)
            .build()
    }

    /// From positional values named by the declared or process-wide default
    /// order
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
    {
        Self::builder().args(values).build()
    }

    /// Lazily build one coordinate per source, each with the common
    /// `keywords` and `order` applied.
    ///
    /// The iterator is finite iff `sources` is, and one-shot iff `sources` is.
    pub fn from_sources<I, K, KV>(sources: I, order: Option<Order>, keywords: KV) -> FromSources<'static, I::IntoIter, V, S>
    where
        I: IntoIterator,
        I::Item: Into<Source<V>>,
        KV: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Clone,
    {
        Self::from_sources_with(sources, order, keywords, OrderRegistry::global())
    }

    /// [`from_sources`](Self::from_sources) against `registry`
    pub fn from_sources_with<'r, I, K, KV>(
        sources: I,
        order: Option<Order>,
        keywords: KV,
        registry: &'r OrderRegistry,
    ) -> FromSources<'r, I::IntoIter, V, S>
    where
        I: IntoIterator,
        I::Item: Into<Source<V>>,
        KV: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Clone,
    {
        FromSources::new(
            sources.into_iter(),
            order,
            keywords.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            registry,
        )
    }
}

/// Build an unconstrained coordinate from keyword syntax.
///
/// ```
/// use coordinates::coordinate;
///
/// let c = coordinate!(x = 1, y = 2, z = 3);
/// assert_eq!(c.attr("z")?, 3);
/// # Ok::<(), coordinates::Error>(())
/// ```
#[macro_export]
macro_rules! coordinate {
    () => {
        $crate::Coordinate::new(::std::iter::empty::<(&str, _)>())
    };
    ($($key:ident = $value:expr),+ $(,)?) => {
        $crate::Coordinate::new([$((stringify!($key), $value)),+])
    };
}
