//! Bulk construction from many sources

use super::builder::CoordinateBuilder;
use super::source::Source;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::order::{Order, OrderRegistry};
use crate::space::KeySpace;
use std::marker::PhantomData;

/// Lazy iterator returned by [`Coordinate::from_sources`].
///
/// Each item is built independently, so one bad source yields an `Err`
/// without stopping the sequence.
pub struct FromSources<'r, I, V, S: KeySpace> {
    sources: I,
    order: Option<Order>,
    keywords: Vec<(String, V)>,
    registry: &'r OrderRegistry,
    space: PhantomData<fn() -> S>,
}

impl<'r, I, V, S: KeySpace> FromSources<'r, I, V, S> {
    pub(crate) fn new(
        sources: I,
        order: Option<Order>,
        keywords: Vec<(String, V)>,
        registry: &'r OrderRegistry,
    ) -> Self {
        Self {
            sources,
            order,
            keywords,
            registry,
            space: PhantomData,
        }
    }
}

impl<I, V, S> Iterator for FromSources<'_, I, V, S>
where
    I: Iterator,
    I::Item: Into<Source<V>>,
    V: Clone,
    S: KeySpace,
{
    type Item = Result<Coordinate<V, S>>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.sources.next()?;
        let built = CoordinateBuilder::new()
            .source(source)
            .kwargs(self.keywords.iter().cloned())
            .maybe_order(self.order.clone())
            .build_with(self.registry);
        Some(built)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources.size_hint()
    }
}
