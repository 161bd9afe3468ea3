use std::{marker::PhantomData, ops::ControlFlow};

use crate::Collector;

/// A [`Collector`] that accepts references and collects a clone of each.
///
/// This `struct` is created by [`Collector::cloned()`].
#[derive(Debug)]
pub struct Cloned<'a, C> {
    collector: C,
    _marker: PhantomData<&'a ()>,
}

impl<C> Cloned<'_, C> {
    pub(crate) fn new(collector: C) -> Self {
        Self {
            collector,
            _marker: PhantomData,
        }
    }
}

impl<C: Clone> Clone for Cloned<'_, C> {
    fn clone(&self) -> Self {
        Self::new(self.collector.clone())
    }
}

impl<'a, C> Collector for Cloned<'a, C>
where
    C: Collector<Item: Clone + 'a>,
{
    type Item = &'a C::Item;
    type Output = C::Output;

    #[inline]
    fn collect(&mut self, item: Self::Item) -> ControlFlow<()> {
        self.collector.collect(item.clone())
    }

    #[inline]
    fn finish(self) -> Self::Output {
        self.collector.finish()
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = Self::Item>) -> ControlFlow<()> {
        self.collector.collect_many(items.into_iter().cloned())
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = Self::Item>) -> Self::Output {
        self.collector
            .collect_then_finish(items.into_iter().cloned())
    }
}
