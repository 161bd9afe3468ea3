use std::ops::ControlFlow;

use crate::{Collector, assert_collector};

/// A [`Collector`] that calculates the sum of the `f64`s it collects.
///
/// An empty sum is `0.0`.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, num::Sum};
///
/// let total = ["1.5", "2", "0.5"]
///     .into_iter()
///     .feed_into(Sum::new().map(|s: &str| s.parse::<f64>().unwrap_or(0.0)));
///
/// assert_eq!(total, 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sum {
    sum: f64,
}

impl Sum {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        // Positive zero, unlike `Iterator::sum` for floats which starts at -0.0.
        assert_collector(Self { sum: 0.0 })
    }
}

impl Collector for Sum {
    type Item = f64;
    type Output = f64;

    #[inline]
    fn collect(&mut self, item: f64) -> ControlFlow<()> {
        self.sum += item;
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> f64 {
        self.sum
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = f64>) -> ControlFlow<()> {
        self.sum = items.into_iter().fold(self.sum, |sum, item| sum + item);
        ControlFlow::Continue(())
    }
}
