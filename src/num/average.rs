use std::ops::ControlFlow;

use crate::{Collector, assert_collector};

/// A [`Collector`] that calculates the arithmetic mean of the `f64`s it collects.
///
/// Its [`Output`](Collector::Output) is `None` if it has not collected any items,
/// or `Some` containing the sum divided by the count otherwise.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, num::Average};
///
/// let mean = [2.0, 4.0, 9.0].into_iter().feed_into(Average::new());
///
/// assert_eq!(mean, Some(5.0));
/// ```
///
/// An empty input has no mean rather than a NaN one.
///
/// ```
/// use myquery::{Collector, num::Average};
///
/// assert_eq!(Average::new().finish(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Average {
    sum: f64,
    count: usize,
}

impl Average {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector(Self { sum: 0.0, count: 0 })
    }
}

impl Collector for Average {
    type Item = f64;
    type Output = Option<f64>;

    #[inline]
    fn collect(&mut self, item: f64) -> ControlFlow<()> {
        self.sum += item;
        self.count += 1;
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}
