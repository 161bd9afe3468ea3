use std::ops::ControlFlow;

use crate::{Collector, assert_collector};

use super::min_assign;

/// A [`Collector`] that computes the minimum of the `f64`s it collects.
///
/// Its [`Output`](Collector::Output) is `None` if it has not collected any items,
/// or `Some` containing the minimum otherwise.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, cmp::Min};
///
/// let mut collector = Min::new();
///
/// assert!(collector.collect(5.0).is_continue());
/// assert!(collector.collect(2.0).is_continue());
/// assert!(collector.collect(3.0).is_continue());
///
/// assert_eq!(collector.finish(), Some(2.0));
/// ```
///
/// Its output is `None` if it has not encountered any items.
///
/// ```
/// use myquery::{prelude::*, cmp::Min};
///
/// assert_eq!(Min::new().finish(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Min {
    min: Option<f64>,
}

impl Min {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector(Self { min: None })
    }
}

impl Collector for Min {
    type Item = f64;
    type Output = Option<f64>;

    #[inline]
    fn collect(&mut self, item: f64) -> ControlFlow<()> {
        min_assign(&mut self.min, item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Option<f64> {
        self.min
    }
}
