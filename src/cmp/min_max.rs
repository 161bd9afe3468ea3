use std::ops::ControlFlow;

use itertools::MinMaxResult;

use crate::{Collector, assert_collector};

/// A collector that computes the minimum and maximum of the `f64`s it collects
/// in a single pass.
///
/// Its [`Output`](Collector::Output) is:
///
/// - [`MinMaxResult::NoElements`] if no items were collected.
/// - [`MinMaxResult::OneElement`] containing the only item if exactly one was collected.
/// - [`MinMaxResult::MinMax`] containing the minimum and the maximum (in order)
///   if two or more items were collected.
///
/// This collector corresponds to [`Itertools::minmax()`](itertools::Itertools::minmax).
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, cmp::MinMax};
/// use itertools::MinMaxResult;
///
/// assert_eq!(
///     [].into_iter().feed_into(MinMax::new()),
///     MinMaxResult::NoElements,
/// );
/// assert_eq!(
///     [1.0].into_iter().feed_into(MinMax::new()),
///     MinMaxResult::OneElement(1.0),
/// );
/// assert_eq!(
///     [1.0, 3.0, 2.0].into_iter().feed_into(MinMax::new()),
///     MinMaxResult::MinMax(1.0, 3.0),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinMax {
    state: State,
}

#[derive(Debug, Clone, Copy, Default)]
enum State {
    #[default]
    NoElements,
    OneElement(f64),
    MinMax {
        min: f64,
        max: f64,
    },
}

impl MinMax {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector(Self {
            state: State::NoElements,
        })
    }
}

impl Collector for MinMax {
    type Item = f64;
    type Output = MinMaxResult<f64>;

    fn collect(&mut self, item: f64) -> ControlFlow<()> {
        self.state = match self.state {
            State::NoElements => State::OneElement(item),
            State::OneElement(first) => State::MinMax {
                min: first.min(item),
                max: first.max(item),
            },
            State::MinMax { min, max } => State::MinMax {
                min: min.min(item),
                max: max.max(item),
            },
        };

        ControlFlow::Continue(())
    }

    fn finish(self) -> Self::Output {
        match self.state {
            State::NoElements => MinMaxResult::NoElements,
            State::OneElement(item) => MinMaxResult::OneElement(item),
            State::MinMax { min, max } => MinMaxResult::MinMax(min, max),
        }
    }
}
