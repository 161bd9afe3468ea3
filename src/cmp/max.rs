use std::ops::ControlFlow;

use crate::{Collector, assert_collector};

use super::max_assign;

/// A [`Collector`] that computes the maximum of the `f64`s it collects.
///
/// Its [`Output`](Collector::Output) is `None` if it has not collected any items,
/// or `Some` containing the maximum otherwise.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, cmp::Max};
///
/// let mut collector = Max::new();
///
/// assert!(collector.collect(5.0).is_continue());
/// assert!(collector.collect(2.0).is_continue());
/// assert!(collector.collect(3.0).is_continue());
///
/// assert_eq!(collector.finish(), Some(5.0));
/// ```
///
/// Its output is `None` if it has not encountered any items.
///
/// ```
/// use myquery::{prelude::*, cmp::Max};
///
/// assert_eq!(Max::new().finish(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Max {
    max: Option<f64>,
}

impl Max {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector(Self { max: None })
    }
}

impl Collector for Max {
    type Item = f64;
    type Output = Option<f64>;

    #[inline]
    fn collect(&mut self, item: f64) -> ControlFlow<()> {
        max_assign(&mut self.max, item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Option<f64> {
        self.max
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::proptest_collector;

    use super::*;

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..9),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>) -> TestCaseResult {
        proptest_collector(
            || nums.iter().map(|&num| f64::from(num)),
            Max::new,
            |_| false,
            |iter| iter.reduce(f64::max),
        )
    }

    #[test]
    fn skips_nan() {
        let mut collector = Max::new();
        let _ = collector.collect_many([f64::NAN, 4.0, f64::NAN, -1.0]);

        assert_eq!(collector.finish(), Some(4.0));
    }

    #[test]
    fn all_nan_is_nan() {
        let max = Max::new().collect_then_finish([f64::NAN, f64::NAN]);

        assert!(max.is_some_and(f64::is_nan));
    }
}
