//! [`Collector`]s that materialize items into owned containers.
//!
//! [`Vec<T>`] itself is a collector that pushes every item it collects.
//!
//! This module corresponds to [`mod@std::vec`].
//!
//! [`Collector`]: crate::Collector

use std::{fmt::Debug, ops::ControlFlow};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{boxed::Box, vec::Vec};

use crate::{Collector, assert_collector};

impl<T> Collector for Vec<T> {
    type Item = T;
    type Output = Self;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.push(item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn finish(self) -> Self {
        self
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.extend(items);
        ControlFlow::Continue(())
    }
}

/// A [`Collector`] that gathers the items it collects into a boxed slice.
///
/// Its [`Output`](Collector::Output) is a `Box<[T]>`: a fixed-size,
/// independently owned copy in collection order.
///
/// # Examples
///
/// ```
/// use myquery::{prelude::*, vec::ToArray};
///
/// let array: Box<[i32]> = (1..=3).feed_into(ToArray::new());
///
/// assert_eq!(&*array, [1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct ToArray<T> {
    items: Vec<T>,
}

impl<T> ToArray<T> {
    /// Creates a new instance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector(Self { items: Vec::new() })
    }
}

impl<T> Default for ToArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collector for ToArray<T> {
    type Item = T;
    type Output = Box<[T]>;

    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.items.collect(item)
    }

    #[inline]
    fn finish(self) -> Box<[T]> {
        self.items.into_boxed_slice()
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.items.collect_many(items)
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Box<[T]> {
        self.items.collect_then_finish(items).into_boxed_slice()
    }
}

impl<T: Debug> Debug for ToArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToArray")
            .field("items", &self.items)
            .finish()
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
        fn all_collect_methods_vec(
            nums in propvec(any::<i32>(), ..9),
        ) {
            all_collect_methods_vec_impl(nums)?;
        }
    }

    fn all_collect_methods_vec_impl(nums: Vec<i32>) -> TestCaseResult {
        proptest_collector(
            || nums.iter().copied(),
            Vec::new,
            |_| false,
            |iter| iter.collect(),
        )
    }

    proptest! {
        #[test]
        fn all_collect_methods_to_array(
            nums in propvec(any::<i32>(), ..9),
        ) {
            all_collect_methods_to_array_impl(nums)?;
        }
    }

    fn all_collect_methods_to_array_impl(nums: Vec<i32>) -> TestCaseResult {
        proptest_collector(
            || nums.iter().copied(),
            ToArray::new,
            |_| false,
            |iter| iter.collect(),
        )
    }

    #[test]
    fn vec_appends_to_existing_items() {
        let mut v = vec![1, 2];
        assert!(v.collect(3).is_continue());

        assert_eq!(v.collect_then_finish([4, 5]), [1, 2, 3, 4, 5]);
    }
}
