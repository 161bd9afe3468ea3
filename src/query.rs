//! The sequence operations, with argument validation.
//!
//! Every function here takes its sequence and function arguments as [`Option`]s,
//! where [`None`] stands for an absent argument. Each one starts by checking its
//! arguments with [`require`] in parameter order, so a missing `source` is
//! reported before a missing function, and nothing is traversed or called
//! unless every argument is present.
//!
//! A sequence is anything whose shared reference iterates over shared references
//! to its elements: slices, arrays, [`Vec`], `VecDeque`, `LinkedList`, sets, ...
//! Sequences are only ever borrowed, so the caller's collection is never mutated.
//! Operations returning elements return newly allocated containers holding
//! clones of them.
//!
//! All operations are eager: they traverse the whole sequence (unless cancelled)
//! before returning.
//!
//! # Examples
//!
//! ```
//! use myquery::query;
//!
//! let nums = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! let evens = query::filter(Some(&nums), Some(|num: &i32| num % 2 == 0))?;
//! assert_eq!(evens, [2, 4, 6, 8, 10]);
//!
//! let labels = query::map(Some(&evens), Some(|num: &i32| num.to_string()))?;
//! assert_eq!(labels, ["2", "4", "6", "8", "10"]);
//!
//! let missing = query::filter(None::<&[i32]>, Some(|num: &i32| num % 2 == 0));
//! assert_eq!(missing.unwrap_err().parameter(), "source");
//! # Ok::<(), myquery::guard::ArgumentMissing>(())
//! ```

use std::ops::ControlFlow;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{boxed::Box, vec::Vec};

#[cfg(feature = "itertools")]
use itertools::MinMaxResult;

#[cfg(feature = "itertools")]
use crate::cmp::MinMax;
#[cfg(feature = "alloc")]
use crate::{
    cmp::{Comparator, SortBy, SortByKey},
    distinct::Distinct,
    vec::ToArray,
};
use crate::{
    Collector,
    cmp::{Max, Min},
    guard::{ArgumentMissing, require},
    iter::{Count, ForEach, ForEachCancellable, ForEachIndexed},
    num::{Average, Sum},
};

/// Returns the number of elements in `source`.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` is absent.
///
/// # Examples
///
/// ```
/// use myquery::query;
///
/// assert_eq!(query::count(Some(&[1, 2, 3])), Ok(3));
/// assert_eq!(query::count(Some(&Vec::<i32>::new())), Ok(0));
/// ```
pub fn count<'a, S, T>(source: Option<&'a S>) -> Result<usize, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
{
    let source = require(source, "source")?;

    Ok(Count::new().collect_then_finish(source))
}

/// Returns the elements of `source` satisfying `predicate`, in their original order.
///
/// Only kept elements are cloned. Nothing matching gives an empty `Vec`.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `predicate` is absent.
#[cfg(feature = "alloc")]
pub fn filter<'a, S, T, P>(
    source: Option<&'a S>,
    predicate: Option<P>,
) -> Result<Vec<T>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
    P: FnMut(&T) -> bool,
{
    let source = require(source, "source")?;
    let mut predicate = require(predicate, "predicate")?;

    Ok(Vec::new()
        .cloned()
        .filter(move |item: &&'a T| predicate(*item))
        .collect_then_finish(source))
}

/// Returns `selector` applied to every element of `source`, in order.
///
/// The output always has as many elements as `source`.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `selector` is absent.
///
/// # Examples
///
/// ```
/// use myquery::query;
///
/// let nums: Vec<i32> = (1..=10).collect();
///
/// let strings = query::map(Some(&nums), Some(|num: &i32| num.to_string()))?;
/// let parsed = query::map(Some(&strings), Some(|s: &String| s.parse::<i32>().ok()))?;
///
/// assert_eq!(strings[9], "10");
/// assert_eq!(parsed, nums.iter().copied().map(Some).collect::<Vec<_>>());
/// # Ok::<(), myquery::guard::ArgumentMissing>(())
/// ```
#[cfg(feature = "alloc")]
pub fn map<'a, S, T, R, F>(
    source: Option<&'a S>,
    selector: Option<F>,
) -> Result<Vec<R>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&T) -> R,
{
    let source = require(source, "source")?;
    let selector = require(selector, "selector")?;

    Ok(Vec::new().map(selector).collect_then_finish(source))
}

/// Returns an independent copy of `source` as a boxed slice.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` is absent.
#[cfg(feature = "alloc")]
pub fn to_array<'a, S, T>(source: Option<&'a S>) -> Result<Box<[T]>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
{
    let source = require(source, "source")?;

    Ok(ToArray::new().cloned().collect_then_finish(source))
}

/// Returns an independent copy of `source` as a `Vec`.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` is absent.
#[cfg(feature = "alloc")]
pub fn to_list<'a, S, T>(source: Option<&'a S>) -> Result<Vec<T>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
{
    let source = require(source, "source")?;

    Ok(Vec::new().cloned().collect_then_finish(source))
}

/// Returns the sum of `transform` over `source`. An empty `source` sums to `0.0`.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `transform` is absent.
///
/// # Examples
///
/// ```
/// use myquery::query;
///
/// let words = ["a", "bcd", "ef"];
///
/// assert_eq!(query::sum(Some(&words), Some(|s: &&str| s.len() as f64)), Ok(6.0));
/// ```
pub fn sum<'a, S, T, F>(
    source: Option<&'a S>,
    transform: Option<F>,
) -> Result<f64, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&T) -> f64,
{
    let source = require(source, "source")?;
    let transform = require(transform, "transform")?;

    Ok(Sum::new().map(transform).collect_then_finish(source))
}

/// Returns the smallest value of `transform` over `source`,
/// or `None` if `source` is empty.
///
/// NaN values are skipped unless every value is NaN.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `transform` is absent.
pub fn min<'a, S, T, F>(
    source: Option<&'a S>,
    transform: Option<F>,
) -> Result<Option<f64>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&T) -> f64,
{
    let source = require(source, "source")?;
    let transform = require(transform, "transform")?;

    Ok(Min::new().map(transform).collect_then_finish(source))
}

/// Returns the largest value of `transform` over `source`,
/// or `None` if `source` is empty.
///
/// NaN values are skipped unless every value is NaN.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `transform` is absent.
pub fn max<'a, S, T, F>(
    source: Option<&'a S>,
    transform: Option<F>,
) -> Result<Option<f64>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&T) -> f64,
{
    let source = require(source, "source")?;
    let transform = require(transform, "transform")?;

    Ok(Max::new().map(transform).collect_then_finish(source))
}

/// Returns the smallest and largest values of `transform` over `source`
/// in a single traversal.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `transform` is absent.
///
/// # Examples
///
/// ```
/// use itertools::MinMaxResult;
/// use myquery::query;
///
/// let temps = [12.5, -3.0, 7.25];
///
/// assert_eq!(
///     query::min_max(Some(&temps), Some(|&t: &f64| t)),
///     Ok(MinMaxResult::MinMax(-3.0, 12.5)),
/// );
/// ```
#[cfg(feature = "itertools")]
pub fn min_max<'a, S, T, F>(
    source: Option<&'a S>,
    transform: Option<F>,
) -> Result<MinMaxResult<f64>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&T) -> f64,
{
    let source = require(source, "source")?;
    let transform = require(transform, "transform")?;

    Ok(MinMax::new().map(transform).collect_then_finish(source))
}

/// Returns the arithmetic mean of `transform` over `source`,
/// or `None` if `source` is empty.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `transform` is absent.
pub fn average<'a, S, T, F>(
    source: Option<&'a S>,
    transform: Option<F>,
) -> Result<Option<f64>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&T) -> f64,
{
    let source = require(source, "source")?;
    let transform = require(transform, "transform")?;

    Ok(Average::new().map(transform).collect_then_finish(source))
}

/// Calls `action` on every element of `source`, in order,
/// and returns `source` for chaining.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `action` is absent.
pub fn for_each<'a, S, T, F>(
    source: Option<&'a S>,
    action: Option<F>,
) -> Result<&'a S, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&T),
{
    let source = require(source, "source")?;
    let action = require(action, "action")?;

    ForEach::new(action).collect_then_finish(source);
    Ok(source)
}

/// Calls `action` with the zero-based position and the element, for every
/// element of `source` in order, and returns `source` for chaining.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `action` is absent.
pub fn for_each_indexed<'a, S, T, F>(
    source: Option<&'a S>,
    action: Option<F>,
) -> Result<&'a S, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(usize, &T),
{
    let source = require(source, "source")?;
    let action = require(action, "action")?;

    ForEachIndexed::new(action).collect_then_finish(source);
    Ok(source)
}

/// Calls `action` with the zero-based position and the element, in order,
/// until `action` returns [`Break(())`](ControlFlow::Break) or `source` runs out.
/// Returns `source` for chaining.
///
/// The element whose action cancels is the last one visited.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `action` is absent.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use myquery::query;
///
/// let nums = [10, 20, 30, 40, 50];
/// let mut visited = vec![];
///
/// query::for_each_cancellable(
///     Some(&nums),
///     Some(|index: usize, &num: &i32| {
///         visited.push(num);
///         if index == 1 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
///     }),
/// )?;
///
/// assert_eq!(visited, [10, 20]);
/// # Ok::<(), myquery::guard::ArgumentMissing>(())
/// ```
pub fn for_each_cancellable<'a, S, T, F>(
    source: Option<&'a S>,
    action: Option<F>,
) -> Result<&'a S, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(usize, &T) -> ControlFlow<()>,
{
    let source = require(source, "source")?;
    let action = require(action, "action")?;

    let _ = ForEachCancellable::new(action).collect_then_finish(source);
    Ok(source)
}

/// Returns the first occurrence of every distinct element of `source`, in order.
///
/// Equality is `T`'s [`PartialEq`].
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` is absent.
#[cfg(feature = "alloc")]
pub fn distinct<'a, S, T>(source: Option<&'a S>) -> Result<Vec<T>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: Clone + PartialEq + 'a,
{
    let source = require(source, "source")?;

    Ok(Distinct::new().cloned().collect_then_finish(source))
}

/// Returns a sorted copy of `source`, ordered by `compare`.
///
/// `compare(a, b) > 0` means `a` goes before `b`; see [`Comparator`].
/// The sort is stable. See [`SortBy`] for its cost.
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `compare` is absent.
///
/// # Examples
///
/// ```
/// use myquery::query;
///
/// let nums = [4, 3, 12, 24, 5, 98, 8, 0, 2];
/// let numeric = |a: &i32, b: &i32| b.cmp(a) as i32;
///
/// assert_eq!(
///     query::sort_by(Some(&nums), Some(numeric)),
///     Ok(vec![0, 2, 3, 4, 5, 8, 12, 24, 98]),
/// );
/// ```
#[cfg(feature = "alloc")]
pub fn sort_by<'a, S, T, C>(
    source: Option<&'a S>,
    compare: Option<C>,
) -> Result<Vec<T>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
    C: Comparator<T>,
{
    let source = require(source, "source")?;
    let compare = require(compare, "compare")?;

    Ok(SortBy::new(compare).cloned().collect_then_finish(source))
}

/// Returns a copy of `source` in ascending order of `key_selector`.
///
/// The sort is not stable. See [`SortByKey`].
///
/// # Errors
///
/// [`ArgumentMissing`] if `source` or `key_selector` is absent.
#[cfg(feature = "alloc")]
pub fn sort_by_key<'a, S, T, K, F>(
    source: Option<&'a S>,
    key_selector: Option<F>,
) -> Result<Vec<T>, ArgumentMissing>
where
    S: ?Sized,
    &'a S: IntoIterator<Item = &'a T>,
    T: Clone + 'a,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let source = require(source, "source")?;
    let key_selector = require(key_selector, "key_selector")?;

    Ok(SortByKey::new(key_selector)
        .cloned()
        .collect_then_finish(source))
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;
    use std::collections::{BTreeSet, LinkedList, VecDeque};

    use super::*;

    const ONE_TO_TEN: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    fn is_even(num: &i32) -> bool {
        num % 2 == 0
    }

    fn numeric(a: &i32, b: &i32) -> i32 {
        b.cmp(a) as i32
    }

    #[test]
    fn filter_even_numbers() {
        assert_eq!(
            filter(Some(&ONE_TO_TEN), Some(is_even)),
            Ok(vec![2, 4, 6, 8, 10])
        );
    }

    #[test]
    fn filter_nothing_matches_is_empty() {
        assert_eq!(
            filter(Some(&ONE_TO_TEN), Some(|&num: &i32| num > 10)),
            Ok(vec![])
        );
    }

    #[test]
    fn source_is_reported_before_function() {
        assert_eq!(
            filter(None::<&[i32]>, None::<fn(&i32) -> bool>),
            Err(ArgumentMissing::new("source"))
        );
        assert_eq!(
            sort_by(None::<&[i32]>, None::<fn(&i32, &i32) -> i32>),
            Err(ArgumentMissing::new("source"))
        );
    }

    #[test]
    fn every_operation_names_its_missing_argument() {
        let calls = Cell::new(0);
        let touch = || calls.set(calls.get() + 1);
        let nums = Some(&ONE_TO_TEN);
        let none = None::<&[i32; 10]>;

        // The error names the parameter, and no function argument has run.
        macro_rules! assert_missing {
            ($call:expr, $parameter:literal) => {
                assert_eq!($call.err(), Some(ArgumentMissing::new($parameter)));
                assert_eq!(calls.get(), 0);
            };
        }

        assert_missing!(count(none), "source");

        assert_missing!(
            filter(
                none,
                Some(|_: &i32| {
                    touch();
                    true
                })
            ),
            "source"
        );
        assert_missing!(filter(nums, None::<fn(&i32) -> bool>), "predicate");

        assert_missing!(map(none, Some(|_: &i32| touch())), "source");
        assert_missing!(map(nums, None::<fn(&i32) -> i32>), "selector");

        assert_missing!(to_array(none), "source");
        assert_missing!(to_list(none), "source");

        let projection = |_: &i32| {
            touch();
            0.0
        };
        assert_missing!(sum(none, Some(projection)), "source");
        assert_missing!(sum(nums, None::<fn(&i32) -> f64>), "transform");
        assert_missing!(min(none, Some(projection)), "source");
        assert_missing!(min(nums, None::<fn(&i32) -> f64>), "transform");
        assert_missing!(max(none, Some(projection)), "source");
        assert_missing!(max(nums, None::<fn(&i32) -> f64>), "transform");
        assert_missing!(average(none, Some(projection)), "source");
        assert_missing!(average(nums, None::<fn(&i32) -> f64>), "transform");
        #[cfg(feature = "itertools")]
        {
            assert_missing!(min_max(none, Some(projection)), "source");
            assert_missing!(min_max(nums, None::<fn(&i32) -> f64>), "transform");
        }

        assert_missing!(for_each(none, Some(|_: &i32| touch())), "source");
        assert_missing!(for_each(nums, None::<fn(&i32)>), "action");

        assert_missing!(
            for_each_indexed(none, Some(|_: usize, _: &i32| touch())),
            "source"
        );
        assert_missing!(for_each_indexed(nums, None::<fn(usize, &i32)>), "action");

        assert_missing!(
            for_each_cancellable(
                none,
                Some(|_: usize, _: &i32| {
                    touch();
                    ControlFlow::Continue(())
                })
            ),
            "source"
        );
        assert_missing!(
            for_each_cancellable(nums, None::<fn(usize, &i32) -> ControlFlow<()>>),
            "action"
        );

        assert_missing!(distinct(none), "source");

        assert_missing!(
            sort_by(
                none,
                Some(|_: &i32, _: &i32| {
                    touch();
                    0
                })
            ),
            "source"
        );
        assert_missing!(sort_by(nums, None::<fn(&i32, &i32) -> i32>), "compare");

        assert_missing!(
            sort_by_key(
                none,
                Some(|_: &i32| {
                    touch();
                    0
                })
            ),
            "source"
        );
        assert_missing!(sort_by_key(nums, None::<fn(&i32) -> i32>), "key_selector");
    }

    #[test]
    fn count_one_to_ten() {
        assert_eq!(count(Some(&ONE_TO_TEN)), Ok(10));
        assert_eq!(count(Some(&[] as &[i32])), Ok(0));
    }

    #[test]
    fn count_any_sequence() {
        let deque: VecDeque<_> = ONE_TO_TEN.into_iter().collect();
        let list: LinkedList<_> = ONE_TO_TEN.into_iter().collect();
        let set: BTreeSet<_> = [3, 1, 3].into_iter().collect();

        assert_eq!(count(Some(&deque)), Ok(10));
        assert_eq!(count(Some(&list)), Ok(10));
        assert_eq!(count(Some(&set)), Ok(2));
    }

    #[test]
    fn map_to_string_and_back() {
        let strings = map(Some(&ONE_TO_TEN), Some(|num: &i32| num.to_string()))
            .unwrap();
        assert_eq!(
            strings,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
        );

        let parsed = map(Some(&strings), Some(|s: &String| s.parse::<i32>().ok()))
            .unwrap();
        assert_eq!(parsed, ONE_TO_TEN.map(Some));
    }

    #[test]
    fn copies_are_independent() {
        let words = vec![String::from("a"), String::from("b")];

        let mut list = to_list(Some(&words)).unwrap();
        let array = to_array(Some(&words)).unwrap();
        list.push(String::from("c"));

        assert_eq!(words, ["a", "b"]);
        assert_eq!(&*array, ["a", "b"]);
        assert_eq!(list, ["a", "b", "c"]);
    }

    #[test]
    fn aggregates() {
        let as_f64 = |&num: &i32| f64::from(num);
        let nums = Some(&ONE_TO_TEN);

        assert_eq!(sum(nums, Some(as_f64)), Ok(55.0));
        assert_eq!(min(nums, Some(as_f64)), Ok(Some(1.0)));
        assert_eq!(max(nums, Some(as_f64)), Ok(Some(10.0)));
        assert_eq!(average(nums, Some(as_f64)), Ok(Some(5.5)));
    }

    #[test]
    fn aggregates_over_a_projection() {
        struct Item {
            price: u32,
        }

        let items = [Item { price: 30 }, Item { price: 10 }, Item { price: 20 }];
        let price = |item: &Item| f64::from(item.price);

        assert_eq!(sum(Some(&items), Some(price)), Ok(60.0));
        assert_eq!(min(Some(&items), Some(price)), Ok(Some(10.0)));
        assert_eq!(max(Some(&items), Some(price)), Ok(Some(30.0)));
        assert_eq!(average(Some(&items), Some(price)), Ok(Some(20.0)));
    }

    #[test]
    fn empty_aggregates() {
        let empty: &[i32] = &[];
        let as_f64 = |&num: &i32| f64::from(num);

        assert_eq!(sum(Some(empty), Some(as_f64)), Ok(0.0));
        assert_eq!(min(Some(empty), Some(as_f64)), Ok(None));
        assert_eq!(max(Some(empty), Some(as_f64)), Ok(None));
        assert_eq!(average(Some(empty), Some(as_f64)), Ok(None));
    }

    #[cfg(feature = "itertools")]
    #[test]
    fn min_max_one_pass() {
        let as_f64 = |&num: &i32| f64::from(num);

        assert_eq!(
            min_max(Some(&ONE_TO_TEN), Some(as_f64)),
            Ok(MinMaxResult::MinMax(1.0, 10.0))
        );
        assert_eq!(
            min_max(Some(&[] as &[i32]), Some(as_f64)),
            Ok(MinMaxResult::NoElements)
        );
    }

    #[test]
    fn for_each_returns_source() {
        let nums = ONE_TO_TEN;
        let mut seen = vec![];

        let source = for_each(Some(&nums), Some(|&num: &i32| seen.push(num))).unwrap();

        assert!(std::ptr::eq(source, &nums));
        assert_eq!(seen, ONE_TO_TEN);
    }

    #[test]
    fn for_each_indexed_positions() {
        let mut seen = vec![];

        for_each_indexed(
            Some(&["a", "b", "c"]),
            Some(|index: usize, s: &&'static str| seen.push((index, *s))),
        )
        .unwrap();

        assert_eq!(seen, [(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn cancel_at_index_three() {
        let nums = ONE_TO_TEN;
        let mut visited = vec![];

        let source = for_each_cancellable(
            Some(&nums),
            Some(|index: usize, &num: &i32| {
                visited.push((index, num));
                if index == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }),
        )
        .unwrap();

        assert!(std::ptr::eq(source, &nums));
        assert_eq!(visited, [(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn never_cancelling_visits_everything() {
        let mut visited = 0;

        for_each_cancellable(
            Some(&ONE_TO_TEN),
            Some(|_: usize, _: &i32| {
                visited += 1;
                ControlFlow::Continue(())
            }),
        )
        .unwrap();

        assert_eq!(visited, 10);
    }

    #[test]
    fn distinct_first_occurrences() {
        let words = ["b", "a", "b", "c", "a"];

        assert_eq!(distinct(Some(&words)), Ok(vec!["b", "a", "c"]));
    }

    #[test]
    fn sort_scrambled_numbers() {
        let scrambled = [4, 3, 12, 24, 5, 98, 8, 0, 2];
        let expected = vec![0, 2, 3, 4, 5, 8, 12, 24, 98];

        assert_eq!(
            sort_by(Some(&scrambled), Some(numeric)),
            Ok(expected.clone())
        );
        assert_eq!(
            sort_by_key(Some(&scrambled), Some(|&num: &i32| num)),
            Ok(expected)
        );
        // The input is left as it was.
        assert_eq!(scrambled, [4, 3, 12, 24, 5, 98, 8, 0, 2]);
    }

    #[test]
    fn sort_by_keeps_ties_in_order() {
        let people = [("amy", 30), ("bob", 25), ("cat", 30), ("dan", 25)];
        let younger_first = |a: &(&str, i32), b: &(&str, i32)| b.1.cmp(&a.1) as i32;

        assert_eq!(
            sort_by(Some(&people), Some(younger_first)),
            Ok(vec![("bob", 25), ("dan", 25), ("amy", 30), ("cat", 30)])
        );
    }
}
