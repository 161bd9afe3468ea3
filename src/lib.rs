//! A small, uniform vocabulary of eager sequence transformations.
//!
//! The operations are: count, filter, map, to-array/to-list copies, sum, min, max,
//! average, three flavors of for-each (plain, indexed, cancellable), distinct,
//! and two sorts (a stable comparator sort and a key sort).
//! They work on any sequence that can be iterated by shared reference,
//! never mutate it, and always materialize their whole result before returning.
//!
//! # Two entry points
//!
//! [`query`] holds one function per operation. Arguments are passed as [`Option`]s and
//! each function first rejects an absent one with a [`guard::ArgumentMissing`]
//! naming the parameter:
//!
//! ```
//! use myquery::{guard::ArgumentMissing, query};
//!
//! let nums = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! assert_eq!(
//!     query::filter(Some(&nums), Some(|num: &i32| num % 2 == 0)),
//!     Ok(vec![2, 4, 6, 8, 10]),
//! );
//! assert_eq!(
//!     query::filter(None::<&[i32]>, Some(|num: &i32| num % 2 == 0)),
//!     Err(ArgumentMissing::new("source")),
//! );
//! ```
//!
//! Underneath, every operation is a [`Collector`]: a value that is fed the items
//! of one traversal and then finished into a result. Collectors compose through
//! [`filter`](Collector::filter), [`map`](Collector::map) and
//! [`cloned`](Collector::cloned), and any iterator can be fed into one with
//! [`IteratorExt::feed_into`]:
//!
//! ```
//! use myquery::{prelude::*, num::Average};
//!
//! let words = ["the", "noble", "and", "the", "singer"];
//!
//! let mean_len = words
//!     .into_iter()
//!     .feed_into(Average::new().map(|word: &str| word.len() as f64));
//!
//! assert_eq!(mean_len, Some(4.0));
//! ```
//!
//! # Empty input
//!
//! [`query::min`], [`query::max`] and [`query::average`] return `None` for an empty
//! sequence instead of a sentinel or NaN. [`query::sum`] returns `0.0`.
//!
//! # Sorting
//!
//! [`query::sort_by`] takes a comparator returning an `i32` whose sign is the
//! *reverse* of [`Ord::cmp`]: positive means the first argument goes first.
//! It is stable. [`query::sort_by_key`] sorts ascending by an [`Ord`] key and is not.
//!
//! # Features
//!
//! - `std` (default): implies `alloc`. Without it the crate is `no_std`.
//! - `alloc`: operations that allocate (filter, map, copies, distinct, sorts).
//! - `itertools`: `cmp::MinMax` and `query::min_max`, reported with
//!   `itertools::MinMaxResult`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

mod adaptors;
pub mod cmp;
#[cfg(feature = "alloc")]
pub mod distinct;
pub mod guard;
pub mod iter;
pub mod num;
pub mod prelude;
pub mod query;
#[cfg(all(test, feature = "std"))]
mod test_utils;
mod traits;
#[cfg(feature = "alloc")]
pub mod vec;

pub use adaptors::*;
pub use traits::*;

#[inline(always)]
const fn assert_collector<C: Collector>(collector: C) -> C {
    collector
}
