//! [`Collector`]s for comparing and ordering items.
//!
//! [`Min`], [`Max`] and [`MinMax`] track the extremes of `f64`s
//! (project other types with [`map`](crate::Collector::map) first).
//! [`SortBy`] and [`SortByKey`] buffer every item and hand them back reordered.
//!
//! # NaN
//!
//! The extremum collectors follow [`f64::min`] and [`f64::max`]: a NaN never
//! replaces a number, and a number always replaces a NaN. Only an input made
//! entirely of NaNs produces NaN.
//!
//! This module corresponds to [`std::cmp`].
//!
//! [`Collector`]: crate::Collector

mod comparator;
mod max;
mod min;
#[cfg(feature = "itertools")]
mod min_max;
#[cfg(feature = "alloc")]
mod sort_by;
#[cfg(feature = "alloc")]
mod sort_by_key;

pub use comparator::*;
pub use max::*;
pub use min::*;
#[cfg(feature = "itertools")]
pub use min_max::*;
#[cfg(feature = "alloc")]
pub use sort_by::*;
#[cfg(feature = "alloc")]
pub use sort_by_key::*;

#[inline]
fn min_assign(min: &mut Option<f64>, value: f64) {
    *min = Some(match *min {
        Some(min) => min.min(value),
        None => value,
    });
}

#[inline]
fn max_assign(max: &mut Option<f64>, value: f64) {
    *max = Some(match *max {
        Some(max) => max.max(value),
        None => value,
    });
}
