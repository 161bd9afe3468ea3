//! [`Collector`]s for numeric aggregation.
//!
//! Both collectors accept `f64`. To aggregate over any other element type,
//! project it first with [`map`](crate::Collector::map).
//!
//! This module corresponds to [`std::num`].
//!
//! [`Collector`]: crate::Collector

mod average;
mod sum;

pub use average::*;
pub use sum::*;
