//! [`Collector`]s that visit items without materializing them.
//!
//! This module corresponds to [`std::iter`].
//!
//! [`Collector`]: crate::Collector

mod count;
mod for_each;

pub use count::*;
pub use for_each::*;
