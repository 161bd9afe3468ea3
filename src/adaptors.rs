mod cloned;
mod filter;
mod map;

pub use cloned::*;
pub use filter::*;
pub use map::*;
