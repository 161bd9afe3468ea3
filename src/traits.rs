mod collector;
mod iterator_ext;

pub use collector::*;
pub use iterator_ext::*;
