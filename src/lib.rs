mod errors;
mod node;
mod sequence;
mod sort;

pub use errors::{Result, SequenceError};
pub use sequence::{IntoIter, Iter, IterMut, Sequence, NOT_FOUND};
pub use sort::SortOrder;
