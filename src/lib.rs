//! A fixed-capacity ordered array, and the searches and sorts that go with it.

pub mod error;
pub mod ordered_array;
pub mod search;
pub mod sort;

pub use error::ArrayError;
pub use ordered_array::OrderedArray;
