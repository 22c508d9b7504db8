use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayError {
    #[error("index {index} is out of range for an array of {len} items")]
    OutOfRange { index: usize, len: usize },

    #[error("array overflow: all {capacity} slots are occupied")]
    Overflow { capacity: usize },
}
