use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{self:?}")]
pub enum CodecError {
    InvalidBlockLength { expected: usize, actual: usize },
    InvalidIndexError,
}
