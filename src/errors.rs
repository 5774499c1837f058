//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate. Absence (an empty child link or an
/// exhausted cursor) is never an error; it is expressed with `Option`.
#[derive(Error, Debug)]
pub enum BinaryTreeError {
    #[error("Node reference {0} is out of bound")]
    ReferenceOutOfBound(usize),
    // Raised by the default visitor only
    #[error("Could not write to the output sink: {0}")]
    Io(#[from] std::io::Error),
}
