//! Error types for tensor construction and indexing.
//!
//! Every error is detected synchronously at the call that violates the
//! contract and carries the dimension/index data needed to diagnose it.
//! There is no recovery or partial-success path.
//!
//! # Examples
//!
//! ```
//! use ndtensor_core::{Tensor, TensorError};
//!
//! let tensor = Tensor::<f64>::new(&[2, 3]).unwrap();
//!
//! assert_eq!(
//!     tensor.get(&[0, 5]).err(),
//!     Some(TensorError::IndexOutOfRange { dimension: 1, given: 5, bound: 3 })
//! );
//! ```

use crate::types::{Axis, Rank};
use thiserror::Error;

/// Convenience alias for results of fallible tensor operations.
pub type Result<T> = std::result::Result<T, TensorError>;

/// Error type for all tensor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// An index met or exceeded its dimension's bound.
    #[error("Index {given} out of bounds for dimension {dimension} with size {bound}")]
    IndexOutOfRange {
        /// Dimension at which the violation occurred
        dimension: Axis,
        /// The offending index
        given: usize,
        /// Size of that dimension
        bound: usize,
    },

    /// More indices were supplied than the tensor has dimensions.
    #[error("Index has {given} dimensions but tensor has rank {rank}")]
    RankMismatch {
        /// Number of indices supplied
        given: usize,
        /// Rank of the tensor
        rank: Rank,
    },

    /// A slice already holding one index per dimension was asked for another.
    #[error("All {rank} dimensions are already indexed")]
    RankExceeded {
        /// Rank of the tensor
        rank: Rank,
    },

    /// A terminal read was attempted before every dimension was indexed.
    #[error("Only {supplied} of {rank} indices supplied; full rank is required to resolve an element")]
    IncompleteIndex {
        /// Number of indices accumulated so far
        supplied: usize,
        /// Rank of the tensor
        rank: Rank,
    },

    /// A construction shape contained a zero-size dimension.
    #[error("Shape {shape:?} contains a zero-size dimension")]
    InvalidShape {
        /// The rejected shape
        shape: Vec<usize>,
    },

    /// Flat data did not match the element count the shape requires.
    #[error("Shape {shape:?} requires {expected} elements, but got {got}")]
    LengthMismatch {
        /// The requested shape
        shape: Vec<usize>,
        /// Element count the shape requires
        expected: usize,
        /// Element count actually supplied
        got: usize,
    },
}
