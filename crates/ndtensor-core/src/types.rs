//! Core type definitions shared across the crate.
//!
//! This module defines the type aliases used in tensor signatures:
//!
//! - [`Axis`] for dimension numbers
//! - [`Rank`] for dimension counts
//! - [`Shape`] for dimension-size and stride sequences

use smallvec::SmallVec;

/// Type alias for a tensor axis index.
///
/// Used to identify specific dimensions in multi-dimensional tensors.
/// Zero-indexed (0 is the first, slowest-varying axis).
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
///
/// # Examples
///
/// ```
/// use ndtensor_core::{Rank, Tensor};
///
/// let matrix = Tensor::<f64>::new(&[2, 3]).unwrap();
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Holds dimension sizes and strides inline for tensors of up to 6
/// dimensions, falling back to heap allocation for higher ranks.
///
/// # Examples
///
/// ```
/// use ndtensor_core::{Shape, Tensor};
///
/// let tensor = Tensor::<f64>::new(&[2, 3, 4]).unwrap();
/// let shape: Shape = tensor.shape().iter().copied().collect();
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
