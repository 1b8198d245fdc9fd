//! Chainable index accumulation
//!
//! [`Tensor::slice`] and [`Tensor::slice_mut`] seed a short-lived view that
//! collects one index per dimension before resolving to an element. The
//! builders are consumed on `append`, so a partially built chain cannot be
//! stored and replayed; the shared and exclusive variants mirror the
//! `get`/`get_mut` split.

use super::types::Tensor;
use crate::error::{Result, TensorError};
use crate::types::Shape;
use smallvec::smallvec;

/// Check an index against the next open dimension and grow the prefix.
fn push_checked(shape: &[usize], prefix: &mut Shape, index: usize) -> Result<()> {
    let dimension = prefix.len();
    if dimension == shape.len() {
        return Err(TensorError::RankExceeded { rank: shape.len() });
    }
    let bound = shape[dimension];
    if index >= bound {
        return Err(TensorError::IndexOutOfRange {
            dimension,
            given: index,
            bound,
        });
    }
    prefix.push(index);
    Ok(())
}

/// Bounds-check the seed index for the first dimension.
fn seed_prefix(shape: &[usize], index: usize) -> Result<Shape> {
    let Some(&bound) = shape.first() else {
        return Err(TensorError::RankExceeded { rank: 0 });
    };
    if index >= bound {
        return Err(TensorError::IndexOutOfRange {
            dimension: 0,
            given: index,
            bound,
        });
    }
    Ok(smallvec![index])
}

impl<T> Tensor<T> {
    /// Start a chained read at `index` in the first dimension.
    ///
    /// The index is checked strictly against `shape[0]`; an index equal to
    /// the bound is rejected like everywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IndexOutOfRange`] when `index >= shape[0]`,
    /// or [`TensorError::RankExceeded`] on a rank-0 tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[3, 2]).unwrap();
    /// assert_eq!(*tensor.slice(2).unwrap().at(1).unwrap(), 6);
    /// assert!(tensor.slice(3).is_err());
    /// ```
    pub fn slice(&self, index: usize) -> Result<TensorSlice<'_, T>> {
        let prefix = seed_prefix(&self.shape, index)?;
        Ok(TensorSlice {
            tensor: self,
            prefix,
        })
    }

    /// Start a chained write at `index` in the first dimension.
    ///
    /// Same checks as [`Tensor::slice`]; the returned builder holds the
    /// exclusive borrow until its terminal call.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let mut tensor = Tensor::<i32>::new(&[2, 2]).unwrap();
    /// *tensor.slice_mut(1).unwrap().at_mut(0).unwrap() = 7;
    /// assert_eq!(tensor[&[1, 0]], 7);
    /// ```
    pub fn slice_mut(&mut self, index: usize) -> Result<TensorSliceMut<'_, T>> {
        let prefix = seed_prefix(&self.shape, index)?;
        Ok(TensorSliceMut {
            tensor: self,
            prefix,
        })
    }
}

/// Read-only index accumulator borrowing a [`Tensor`].
///
/// Holds the indices supplied so far and the borrowed tensor; created via
/// [`Tensor::slice`] with one index already seeded. `append` consumes the
/// builder, so each chain is built exactly once.
///
/// # Examples
///
/// ```
/// use ndtensor_core::Tensor;
///
/// let tensor = Tensor::from_vec((0..24).collect(), &[2, 3, 4]).unwrap();
///
/// let slice = tensor.slice(1).unwrap().append(0).unwrap();
/// assert_eq!(slice.indices(), &[1, 0]);
/// assert!(!slice.is_complete());
/// assert_eq!(*slice.at(2).unwrap(), 14);
/// ```
#[derive(Debug)]
pub struct TensorSlice<'a, T> {
    tensor: &'a Tensor<T>,
    prefix: Shape,
}

impl<'a, T> TensorSlice<'a, T> {
    /// Append one index for the next open dimension.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::RankExceeded`] when every dimension is already
    /// indexed, or [`TensorError::IndexOutOfRange`] when the index meets or
    /// exceeds the dimension's size.
    pub fn append(mut self, index: usize) -> Result<Self> {
        push_checked(self.tensor.shape(), &mut self.prefix, index)?;
        Ok(self)
    }

    /// Descend one dimension and read without requiring a complete chain.
    ///
    /// Extends a copy of the accumulated prefix with `index` and delegates
    /// to [`Tensor::get`]; with dimensions still open this reads the leading
    /// element of the addressed sub-block.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec((0..24).collect(), &[2, 3, 4]).unwrap();
    /// // One open dimension remains: reads the lead of sub-block [1, 2]
    /// assert_eq!(*tensor.slice(1).unwrap().at(2).unwrap(), 20);
    /// ```
    pub fn at(&self, index: usize) -> Result<&'a T> {
        if self.prefix.len() == self.tensor.rank() {
            return Err(TensorError::RankExceeded {
                rank: self.tensor.rank(),
            });
        }
        let mut full = self.prefix.clone();
        full.push(index);
        self.tensor.get(&full)
    }

    /// Resolve the completed chain to its element.
    ///
    /// Requires exactly one index per dimension; the whole prefix is
    /// re-validated against the shape on the way to the element.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IncompleteIndex`] when dimensions are still
    /// open.
    pub fn resolve(&self) -> Result<&'a T> {
        if self.prefix.len() != self.tensor.rank() {
            return Err(TensorError::IncompleteIndex {
                supplied: self.prefix.len(),
                rank: self.tensor.rank(),
            });
        }
        self.tensor.get(&self.prefix)
    }

    /// The indices accumulated so far.
    pub fn indices(&self) -> &[usize] {
        &self.prefix
    }

    /// Whether every dimension has an index.
    pub fn is_complete(&self) -> bool {
        self.prefix.len() == self.tensor.rank()
    }
}

/// Exclusive index accumulator borrowing a [`Tensor`] mutably.
///
/// Created via [`Tensor::slice_mut`]. Terminal calls consume the builder so
/// the exclusive borrow ends with the returned reference.
#[derive(Debug)]
pub struct TensorSliceMut<'a, T> {
    tensor: &'a mut Tensor<T>,
    prefix: Shape,
}

impl<'a, T> TensorSliceMut<'a, T> {
    /// Append one index for the next open dimension.
    ///
    /// Same checks as [`TensorSlice::append`].
    pub fn append(mut self, index: usize) -> Result<Self> {
        push_checked(&self.tensor.shape, &mut self.prefix, index)?;
        Ok(self)
    }

    /// Descend one dimension and return a mutable reference.
    ///
    /// Consumes the builder; with dimensions still open this addresses the
    /// leading element of the sub-block.
    pub fn at_mut(self, index: usize) -> Result<&'a mut T> {
        let Self { tensor, mut prefix } = self;
        if prefix.len() == tensor.rank() {
            return Err(TensorError::RankExceeded {
                rank: tensor.rank(),
            });
        }
        prefix.push(index);
        tensor.get_mut(&prefix)
    }

    /// Resolve the completed chain to a mutable reference.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::IncompleteIndex`] when dimensions are still
    /// open.
    pub fn resolve_mut(self) -> Result<&'a mut T> {
        let Self { tensor, prefix } = self;
        if prefix.len() != tensor.rank() {
            return Err(TensorError::IncompleteIndex {
                supplied: prefix.len(),
                rank: tensor.rank(),
            });
        }
        tensor.get_mut(&prefix)
    }

    /// The indices accumulated so far.
    pub fn indices(&self) -> &[usize] {
        &self.prefix
    }

    /// Whether every dimension has an index.
    pub fn is_complete(&self) -> bool {
        self.prefix.len() == self.tensor.rank()
    }
}
