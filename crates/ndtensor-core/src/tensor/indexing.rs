//! Bounds-checked element access
//!
//! All addressing math lives here: a multi-dimensional index is folded into
//! a flat buffer offset through the strides, with every index checked
//! strictly against its dimension's bound.

use super::types::Tensor;
use crate::error::{Result, TensorError};

impl<T> Tensor<T> {
    /// Fold an index list into a flat buffer offset.
    ///
    /// Accepts up to `rank` indices; a shorter list addresses the leading
    /// offset of the remaining sub-block. Every supplied index must be
    /// strictly below its dimension's size.
    pub(crate) fn offset(&self, index: &[usize]) -> Result<usize> {
        if index.len() > self.rank() {
            return Err(TensorError::RankMismatch {
                given: index.len(),
                rank: self.rank(),
            });
        }

        let mut offset = 0;
        for (dimension, &given) in index.iter().enumerate() {
            let bound = self.shape[dimension];
            if given >= bound {
                return Err(TensorError::IndexOutOfRange {
                    dimension,
                    given,
                    bound,
                });
            }
            offset += given * self.strides[dimension];
        }
        Ok(offset)
    }

    /// Get an element by multi-dimensional index.
    ///
    /// A full-length index addresses a single element; a shorter index list
    /// addresses the leading element of the remaining sub-block.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::RankMismatch`] when more indices than the rank
    /// are supplied, or [`TensorError::IndexOutOfRange`] when any index
    /// meets or exceeds its dimension's size.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(*tensor.get(&[1, 1]).unwrap(), 5);
    /// assert_eq!(*tensor.get(&[1]).unwrap(), 4); // leading element of row 1
    /// assert!(tensor.get(&[0, 3]).is_err());
    /// assert!(tensor.get(&[0, 0, 0]).is_err());
    /// ```
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Get a mutable reference to an element by multi-dimensional index.
    ///
    /// Same addressing and checks as [`Tensor::get`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::new(&[2, 2]).unwrap();
    /// *tensor.get_mut(&[0, 1]).unwrap() = 10.0;
    /// assert_eq!(tensor[&[0, 1]], 10.0);
    /// ```
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Get the first element in row-major order.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Get the last element in row-major order.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_round_trip() {
        let mut tensor = Tensor::<u32>::new(&[3, 4, 5]).unwrap();
        *tensor.get_mut(&[2, 3, 4]).unwrap() = 77;
        assert_eq!(*tensor.get(&[2, 3, 4]).unwrap(), 77);
    }

    #[test]
    fn test_offset_uses_strides() {
        let tensor = Tensor::from_vec((0..24).collect::<Vec<u32>>(), &[2, 3, 4]).unwrap();
        // Row-major layout: the flat value equals the offset
        assert_eq!(*tensor.get(&[1, 2, 3]).unwrap(), 23);
        assert_eq!(*tensor.get(&[0, 1, 0]).unwrap(), 4);
        assert_eq!(*tensor.get(&[1, 0, 2]).unwrap(), 14);
    }

    #[test]
    fn test_partial_index_addresses_sub_block_lead() {
        let tensor = Tensor::from_vec((0..24).collect::<Vec<u32>>(), &[2, 3, 4]).unwrap();
        assert_eq!(*tensor.get(&[1]).unwrap(), 12);
        assert_eq!(*tensor.get(&[1, 2]).unwrap(), 20);
        assert_eq!(*tensor.get(&[]).unwrap(), 0);
    }

    #[test]
    fn test_index_at_bound_is_rejected() {
        let tensor = Tensor::<f64>::new(&[3, 2]).unwrap();
        assert_eq!(
            tensor.get(&[3, 0]).unwrap_err(),
            TensorError::IndexOutOfRange {
                dimension: 0,
                given: 3,
                bound: 3
            }
        );
        assert_eq!(
            tensor.get(&[0, 2]).unwrap_err(),
            TensorError::IndexOutOfRange {
                dimension: 1,
                given: 2,
                bound: 2
            }
        );
    }

    #[test]
    fn test_too_many_indices_is_rank_mismatch() {
        let tensor = Tensor::<f64>::new(&[2, 2]).unwrap();
        assert_eq!(
            tensor.get(&[0, 0, 0]).unwrap_err(),
            TensorError::RankMismatch { given: 3, rank: 2 }
        );
    }

    #[test]
    fn test_failed_write_leaves_tensor_unmodified() {
        let mut tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        assert!(tensor.get_mut(&[2, 0]).is_err());
        assert_eq!(tensor.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_scalar_access_with_empty_index() {
        let mut tensor = Tensor::<i64>::new(&[]).unwrap();
        *tensor.get_mut(&[]).unwrap() = 5;
        assert_eq!(*tensor.get(&[]).unwrap(), 5);
        assert!(tensor.get(&[0]).is_err());
    }

    #[test]
    fn test_first_and_last() {
        let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        assert_eq!(tensor.first(), Some(&1));
        assert_eq!(tensor.last(), Some(&6));
    }
}
