//! Tensor type definition and basic operations
//!
//! This module defines the core `Tensor<T>` type and provides construction
//! and accessor methods. Indexing and slicing are organized in separate
//! modules.

use crate::error::{Result, TensorError};
use crate::types::{Rank, Shape};
use smallvec::smallvec;

/// Strided N-dimensional tensor with owned, contiguous storage.
///
/// The tensor owns its shape, the strides derived from it, and a flat
/// row-major buffer of `product(shape)` elements. Strides are computed once
/// at construction and satisfy `strides[last] == 1` and
/// `strides[i] == strides[i + 1] * shape[i + 1]`; the shape never changes
/// afterwards.
///
/// # Type Parameters
///
/// * `T` - The element type. No numeric bounds are required; construction
///   needs `Clone` (and `Default` for [`Tensor::new`]).
///
/// # Examples
///
/// ```
/// use ndtensor_core::Tensor;
///
/// let tensor = Tensor::<f64>::new(&[2, 3, 4]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.strides(), &[12, 4, 1]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tensor<T> {
    /// Flat element buffer in row-major order, `len == product(shape)`
    pub(crate) data: Vec<T>,
    /// Dimension sizes; the rank is `shape.len()`
    pub(crate) shape: Shape,
    /// Buffer slots to skip per step along each dimension
    pub(crate) strides: Shape,
}

/// Compute row-major strides for a shape: the last dimension varies fastest.
pub(crate) fn compute_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = smallvec![0; shape.len()];
    let mut stride = 1;
    for (slot, &dim) in strides.iter_mut().zip(shape.iter()).rev() {
        *slot = stride;
        stride *= dim;
    }
    strides
}

/// Reject shapes with zero-size dimensions.
///
/// Zero-size dimensions would make partial indices address storage that does
/// not exist, so they are ruled out at construction time.
fn validate_shape(shape: &[usize]) -> Result<()> {
    if shape.contains(&0) {
        return Err(TensorError::InvalidShape {
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

impl<T> Tensor<T>
where
    T: Clone + Default,
{
    /// Create a tensor of the given shape filled with `T::default()`.
    ///
    /// A rank-0 shape (`&[]`) is permitted and holds exactly one element.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if any dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::new(&[5, 2]).unwrap();
    /// assert_eq!(tensor.len(), 10);
    /// assert!(tensor.iter().all(|&x| x == 0.0));
    /// ```
    pub fn new(shape: &[usize]) -> Result<Self> {
        Self::from_elem(shape, T::default())
    }
}

impl<T> Tensor<T>
where
    T: Clone,
{
    /// Create a tensor of the given shape with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if any dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::from_elem(&[2, 3], 5.0).unwrap();
    /// assert_eq!(tensor[&[0, 0]], 5.0);
    /// assert_eq!(tensor[&[1, 2]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Result<Self> {
        validate_shape(shape)?;
        let total: usize = shape.iter().product();
        Ok(Self {
            data: vec![value; total],
            shape: Shape::from_slice(shape),
            strides: compute_strides(shape),
        })
    }

    /// Create a tensor from a flat vector in row-major order.
    ///
    /// # Arguments
    ///
    /// * `data` - Flattened elements, last dimension varying fastest
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::LengthMismatch`] if `data.len()` differs from
    /// `product(shape)`, or [`TensorError::InvalidShape`] if any dimension
    /// is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(tensor[&[0, 2]], 3);
    /// assert_eq!(tensor[&[1, 0]], 4);
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        validate_shape(shape)?;
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                shape: shape.to_vec(),
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: Shape::from_slice(shape),
            strides: compute_strides(shape),
        })
    }

    /// Overwrite every element with `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let mut tensor = Tensor::<i32>::new(&[2, 2]).unwrap();
    /// tensor.fill(7);
    /// assert!(tensor.iter().all(|&x| x == 7));
    /// ```
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Copy the elements into a new `Vec` in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T> Tensor<T> {
    /// Get the rank (number of dimensions) of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::new(&[2, 3, 4]).unwrap();
    /// assert_eq!(tensor.rank(), 3);
    /// ```
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Get the shape of this tensor.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the row-major strides of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::new(&[5, 2]).unwrap();
    /// assert_eq!(tensor.strides(), &[2, 1]);
    /// ```
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Get the total number of elements, `product(shape)`.
    ///
    /// A rank-0 tensor has one element (empty product).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether this tensor is a rank-0 scalar.
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Get the underlying buffer as a flat slice in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the underlying buffer as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return its flat buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Overwrite every element with values produced by a closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndtensor_core::Tensor;
    ///
    /// let mut tensor = Tensor::<u32>::new(&[3]).unwrap();
    /// let mut next = 0;
    /// tensor.fill_with(|| {
    ///     next += 1;
    ///     next
    /// });
    /// assert_eq!(tensor.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: FnMut() -> T,
    {
        self.data.fill_with(f);
    }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Check whether two tensors have identical shapes.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape == other.shape
    }
}
