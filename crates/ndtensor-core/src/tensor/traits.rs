//! Trait implementations for `Tensor`
//!
//! - `Index` / `IndexMut` over `&[usize]` (panicking, operator convenience)
//! - `PartialEq` / `Eq`
//! - `Debug`

use super::types::Tensor;
use std::fmt;
use std::ops::{Index, IndexMut};

impl<T> Index<&[usize]> for Tensor<T> {
    type Output = T;

    /// Operator form of [`Tensor::get`].
    ///
    /// # Panics
    ///
    /// Panics with the underlying error message on any bounds or rank
    /// violation; use [`Tensor::get`] for a recoverable variant.
    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl<T: Eq> Eq for Tensor<T> {}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .field("data", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_operator_reads_and_writes() {
        let mut tensor = Tensor::<f64>::new(&[2, 3]).unwrap();
        tensor[&[1, 2]] = 4.5;
        assert_eq!(tensor[&[1, 2]], 4.5);
    }

    #[test]
    #[should_panic(expected = "out of bounds for dimension 0")]
    fn test_index_operator_panics_out_of_bounds() {
        let tensor = Tensor::<f64>::new(&[2, 3]).unwrap();
        let _ = tensor[&[2, 0]];
    }

    #[test]
    fn test_equality_compares_shape_and_data() {
        let a = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let b = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let c = Tensor::from_vec(vec![1, 2, 3, 4], &[4]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_shows_shape() {
        let tensor = Tensor::from_vec(vec![1, 2], &[2]).unwrap();
        let rendered = format!("{tensor:?}");
        assert!(rendered.contains("shape"));
        assert!(rendered.contains("[2]"));
    }
}
