//! Integration tests for ndtensor-core
//!
//! These tests verify end-to-end behavior across construction, direct
//! indexing, and chained slicing.

use anyhow::Result;
use ndtensor_core::{Tensor, TensorError};

#[test]
fn test_write_then_chained_read() -> Result<()> {
    // Shape [5, 2] of f64 zero; element [0, 0] set to 10; slice(0).at(0)
    // must observe the write.
    let mut tensor = Tensor::<f64>::new(&[5, 2])?;
    *tensor.get_mut(&[0, 0])? = 10.0;

    assert_eq!(*tensor.slice(0)?.at(0)?, 10.0);
    Ok(())
}

#[test]
fn test_slice_index_equal_to_bound_is_rejected() {
    // Index equal to shape[0] must fail the strict bound check.
    let tensor = Tensor::<f64>::new(&[3]).unwrap();
    assert_eq!(
        tensor.slice(3).unwrap_err(),
        TensorError::IndexOutOfRange {
            dimension: 0,
            given: 3,
            bound: 3
        }
    );
}

#[test]
fn test_too_many_indices_on_rank_two() {
    let tensor = Tensor::<f64>::new(&[5, 2]).unwrap();
    assert_eq!(
        tensor.get(&[0, 0, 0]).unwrap_err(),
        TensorError::RankMismatch { given: 3, rank: 2 }
    );
}

#[test]
fn test_full_chain_and_direct_access_agree() -> Result<()> {
    let tensor = Tensor::from_vec((0..60).collect::<Vec<u32>>(), &[3, 4, 5])?;

    for i in 0..3 {
        for j in 0..4 {
            for k in 0..5 {
                let direct = *tensor.get(&[i, j, k])?;
                let chained = *tensor.slice(i)?.append(j)?.at(k)?;
                assert_eq!(direct, chained, "Mismatch at [{}, {}, {}]", i, j, k);
            }
        }
    }
    Ok(())
}

#[test]
fn test_fill_then_enumerate() -> Result<()> {
    let mut tensor = Tensor::<i64>::new(&[2, 3, 2])?;
    tensor.fill(-4);

    for i in 0..2 {
        for j in 0..3 {
            for k in 0..2 {
                assert_eq!(*tensor.get(&[i, j, k])?, -4);
            }
        }
    }
    Ok(())
}

#[test]
fn test_mutable_chain_write_then_read_back() -> Result<()> {
    let mut tensor = Tensor::<i32>::new(&[2, 3, 4])?;

    *tensor.slice_mut(1)?.append(2)?.at_mut(3)? = 11;
    assert_eq!(tensor[&[1, 2, 3]], 11);

    *tensor.slice_mut(0)?.append(0)?.append(0)?.resolve_mut()? = -1;
    assert_eq!(tensor[&[0, 0, 0]], -1);
    Ok(())
}

#[test]
fn test_construction_rejects_zero_dimension() {
    assert_eq!(
        Tensor::<f64>::new(&[4, 0]).unwrap_err(),
        TensorError::InvalidShape { shape: vec![4, 0] }
    );
}

#[test]
fn test_shape_strides_len_introspection() -> Result<()> {
    let tensor = Tensor::<u8>::new(&[6, 7, 8])?;
    assert_eq!(tensor.shape(), &[6, 7, 8]);
    assert_eq!(tensor.strides(), &[56, 8, 1]);
    assert_eq!(tensor.len(), 336);
    assert_eq!(tensor.rank(), 3);
    Ok(())
}

#[test]
fn test_errors_convert_for_question_mark() {
    // TensorError implements std::error::Error and converts into
    // anyhow::Error, so callers can use `?` across API boundaries.
    fn read_corner(tensor: &Tensor<f64>) -> Result<f64> {
        Ok(*tensor.get(&[9, 9])?)
    }

    let tensor = Tensor::<f64>::new(&[2, 2]).unwrap();
    let err = read_corner(&tensor).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}
