//! # ndtensor-core
//!
//! Strided N-dimensional tensor container with bounds-checked element access
//! and chainable sub-indexing.
//!
//! This crate provides a single canonical tensor type:
//!
//! - **Owning container** ([`Tensor`]) holding the shape, the derived
//!   strides, and a contiguous row-major element buffer
//! - **Chainable index views** ([`TensorSlice`], [`TensorSliceMut`]) that
//!   accumulate a prefix of indices one dimension at a time before resolving
//!   to an element
//! - **Structured errors** ([`TensorError`]) that always identify the
//!   offending dimension and index
//!
//! ## Core Principles
//!
//! ### Memory Layout
//!
//! Tensors are C-contiguous (row-major): the last dimension has stride 1 and
//! `strides[i] == strides[i + 1] * shape[i + 1]`. The shape is fixed at
//! construction; there is no reshape or resize.
//!
//! ### Safety
//!
//! All indexing is bounds-checked. No unsafe code. There is deliberately no
//! silently-unchecked twin of any accessor; callers that want flat access
//! can go through [`Tensor::as_slice`].
//!
//! ## Quick Start
//!
//! ```
//! use ndtensor_core::Tensor;
//!
//! // Create a 5x2 tensor of f64 zeros
//! let mut tensor = Tensor::<f64>::new(&[5, 2]).unwrap();
//! assert_eq!(tensor.shape(), &[5, 2]);
//! assert_eq!(tensor.len(), 10);
//!
//! // Write an element, then read it back through a chained slice
//! *tensor.get_mut(&[0, 0]).unwrap() = 10.0;
//! assert_eq!(*tensor.slice(0).unwrap().at(0).unwrap(), 10.0);
//! ```
//!
//! ## Creating Tensors
//!
//! ```
//! use ndtensor_core::Tensor;
//!
//! // Default-filled
//! let zeros = Tensor::<f64>::new(&[2, 3]).unwrap();
//!
//! // Fill with a value
//! let fives = Tensor::from_elem(&[2, 3], 5.0).unwrap();
//!
//! // From a flat vec (row-major order)
//! let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! assert_eq!(tensor[&[1, 0]], 3.0);
//!
//! // Zero-size dimensions are rejected
//! assert!(Tensor::<f64>::new(&[2, 0]).is_err());
//! ```
//!
//! ## Indexing
//!
//! Direct access takes a full multi-dimensional index; a shorter index list
//! addresses the leading element of the remaining sub-block:
//!
//! ```
//! use ndtensor_core::Tensor;
//!
//! let mut tensor = Tensor::from_vec((0..24).collect(), &[2, 3, 4]).unwrap();
//!
//! assert_eq!(*tensor.get(&[1, 2, 3]).unwrap(), 23);
//! assert_eq!(*tensor.get(&[1]).unwrap(), 12); // leading element of block [1]
//!
//! *tensor.get_mut(&[0, 0, 1]).unwrap() = 99;
//! assert_eq!(tensor[&[0, 0, 1]], 99);
//! ```
//!
//! ## Chained Slicing
//!
//! [`Tensor::slice`] seeds an index accumulator with one index; `append`
//! consumes and returns the builder so a partially built chain cannot be
//! reused, and `resolve` requires the full rank:
//!
//! ```
//! use ndtensor_core::Tensor;
//!
//! let tensor = Tensor::from_vec((0..24).collect(), &[2, 3, 4]).unwrap();
//!
//! let slice = tensor.slice(1).unwrap().append(2).unwrap().append(3).unwrap();
//! assert_eq!(*slice.resolve().unwrap(), 23);
//!
//! // `at` descends one dimension without requiring completion
//! assert_eq!(*tensor.slice(1).unwrap().at(0).unwrap(), 12);
//! ```
//!
//! ## Error Handling
//!
//! Every contract violation is reported synchronously as a [`TensorError`]
//! carrying the dimension, the offending index, and the bound:
//!
//! ```
//! use ndtensor_core::{Tensor, TensorError};
//!
//! let tensor = Tensor::<f64>::new(&[3]).unwrap();
//!
//! assert_eq!(
//!     tensor.slice(3).err(),
//!     Some(TensorError::IndexOutOfRange { dimension: 0, given: 3, bound: 3 })
//! );
//! assert!(matches!(
//!     tensor.get(&[0, 0]).err(),
//!     Some(TensorError::RankMismatch { .. })
//! ));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support for [`Tensor`]

#![deny(warnings)]

pub mod error;
pub mod tensor;
pub mod types;


pub use error::{Result, TensorError};
pub use tensor::{Tensor, TensorSlice, TensorSliceMut};
pub use types::{Axis, Rank, Shape};
