//! Strided tensor implementation
//!
//! This module provides the owning tensor container and its chainable
//! index-accumulating views, organized into functional sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod indexing;
mod slicing;

// Supporting modules
mod traits;

// Re-export the main types
pub use slicing::{TensorSlice, TensorSliceMut};
pub use types::Tensor;
