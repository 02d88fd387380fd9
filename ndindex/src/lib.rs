//! # ndindex
//!
//! This crate decides which containers can describe the shape, strides or multi-index of an
//! N-dimensional array and reads them in a uniform way.
//!
//! ```rust
//! use ndindex::IndexVector;
//! let shape = [2u32, 5, 7];
//! assert_eq!(shape.check_dims::<3>(), Ok(()));
//! assert_eq!(shape.get_size(1), 5);
//! assert_eq!(shape.get_offset(2), 7);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod index_element;
pub mod index_vector;
#[doc(hidden)]
pub mod probe;
mod utils;

/// Shorcut of core::result::Result<T, ndindex::Error>;
pub type Result<T> = core::result::Result<T, Error>;

/// Non-negative extent of a dimension.
pub type Size = usize;
/// Signed displacement along a dimension.
pub type Offset = isize;

pub use error::*;
pub use index_element::*;
pub use index_vector::{IndexVector, IndexVectorError, IndexVectors};
