//! Containers that describe one value per array dimension.
//!
//! A type is an index vector if and only if it implements [`IndexVector`]. Shapes, strides and
//! multi-indices are all read through the same trait, so code that builds or indexes arrays can
//! accept fixed arrays, slices, vectors or any of the optional third-party containers without
//! knowing which one it got.
//!
//! Fixed-size kinds check their dimensionality while building, everything else checks it while
//! running.
//!
//! A fixed array with the wrong number of elements fails constant evaluation.
//!
//! ```rust,compile_fail,E0080
//! use ndindex::IndexVector;
//! let _ = [2u32, 5, 7].check_dims::<4>();
//! ```
//!
//! A type without an implementation can't be used where an index vector is expected.
//!
//! ```rust,compile_fail,E0277
//! use ndindex::IndexVector;
//! struct Plain;
//! fn rank_one<S: IndexVector>(shape: S) -> ndindex::Result<()> {
//!   shape.check_dims::<1>()
//! }
//! let _ = rank_one(Plain);
//! ```

mod index_vector_error;
mod index_vector_impls;
mod index_vectors;

use crate::{IndexElement, Offset, Size};
pub use index_vector_error::*;
pub use index_vectors::*;

/// Uniform read-only access to a container used as a shape, strides or multi-index.
///
/// Implementing this trait is what qualifies a type. Nothing is ever mutated.
///
/// # Types
///
/// * `Item`: Stored integer, converted on every read.
pub trait IndexVector {
  /// Stored integer.
  type Item: IndexElement;

  /// Makes sure that the container holds exactly `M` elements.
  ///
  /// Kinds with a length known at compile time refuse to build on mismatch. Every other kind
  /// returns [`IndexVectorError::DimensionMismatch`].
  ///
  /// # Example
  ///
  #[cfg_attr(feature = "alloc", doc = "```rust")]
  #[cfg_attr(not(feature = "alloc"), doc = "```ignore")]
  /// use ndindex::{IndexVector, IndexVectorError};
  /// assert_eq!([4u8, 8].check_dims::<2>(), Ok(()));
  /// assert_eq!(
  ///   vec![4u8, 8].check_dims::<3>(),
  ///   Err(ndindex::Error::IndexVector(IndexVectorError::DimensionMismatch { expected: 3, actual: 2 }))
  /// );
  /// ```
  fn check_dims<const M: usize>(&self) -> crate::Result<()>;

  /// All stored elements, in dimension order.
  fn elements(&self) -> &[Self::Item];

  /// Number of stored elements.
  #[inline]
  fn len(&self) -> usize {
    self.elements().len()
  }

  /// If the container has no elements, which is only valid for rank-0 arrays.
  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// The `n`-th element as an extent.
  ///
  /// `n` must be lesser than [`IndexVector::len`].
  ///
  /// # Example
  ///
  /// ```rust
  /// use ndindex::IndexVector;
  /// assert_eq!([2i16, -5, 7].get_size(2), 7);
  /// ```
  #[allow(clippy::indexing_slicing)]
  #[inline]
  fn get_size(&self, n: usize) -> Size {
    self.elements()[n].to_size()
  }

  /// The `n`-th element as a displacement.
  ///
  /// `n` must be lesser than [`IndexVector::len`].
  ///
  /// # Example
  ///
  /// ```rust
  /// use ndindex::IndexVector;
  /// assert_eq!((&[24u64, 8, 4][..]).get_offset(1), 8);
  /// ```
  #[allow(clippy::indexing_slicing)]
  #[inline]
  fn get_offset(&self, n: usize) -> Offset {
    self.elements()[n].to_offset()
  }

  /// Checks the dimensionality and then copies every element as an extent.
  ///
  /// # Example
  ///
  /// ```rust
  /// use ndindex::IndexVector;
  /// assert_eq!([4u32, 3, 2].to_sizes::<3>(), Ok([4, 3, 2]));
  /// ```
  #[inline]
  fn to_sizes<const M: usize>(&self) -> crate::Result<[Size; M]> {
    self.check_dims::<M>()?;
    Ok(core::array::from_fn(|n| self.get_size(n)))
  }

  /// Checks the dimensionality and then copies every element as a displacement.
  ///
  /// # Example
  ///
  /// ```rust
  /// use ndindex::IndexVector;
  /// assert_eq!((&[-8i32, 32, 96][..]).to_offsets::<3>(), Ok([-8, 32, 96]));
  /// ```
  #[inline]
  fn to_offsets<const M: usize>(&self) -> crate::Result<[Offset; M]> {
    self.check_dims::<M>()?;
    Ok(core::array::from_fn(|n| self.get_offset(n)))
  }
}
