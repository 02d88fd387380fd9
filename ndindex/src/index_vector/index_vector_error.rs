use core::fmt;

/// Any error related to `IndexVector` operations
#[cfg_attr(feature = "with-serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexVectorError {
  // IndexVector::check_dims
  /// The number of elements of a run-time sized container is different than the number of
  /// dimensions
  #[cfg_attr(feature = "alloc", doc = "```rust")]
  #[cfg_attr(not(feature = "alloc"), doc = "```ignore")]
  /// use ndindex::{IndexVector, IndexVectorError};
  /// let shape = vec![4u32, 8];
  /// assert_eq!(
  ///   shape.check_dims::<3>(),
  ///   Err(ndindex::Error::IndexVector(IndexVectorError::DimensionMismatch { expected: 3, actual: 2 }))
  /// );
  /// ```
  DimensionMismatch {
    /// Number of dimensions
    expected: usize,
    /// Number of elements
    actual: usize,
  },
}

impl fmt::Display for IndexVectorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::DimensionMismatch { expected, actual } => write!(
        f,
        "Shape vector size ({}) does not match number of dimensions ({})",
        actual, expected
      ),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for IndexVectorError {}
