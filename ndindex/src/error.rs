use crate::index_vector::IndexVectorError;
use core::fmt;

/// Contains all errors related to ndindex
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
  /// IndexVectorError
  IndexVector(IndexVectorError),
}

impl fmt::Display for Error {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::IndexVector(ref x) => write!(f, "IndexVector({})", x),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<IndexVectorError> for Error {
  #[inline]
  fn from(f: IndexVectorError) -> Self {
    Self::IndexVector(f)
  }
}
