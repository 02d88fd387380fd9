//! Support of the [`is_index_vector!`](crate::is_index_vector) macro. Not part of the public API.
//!
//! Without specialization, a `bool` that is `false` for types lacking an impl is obtained through
//! method resolution: the qualified probe is found on the receiver itself while the unqualified
//! one is only reached after an extra auto-reference.

use crate::IndexVector;
use core::marker::PhantomData;

#[derive(Debug)]
pub struct Probe<T>(PhantomData<T>)
where
  T: ?Sized;

impl<T> Probe<T>
where
  T: ?Sized,
{
  #[inline]
  pub fn new() -> Self {
    Self(PhantomData)
  }
}

pub trait QualifiedProbe {
  #[inline]
  fn is_index_vector(&self) -> bool {
    true
  }
}

impl<T> QualifiedProbe for Probe<T> where T: IndexVector + ?Sized {}

pub trait UnqualifiedProbe {
  #[inline]
  fn is_index_vector(&self) -> bool {
    false
  }
}

impl<T> UnqualifiedProbe for &'_ Probe<T> where T: ?Sized {}

/// If all the given concrete types qualify as index vectors.
///
/// Unlike an `IndexVector` bound, asking about a type that doesn't qualify is not a build error.
/// Generic parameters are always reported according to their bounds, so this is only meaningful
/// for concrete types.
///
/// ```rust
/// struct Plain;
/// assert!(ndindex::is_index_vector!([u32; 3]));
/// assert!(ndindex::is_index_vector!([u32; 3], &[i64]));
/// assert!(!ndindex::is_index_vector!(Plain));
/// assert!(!ndindex::is_index_vector!([u32; 3], Plain));
/// ```
#[macro_export]
macro_rules! is_index_vector {
  ($($ty:ty),+ $(,)?) => {{
    #[allow(unused_imports)]
    use $crate::probe::{QualifiedProbe as _, UnqualifiedProbe as _};
    true $(&& (&$crate::probe::Probe::<$ty>::new()).is_index_vector())+
  }};
}
