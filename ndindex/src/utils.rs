use crate::{index_vector::IndexVectorError, Size};
use cl_traits::{Array, ArrayWrapper};
use core::marker::PhantomData;

/// Index vectors whose number of elements is part of the type.
pub trait ConstDims {
  const DIMS: Size;
}

impl<U, const N: usize> ConstDims for [U; N] {
  const DIMS: Size = N;
}

impl<A> ConstDims for ArrayWrapper<A>
where
  A: Array,
{
  const DIMS: Size = A::CAPACITY;
}

/// Evaluating `OK` fails the build when `T` doesn't hold exactly `M` elements.
pub struct DimsAssertion<T, const M: usize>(PhantomData<T>)
where
  T: ?Sized;

impl<T, const M: usize> DimsAssertion<T, M>
where
  T: ConstDims + ?Sized,
{
  pub const OK: () = assert!(T::DIMS == M, "Index vector has wrong number of elements.");
}

#[inline]
pub fn check_dims_len<const M: usize>(actual: Size) -> crate::Result<()> {
  if actual == M {
    Ok(())
  } else {
    Err(IndexVectorError::DimensionMismatch { expected: M, actual }.into())
  }
}
