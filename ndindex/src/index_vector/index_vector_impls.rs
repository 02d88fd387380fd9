use crate::{
  utils::{check_dims_len, DimsAssertion},
  IndexElement, IndexVector, Offset, Size,
};
#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};
use cl_traits::{Array, ArrayWrapper};

// Lengths are known while running

macro_rules! impl_run_time_dims {
  ($([$($generics:tt)*] $ty:ty, $item:ty $(, $cfg:meta)?;)*) => {
    $(
      $(#[cfg($cfg)])?
      impl<$($generics)*> IndexVector for $ty
      where
        $item: IndexElement,
      {
        type Item = $item;

        #[inline]
        fn check_dims<const M: usize>(&self) -> crate::Result<()> {
          check_dims_len::<M>(self.elements().len())
        }

        #[inline]
        fn elements(&self) -> &[$item] {
          &self[..]
        }
      }
    )*
  };
}

impl_run_time_dims!(
  [U] [U], U;
  [U] Vec<U>, U, feature = "alloc";
  [U] Box<[U]>, U, feature = "alloc";
  [A: arrayvec::Array] arrayvec::ArrayVec<A>, A::Item, feature = "with-arrayvec";
  [A: smallvec::Array] smallvec::SmallVec<A>, A::Item, feature = "with-smallvec";
  [A: tinyvec::Array] tinyvec::ArrayVec<A>, A::Item, feature = "with-tinyvec";
);

// Lengths are part of the type

impl<U, const N: usize> IndexVector for [U; N]
where
  U: IndexElement,
{
  type Item = U;

  #[inline]
  fn check_dims<const M: usize>(&self) -> crate::Result<()> {
    #[allow(clippy::let_unit_value)]
    let () = DimsAssertion::<Self, M>::OK;
    Ok(())
  }

  #[inline]
  fn elements(&self) -> &[U] {
    self
  }
}

impl<A> IndexVector for ArrayWrapper<A>
where
  A: Array,
  A::Item: IndexElement,
{
  type Item = A::Item;

  #[inline]
  fn check_dims<const M: usize>(&self) -> crate::Result<()> {
    #[allow(clippy::let_unit_value)]
    let () = DimsAssertion::<Self, M>::OK;
    Ok(())
  }

  #[inline]
  fn elements(&self) -> &[A::Item] {
    (**self).slice()
  }
}

// References behave like the referent

impl<T> IndexVector for &'_ T
where
  T: IndexVector + ?Sized,
{
  type Item = T::Item;

  #[inline]
  fn check_dims<const M: usize>(&self) -> crate::Result<()> {
    (**self).check_dims::<M>()
  }

  #[inline]
  fn elements(&self) -> &[T::Item] {
    (**self).elements()
  }

  #[inline]
  fn get_size(&self, n: usize) -> Size {
    (**self).get_size(n)
  }

  #[inline]
  fn get_offset(&self, n: usize) -> Offset {
    (**self).get_offset(n)
  }
}
