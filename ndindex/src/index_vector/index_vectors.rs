use crate::IndexVector;

/// Several index vectors that all qualify, like a shape together with its strides.
///
/// Implemented for tuples of one up to eight elements. Generic code uses `(S, T): IndexVectors`
/// where a single argument would use `S: IndexVector`.
///
/// ```rust
/// use ndindex::IndexVectors;
/// fn rank_three<S, T>(shape: S, strides: T) -> ndindex::Result<()>
/// where
///   (S, T): IndexVectors,
/// {
///   (shape, strides).check_all_dims::<3>()
/// }
/// assert_eq!(rank_three([4u32, 3, 2], &[24i64, 8, 4][..]), Ok(()));
/// assert!(rank_three([4u32, 3, 2], &[8i64, 32][..]).is_err());
/// ```
pub trait IndexVectors {
  /// Number of index vectors.
  const ARITY: usize;

  /// Calls [`IndexVector::check_dims`] on each element, from left to right, and stops at the
  /// first failure.
  fn check_all_dims<const M: usize>(&self) -> crate::Result<()>;
}

macro_rules! impl_index_vectors {
  ($arity:expr; $($ty:ident $idx:tt),+) => {
    impl<$($ty),+> IndexVectors for ($($ty,)+)
    where
      $($ty: IndexVector,)+
    {
      const ARITY: usize = $arity;

      #[inline]
      fn check_all_dims<const M: usize>(&self) -> crate::Result<()> {
        $(self.$idx.check_dims::<M>()?;)+
        Ok(())
      }
    }
  };
}

impl_index_vectors!(1; A 0);
impl_index_vectors!(2; A 0, B 1);
impl_index_vectors!(3; A 0, B 1, C 2);
impl_index_vectors!(4; A 0, B 1, C 2, D 3);
impl_index_vectors!(5; A 0, B 1, C 2, D 3, E 4);
impl_index_vectors!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_index_vectors!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_index_vectors!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
