use crate::{Error, IndexVector, IndexVectorError};
use cl_traits::ArrayWrapper;

fn mismatch(expected: usize, actual: usize) -> crate::Result<()> {
  Err(Error::IndexVector(IndexVectorError::DimensionMismatch { expected, actual }))
}

#[test]
fn fixed_array_of_three_unsigned_values() {
  let shape = [2u32, 5, 7];
  assert_eq!(shape.check_dims::<3>(), Ok(()));
  assert_eq!(shape.get_size(1), 5);
  assert_eq!(shape.get_offset(2), 7);
  assert_eq!(shape.to_sizes::<3>(), Ok([2, 5, 7]));
  assert_eq!(shape.len(), 3);
}

#[test]
fn fixed_array_reference_keeps_the_array_check() {
  let strides = [24i64, 8, 4];
  let strides_ref = &strides;
  assert_eq!(strides_ref.check_dims::<3>(), Ok(()));
  assert_eq!(strides_ref.to_offsets::<3>(), Ok([24, 8, 4]));
}

#[test]
fn array_wrapper() {
  let shape: ArrayWrapper<[usize; 4]> = [1, 2, 3, 4].into();
  assert_eq!(shape.check_dims::<4>(), Ok(()));
  assert_eq!(shape.get_size(3), 4);
  assert_eq!(shape.get_offset(0), 1);
}

#[test]
fn empty_fixed_array_is_rank_zero() {
  let shape: [u8; 0] = [];
  assert_eq!(shape.check_dims::<0>(), Ok(()));
  assert!(shape.is_empty());
  assert_eq!(shape.to_sizes::<0>(), Ok([]));
}

#[test]
fn slice() {
  let shape: &[u16] = &[4, 3, 2];
  assert_eq!(shape.check_dims::<3>(), Ok(()));
  assert_eq!(shape.check_dims::<2>(), mismatch(2, 3));
  assert_eq!(shape.check_dims::<4>(), mismatch(4, 3));
  assert_eq!(shape.get_size(0), 4);
  assert_eq!(shape.get_offset(2), 2);
}

#[test]
fn negative_offsets_stay_negative() {
  let strides: &[i32] = &[-8, 32, -96];
  assert_eq!(strides.get_offset(0), -8);
  assert_eq!(strides.get_offset(2), -96);
  assert_eq!(strides.to_offsets::<3>(), Ok([-8, 32, -96]));
}

#[test]
fn size_and_offset_share_the_stored_value() {
  let index = [0usize, 9, 17];
  for n in 0..index.len() {
    assert_eq!(index.get_size(n) as isize, index.get_offset(n));
  }
}

#[test]
fn every_error_comes_from_an_index_vector() {
  let err = IndexVectorError::DimensionMismatch { expected: 2, actual: 5 };
  match Error::from(err) {
    Error::IndexVector(inner) => assert_eq!(inner, err),
  }
}

#[cfg(feature = "with-serde")]
#[test]
fn dimension_mismatch_serde() {
  let err = IndexVectorError::DimensionMismatch { expected: 3, actual: 2 };
  let json = serde_json::to_string(&err).unwrap();
  assert_eq!(json, r#"{"DimensionMismatch":{"expected":3,"actual":2}}"#);
  assert_eq!(serde_json::from_str::<IndexVectorError>(&json).unwrap(), err);
}

#[cfg(all(feature = "std", feature = "with-arrayvec"))]
#[test]
fn arrayvec_capacity_error_is_std_error() {
  fn source_of<E: std::error::Error>(_: &E) {}
  let mut shape = arrayvec::ArrayVec::<[u8; 1]>::new();
  shape.push(3);
  let err = shape.try_push(4).unwrap_err();
  source_of(&err);
  assert_eq!(shape.check_dims::<1>(), Ok(()));
}

#[cfg(feature = "alloc")]
mod alloc_kinds {
  use super::mismatch;
  use crate::{Error, IndexVector, IndexVectorError};
  use alloc::{boxed::Box, format, vec, vec::Vec};

  #[test]
  fn display_of_dimension_mismatch() {
    let err = IndexVectorError::DimensionMismatch { expected: 3, actual: 2 };
    assert_eq!(
      format!("{}", Error::from(err)),
      "IndexVector(Shape vector size (2) does not match number of dimensions (3))"
    );
  }

  #[test]
  fn growable_vector_with_fewer_elements() {
    let shape: Vec<u32> = vec![4, 8];
    assert_eq!(shape.check_dims::<3>(), mismatch(3, 2));
    assert_eq!(shape.to_sizes::<3>().map(|_| ()), mismatch(3, 2));
  }

  #[test]
  fn growable_vector() {
    let strides: Vec<isize> = vec![6, -2, 1];
    assert_eq!(strides.check_dims::<3>(), Ok(()));
    assert_eq!(strides.get_offset(1), -2);
    assert_eq!(strides.get_size(2), 1);
    assert_eq!((&strides).check_dims::<1>(), mismatch(1, 3));
  }

  #[test]
  fn boxed_slice() {
    let shape: Box<[u64]> = vec![5, 5].into_boxed_slice();
    assert_eq!(shape.check_dims::<2>(), Ok(()));
    assert_eq!(shape.check_dims::<0>(), mismatch(0, 2));
    assert_eq!(shape.get_size(1), 5);
  }
}

#[cfg(feature = "with-arrayvec")]
#[test]
fn arrayvec_array_vec() {
  let mut shape = arrayvec::ArrayVec::<[u8; 4]>::new();
  shape.push(3);
  shape.push(9);
  assert_eq!(shape.check_dims::<2>(), Ok(()));
  assert_eq!(shape.check_dims::<4>(), mismatch(4, 2));
  assert_eq!(shape.get_size(1), 9);
}

#[cfg(feature = "with-smallvec")]
#[test]
fn smallvec_small_vec() {
  let mut strides = smallvec::SmallVec::<[i32; 2]>::new();
  strides.push(-1);
  strides.push(2);
  strides.push(-3);
  assert_eq!(strides.check_dims::<3>(), Ok(()));
  assert_eq!(strides.check_dims::<2>(), mismatch(2, 3));
  assert_eq!(strides.get_offset(2), -3);
}

#[cfg(feature = "with-tinyvec")]
#[test]
fn tinyvec_array_vec() {
  let mut index = tinyvec::ArrayVec::<[u16; 3]>::default();
  index.push(7);
  assert_eq!(index.check_dims::<1>(), Ok(()));
  assert_eq!(index.check_dims::<3>(), mismatch(3, 1));
  assert_eq!(index.get_size(0), 7);
}
