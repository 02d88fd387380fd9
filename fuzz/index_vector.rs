//! Index vectors of arbitrary lengths

#![no_main]

use libfuzzer_sys::fuzz_target;
use ndindex::IndexVector;

#[derive(Debug, arbitrary::Arbitrary)]
struct Values {
  elements: Vec<i64>,
  n: usize,
}

fuzz_target!(|values: Values| {
  let Values { elements, n } = values;
  let small: smallvec::SmallVec<[i64; 4]> = elements.iter().copied().collect();

  let rslt = elements.check_dims::<3>();
  assert_eq!(rslt.is_ok(), elements.len() == 3);
  assert_eq!(rslt, small.check_dims::<3>());
  assert_eq!(elements.to_sizes::<3>().is_ok(), elements.len() == 3);
  if let Ok(offsets) = elements.to_offsets::<3>() {
    assert!(offsets.iter().zip(&elements).all(|(&a, &b)| a == b as isize));
  }

  if n < elements.len() {
    assert_eq!(elements.get_size(n), small.get_size(n));
    assert_eq!(elements.get_offset(n), elements[n] as isize);
  }
});
