//! Shape and strides from different containers

use ndindex::{IndexVector, IndexVectors, Offset, Size};

#[derive(Debug, PartialEq)]
struct Layout<const M: usize> {
  shape: [Size; M],
  strides: [Offset; M],
}

impl<const M: usize> Layout<M> {
  fn new<S, T>(shape: S, strides: T) -> ndindex::Result<Self>
  where
    S: IndexVector,
    T: IndexVector,
  {
    (&shape, &strides).check_all_dims::<M>()?;
    Ok(Self { shape: shape.to_sizes()?, strides: strides.to_offsets()? })
  }
}

fn main() -> ndindex::Result<()> {
  let from_arrays = Layout::<3>::new([4u32, 3, 2], [24i64, 8, 4])?;

  let mut shape = arrayvec::ArrayVec::<[u32; 4]>::new();
  shape.extend([4, 3, 2].iter().copied());
  let mut strides = smallvec::SmallVec::<[i64; 4]>::new();
  strides.extend([24, 8, 4].iter().copied());
  let from_dynamic = Layout::<3>::new(shape, &strides)?;
  assert!(from_arrays == from_dynamic);

  let bad = Layout::<3>::new(&[4u32, 3][..], vec![8i64, 4]);
  if let Err(err) = bad {
    println!("{}", err);
  }
  println!("{:?}", from_arrays);
  Ok(())
}
