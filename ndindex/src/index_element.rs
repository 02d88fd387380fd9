use crate::{Offset, Size};

/// Integer that can be stored inside an index vector.
///
/// Conversions reinterpret the stored value with a plain `as` cast, the same way a negative
/// stride wraps when read as a size. Keeping values meaningful for the target representation is
/// up to the caller.
pub trait IndexElement: Copy {
  /// The stored value as a non-negative extent.
  fn to_size(self) -> Size;

  /// The stored value as a signed displacement.
  fn to_offset(self) -> Offset;
}

macro_rules! impl_index_element {
  ($($ty:ty),* $(,)?) => {
    $(
      impl IndexElement for $ty {
        #[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        #[inline]
        fn to_size(self) -> Size {
          self as Size
        }

        #[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        #[inline]
        fn to_offset(self) -> Offset {
          self as Offset
        }
      }
    )*
  };
}

impl_index_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
