//! # Byte Codec
//!
//! Fixed-width big-endian integer primitives underneath the wire codec.
//! Amounts, ports and v6-mapped IPs all cross the wire through these, so
//! their behavior pins down the byte layout of every numeric blob.

use crate::error::CodecError;

/// Unsigned integers the byte codec can place at arbitrary offsets.
pub trait FixedWidthUint: Copy {
    fn into_u128(self) -> u128;
    fn try_from_u128(value: u128) -> Option<Self>;
}

macro_rules! impl_fixed_width_uint {
    ($($ty:ty),*) => {
        $(impl FixedWidthUint for $ty {
            fn into_u128(self) -> u128 {
                self as u128
            }

            fn try_from_u128(value: u128) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        })*
    };
}

impl_fixed_width_uint!(u8, u16, u32, u64);

impl FixedWidthUint for u128 {
    fn into_u128(self) -> u128 {
        self
    }

    fn try_from_u128(value: u128) -> Option<Self> {
        Some(value)
    }
}

/// Write `value` as a `width`-byte big-endian integer at `offset`, growing
/// the buffer when it is too short. `value` must fit in `width` bytes.
pub fn set_number<T: FixedWidthUint>(dst: &mut Vec<u8>, offset: usize, value: T, width: usize) {
    let value = value.into_u128();
    if width < 16 {
        debug_assert_eq!(value >> (width * 8), 0, "value does not fit width");
    }
    if dst.len() < offset + width {
        dst.resize(offset + width, 0);
    }
    for i in 0..width {
        dst[offset + width - 1 - i] = (value >> (i * 8)) as u8;
    }
}

/// Read a `width`-byte big-endian integer at `offset`. Fails rather than
/// reading past the end of the buffer or overflowing the target type.
pub fn get_number<T: FixedWidthUint>(
    src: &[u8],
    offset: usize,
    width: usize,
) -> Result<T, CodecError> {
    let end = offset
        .checked_add(width)
        .ok_or(CodecError::OutOfBounds {
            offset,
            width,
            len: src.len(),
        })?;
    if end > src.len() || width > 16 {
        return Err(CodecError::OutOfBounds {
            offset,
            width,
            len: src.len(),
        });
    }
    let mut value: u128 = 0;
    for &byte in &src[offset..end] {
        value = (value << 8) | u128::from(byte);
    }
    T::try_from_u128(value).ok_or(CodecError::IntegerOverflow)
}

/// Copy `src` into `dst` iff the lengths match exactly.
pub fn copy_with_size_check(src: &[u8], dst: &mut [u8]) -> Result<(), CodecError> {
    if src.len() != dst.len() {
        return Err(CodecError::SizeMismatch {
            expected: dst.len(),
            actual: src.len(),
        });
    }
    dst.copy_from_slice(src);
    Ok(())
}
