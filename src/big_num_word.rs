//! # Word
//! The unit of a [`BigInt`](crate::BigInt) magnitude. Every word type carries a
//! double-width partner in which `acc + a * b + carry` never overflows, so the
//! carry of one column is always exactly one word.

use std::fmt::{Debug, LowerHex, UpperHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// An unsigned machine word usable as a bignum digit.
///
/// Implemented for `u8`, `u16` and `u32`; the double-width type is `u16`,
/// `u32` and `u64` respectively.
pub trait Word:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + LowerHex
    + UpperHex
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    const BITS: u32;
    const BYTES: usize;
    const ZERO: Self;
    const ONE: Self;

    /// `a + b + carry`, returning the low word and the carry out.
    fn adc(a: Self, b: Self, carry: bool) -> (Self, bool);

    /// `a - b - borrow`, returning the low word and the borrow out.
    fn sbb(a: Self, b: Self, borrow: bool) -> (Self, bool);

    /// `acc + a * b + carry` computed in the double-width type,
    /// returned as `(low, high)`.
    fn mac(acc: Self, a: Self, b: Self, carry: Self) -> (Self, Self);

    /// Divides the two-word value `hi:lo` by `divisor`, returning `(quotient, remainder)`.
    /// Requires `hi < divisor` so that the quotient fits in one word.
    fn div_rem_wide(hi: Self, lo: Self, divisor: Self) -> (Self, Self);

    /// Keeps the low `Self::BITS` bits of `val`.
    fn truncate_u128(val: u128) -> Self;

    fn to_u128(self) -> u128;

    fn leading_zeros(self) -> u32;

    /// Reads up to `Self::BYTES` little-endian bytes, zero-extending a short slice.
    fn read_le(bytes: &[u8]) -> Self;

    /// Writes exactly `Self::BYTES` little-endian bytes into `out`.
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($($w: ty => $d: ty),*) => {
    $(
    impl Word for $w {
        const BITS: u32 = <$w>::BITS;
        const BYTES: usize = std::mem::size_of::<$w>();
        const ZERO: Self = 0;
        const ONE: Self = 1;

        #[inline(always)]
        fn adc(a: Self, b: Self, carry: bool) -> (Self, bool) {
            let sum = a as $d + b as $d + carry as $d;
            (sum as $w, (sum >> <$w>::BITS) != 0)
        }

        #[inline(always)]
        fn sbb(a: Self, b: Self, borrow: bool) -> (Self, bool) {
            let (diff, b1) = a.overflowing_sub(b);
            let (diff, b2) = diff.overflowing_sub(borrow as $w);
            (diff, b1 || b2)
        }

        #[inline(always)]
        fn mac(acc: Self, a: Self, b: Self, carry: Self) -> (Self, Self) {
            let product = (a as $d) * (b as $d) + acc as $d + carry as $d;
            (product as $w, (product >> <$w>::BITS) as $w)
        }

        #[inline(always)]
        fn div_rem_wide(hi: Self, lo: Self, divisor: Self) -> (Self, Self) {
            debug_assert!(hi < divisor);
            let num = ((hi as $d) << <$w>::BITS) | lo as $d;
            let d = divisor as $d;
            ((num / d) as $w, (num % d) as $w)
        }

        #[inline(always)]
        fn truncate_u128(val: u128) -> Self {
            val as $w
        }

        #[inline(always)]
        fn to_u128(self) -> u128 {
            self as u128
        }

        #[inline(always)]
        fn leading_zeros(self) -> u32 {
            <$w>::leading_zeros(self)
        }

        fn read_le(bytes: &[u8]) -> Self {
            let mut buf = [0u8; std::mem::size_of::<$w>()];
            buf[..bytes.len()].copy_from_slice(bytes);
            <$w>::from_le_bytes(buf)
        }

        fn write_le(self, out: &mut [u8]) {
            out.copy_from_slice(&self.to_le_bytes());
        }
    }
    )*
    };
}

impl_word!(u8 => u16, u16 => u32, u32 => u64);

#[cfg(test)]
mod tests {
    use super::Word;

    #[test]
    fn test_adc_sbb() {
        assert_eq!(u16::adc(0xffff, 1, false), (0, true));
        assert_eq!(u16::adc(0xfffe, 0, true), (0xffff, false));
        assert_eq!(u8::adc(0xff, 0xff, true), (0xff, true));

        assert_eq!(u16::sbb(0, 1, false), (0xffff, true));
        assert_eq!(u16::sbb(5, 5, true), (0xffff, true));
        assert_eq!(u32::sbb(7, 2, true), (4, false));
    }

    #[test]
    fn test_mac_never_overflows() {
        // (2^k - 1)^2 + 2 * (2^k - 1) == 2^2k - 1
        assert_eq!(u8::mac(0xff, 0xff, 0xff, 0xff), (0xff, 0xff));
        assert_eq!(u16::mac(0xffff, 0xffff, 0xffff, 0xffff), (0xffff, 0xffff));
        assert_eq!(u32::mac(0, 0x10000, 0x10000, 0), (0, 1));
    }

    #[test]
    fn test_div_rem_wide() {
        assert_eq!(u16::div_rem_wide(1, 0, 3), (21845, 1));
        assert_eq!(u8::div_rem_wide(0, 17, 5), (3, 2));
    }

    #[test]
    fn test_read_write_le() {
        assert_eq!(u32::read_le(&[0x78, 0x56]), 0x5678);
        let mut out = [0u8; 4];
        0x12345678u32.write_le(&mut out);
        assert_eq!(out, [0x78, 0x56, 0x34, 0x12]);
    }
}
