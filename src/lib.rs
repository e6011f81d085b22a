//! Static Big Num \
//! This crate provides:
//! - [`BigInt`]: Fixed-capacity signed integers in sign-magnitude form. The magnitude is an array of
//!   `N` words of type `T` ([`u8`], [`u16`] or [`u32`]), so nothing is ever allocated, and any
//!   result that would not fit is reported as [`Error::CapacityOverflow`] instead of wrapping.
//! - [`Bignum`]: The build-time configured instance, [`DEFAULT_BITS`] bits of magnitude in
//!   [`DefaultWord`] words. Pick the word with the `word8` / `word16` / `word32` features.

mod big_int;
mod big_num_constants;
mod big_num_error;
mod big_num_fmt;
#[cfg(feature = "serde")]
mod big_num_serde;
mod big_num_traits;
mod big_num_word;

pub use big_int::{BigInt, Sign};
pub use big_num_constants::{DefaultWord, DEFAULT_BITS, DEFAULT_WORDS};
pub use big_num_error::{Error, Result};
pub use big_num_fmt::DisplayRadix;
pub use big_num_word::Word;

pub type Bignum = BigInt<DefaultWord, DEFAULT_WORDS>;

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use quickcheck::{quickcheck, TestResult};

    use crate::{BigInt, Bignum, Error};

    type B = BigInt<u16, 8>;

    fn int(val: i128) -> B {
        B::from_int(val).unwrap()
    }

    #[test]
    fn it_works() {
        let a: Bignum = "10000000000000".parse().unwrap();
        let b: Bignum = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10);
        println!("a >> 10 = {}", &a >> 10);
        assert_eq!(Bignum::CAPACITY_BITS, 2048);
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(int(500) + int(700), int(1200));
        assert_eq!(int(-5) + int(3), int(-2));
        assert_eq!(int(123456) * int(654321), int(80779853376));
        assert_eq!(int(17).checked_div(&int(5)), Ok(int(3)));
        assert_eq!(int(17).checked_rem(&int(5)), Ok(int(2)));
        assert_eq!(int(987654321).checked_div(&int(0)), Err(Error::DivisionByZero));
        assert_eq!(int(1).checked_shl(130), Err(Error::CapacityOverflow));
    }

    #[test]
    fn test_default_capacity() {
        // 2^2047 fits, 2^2048 does not
        let two = Bignum::from_int(2).unwrap();
        let top = two.checked_pow_u32(2047).unwrap();
        assert_eq!(top.bit_length(), 2048);
        assert_eq!(top.checked_mul(&two), Err(Error::CapacityOverflow));
        assert_eq!(top / two.checked_pow_u32(2000).unwrap(), two.checked_pow_u32(47).unwrap());
    }

    quickcheck! {
        fn prop_add_sub_round_trip(a: i128, b: i64) -> TestResult {
            let (a, b) = (a / 2, b as i128);
            let sum = int(a) + int(b);
            TestResult::from_bool(sum - int(b) == int(a) && sum == int(a + b))
        }

        fn prop_compare_matches_i128(a: i128, b: i128) -> bool {
            int(a).compare(&int(b)) == a.cmp(&b) && int(a).compare(&int(a)) == Ordering::Equal
        }

        fn prop_mul_commutes(a: i64, b: i64) -> bool {
            let (x, y) = (int(a as i128), int(b as i128));
            x * y == y * x && x * y == int(a as i128 * b as i128)
        }

        fn prop_square_matches_mul(a: u128) -> bool {
            let x = B::from_uint(a).unwrap();
            x.checked_square() == x.checked_mul(&x)
        }

        fn prop_div_rem_identity(a: i128, b: i64) -> TestResult {
            let (Some(q_ref), Some(r_ref)) = (a.checked_div(b as i128), a.checked_rem(b as i128)) else {
                return TestResult::discard();
            };
            let (x, y) = (int(a), int(b as i128));
            let (q, r) = x.checked_div_rem(&y).unwrap();
            TestResult::from_bool(
                q * y + r == x
                    && r.compare_magnitude(&y) == Ordering::Less
                    && q == int(q_ref)
                    && r == int(r_ref),
            )
        }

        fn prop_is_zero_after_self_sub(a: i128) -> bool {
            (int(a) - int(a)).is_zero()
        }

        fn prop_bytes_round_trip(buf: Vec<u8>) -> bool {
            let buf = &buf[..buf.len().min(B::CAPACITY_BYTES)];
            let mut out = [0u8; 16];
            B::from_bytes(buf).unwrap().to_bytes(&mut out).unwrap();
            out[..buf.len()] == *buf && out[buf.len()..].iter().all(|b| *b == 0)
        }

        fn prop_decimal_round_trip(a: i128) -> bool {
            let s = int(a).to_string();
            s == a.to_string() && s.parse::<B>() == Ok(int(a))
        }

        fn prop_shifts_match_u128(a: u64, n: u8) -> bool {
            let n = (n % 64) as usize;
            let x = B::from_uint(a as u128).unwrap();
            (x << n).to_u128() == Ok((a as u128) << n) && (x >> n).to_u128() == Ok((a >> n) as u128)
        }

        fn prop_bitwise_matches_u128(a: u128, b: u128) -> bool {
            let (x, y) = (B::from_uint(a).unwrap(), B::from_uint(b).unwrap());
            (x & y).to_u128() == Ok(a & b)
                && (x | y).to_u128() == Ok(a | b)
                && (x ^ y).to_u128() == Ok(a ^ b)
        }
    }
}
