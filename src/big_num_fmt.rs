//! Text conversion. Both directions work one "super radix" group at a time: the largest
//! power of the radix that fits in a single word, so parsing is a word multiply-add per
//! group and printing is a single-word division per group.

use std::fmt::{self, Alignment, Display, Formatter, LowerHex, UpperHex, Write};
use std::str::FromStr;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::{DIGITS, MAX_RADIX, MIN_RADIX};
use crate::big_num_error::{fault, Error, Result};
use crate::big_num_word::Word;

/// Largest power of `radix` not exceeding a `bits`-bit word, with its exponent.
fn super_radix(radix: u32, bits: u32) -> (u128, usize) {
    let max = (1u128 << bits) - 1;
    let radix = radix as u128;
    let mut power = radix;
    let mut digits = 1;
    while power * radix <= max {
        power *= radix;
        digits += 1;
    }
    (power, digits)
}

fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(fault("radix", Error::InvalidRadix(radix)))
    }
}

// 实现解析
impl<T: Word, const N: usize> BigInt<T, N> {
    /// Parses an optional `+`/`-` followed by at least one digit of `radix`.
    pub fn from_str_radix(val: &str, radix: u32) -> Result<Self> {
        check_radix(radix)?;

        let (sign, digits) = match val.as_bytes().first() {
            Some(b'-') => (Sign::Minus, &val[1..]),
            Some(b'+') => (Sign::Plus, &val[1..]),
            _ => (Sign::Plus, val),
        };
        if digits.is_empty() {
            return Err(fault("parse", Error::Empty));
        }

        let (super_radix, group_len) = super_radix(radix, T::BITS);
        let mut magnitude = Self::ZERO;
        let mut group_val: u128 = 0;
        let mut group_digits = 0;

        let push_group = |mag: &mut Self, multiplier: u128, group: u128| -> Result<()> {
            if mag.mul_add_word(T::truncate_u128(multiplier), T::truncate_u128(group)) {
                return Err(fault("parse", Error::CapacityOverflow));
            }
            Ok(())
        };

        for c in digits.chars() {
            let d = c
                .to_digit(radix)
                .ok_or_else(|| fault("parse", Error::InvalidDigit(c)))?;
            group_val = group_val * radix as u128 + d as u128;
            group_digits += 1;
            if group_digits == group_len {
                push_group(&mut magnitude, super_radix, group_val)?;
                group_val = 0;
                group_digits = 0;
            }
        }
        if group_digits > 0 {
            let multiplier = (radix as u128).pow(group_digits as u32);
            push_group(&mut magnitude, multiplier, group_val)?;
        }

        Ok(BigInt::from_parts(sign, *magnitude.words()))
    }
}

impl<T: Word, const N: usize> FromStr for BigInt<T, N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_str_radix(s, 10)
    }
}

// 实现打印
impl<T: Word, const N: usize> BigInt<T, N> {
    /// Writes the digits of the magnitude in `radix` without touching the heap.
    fn write_magnitude<W: Write>(&self, f: &mut W, radix: u32, upper: bool) -> fmt::Result {
        if self.is_zero() {
            return f.write_char('0');
        }

        let (super_radix, group_len) = super_radix(radix, T::BITS);
        let divisor = T::truncate_u128(super_radix);

        // groups come out least significant first. super_radix^2 exceeds a word, so a magnitude
        // of N words never needs more than 2N of them
        let mut low = [T::ZERO; N];
        let mut high = [T::ZERO; N];
        let mut count = 0;
        let mut rest = self.abs();
        while !rest.is_zero() {
            let (q, r) = rest.div_rem_word(divisor).map_err(|_| fmt::Error)?;
            if count < N {
                low[count] = r;
            } else {
                high[count - N] = r;
            }
            count += 1;
            rest = q;
        }

        for i in (0..count).rev() {
            let group = if i < N { low[i] } else { high[i - N] };
            let pad = if i == count - 1 { 0 } else { group_len };
            write_group(f, group.to_u128(), radix, pad, upper)?;
        }
        Ok(())
    }

    /// Writes sign, prefix and digits, honouring the formatter's width, fill, alignment,
    /// `+` and `0` flags the way the integer primitives do.
    fn fmt_radix(&self, f: &mut Formatter<'_>, radix: u32, upper: bool, prefix: &str) -> fmt::Result {
        let sign = if self.is_negative() {
            "-"
        } else if f.sign_plus() {
            "+"
        } else {
            ""
        };

        let padding = match f.width() {
            Some(width) => {
                let mut digits = DigitCount(0);
                self.write_magnitude(&mut digits, radix, upper)?;
                width.saturating_sub(sign.len() + prefix.len() + digits.0)
            }
            None => 0,
        };

        if padding == 0 {
            f.write_str(sign)?;
            f.write_str(prefix)?;
            return self.write_magnitude(f, radix, upper);
        }

        if f.sign_aware_zero_pad() {
            f.write_str(sign)?;
            f.write_str(prefix)?;
            write_fill(f, '0', padding)?;
            return self.write_magnitude(f, radix, upper);
        }

        let (before, after) = match f.align() {
            Some(Alignment::Left) => (0, padding),
            Some(Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        write_fill(f, fill, before)?;
        f.write_str(sign)?;
        f.write_str(prefix)?;
        self.write_magnitude(f, radix, upper)?;
        write_fill(f, fill, after)
    }

    /// A [`Display`] adapter printing the value in `radix`.
    pub fn display_radix(&self, radix: u32) -> Result<DisplayRadix<'_, T, N>> {
        check_radix(radix)?;
        Ok(DisplayRadix { val: self, radix })
    }
}

/// Counts the characters a write would produce.
struct DigitCount(usize);

impl Write for DigitCount {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

fn write_fill(f: &mut Formatter<'_>, fill: char, count: usize) -> fmt::Result {
    for _ in 0..count {
        f.write_char(fill)?;
    }
    Ok(())
}

fn write_group<W: Write>(f: &mut W, mut val: u128, radix: u32, pad: usize, upper: bool) -> fmt::Result {
    // a group fits in 32 bits, so 32 digits in radix 2 at most
    let mut buf = ['0'; 32];
    let mut len = 0;
    while val != 0 {
        let d = DIGITS[(val % radix as u128) as usize];
        buf[len] = if upper { d.to_ascii_uppercase() } else { d };
        len += 1;
        val /= radix as u128;
    }
    for _ in len..pad {
        f.write_char('0')?;
    }
    for c in buf[..len].iter().rev() {
        f.write_char(*c)?;
    }
    Ok(())
}

pub struct DisplayRadix<'a, T: Word, const N: usize> {
    val: &'a BigInt<T, N>,
    radix: u32,
}

impl<T: Word, const N: usize> Display for DisplayRadix<'_, T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.val.fmt_radix(f, self.radix, false, "")
    }
}

impl<T: Word, const N: usize> Display for BigInt<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, false, "")
    }
}

impl<T: Word, const N: usize> LowerHex for BigInt<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prefix = if f.alternate() { "0x" } else { "" };
        self.fmt_radix(f, 16, false, prefix)
    }
}

impl<T: Word, const N: usize> UpperHex for BigInt<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prefix = if f.alternate() { "0x" } else { "" };
        self.fmt_radix(f, 16, true, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::super_radix;
    use crate::{BigInt, Error};

    type B = BigInt<u16, 8>;

    #[test]
    fn test_super_radix() {
        assert_eq!(super_radix(10, 16), (10000, 4));
        assert_eq!(super_radix(10, 8), (100, 2));
        assert_eq!(super_radix(10, 32), (1_000_000_000, 9));
        assert_eq!(super_radix(16, 16), (0x1000, 3));
        assert_eq!(super_radix(36, 8), (36, 1));
    }

    #[test]
    fn test_to_string() {
        let a: B = "12345678909876523784950683472613487".parse().unwrap();
        assert_eq!(a.to_string(), "12345678909876523784950683472613487");

        let max = B::from_uint(u128::MAX).unwrap();
        assert_eq!(max.to_string(), u128::MAX.to_string());

        assert_eq!(B::ZERO.to_string(), "0");
        assert_eq!(B::from_int(-10000).unwrap().to_string(), "-10000");
        assert_eq!(B::from_int(100000001).unwrap().to_string(), "100000001");
    }

    #[test]
    fn test_parse() {
        assert_eq!("+42".parse::<B>(), B::from_int(42));
        assert_eq!("-0".parse::<B>(), Ok(B::ZERO));
        assert_eq!("000123".parse::<B>(), B::from_int(123));
        assert_eq!(
            "340282366920938463463374607431768211455".parse::<B>(),
            B::from_uint(u128::MAX)
        );
        assert_eq!(
            "340282366920938463463374607431768211456".parse::<B>(),
            Err(Error::CapacityOverflow)
        );
        assert_eq!("".parse::<B>(), Err(Error::Empty));
        assert_eq!("-".parse::<B>(), Err(Error::Empty));
        assert_eq!("12a".parse::<B>(), Err(Error::InvalidDigit('a')));
        assert_eq!(B::from_str_radix("10", 1), Err(Error::InvalidRadix(1)));
        assert_eq!(B::from_str_radix("10", 37), Err(Error::InvalidRadix(37)));
    }

    #[test]
    fn test_radix() {
        let a = B::from_str_radix("fafcfbffaffaffbffbffbffbffbff", 16).unwrap();
        assert_eq!(format!("{:x}", a), "fafcfbffaffaffbffbffbffbffbff");
        assert_eq!(format!("{:#X}", -a), "-0xFAFCFBFFAFFAFFBFFBFFBFFBFFBFF");

        let b = B::from_str_radix("-zz", 36).unwrap();
        assert_eq!(b, B::from_int(-(35 * 36 + 35)).unwrap());
        assert_eq!(b.display_radix(36).unwrap().to_string(), "-zz");
        assert_eq!(B::from_int(5).unwrap().display_radix(2).unwrap().to_string(), "101");
        assert!(b.display_radix(0).is_err());
    }

    #[test]
    fn test_format_flags_match_primitives() {
        let five = B::from_int(5).unwrap();
        let neg = B::from_int(-42).unwrap();
        let ff = B::from_int(255).unwrap();

        assert_eq!(format!("[{:>8}]", five), format!("[{:>8}]", 5));
        assert_eq!(format!("[{:8}]", five), "[       5]");
        assert_eq!(format!("[{:<5}]", neg), format!("[{:<5}]", -42));
        assert_eq!(format!("[{:*^7}]", neg), format!("[{:*^7}]", -42));
        assert_eq!(format!("{:08}", neg), format!("{:08}", -42));
        assert_eq!(format!("{:+}", five), "+5");
        assert_eq!(format!("{:+}", B::ZERO), "+0");
        assert_eq!(format!("{:#010x}", ff), format!("{:#010x}", 255));
        assert_eq!(format!("{:>6X}", ff), format!("{:>6X}", 255));
        assert_eq!(format!("[{:2}]", neg), "[-42]");
        assert_eq!(format!("{:>5}", five.display_radix(2).unwrap()), "  101");
    }

    #[test]
    fn test_small_words_need_extra_groups() {
        // 100 per group with u8 words: 39 decimal digits need 20 groups for 16 words
        type B8 = BigInt<u8, 16>;
        let max = B8::from_uint(u128::MAX).unwrap();
        assert_eq!(max.to_string(), u128::MAX.to_string());
        assert_eq!(format!("{:x}", max), format!("{:x}", u128::MAX));
        assert_eq!(max.to_string().parse::<B8>(), Ok(max));

        type B32 = BigInt<u32, 4>;
        let v = B32::from_int(-123456789012345678901234567890).unwrap();
        assert_eq!(v.to_string(), "-123456789012345678901234567890");
    }
}
