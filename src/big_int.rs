//! # BigInt
//! Fixed-capacity signed integers. A value is a sign plus a magnitude of `N` words of type
//! `T`, stored little-endian. Nothing is ever allocated: every result lives in a `[T; N]`
//! on the stack, and a result that does not fit is reported as [`Error::CapacityOverflow`]
//! instead of being truncated.
//!
//! Range: `-(2^(N * T::BITS) - 1)` to `2^(N * T::BITS) - 1`.
//! # Example
//! ```
//! use static_bignum::BigInt;
//!
//! type U128 = BigInt<u16, 8>;
//!
//! let a = U128::from_uint(10000000000000).unwrap();
//! let b = U128::from_uint(900000000000).unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! assert!(a.checked_shl(130).is_err());
//! ```
//!
//! Operators (`+`, `*`, `<<`, ...) panic on a fault, the same way native integer overflow
//! does. The `checked_*` methods return [`Result`] instead.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Neg,
};

use crate::big_num_error::{fault, Error, Result};
use crate::big_num_word::Word;

macro_rules! bit_length_word {
    ($t: ty, $w: expr) => {
        (<$t as Word>::BITS - $w.leading_zeros()) as usize
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    /// Sign of a product or quotient.
    pub fn xor(self, other: Sign) -> Sign {
        if self == other { Sign::Plus } else { Sign::Minus }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// A signed integer with a magnitude of exactly `N` words of type `T`.
///
/// `N` must be at least 1; a zero-word capacity is rejected at compile time.
///
/// ```compile_fail
/// let _ = static_bignum::BigInt::<u16, 0>::zero();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BigInt<T: Word, const N: usize> {
    sign: Sign,
    words: [T; N],
}

// 表示与基本移位
impl<T: Word, const N: usize> BigInt<T, N> {
    /// Number of magnitude bits.
    pub const CAPACITY_BITS: usize = N * T::BITS as usize;
    /// Size of the byte image written by [`to_bytes`](Self::to_bytes).
    pub const CAPACITY_BYTES: usize = N * T::BYTES;

    const NON_EMPTY: () = assert!(N > 0, "a BigInt needs at least one word");

    pub const ZERO: Self = {
        let () = Self::NON_EMPTY;
        BigInt { sign: Sign::Plus, words: [T::ZERO; N] }
    };

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        let mut one = Self::ZERO;
        one.words[0] = T::ONE;
        one
    }

    /// Builds a value from a raw sign and little-endian words. A zero magnitude is always
    /// stored as positive.
    pub fn from_parts(sign: Sign, words: [T; N]) -> Self {
        BigInt::new(sign, words)
    }

    fn new(sign: Sign, words: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        let mut val = BigInt { sign, words };
        val.normalize();
        val
    }

    #[inline]
    fn normalize(&mut self) {
        if self.is_zero() {
            self.sign = Sign::Plus;
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The magnitude, least significant word first.
    pub fn words(&self) -> &[T; N] {
        &self.words
    }

    /// True iff every word is 0, whatever the sign.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|w| *w == T::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus && !self.is_zero()
    }

    pub fn abs(&self) -> Self {
        BigInt { sign: Sign::Plus, words: self.words }
    }

    /// Index of the highest non-zero word plus one; 0 for zero.
    pub fn digit_count(&self) -> usize {
        self.words
            .iter()
            .rposition(|w| *w != T::ZERO)
            .map_or(0, |i| i + 1)
    }

    /// Number of significant bits of the magnitude.
    pub fn bit_length(&self) -> usize {
        match self.digit_count() {
            0 => 0,
            len => (len - 1) * T::BITS as usize + bit_length_word!(T, self.words[len - 1]),
        }
    }

    /// Bit `i` of the magnitude; bits past the capacity read as 0.
    pub fn bit(&self, i: usize) -> bool {
        if i >= Self::CAPACITY_BITS {
            return false;
        }
        let bits = T::BITS as usize;
        (self.words[i / bits] >> (i % bits) as u32) & T::ONE != T::ZERO
    }

    // here: i < CAPACITY_BITS
    fn set_bit(&mut self, i: usize) {
        let bits = T::BITS as usize;
        let w = &mut self.words[i / bits];
        *w = *w | (T::ONE << (i % bits) as u32);
    }

    /// Shifts the whole magnitude one bit towards the most significant end.
    ///
    /// The bit leaving the top word is discarded from the value and returned, so a `true`
    /// result means the shift overflowed the capacity.
    pub fn shift_left_one(&mut self) -> bool {
        let top = T::BITS - 1;
        let out = (self.words[N - 1] >> top) != T::ZERO;
        for i in (1..N).rev() {
            self.words[i] = (self.words[i] << 1) | (self.words[i - 1] >> top);
        }
        self.words[0] = self.words[0] << 1;
        self.normalize();
        out
    }

    /// Shifts the whole magnitude one bit towards the least significant end.
    ///
    /// The bit leaving word 0 is discarded and returned.
    pub fn shift_right_one(&mut self) -> bool {
        let top = T::BITS - 1;
        let out = (self.words[0] & T::ONE) != T::ZERO;
        for i in 0..N - 1 {
            self.words[i] = (self.words[i] >> 1) | (self.words[i + 1] << top);
        }
        self.words[N - 1] = self.words[N - 1] >> 1;
        self.normalize();
        out
    }

    /// Moves every word `n` places up, filling the bottom with zeros. Words pushed past the
    /// top are discarded.
    pub fn shift_words_left(&mut self, n: usize) {
        if n >= N {
            self.words = [T::ZERO; N];
        } else if n > 0 {
            self.words.copy_within(0..N - n, n);
            self.words[..n].fill(T::ZERO);
        }
        self.normalize();
    }

    /// Moves every word `n` places down, filling the top with zeros. Words pushed past the
    /// bottom are discarded.
    pub fn shift_words_right(&mut self, n: usize) {
        if n >= N {
            self.words = [T::ZERO; N];
        } else if n > 0 {
            self.words.copy_within(n..N, 0);
            self.words[N - n..].fill(T::ZERO);
        }
        self.normalize();
    }
}

// 实现大小比较
impl<T: Word, const N: usize> BigInt<T, N> {
    fn compare_words(a: &[T; N], b: &[T; N]) -> Ordering {
        a.iter().rev().cmp(b.iter().rev())
    }

    /// Compares magnitudes, ignoring both signs.
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        BigInt::compare_words(&self.words, &other.words)
    }

    /// Three-way signed comparison. Zero equals zero regardless of the stored sign.
    pub fn compare(&self, other: &Self) -> Ordering {
        let self_sign = if self.is_zero() { Sign::Plus } else { self.sign };
        let other_sign = if other.is_zero() { Sign::Plus } else { other.sign };

        match (self_sign, other_sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.compare_magnitude(other),
            (Sign::Minus, Sign::Minus) => self.compare_magnitude(other).reverse(),
        }
    }
}

impl<T: Word, const N: usize> PartialEq for BigInt<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}
impl<T: Word, const N: usize> Eq for BigInt<T, N> {}

impl<T: Word, const N: usize> PartialOrd for BigInt<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T: Word, const N: usize> Ord for BigInt<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: Word, const N: usize> Hash for BigInt<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative().hash(state);
        self.words.hash(state);
    }
}

impl<T: Word, const N: usize> Default for BigInt<T, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

// 实现加减法
impl<T: Word, const N: usize> BigInt<T, N> {
    /// Word-by-word sum; `None` when a carry leaves the top word.
    fn add_words(x: &[T; N], y: &[T; N]) -> Option<[T; N]> {
        let mut result = [T::ZERO; N];
        let mut carry = false;
        for ((r, a), b) in result.iter_mut().zip(x).zip(y) {
            let (sum, c) = T::adc(*a, *b, carry);
            *r = sum;
            carry = c;
        }
        if carry { None } else { Some(result) }
    }

    /// `big - little`; requires `big >= little`.
    fn sub_words(big: &[T; N], little: &[T; N]) -> [T; N] {
        let mut result = [T::ZERO; N];
        let mut borrow = false;
        for ((r, a), b) in result.iter_mut().zip(big).zip(little) {
            let (diff, br) = T::sbb(*a, *b, borrow);
            *r = diff;
            borrow = br;
        }
        debug_assert!(!borrow);
        result
    }

    /// Adds two magnitudes under the given effective signs. Both `checked_add` and
    /// `checked_sub` land here.
    fn add_signed(op: &'static str, x: &Self, x_sign: Sign, y: &Self, y_sign: Sign) -> Result<Self> {
        if x_sign == y_sign {
            let words = BigInt::add_words(&x.words, &y.words)
                .ok_or_else(|| fault(op, Error::CapacityOverflow))?;
            return Ok(BigInt::new(x_sign, words));
        }

        match x.compare_magnitude(y) {
            Ordering::Less => Ok(BigInt::new(y_sign, BigInt::sub_words(&y.words, &x.words))),
            Ordering::Equal => Ok(Self::ZERO),
            Ordering::Greater => Ok(BigInt::new(x_sign, BigInt::sub_words(&x.words, &y.words))),
        }
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        BigInt::add_signed("add", self, self.sign, other, other.sign)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        BigInt::add_signed("sub", self, self.sign, other, -other.sign)
    }

    /// `self += other`; `self` is unchanged on failure.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    /// `self -= other`; `self` is unchanged on failure.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.checked_sub(other)?;
        Ok(())
    }
}

// 实现移位与位运算
impl<T: Word, const N: usize> BigInt<T, N> {
    /// Shifts left by `bits`, dropping whatever leaves the top.
    fn shl_in_place(&mut self, bits: usize) {
        let word_bits = T::BITS as usize;
        self.shift_words_left(bits / word_bits);
        let n_bits = (bits % word_bits) as u32;
        if n_bits != 0 {
            let n_bits_2 = T::BITS - n_bits;
            for i in (1..N).rev() {
                self.words[i] = (self.words[i] << n_bits) | (self.words[i - 1] >> n_bits_2);
            }
            self.words[0] = self.words[0] << n_bits;
        }
        self.normalize();
    }

    /// Shifts right by `bits`, dropping whatever leaves the bottom.
    fn shr_in_place(&mut self, bits: usize) {
        let word_bits = T::BITS as usize;
        self.shift_words_right(bits / word_bits);
        let n_bits = (bits % word_bits) as u32;
        if n_bits != 0 {
            let n_bits_2 = T::BITS - n_bits;
            for i in 0..N - 1 {
                self.words[i] = (self.words[i] >> n_bits) | (self.words[i + 1] << n_bits_2);
            }
            self.words[N - 1] = self.words[N - 1] >> n_bits;
        }
        self.normalize();
    }

    /// `self * 2^bits`. Fails if any set bit would be pushed past the capacity; zero can
    /// be shifted by any amount.
    pub fn checked_shl(&self, bits: usize) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        match self.bit_length().checked_add(bits) {
            Some(len) if len <= Self::CAPACITY_BITS => {
                let mut result = *self;
                result.shl_in_place(bits);
                Ok(result)
            }
            _ => Err(fault("shl", Error::CapacityOverflow)),
        }
    }

    /// Shifts the magnitude right by `bits`, keeping the sign. This truncates towards
    /// zero: `-5 >> 1 == -2`, unlike the flooring shift of native signed integers.
    pub fn shr_bits(&self, bits: usize) -> Self {
        if bits >= Self::CAPACITY_BITS {
            return Self::ZERO;
        }
        let mut result = *self;
        result.shr_in_place(bits);
        result
    }

    fn bitwise(&self, other: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        if self.is_negative() || other.is_negative() {
            return Err(fault(op, Error::InvalidOperand));
        }
        let mut words = [T::ZERO; N];
        for ((r, a), b) in words.iter_mut().zip(&self.words).zip(&other.words) {
            *r = f(*a, *b);
        }
        Ok(BigInt::new(Sign::Plus, words))
    }

    /// Bitwise AND of two non-negative values.
    pub fn checked_and(&self, other: &Self) -> Result<Self> {
        self.bitwise(other, "and", |a, b| a & b)
    }

    /// Bitwise OR of two non-negative values.
    pub fn checked_or(&self, other: &Self) -> Result<Self> {
        self.bitwise(other, "or", |a, b| a | b)
    }

    /// Bitwise XOR of two non-negative values.
    pub fn checked_xor(&self, other: &Self) -> Result<Self> {
        self.bitwise(other, "xor", |a, b| a ^ b)
    }
}

// 实现乘法
impl<T: Word, const N: usize> BigInt<T, N> {
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let self_len = self.digit_count();
        let other_len = other.digit_count();
        if self_len == 0 || other_len == 0 {
            return Ok(Self::ZERO);
        }

        // the shorter operand drives the outer loop
        let words = if self_len >= other_len {
            BigInt::mul_to_len(&self.words, self_len, &other.words, other_len)
        } else {
            BigInt::mul_to_len(&other.words, other_len, &self.words, self_len)
        };
        let words = words.ok_or_else(|| fault("mul", Error::CapacityOverflow))?;

        Ok(BigInt::new(self.sign.xor(other.sign), words))
    }

    /// Schoolbook product of the low `x_len` words of `x` and the low `y_len` words of `y`.
    /// `None` when the product needs more than `N` words.
    fn mul_to_len(x: &[T; N], x_len: usize, y: &[T; N], y_len: usize) -> Option<[T; N]> {
        // here: x_len > 0, y_len > 0, x[x_len - 1] != 0
        let mut z = [T::ZERO; N];

        for (y_index, &y_val) in y[..y_len].iter().enumerate() {
            if y_val == T::ZERO {
                continue;
            }
            // the top partial product alone already lands past the capacity
            if y_index + x_len > N {
                return None;
            }

            let mut carry = T::ZERO;
            for (x_index, &x_val) in x[..x_len].iter().enumerate() {
                let z_index = y_index + x_index;
                let (low, high) = T::mac(z[z_index], x_val, y_val, carry);
                z[z_index] = low;
                carry = high;
            }

            // no earlier row has written past y_index + x_len - 1
            let carry_index = y_index + x_len;
            if carry_index < N {
                z[carry_index] = carry;
            } else if carry != T::ZERO {
                return None;
            }
        }

        Some(z)
    }

    /// `self * self`, computing each cross product once.
    ///
    /// Always equal to `self.checked_mul(self)`.
    pub fn checked_square(&self) -> Result<Self> {
        let len = self.digit_count();
        if len == 0 {
            return Ok(Self::ZERO);
        }
        if 2 * len > N {
            return self.checked_mul(self);
        }

        /*
         * Partial products of "abc" by itself:
         *
         *           a  b  c
         *        *  a  b  c
         *       ===========
         *          ac bc cc
         *       ab bb bc
         *    aa ab ac
         *
         * Everything off the diagonal appears twice, so the square is
         * 2 * (ab + ac + bc) + (aa + bb + cc). Sum the upper triangle once,
         * double it with a one bit shift, then add the diagonal.
         */
        let x = &self.words;
        let mut square = Self::ZERO;
        let z = &mut square.words;
        for i in 0..len {
            let mut carry = T::ZERO;
            for j in i + 1..len {
                (z[i + j], carry) = T::mac(z[i + j], x[i], x[j], carry);
            }
            z[i + len] = carry;
        }

        // the doubled triangle is below the square, nothing leaves the top
        square.shift_left_one();

        let z = &mut square.words;
        let mut carry = false;
        for i in 0..len {
            let (low, high) = T::mac(T::ZERO, x[i], x[i], T::ZERO);
            let (w, c) = T::adc(z[2 * i], low, carry);
            z[2 * i] = w;
            let (w, c) = T::adc(z[2 * i + 1], high, c);
            z[2 * i + 1] = w;
            carry = c;
        }
        debug_assert!(!carry);

        square.normalize();
        Ok(square)
    }

    /// Multiplies by a single word, keeping the sign.
    pub fn mul_word(&self, m: T) -> Result<Self> {
        let mut result = *self;
        if result.mul_add_word(m, T::ZERO) {
            return Err(fault("mul", Error::CapacityOverflow));
        }
        Ok(result)
    }

    /// `mag = mag * m + a` in place. Returns true when the result overflowed, leaving the
    /// low words of the wrapped product behind.
    pub(crate) fn mul_add_word(&mut self, m: T, a: T) -> bool {
        let mut carry = a;
        for w in self.words.iter_mut() {
            let (low, high) = T::mac(T::ZERO, *w, m, carry);
            *w = low;
            carry = high;
        }
        self.normalize();
        carry != T::ZERO
    }
}

// 实现除法与求余
impl<T: Word, const N: usize> BigInt<T, N> {
    /// Truncating division: the quotient rounds towards zero and the remainder takes the
    /// sign of the dividend, as `/` and `%` do on `i64`.
    pub fn checked_div_rem(&self, other: &Self) -> Result<(Self, Self)> {
        let divisor_len = other.digit_count();
        if divisor_len == 0 {
            return Err(fault("div", Error::DivisionByZero));
        }
        if self.compare_magnitude(other) == Ordering::Less {
            return Ok((Self::ZERO, *self));
        }

        let (quotient, remainder) = if divisor_len == 1 {
            let (q, r) = BigInt::divide_one_word(&self.words, other.words[0]);
            let mut rem = [T::ZERO; N];
            rem[0] = r;
            (q, rem)
        } else {
            BigInt::divide_shift_subtract(&self.words, &other.words)
        };

        Ok((
            BigInt::new(self.sign.xor(other.sign), quotient),
            BigInt::new(self.sign, remainder),
        ))
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        self.checked_div_rem(other).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, other: &Self) -> Result<Self> {
        self.checked_div_rem(other).map(|(_, r)| r)
    }

    /// Divides the magnitude by a single word. The quotient keeps the sign of `self`; the
    /// remainder is the magnitude of the remainder.
    pub fn div_rem_word(&self, divisor: T) -> Result<(Self, T)> {
        if divisor == T::ZERO {
            return Err(fault("div", Error::DivisionByZero));
        }
        let (q, r) = BigInt::divide_one_word(&self.words, divisor);
        Ok((BigInt::new(self.sign, q), r))
    }

    /// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
    fn divide_one_word(u: &[T; N], v: T) -> ([T; N], T) {
        let mut w = [T::ZERO; N];
        let mut r = T::ZERO;
        for j in (0..N).rev() {
            let (q, rem) = T::div_rem_wide(r, u[j], v);
            w[j] = q;
            r = rem;
        }
        (w, r)
    }

    /// Binary long division of magnitudes; requires `u >= v > 0`.
    fn divide_shift_subtract(u: &[T; N], v: &[T; N]) -> ([T; N], [T; N]) {
        let mut remainder = BigInt { sign: Sign::Plus, words: *u };
        let mut denom = BigInt { sign: Sign::Plus, words: *v };
        let mut quotient = Self::ZERO;

        // line the divisor's leading bit up with the dividend's; the largest shift that
        // cannot leave the capacity
        let shift = remainder.bit_length() - denom.bit_length();
        denom.shl_in_place(shift);

        for bit in (0..=shift).rev() {
            if remainder.compare_magnitude(&denom) != Ordering::Less {
                remainder.words = BigInt::sub_words(&remainder.words, &denom.words);
                quotient.set_bit(bit);
            }
            denom.shift_right_one();
        }

        (quotient.words, remainder.words)
    }
}

// 实现幂运算
impl<T: Word, const N: usize> BigInt<T, N> {
    /// `self ^ exp` for a non-negative `exp`. `0 ^ 0 == 1`.
    pub fn checked_pow(&self, exp: &Self) -> Result<Self> {
        if exp.is_negative() {
            return Err(fault("pow", Error::InvalidOperand));
        }
        self.pow_by_bits(exp.bit_length(), |i| exp.bit(i))
    }

    pub fn checked_pow_u32(&self, exp: u32) -> Result<Self> {
        let bits = (u32::BITS - exp.leading_zeros()) as usize;
        self.pow_by_bits(bits, |i| (exp >> i) & 1 == 1)
    }

    /// Right-to-left binary exponentiation. The base is only squared while higher exponent
    /// bits remain, so no intermediate is larger than the final power.
    fn pow_by_bits(&self, bits: usize, bit: impl Fn(usize) -> bool) -> Result<Self> {
        let mut result = Self::one();
        let mut base = *self;
        for i in 0..bits {
            if bit(i) {
                result = result.checked_mul(&base)?;
            }
            if i + 1 < bits {
                base = base.checked_square()?;
            }
        }
        Ok(result)
    }
}

// 实现与原生整数、字节数组的转换
impl<T: Word, const N: usize> BigInt<T, N> {
    pub fn from_uint(val: u128) -> Result<Self> {
        let mut words = [T::ZERO; N];
        let mut rest = val;
        let mut i = 0;
        while rest != 0 {
            if i == N {
                return Err(fault("from_uint", Error::CapacityOverflow));
            }
            words[i] = T::truncate_u128(rest);
            rest >>= T::BITS;
            i += 1;
        }
        Ok(BigInt::new(Sign::Plus, words))
    }

    pub fn from_int(val: i128) -> Result<Self> {
        let mut result = BigInt::from_uint(val.unsigned_abs())?;
        if val < 0 {
            result.sign = Sign::Minus;
        }
        Ok(result)
    }

    fn magnitude_u128(&self) -> Option<u128> {
        if self.bit_length() > u128::BITS as usize {
            return None;
        }
        let len = self.digit_count();
        Some(
            self.words[..len]
                .iter()
                .rev()
                .fold(0u128, |acc, w| (acc << T::BITS) | w.to_u128()),
        )
    }

    /// Fails for negative values and values wider than 128 bits.
    pub fn to_u128(&self) -> Result<u128> {
        match self.magnitude_u128() {
            Some(mag) if !self.is_negative() => Ok(mag),
            _ => Err(fault("to_uint", Error::CapacityOverflow)),
        }
    }

    pub fn to_i128(&self) -> Result<i128> {
        let mag = self
            .magnitude_u128()
            .ok_or_else(|| fault("to_int", Error::CapacityOverflow))?;
        let val = if self.is_negative() {
            0i128.checked_sub_unsigned(mag)
        } else {
            i128::try_from(mag).ok()
        };
        val.ok_or_else(|| fault("to_int", Error::CapacityOverflow))
    }

    /// Loads a little-endian unsigned magnitude. `buf` may be shorter than
    /// [`CAPACITY_BYTES`](Self::CAPACITY_BYTES) and is zero-extended.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() > Self::CAPACITY_BYTES {
            return Err(fault("from_bytes", Error::CapacityOverflow));
        }
        let mut words = [T::ZERO; N];
        for (w, chunk) in words.iter_mut().zip(buf.chunks(T::BYTES)) {
            *w = T::read_le(chunk);
        }
        Ok(BigInt::new(Sign::Plus, words))
    }

    /// Writes the magnitude as exactly [`CAPACITY_BYTES`](Self::CAPACITY_BYTES)
    /// little-endian bytes at the start of `out` and returns that count. The sign is not
    /// part of the image.
    pub fn to_bytes(&self, out: &mut [u8]) -> Result<usize> {
        let needed = Self::CAPACITY_BYTES;
        if out.len() < needed {
            return Err(fault("to_bytes", Error::BufferTooSmall { needed, actual: out.len() }));
        }
        for (w, chunk) in self.words.iter().zip(out.chunks_exact_mut(T::BYTES)) {
            w.write_le(chunk);
        }
        Ok(needed)
    }

    /// Big-endian twin of [`from_bytes`](Self::from_bytes).
    pub fn from_bytes_be(buf: &[u8]) -> Result<Self> {
        if buf.len() > Self::CAPACITY_BYTES {
            return Err(fault("from_bytes", Error::CapacityOverflow));
        }
        let mut words = [T::ZERO; N];
        for (i, b) in buf.iter().rev().enumerate() {
            let w = &mut words[i / T::BYTES];
            *w = *w | (T::truncate_u128(*b as u128) << ((i % T::BYTES) * 8) as u32);
        }
        Ok(BigInt::new(Sign::Plus, words))
    }

    /// Big-endian twin of [`to_bytes`](Self::to_bytes).
    pub fn to_bytes_be(&self, out: &mut [u8]) -> Result<usize> {
        let needed = Self::CAPACITY_BYTES;
        if out.len() < needed {
            return Err(fault("to_bytes", Error::BufferTooSmall { needed, actual: out.len() }));
        }
        for (i, b) in out[..needed].iter_mut().rev().enumerate() {
            let w = self.words[i / T::BYTES];
            *b = (w.to_u128() >> ((i % T::BYTES) * 8)) as u8;
        }
        Ok(needed)
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl<T: Word, const N: usize> TryFrom<$u> for BigInt<T, N> {
        type Error = Error;

        fn try_from(val: $u) -> Result<Self> {
            BigInt::from_uint(val as u128)
        }
    }

    impl<T: Word, const N: usize> TryFrom<&BigInt<T, N>> for $u {
        type Error = Error;

        fn try_from(val: &BigInt<T, N>) -> Result<Self> {
            <$u>::try_from(val.to_u128()?).map_err(|_| fault("to_uint", Error::CapacityOverflow))
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl<T: Word, const N: usize> TryFrom<$i> for BigInt<T, N> {
        type Error = Error;

        fn try_from(val: $i) -> Result<Self> {
            BigInt::from_int(val as i128)
        }
    }

    impl<T: Word, const N: usize> TryFrom<&BigInt<T, N>> for $i {
        type Error = Error;

        fn try_from(val: &BigInt<T, N>) -> Result<Self> {
            <$i>::try_from(val.to_i128()?).map_err(|_| fault("to_int", Error::CapacityOverflow))
        }
    }
    )*
    };
}

impl_unsigned_to_big_num!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_num!(i8, i16, i32, isize, i64, i128);

// 实现运算符，出错时与原生整数溢出一样 panic
#[inline]
#[track_caller]
fn expect_op<V>(res: Result<V>) -> V {
    match res {
        Ok(val) => val,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! impl_binary_op {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $checked: ident);*) => {
    $(
    impl<T: Word, const N: usize> $imp for BigInt<T, N> {
        type Output = BigInt<T, N>;

        fn $method(self, rhs: Self) -> Self::Output {
            expect_op(self.$checked(&rhs))
        }
    }

    impl<T: Word, const N: usize> $imp<&BigInt<T, N>> for BigInt<T, N> {
        type Output = BigInt<T, N>;

        fn $method(self, rhs: &BigInt<T, N>) -> Self::Output {
            expect_op(self.$checked(rhs))
        }
    }

    impl<T: Word, const N: usize> $imp<&BigInt<T, N>> for &BigInt<T, N> {
        type Output = BigInt<T, N>;

        fn $method(self, rhs: &BigInt<T, N>) -> Self::Output {
            expect_op(self.$checked(rhs))
        }
    }

    impl<T: Word, const N: usize> $assign_imp for BigInt<T, N> {
        fn $assign_method(&mut self, rhs: Self) {
            *self = expect_op(self.$checked(&rhs));
        }
    }

    impl<T: Word, const N: usize> $assign_imp<&BigInt<T, N>> for BigInt<T, N> {
        fn $assign_method(&mut self, rhs: &BigInt<T, N>) {
            *self = expect_op(self.$checked(rhs));
        }
    }
    )*
    };
}

impl_binary_op!(
    Add, add, AddAssign, add_assign, checked_add;
    Sub, sub, SubAssign, sub_assign, checked_sub;
    Mul, mul, MulAssign, mul_assign, checked_mul;
    Div, div, DivAssign, div_assign, checked_div;
    Rem, rem, RemAssign, rem_assign, checked_rem;
    BitAnd, bitand, BitAndAssign, bitand_assign, checked_and;
    BitOr, bitor, BitOrAssign, bitor_assign, checked_or;
    BitXor, bitxor, BitXorAssign, bitxor_assign, checked_xor
);

impl<T: Word, const N: usize> Neg for BigInt<T, N> {
    type Output = BigInt<T, N>;

    fn neg(self) -> Self::Output {
        BigInt::new(-self.sign, self.words)
    }
}

impl<T: Word, const N: usize> Neg for &BigInt<T, N> {
    type Output = BigInt<T, N>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<T: Word, const N: usize> Shl<usize> for BigInt<T, N> {
    type Output = BigInt<T, N>;

    fn shl(self, n: usize) -> Self::Output {
        expect_op(self.checked_shl(n))
    }
}

impl<T: Word, const N: usize> Shl<usize> for &BigInt<T, N> {
    type Output = BigInt<T, N>;

    fn shl(self, n: usize) -> Self::Output {
        expect_op(self.checked_shl(n))
    }
}

impl<T: Word, const N: usize> ShlAssign<usize> for BigInt<T, N> {
    fn shl_assign(&mut self, n: usize) {
        *self = expect_op(self.checked_shl(n));
    }
}

impl<T: Word, const N: usize> Shr<usize> for BigInt<T, N> {
    type Output = BigInt<T, N>;

    fn shr(self, n: usize) -> Self::Output {
        self.shr_bits(n)
    }
}

impl<T: Word, const N: usize> Shr<usize> for &BigInt<T, N> {
    type Output = BigInt<T, N>;

    fn shr(self, n: usize) -> Self::Output {
        self.shr_bits(n)
    }
}

impl<T: Word, const N: usize> ShrAssign<usize> for BigInt<T, N> {
    fn shr_assign(&mut self, n: usize) {
        *self = self.shr_bits(n);
    }
}

#[cfg(test)]
type B = BigInt<u16, 8>;

#[cfg(test)]
fn int(val: i128) -> B {
    B::from_int(val).unwrap()
}

#[test]
fn test_from() {
    let big = B::try_from(12u8).unwrap();
    assert_eq!(big.words[0], 12);
    assert_eq!(big.sign, Sign::Plus);

    let big = B::try_from(-100i16).unwrap();
    assert_eq!(big.words[0], 100);
    assert_eq!(big.sign, Sign::Minus);

    let big = B::try_from(0x1234_5678_9abc_def0u64).unwrap();
    assert_eq!(&big.words[..5], &[0xdef0, 0x9abc, 0x5678, 0x1234, 0]);

    let big = B::from_int(i128::MIN).unwrap();
    assert_eq!(big.words[7], 0x8000);
    assert_eq!(big.to_i128().unwrap(), i128::MIN);

    assert_eq!(u64::try_from(&int(113132)).unwrap(), 113132);
    assert_eq!(i8::try_from(&int(-128)).unwrap(), -128);
    assert_eq!(i8::try_from(&int(128)), Err(Error::CapacityOverflow));
    assert_eq!(u32::try_from(&int(-1)), Err(Error::CapacityOverflow));
}

#[test]
fn test_from_overflows_small_capacity() {
    type Tiny = BigInt<u8, 2>;
    assert_eq!(Tiny::from_uint(0xffff).unwrap().words, [0xff, 0xff]);
    assert_eq!(Tiny::from_uint(0x10000), Err(Error::CapacityOverflow));
    assert_eq!(Tiny::try_from(-70000i32), Err(Error::CapacityOverflow));
}

#[test]
fn test_single_word_capacity() {
    type Single = BigInt<u8, 1>;
    let a = Single::from_uint(200).unwrap();
    assert_eq!(a.checked_add(&Single::from_uint(55).unwrap()), Single::from_uint(255));
    assert_eq!(a.checked_add(&Single::from_uint(56).unwrap()), Err(Error::CapacityOverflow));
    assert_eq!(a >> 3, Single::from_uint(25).unwrap());
    assert_eq!(a.to_string(), "200");

    let mut b = a;
    assert!(b.shift_left_one());
    assert_eq!(b, Single::from_uint(144).unwrap());
}

#[test]
fn test_zero_is_positive() {
    assert!(B::ZERO.is_zero());
    assert_eq!(B::from_int(0).unwrap().sign(), Sign::Plus);
    assert_eq!((-B::ZERO).sign(), Sign::Plus);
    assert_eq!(B::from_parts(Sign::Minus, [0; 8]).sign(), Sign::Plus);
    assert_eq!((int(-7) * B::ZERO).sign(), Sign::Plus);
    assert!((int(42) - int(42)).is_zero());
    assert!((int(-42) - int(-42)).is_zero());
}

#[test]
fn test_digit_count_and_bit_length() {
    assert_eq!(B::ZERO.digit_count(), 0);
    assert_eq!(B::ZERO.bit_length(), 0);
    assert_eq!(int(1).digit_count(), 1);
    assert_eq!(int(1).bit_length(), 1);
    assert_eq!(int(0x10000).digit_count(), 2);
    assert_eq!(int(0x10000).bit_length(), 17);
    assert_eq!(int(-0xffff).bit_length(), 16);
}

#[test]
fn test_single_bit_shifts() {
    let mut a = int(0x8000);
    assert!(!a.shift_left_one());
    assert_eq!(a, int(0x10000));
    assert!(!a.shift_right_one());
    assert_eq!(a, int(0x8000));

    let mut top = B::ONE_AT_TOP;
    assert!(top.shift_left_one());
    assert!(top.is_zero());

    let mut low = int(3);
    assert!(low.shift_right_one());
    assert_eq!(low, int(1));
    assert!(low.shift_right_one());
    assert!(low.is_zero());
}

#[cfg(test)]
impl B {
    const ONE_AT_TOP: B = BigInt { sign: Sign::Plus, words: [0, 0, 0, 0, 0, 0, 0, 0x8000] };
}

#[test]
fn test_word_shifts() {
    let mut a = int(0x1_0002_0003);
    a.shift_words_left(2);
    assert_eq!(a.words, [0, 0, 3, 2, 1, 0, 0, 0]);
    a.shift_words_right(3);
    assert_eq!(a.words, [2, 1, 0, 0, 0, 0, 0, 0]);
    a.shift_words_left(7);
    assert_eq!(a.words, [0, 0, 0, 0, 0, 0, 0, 2]);
    a.shift_words_left(1);
    assert!(a.is_zero());
}

#[test]
fn test_compare() {
    assert_eq!(int(5).compare(&int(5)), Ordering::Equal);
    assert_eq!(int(-5).compare(&int(3)), Ordering::Less);
    assert_eq!(int(3).compare(&int(-5)), Ordering::Greater);
    assert_eq!(int(-5).compare(&int(-3)), Ordering::Less);
    assert_eq!(int(0x10000).compare(&int(0xffff)), Ordering::Greater);
    assert_eq!(int(-5).compare_magnitude(&int(3)), Ordering::Greater);
    assert_eq!(B::ZERO.compare(&int(-1)), Ordering::Greater);

    let neg_zero = BigInt { sign: Sign::Minus, words: [0u16; 8] };
    assert_eq!(neg_zero.compare(&B::ZERO), Ordering::Equal);
    assert!(neg_zero.is_zero());
    assert!(!neg_zero.is_negative());
}

#[test]
fn test_add() {
    assert_eq!(int(500) + int(700), int(1200));
    assert_eq!(int(-5) + int(3), int(-2));
    assert_eq!(int(5) + int(-3), int(2));
    assert_eq!(int(-5) + int(-3), int(-8));
    assert_eq!(int(0xffff) + int(1), int(0x10000));
    assert_eq!(int(-0xffff) + int(-1), int(-0x10000));

    let max = BigInt::from_parts(Sign::Plus, [0xffffu16; 8]);
    assert_eq!(max.checked_add(&int(1)), Err(Error::CapacityOverflow));
    assert_eq!(max.checked_sub(&int(-1)), Err(Error::CapacityOverflow));
    assert_eq!(max.checked_sub(&max), Ok(B::ZERO));
    assert_eq!((-max).checked_add(&int(-1)), Err(Error::CapacityOverflow));
}

#[test]
fn test_sub() {
    assert_eq!(int(3) - int(5), int(-2));
    assert_eq!(int(-3) - int(5), int(-8));
    assert_eq!(int(-3) - int(-5), int(2));
    assert_eq!(int(0x10000) - int(1), int(0xffff));

    let mut a = int(10);
    a.try_sub_assign(&int(15)).unwrap();
    assert_eq!(a, int(-5));
    a.try_add_assign(&int(5)).unwrap();
    assert!(a.is_zero());
}

#[test]
fn test_assign_keeps_value_on_failure() {
    let max = BigInt::from_parts(Sign::Plus, [0xffffu16; 8]);
    let mut a = max;
    assert_eq!(a.try_add_assign(&int(1)), Err(Error::CapacityOverflow));
    assert_eq!(a, max);
}

#[test]
fn test_shl() {
    assert_eq!(int(1) << 17, int(1 << 17));
    assert_eq!(int(-3) << 40, int(-3 << 40));
    assert_eq!(int(1).checked_shl(127), Ok(B::ONE_AT_TOP));
    assert_eq!(int(1).checked_shl(128), Err(Error::CapacityOverflow));
    assert_eq!(int(1).checked_shl(130), Err(Error::CapacityOverflow));
    assert_eq!(int(1).checked_shl(usize::MAX), Err(Error::CapacityOverflow));
    assert_eq!(B::ZERO.checked_shl(usize::MAX), Ok(B::ZERO));
}

#[test]
fn test_shr() {
    assert_eq!(int(1 << 100) >> 99, int(2));
    assert_eq!(int(0x1234_5678) >> 4, int(0x0123_4567));
    assert_eq!(int(-5) >> 1, int(-2));
    assert_eq!(int(-1) >> 1, B::ZERO);
    assert_eq!((int(-1) >> 1).sign(), Sign::Plus);
    assert_eq!(int(12345) >> 128, B::ZERO);
    assert_eq!(int(12345) >> usize::MAX, B::ZERO);
}

#[test]
fn test_bitwise() {
    assert_eq!(int(0b1100) & int(0b1010), int(0b1000));
    assert_eq!(int(0b1100) | int(0b1010), int(0b1110));
    assert_eq!(int(0b1100) ^ int(0b1010), int(0b0110));
    assert_eq!(int(0xff00_ff00_ff00) & int(0x0ff0_0ff0), int(0x0f00_0f00));
    assert_eq!(int(5) ^ int(5), B::ZERO);

    assert_eq!(int(-1).checked_and(&int(1)), Err(Error::InvalidOperand));
    assert_eq!(int(1).checked_or(&int(-1)), Err(Error::InvalidOperand));
    assert_eq!(int(-1).checked_xor(&int(-1)), Err(Error::InvalidOperand));
}

#[test]
fn test_mul() {
    assert_eq!(int(123456) * int(654321), int(80779853376));
    assert_eq!(int(-123456) * int(654321), int(-80779853376));
    assert_eq!(int(-123456) * int(-654321), int(80779853376));
    assert_eq!(int(0xffff) * int(0xffff), int(0xfffe_0001));

    let a = int(0xffff_ffff_ffff_ffff);
    assert_eq!(a * a, B::from_uint(0xffff_ffff_ffff_fffe_0000_0000_0000_0001).unwrap());
}

#[test]
fn test_mul_capacity() {
    // 2^64 * 2^63 fits exactly in 128 bits even though 5 + 4 digits > 8 words
    let a = int(1) << 64;
    let b = int(1) << 63;
    assert_eq!(a.checked_mul(&b), Ok(int(1) << 127));

    let c = int(1) << 64;
    assert_eq!(a.checked_mul(&c), Err(Error::CapacityOverflow));

    // overflow produced by the carry of the last row
    let max = BigInt::from_parts(Sign::Plus, [0xffffu16; 8]);
    assert_eq!(max.checked_mul(&int(2)), Err(Error::CapacityOverflow));
    assert_eq!(max.checked_mul(&int(1)), Ok(max));
}

#[test]
fn test_mul_word() {
    assert_eq!(int(-300).mul_word(7), Ok(int(-2100)));
    let max = BigInt::from_parts(Sign::Plus, [0xffffu16; 8]);
    assert_eq!(max.mul_word(2), Err(Error::CapacityOverflow));
}

#[test]
fn test_square() {
    assert_eq!(int(3).checked_square(), Ok(int(9)));
    assert_eq!(int(-3).checked_square(), Ok(int(9)));
    assert_eq!(B::ZERO.checked_square(), Ok(B::ZERO));

    let a = int(0xffff_ffff_ffff_ffff);
    assert_eq!(a.checked_square(), a.checked_mul(&a));

    let b = int(0x1234_5678_9abc_def0_1357);
    assert_eq!(b.checked_square(), b.checked_mul(&b));
    assert_eq!(b.checked_square(), Err(Error::CapacityOverflow));
}

#[test]
fn test_div() {
    assert_eq!(int(17) / int(5), int(3));
    assert_eq!(int(17) % int(5), int(2));
    assert_eq!(int(120) / int(13), int(9));

    let a = int(100000000000000000000000000000000000);
    let b = int(100000000000000000);
    assert_eq!(a / b, int(1000000000000000000));

    let a = int(0x1234_5678_9abc_def0_1234_5678);
    let b = int(0x1_0000_0001);
    assert_eq!(a / b, int(0x1234_5678_9abc_def0_1234_5678 / 0x1_0000_0001));
    assert_eq!(a % b, int(0x1234_5678_9abc_def0_1234_5678 % 0x1_0000_0001));

    assert_eq!(int(3) / int(5), B::ZERO);
    assert_eq!(int(3) % int(5), int(3));
    assert_eq!(int(-3) % int(5), int(-3));
}

#[test]
fn test_div_signs() {
    for (a, b) in [(17i128, 5i128), (-17, 5), (17, -5), (-17, -5), (-1_000_000_007, 65537)] {
        let (q, r) = int(a).checked_div_rem(&int(b)).unwrap();
        assert_eq!(q, int(a / b), "{} / {}", a, b);
        assert_eq!(r, int(a % b), "{} % {}", a, b);
    }
}

#[test]
fn test_div_by_zero() {
    assert_eq!(int(12345).checked_div(&B::ZERO), Err(Error::DivisionByZero));
    assert_eq!(int(12345).checked_rem(&B::ZERO), Err(Error::DivisionByZero));
    assert_eq!(B::ZERO.checked_div(&B::ZERO), Err(Error::DivisionByZero));
    assert_eq!(int(1).div_rem_word(0), Err(Error::DivisionByZero));
}

#[test]
fn test_div_full_width() {
    let max = BigInt::from_parts(Sign::Plus, [0xffffu16; 8]);
    let three = int(3);
    let q = max / three;
    assert_eq!(q * three, max);

    let d = int(1) << 100;
    let (q, r) = max.checked_div_rem(&d).unwrap();
    assert_eq!(q, int((1 << 28) - 1));
    assert_eq!(r, (int(1) << 100) - int(1));
}

#[test]
fn test_div_rem_word() {
    let (q, r) = int(-1_000_003).div_rem_word(1000).unwrap();
    assert_eq!(q, int(-1000));
    assert_eq!(r, 3);
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics() {
    let _ = int(1) / B::ZERO;
}

#[test]
fn test_pow() {
    assert_eq!(int(3).checked_pow(&int(4)), Ok(int(81)));
    assert_eq!(int(-2).checked_pow(&int(3)), Ok(int(-8)));
    assert_eq!(int(-2).checked_pow(&int(4)), Ok(int(16)));
    assert_eq!(int(0).checked_pow(&int(0)), Ok(int(1)));
    assert_eq!(int(7).checked_pow(&int(0)), Ok(int(1)));
    assert_eq!(int(2).checked_pow_u32(127), Ok(B::ONE_AT_TOP));
    assert_eq!(int(2).checked_pow_u32(128), Err(Error::CapacityOverflow));
    assert_eq!(int(10).checked_pow_u32(38), Ok(int(10i128.pow(38))));
    assert_eq!(int(1).checked_pow(&int(i64::MAX as i128)), Ok(int(1)));
    assert_eq!(int(2).checked_pow(&int(-1)), Err(Error::InvalidOperand));
}

#[test]
fn test_bytes_round_trip() {
    let buf = [0x01u8, 0x02, 0x03, 0x04, 0x05];
    let a = B::from_bytes(&buf).unwrap();
    assert_eq!(a, int(0x05_0403_0201));

    let mut out = [0xaau8; 20];
    assert_eq!(a.to_bytes(&mut out), Ok(16));
    assert_eq!(&out[..5], &buf);
    assert!(out[5..16].iter().all(|b| *b == 0));
    assert!(out[16..].iter().all(|b| *b == 0xaa));

    assert_eq!(B::from_bytes(&[0u8; 17]), Err(Error::CapacityOverflow));
    let mut short = [0u8; 15];
    assert_eq!(a.to_bytes(&mut short), Err(Error::BufferTooSmall { needed: 16, actual: 15 }));
}

#[test]
fn test_bytes_ignore_sign() {
    let mut out = [0u8; 16];
    int(-0x0102).to_bytes(&mut out).unwrap();
    assert_eq!(&out[..3], &[0x02, 0x01, 0x00]);
}

#[test]
fn test_bytes_be() {
    let a = B::from_bytes_be(&[0x01, 0x02, 0x03]).unwrap();
    assert_eq!(a, int(0x010203));

    let mut out = [0u8; 16];
    a.to_bytes_be(&mut out).unwrap();
    assert_eq!(&out[13..], &[0x01, 0x02, 0x03]);
    assert!(out[..13].iter().all(|b| *b == 0));
    assert_eq!(B::from_bytes_be(&out), Ok(a));
}

#[test]
fn test_odd_word_sizes() {
    type B8 = BigInt<u8, 16>;
    type B32 = BigInt<u32, 4>;

    let a = B8::from_uint(123456).unwrap() * B8::from_uint(654321).unwrap();
    assert_eq!(a, B8::from_uint(80779853376).unwrap());
    let a = B32::from_uint(123456).unwrap() * B32::from_uint(654321).unwrap();
    assert_eq!(a, B32::from_uint(80779853376).unwrap());

    let q = B8::from_uint(1 << 100).unwrap() / B8::from_uint(12345).unwrap();
    assert_eq!(q.to_u128(), Ok((1u128 << 100) / 12345));
    let r = B32::from_int(-(1 << 100)).unwrap() % B32::from_int(12345).unwrap();
    assert_eq!(r.to_i128(), Ok(-(1i128 << 100) % 12345));
}
