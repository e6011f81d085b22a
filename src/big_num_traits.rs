use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, Num, One, Zero};

use crate::big_int::BigInt;
use crate::big_num_error::Error;
use crate::big_num_word::Word;

impl<T: Word, const N: usize> Zero for BigInt<T, N> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl<T: Word, const N: usize> One for BigInt<T, N> {
    fn one() -> Self {
        BigInt::one()
    }
}

impl<T: Word, const N: usize> Num for BigInt<T, N> {
    type FromStrRadixErr = Error;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        BigInt::from_str_radix(s, radix)
    }
}

macro_rules! impl_checked_op {
    ($($imp: ident, $method: ident);*) => {
    $(
    impl<T: Word, const N: usize> $imp for BigInt<T, N> {
        fn $method(&self, v: &Self) -> Option<Self> {
            BigInt::$method(self, v).ok()
        }
    }
    )*
    };
}

impl_checked_op!(
    CheckedAdd, checked_add;
    CheckedSub, checked_sub;
    CheckedMul, checked_mul;
    CheckedDiv, checked_div;
    CheckedRem, checked_rem
);

#[cfg(test)]
mod tests {
    use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, Num, One, Zero};

    use crate::BigInt;

    type B = BigInt<u16, 8>;

    fn sum_all<V: Zero + Copy>(vals: &[V]) -> V {
        vals.iter().fold(V::zero(), |acc, v| acc + *v)
    }

    #[test]
    fn test_generic_use() {
        let vals = [B::from_int(3).unwrap(), B::from_int(-10).unwrap(), B::from_int(4).unwrap()];
        assert_eq!(sum_all(&vals), B::from_int(-3).unwrap());
        assert!(<B as Zero>::is_zero(&B::zero()));
        assert_eq!(<B as One>::one(), B::from_int(1).unwrap());
        assert_eq!(<B as Num>::from_str_radix("ff", 16), B::from_int(255));
    }

    #[test]
    fn test_checked_ops() {
        let max = B::from_uint(u128::MAX).unwrap();
        let one = B::one();
        assert_eq!(CheckedAdd::checked_add(&max, &one), None);
        assert_eq!(CheckedMul::checked_mul(&max, &one), Some(max));
        assert_eq!(CheckedDiv::checked_div(&max, &B::zero()), None);
    }
}
