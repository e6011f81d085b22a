//! Serializes a [`BigInt`] as its decimal string, so values keep full precision in
//! formats such as JSON whose numbers are limited to 64 bits.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::big_int::BigInt;
use crate::big_num_word::Word;

impl<T: Word, const N: usize> Serialize for BigInt<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor<T: Word, const N: usize>(PhantomData<BigInt<T, N>>);

impl<'de, T: Word, const N: usize> Visitor<'de> for BigIntVisitor<T, N> {
    type Value = BigInt<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt<T, N>, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt<T, N>, E>
    where
        E: de::Error,
    {
        BigInt::from_uint(value as u128).map_err(de::Error::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt<T, N>, E>
    where
        E: de::Error,
    {
        BigInt::from_int(value as i128).map_err(de::Error::custom)
    }
}

impl<'de, T: Word, const N: usize> Deserialize<'de> for BigInt<T, N> {
    fn deserialize<D>(deserializer: D) -> Result<BigInt<T, N>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    type B = BigInt<u16, 8>;

    #[test]
    fn test_json_round_trip() {
        let a = B::from_int(-123456789012345678901234567890).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: B = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_json_plain_numbers() {
        let a: B = serde_json::from_str("42").unwrap();
        assert_eq!(a, B::from_int(42).unwrap());
        let b: B = serde_json::from_str("-7").unwrap();
        assert_eq!(b, B::from_int(-7).unwrap());
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(serde_json::from_str::<B>("\"12x\"").is_err());
        assert!(serde_json::from_str::<B>("\"340282366920938463463374607431768211456\"").is_err());
    }
}
