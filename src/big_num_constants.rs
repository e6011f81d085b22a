pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' , 'g' , 'h' ,
    'i' , 'j' , 'k' , 'l' , 'm' , 'n' ,
    'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z'
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

/// Magnitude width of the default [`Bignum`](crate::Bignum).
pub const DEFAULT_BITS: usize = 2048;

// 按 feature 选择默认字长，同时开启多个时取最宽的
#[cfg(feature = "word32")]
pub type DefaultWord = u32;

#[cfg(all(feature = "word16", not(feature = "word32")))]
pub type DefaultWord = u16;

#[cfg(all(feature = "word8", not(feature = "word16"), not(feature = "word32")))]
pub type DefaultWord = u8;

#[cfg(not(any(feature = "word8", feature = "word16", feature = "word32")))]
pub type DefaultWord = u16;

pub const DEFAULT_WORDS: usize = DEFAULT_BITS / DefaultWord::BITS as usize;
