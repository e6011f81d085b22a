use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Faults reported by [`BigInt`](crate::BigInt) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The mathematical result needs more bits than the fixed capacity provides.
    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("division by zero")]
    DivisionByZero,

    /// A caller supplied byte buffer cannot hold the exported words.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Bitwise operator on a negative operand, or a negative exponent.
    #[error("invalid operand: value must be non-negative")]
    InvalidOperand,

    #[error("invalid digit found in string: {0:?}")]
    InvalidDigit(char),

    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("radix must be in 2..=36, got {0}")]
    InvalidRadix(u32),
}

/// Records a fault at the point it is raised and hands it back for `?` / `Err`.
#[inline]
pub(crate) fn fault(op: &'static str, err: Error) -> Error {
    tracing::debug!(op, %err, "bignum operation failed");
    err
}
