//! Error and outcome types for conversion routines.
//!
//! Equivalent to the `CSTR_SUCCESS` / `CSTR_EINVAL` / `CSTR_ENOMEM` /
//! `CSTR_EBOM` / `CSTR_ECODEPOINT` return-code taxonomy, expressed as a
//! tagged result instead of an out-of-band integer.

use core::fmt;

/// Numeric value of `CSTR_EBOM`.
pub const ERRNO_EBOM: i32 = -16384;
/// Numeric value of `CSTR_ECODEPOINT`.
pub const ERRNO_ECODEPOINT: i32 = -16385;
/// Numeric value of `EINVAL` on the platforms this crate targets.
pub const ERRNO_EINVAL: i32 = 22;
/// Numeric value of `ENOMEM` on the platforms this crate targets.
pub const ERRNO_ENOMEM: i32 = 12;

/// Successful result of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// Output units written, not counting the null terminator.
    pub out_len: usize,
    /// Input units consumed, including a consumed BOM.
    pub in_consumed: usize,
}

/// Failure result of a conversion.
///
/// Every variant carries the `in_consumed` value the call had reached at
/// the point of failure; [`ConvertError::OutOfMemory`] additionally carries
/// the partial `out_len` already written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// Null input, or a multi-unit sequence truncated at end of input.
    InvalidInput { in_consumed: usize },
    /// Output capacity insufficient to hold the body plus terminator.
    OutOfMemory { in_consumed: usize, out_len: usize },
    /// A BOM was present while `FORBID_BOM` was set.
    ForbiddenBom,
    /// Malformed input under the strict (`ERROR_ON_INVALID_CODE_POINT`) policy.
    InvalidCodePoint { in_consumed: usize },
}

impl ConvertError {
    /// Input units consumed before this error was raised.
    pub fn in_consumed(&self) -> usize {
        match *self {
            ConvertError::InvalidInput { in_consumed } => in_consumed,
            ConvertError::OutOfMemory { in_consumed, .. } => in_consumed,
            ConvertError::ForbiddenBom => 0,
            ConvertError::InvalidCodePoint { in_consumed } => in_consumed,
        }
    }

    /// Recovers the C-style numeric error code for this failure.
    pub fn to_errno(self) -> i32 {
        match self {
            ConvertError::InvalidInput { .. } => ERRNO_EINVAL,
            ConvertError::OutOfMemory { .. } => ERRNO_ENOMEM,
            ConvertError::ForbiddenBom => ERRNO_EBOM,
            ConvertError::InvalidCodePoint { .. } => ERRNO_ECODEPOINT,
        }
    }

    fn error_name(&self) -> &'static str {
        match self {
            ConvertError::InvalidInput { .. } => "invalid input",
            ConvertError::OutOfMemory { .. } => "output buffer too small",
            ConvertError::ForbiddenBom => "forbidden byte-order mark",
            ConvertError::InvalidCodePoint { .. } => "invalid code point",
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_name())
    }
}

impl std::error::Error for ConvertError {}
