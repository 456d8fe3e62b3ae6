//! Bidirectional UTF-8 / UTF-16 / UTF-32 transcoding with explicit
//! endianness, BOM, and malformed-input policy control.
//!
//! The crate is stateless and allocation-free: every conversion operates
//! over caller-owned buffers and reports exactly how many input units it
//! consumed and how many output units it wrote, on both success and
//! failure. See [`ConvertFlags`] for the per-call policy knobs and
//! [`ConvertError`] for the failure taxonomy.

pub mod bom;
pub mod convert;
pub mod endian;
pub mod error;
pub mod flags;
pub mod input;
pub mod scalar;
pub mod util;

pub use endian::{swap_endian_utf16, swap_endian_utf32, Endian};
pub use error::{ConvertError, ConvertOutcome, ERRNO_EBOM, ERRNO_ECODEPOINT, ERRNO_EINVAL, ERRNO_ENOMEM};
pub use flags::ConvertFlags;
pub use input::InputLen;

/// UTF-8 → UTF-16, native endian. Equivalent to `cstr_utf8_to_utf16ne`.
pub use convert::utf8_to_utf16::utf8_to_utf16_ne;
/// Length-pass counterpart of [`utf8_to_utf16_ne`].
pub use convert::utf8_to_utf16::utf8_to_utf16_len_ne;
/// UTF-8 → UTF-16LE. Equivalent to `cstr_utf8_to_utf16le`.
pub use convert::utf8_to_utf16::utf8_to_utf16_le;
pub use convert::utf8_to_utf16::utf8_to_utf16_len_le;
/// UTF-8 → UTF-16BE. Equivalent to `cstr_utf8_to_utf16be`.
pub use convert::utf8_to_utf16::utf8_to_utf16_be;
pub use convert::utf8_to_utf16::utf8_to_utf16_len_be;

/// UTF-8 → UTF-32, native endian. Equivalent to `cstr_utf8_to_utf32ne`.
pub use convert::utf8_to_utf32::utf8_to_utf32_ne;
pub use convert::utf8_to_utf32::utf8_to_utf32_len_ne;
/// UTF-8 → UTF-32LE. Equivalent to `cstr_utf8_to_utf32le`.
pub use convert::utf8_to_utf32::utf8_to_utf32_le;
pub use convert::utf8_to_utf32::utf8_to_utf32_len_le;
/// UTF-8 → UTF-32BE. Equivalent to `cstr_utf8_to_utf32be`.
pub use convert::utf8_to_utf32::utf8_to_utf32_be;
pub use convert::utf8_to_utf32::utf8_to_utf32_len_be;

/// UTF-16 → UTF-8, BOM-sniffed with native-endian fallback. Equivalent to
/// `cstr_utf16_to_utf8`.
pub use convert::utf16_to_utf8::utf16_to_utf8;
pub use convert::utf16_to_utf8::utf16_to_utf8_len;
/// UTF-16 → UTF-8, native endian, no BOM sniffing. Equivalent to
/// `cstr_utf16ne_to_utf8`.
pub use convert::utf16_to_utf8::utf16_to_utf8_ne;
pub use convert::utf16_to_utf8::utf16_to_utf8_len_ne;
/// UTF-16LE → UTF-8. Equivalent to `cstr_utf16le_to_utf8`.
pub use convert::utf16_to_utf8::utf16_to_utf8_le;
pub use convert::utf16_to_utf8::utf16_to_utf8_len_le;
/// UTF-16BE → UTF-8. Equivalent to `cstr_utf16be_to_utf8`.
pub use convert::utf16_to_utf8::utf16_to_utf8_be;
pub use convert::utf16_to_utf8::utf16_to_utf8_len_be;

/// UTF-16 → UTF-32, BOM-sniffed. Equivalent to `cstr_utf16_to_utf32`.
pub use convert::utf16_to_utf32::utf16_to_utf32;
pub use convert::utf16_to_utf32::utf16_to_utf32_len;
pub use convert::utf16_to_utf32::utf16_to_utf32_ne;
pub use convert::utf16_to_utf32::utf16_to_utf32_len_ne;
pub use convert::utf16_to_utf32::utf16_to_utf32_le;
pub use convert::utf16_to_utf32::utf16_to_utf32_len_le;
pub use convert::utf16_to_utf32::utf16_to_utf32_be;
pub use convert::utf16_to_utf32::utf16_to_utf32_len_be;

/// UTF-32 → UTF-8, BOM-sniffed. Equivalent to `cstr_utf32_to_utf8`.
pub use convert::utf32_to_utf8::utf32_to_utf8;
pub use convert::utf32_to_utf8::utf32_to_utf8_len;
pub use convert::utf32_to_utf8::utf32_to_utf8_ne;
pub use convert::utf32_to_utf8::utf32_to_utf8_len_ne;
pub use convert::utf32_to_utf8::utf32_to_utf8_le;
pub use convert::utf32_to_utf8::utf32_to_utf8_len_le;
pub use convert::utf32_to_utf8::utf32_to_utf8_be;
pub use convert::utf32_to_utf8::utf32_to_utf8_len_be;

/// UTF-32 → UTF-16, BOM-sniffed. Equivalent to `cstr_utf32_to_utf16`.
pub use convert::utf32_to_utf16::utf32_to_utf16;
pub use convert::utf32_to_utf16::utf32_to_utf16_len;
pub use convert::utf32_to_utf16::utf32_to_utf16_ne;
pub use convert::utf32_to_utf16::utf32_to_utf16_len_ne;
pub use convert::utf32_to_utf16::utf32_to_utf16_le;
pub use convert::utf32_to_utf16::utf32_to_utf16_len_le;
pub use convert::utf32_to_utf16::utf32_to_utf16_be;
pub use convert::utf32_to_utf16::utf32_to_utf16_len_be;

/// Whitespace / newline / trim / line-scanning helpers built over the
/// UTF-8 decoder. Equivalent to `cstr_utf32_is_whitespace`,
/// `cstr_utf32_is_newline`, `cstr_utf8_ltrim_offset`, `cstr_utf8_rtrim_offset`,
/// `cstr_utf8_next_line`, `cstr_utf8_is_null_or_whitespace`.
pub use util::{
    utf32_is_newline, utf32_is_whitespace, utf8_is_null_or_whitespace, utf8_ltrim_offset,
    utf8_next_line, utf8_rtrim_offset,
};

/// BOM predicates. Equivalent to `cstr_has_utf8_bom`, `cstr_has_utf16_bom`,
/// `cstr_has_utf32_bom`, `cstr_is_utf16_bom_le/be`, `cstr_is_utf32_bom_le/be`.
pub use bom::{
    has_utf16_bom, has_utf32_bom, has_utf8_bom, is_utf16_bom_be, is_utf16_bom_le, is_utf32_bom_be,
    is_utf32_bom_le,
};

/// Single-scalar primitives. Equivalent to `cstr_is_valid_code_point`,
/// `cstr_utf32_cp_to_utf8/_len`, `cstr_utf32_cp_to_utf16/_len`,
/// `cstr_utf16_pair_to_utf32_cp`, `cstr_utf32_cp_to_utf16_pair`.
pub use scalar::{
    encode_utf16_scalar, encode_utf8_scalar, is_high_surrogate, is_low_surrogate, is_surrogate,
    is_valid_scalar, utf16_len_for_scalar, utf16_pair_to_scalar, utf32_cp_to_utf16_pair,
    utf8_len_for_scalar, REPLACEMENT_SCALAR,
};
