//! UTF-16 → UTF-32. Equivalent to `cstr_utf16ne/le/be_to_utf32[_len]`
//! plus the endian-detecting `cstr_utf16_to_utf32[_len]` wrapper.

use crate::convert::{decode_one_utf16, has_utf16_bom_bounded, try_encode_utf32, utf16_bom_endian_bounded, DecodeErr};
use crate::endian::Endian;
use crate::error::{ConvertError, ConvertOutcome};
use crate::flags::ConvertFlags;
use crate::input::InputLen;
use crate::scalar::REPLACEMENT_SCALAR;

fn core(
    mut out: Option<&mut [u32]>,
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
    in_endian: Endian,
    out_endian: Endian,
) -> Result<ConvertOutcome, ConvertError> {
    let mut in_off = 0usize;
    let mut out_off = 0usize;

    if has_utf16_bom_bounded(input, input_len) {
        if flags.contains(ConvertFlags::FORBID_BOM) {
            return Err(ConvertError::ForbiddenBom);
        }
        in_off = 1;
    }

    loop {
        let step = match decode_one_utf16(input, input_len, in_off, in_endian) {
            None => break,
            Some(step) => step,
        };

        let (scalar, consumed) = match step {
            Ok(None) => break,
            Ok(Some(pair)) => pair,
            Err(DecodeErr::Truncated) => return Err(ConvertError::InvalidInput { in_consumed: in_off }),
            Err(DecodeErr::Invalid(units)) => {
                if !flags.replace_on_error() {
                    return Err(ConvertError::InvalidCodePoint { in_consumed: in_off });
                }
                (REPLACEMENT_SCALAR, units)
            }
        };

        match try_encode_utf32(out.as_deref_mut(), out_off, scalar, out_endian) {
            Some(units) => out_off += units,
            None => return Err(ConvertError::OutOfMemory { in_consumed: in_off, out_len: out_off }),
        }

        in_off += consumed;
    }

    if let Some(buf) = out.as_deref_mut() {
        if out_off >= buf.len() {
            return Err(ConvertError::OutOfMemory { in_consumed: in_off, out_len: out_off });
        }
        buf[out_off] = 0;
    }

    Ok(ConvertOutcome { out_len: out_off, in_consumed: in_off })
}

macro_rules! variant {
    ($len_fn:ident, $fn:ident, $endian:expr) => {
        pub fn $len_fn(
            input: &[u16],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(None, input, input_len, flags, $endian, $endian)
        }

        pub fn $fn(
            out: &mut [u32],
            input: &[u16],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(Some(out), input, input_len, flags, $endian, $endian)
        }
    };
}

variant!(utf16_to_utf32_len_le, utf16_to_utf32_le, Endian::Little);
variant!(utf16_to_utf32_len_be, utf16_to_utf32_be, Endian::Big);

pub fn utf16_to_utf32_len_ne(
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(None, input, input_len, flags, Endian::native(), Endian::native())
}

pub fn utf16_to_utf32_ne(
    out: &mut [u32],
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(Some(out), input, input_len, flags, Endian::native(), Endian::native())
}

/// Detects input endianness from a leading BOM; output is always written
/// native-endian (matching `cstr_utf16_to_utf32`, whose output type has no
/// independent endian suffix).
pub fn utf16_to_utf32_len(
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    match utf16_bom_endian_bounded(input, input_len) {
        Some(_) if flags.contains(ConvertFlags::FORBID_BOM) => Err(ConvertError::ForbiddenBom),
        Some(endian) => core(None, input, input_len, flags, endian, Endian::native()),
        None => core(None, input, input_len, flags, Endian::native(), Endian::native()),
    }
}

pub fn utf16_to_utf32(
    out: &mut [u32],
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    match utf16_bom_endian_bounded(input, input_len) {
        Some(_) if flags.contains(ConvertFlags::FORBID_BOM) => Err(ConvertError::ForbiddenBom),
        Some(endian) => core(Some(out), input, input_len, flags, endian, Endian::native()),
        None => core(Some(out), input, input_len, flags, Endian::native(), Endian::native()),
    }
}
