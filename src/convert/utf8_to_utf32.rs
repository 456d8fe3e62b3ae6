//! UTF-8 → UTF-32. Equivalent to `cstr_utf8_to_utf32ne/le/be[_len]`.

use crate::convert::{decode_one_utf8, has_utf8_bom_bounded, try_encode_utf32, DecodeErr};
use crate::endian::Endian;
use crate::error::{ConvertError, ConvertOutcome};
use crate::flags::ConvertFlags;
use crate::input::InputLen;
use crate::scalar::REPLACEMENT_SCALAR;

fn core(
    mut out: Option<&mut [u32]>,
    input: &[u8],
    input_len: InputLen,
    flags: ConvertFlags,
    endian: Endian,
) -> Result<ConvertOutcome, ConvertError> {
    let mut in_off = 0usize;
    let mut out_off = 0usize;

    if has_utf8_bom_bounded(input, input_len) {
        if flags.contains(ConvertFlags::FORBID_BOM) {
            return Err(ConvertError::ForbiddenBom);
        }
        in_off = 3;
    }

    loop {
        let step = match decode_one_utf8(input, input_len, in_off) {
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

        match try_encode_utf32(out.as_deref_mut(), out_off, scalar, endian) {
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
            input: &[u8],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(None, input, input_len, flags, $endian)
        }

        pub fn $fn(
            out: &mut [u32],
            input: &[u8],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(Some(out), input, input_len, flags, $endian)
        }
    };
}

variant!(utf8_to_utf32_len_le, utf8_to_utf32_le, Endian::Little);
variant!(utf8_to_utf32_len_be, utf8_to_utf32_be, Endian::Big);

pub fn utf8_to_utf32_len_ne(
    input: &[u8],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(None, input, input_len, flags, Endian::native())
}

pub fn utf8_to_utf32_ne(
    out: &mut [u32],
    input: &[u8],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(Some(out), input, input_len, flags, Endian::native())
}
