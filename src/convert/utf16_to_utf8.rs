//! UTF-16 → UTF-8. Equivalent to `cstr_utf16ne/le/be_to_utf8[_len]` plus
//! the endian-detecting `cstr_utf16_to_utf8[_len]` wrapper.

use crate::convert::{decode_one_utf16, has_utf16_bom_bounded, try_encode_utf8, utf16_bom_endian_bounded, DecodeErr};
use crate::endian::Endian;
use crate::error::{ConvertError, ConvertOutcome};
use crate::flags::ConvertFlags;
use crate::input::InputLen;
use crate::scalar::REPLACEMENT_SCALAR;

fn core(
    mut out: Option<&mut [u8]>,
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
    endian: Endian,
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
        let step = match decode_one_utf16(input, input_len, in_off, endian) {
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

        match try_encode_utf8(out.as_deref_mut(), out_off, scalar) {
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
            core(None, input, input_len, flags, $endian)
        }

        pub fn $fn(
            out: &mut [u8],
            input: &[u16],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(Some(out), input, input_len, flags, $endian)
        }
    };
}

variant!(utf16_to_utf8_len_le, utf16_to_utf8_le, Endian::Little);
variant!(utf16_to_utf8_len_be, utf16_to_utf8_be, Endian::Big);

pub fn utf16_to_utf8_len_ne(
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(None, input, input_len, flags, Endian::native())
}

pub fn utf16_to_utf8_ne(
    out: &mut [u8],
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(Some(out), input, input_len, flags, Endian::native())
}

/// Detects endianness from a leading BOM, defaulting to native endian if
/// none is present. The BOM, if present, always selects the endianness for
/// the remainder of the input, overriding native endianness.
pub fn utf16_to_utf8_len(
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    match utf16_bom_endian_bounded(input, input_len) {
        Some(_) if flags.contains(ConvertFlags::FORBID_BOM) => Err(ConvertError::ForbiddenBom),
        Some(endian) => core(None, input, input_len, flags, endian),
        None => core(None, input, input_len, flags, Endian::native()),
    }
}

/// Encode-pass counterpart of [`utf16_to_utf8_len`].
pub fn utf16_to_utf8(
    out: &mut [u8],
    input: &[u16],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    match utf16_bom_endian_bounded(input, input_len) {
        Some(_) if flags.contains(ConvertFlags::FORBID_BOM) => Err(ConvertError::ForbiddenBom),
        Some(endian) => core(Some(out), input, input_len, flags, endian),
        None => core(Some(out), input, input_len, flags, Endian::native()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_le_selects_little_endian_regardless_of_host() {
        let input = [0xFEFFu16, 0x0041];
        let mut out = [0u8; 2];
        let res = utf16_to_utf8(&mut out, &input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
        assert_eq!(res, ConvertOutcome { out_len: 1, in_consumed: 2 });
        assert_eq!(&out[..1], b"A");
    }

    #[test]
    fn bom_be_selects_big_endian_regardless_of_host() {
        let input = [0xFFFEu16, 0x4100];
        let mut out = [0u8; 2];
        let res = utf16_to_utf8(&mut out, &input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
        assert_eq!(res, ConvertOutcome { out_len: 1, in_consumed: 2 });
        assert_eq!(&out[..1], b"A");
    }

    #[test]
    fn unpaired_high_surrogate_strict_vs_replace() {
        let input = [0xD834u16, 0x0041];
        let strict = utf16_to_utf8_len_le(
            &input,
            InputLen::Exact(2),
            ConvertFlags::ERROR_ON_INVALID_CODE_POINT,
        )
        .unwrap_err();
        assert_eq!(strict, ConvertError::InvalidCodePoint { in_consumed: 0 });

        let mut out = [0u8; 4];
        let replaced =
            utf16_to_utf8_le(&mut out, &input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
        assert_eq!(replaced, ConvertOutcome { out_len: 4, in_consumed: 2 });
        assert_eq!(&out[..4], &[0xEF, 0xBF, 0xBD, 0x41]);
    }

    #[test]
    fn forbidden_bom_reported_by_sniffing_wrapper() {
        let input = [0xFEFFu16, 0x0041];
        let err = utf16_to_utf8_len(&input, InputLen::Exact(2), ConvertFlags::FORBID_BOM).unwrap_err();
        assert_eq!(err, ConvertError::ForbiddenBom);
    }
}
