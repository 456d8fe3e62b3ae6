//! UTF-32 → UTF-8. Equivalent to `cstr_utf32ne/le/be_to_utf8[_len]` plus
//! the endian-detecting `cstr_utf32_to_utf8[_len]` wrapper.

use crate::convert::{decode_one_utf32, has_utf32_bom_bounded, try_encode_utf8, utf32_bom_endian_bounded, DecodeErr};
use crate::endian::Endian;
use crate::error::{ConvertError, ConvertOutcome};
use crate::flags::ConvertFlags;
use crate::input::InputLen;
use crate::scalar::REPLACEMENT_SCALAR;

fn core(
    mut out: Option<&mut [u8]>,
    input: &[u32],
    input_len: InputLen,
    flags: ConvertFlags,
    endian: Endian,
) -> Result<ConvertOutcome, ConvertError> {
    let mut in_off = 0usize;
    let mut out_off = 0usize;

    if has_utf32_bom_bounded(input, input_len) {
        if flags.contains(ConvertFlags::FORBID_BOM) {
            return Err(ConvertError::ForbiddenBom);
        }
        in_off = 1;
    }

    loop {
        let step = match decode_one_utf32(input, input_len, in_off, endian) {
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
            input: &[u32],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(None, input, input_len, flags, $endian)
        }

        pub fn $fn(
            out: &mut [u8],
            input: &[u32],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(Some(out), input, input_len, flags, $endian)
        }
    };
}

variant!(utf32_to_utf8_len_le, utf32_to_utf8_le, Endian::Little);
variant!(utf32_to_utf8_len_be, utf32_to_utf8_be, Endian::Big);

pub fn utf32_to_utf8_len_ne(
    input: &[u32],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(None, input, input_len, flags, Endian::native())
}

pub fn utf32_to_utf8_ne(
    out: &mut [u8],
    input: &[u32],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(Some(out), input, input_len, flags, Endian::native())
}

pub fn utf32_to_utf8_len(
    input: &[u32],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    match utf32_bom_endian_bounded(input, input_len) {
        Some(_) if flags.contains(ConvertFlags::FORBID_BOM) => Err(ConvertError::ForbiddenBom),
        Some(endian) => core(None, input, input_len, flags, endian),
        None => core(None, input, input_len, flags, Endian::native()),
    }
}

pub fn utf32_to_utf8(
    out: &mut [u8],
    input: &[u32],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    match utf32_bom_endian_bounded(input, input_len) {
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
        let input = [0x0000FEFFu32, 0x41];
        let mut out = [0u8; 2];
        let res = utf32_to_utf8(&mut out, &input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
        assert_eq!(res, ConvertOutcome { out_len: 1, in_consumed: 2 });
        assert_eq!(&out[..1], b"A");
    }

    #[test]
    fn bom_be_selects_big_endian_regardless_of_host() {
        let input = [0xFFFE0000u32, 0x41000000];
        let mut out = [0u8; 2];
        let res = utf32_to_utf8(&mut out, &input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
        assert_eq!(res, ConvertOutcome { out_len: 1, in_consumed: 2 });
        assert_eq!(&out[..1], b"A");
    }

    #[test]
    fn spec_literal_example_from_utf32() {
        let input = [0x0041u32, 0x00E9, 0x4E2D, 0x1D11E];
        let mut out = [0u8; 10];
        let res =
            utf32_to_utf8_le(&mut out, &input, InputLen::Exact(4), ConvertFlags::empty()).unwrap();
        assert_eq!(res, ConvertOutcome { out_len: 10, in_consumed: 4 });
        assert_eq!(&out[..10], &[0x41, 0xC3, 0xA9, 0xE4, 0xB8, 0xAD, 0xF0, 0x9D, 0x84, 0x9E]);
    }

    #[test]
    fn invalid_scalar_strict_vs_replace() {
        let input = [0xD800u32]; // a bare surrogate value is never a valid scalar
        let strict = utf32_to_utf8_len_le(
            &input,
            InputLen::Exact(1),
            ConvertFlags::ERROR_ON_INVALID_CODE_POINT,
        )
        .unwrap_err();
        assert_eq!(strict, ConvertError::InvalidCodePoint { in_consumed: 0 });

        let replaced = utf32_to_utf8_len_le(&input, InputLen::Exact(1), ConvertFlags::empty()).unwrap();
        assert_eq!(replaced, ConvertOutcome { out_len: 3, in_consumed: 1 });
    }
}
