//! UTF-8 → UTF-16. Equivalent to `cstr_utf8_to_utf16ne/le/be[_len]`.

use crate::convert::{decode_one_utf8, has_utf8_bom_bounded, try_encode_utf16, DecodeErr};
use crate::endian::Endian;
use crate::error::{ConvertError, ConvertOutcome};
use crate::flags::ConvertFlags;
use crate::input::InputLen;
use crate::scalar::REPLACEMENT_SCALAR;

fn core(
    mut out: Option<&mut [u16]>,
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

        match try_encode_utf16(out.as_deref_mut(), out_off, scalar, endian) {
            Some(units) => out_off += units,
            None => {
                return Err(ConvertError::OutOfMemory { in_consumed: in_off, out_len: out_off });
            }
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
        /// Computes the exact UTF-16 output length for this conversion
        /// without writing output.
        pub fn $len_fn(
            input: &[u8],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(None, input, input_len, flags, $endian)
        }

        /// Converts UTF-8 to UTF-16. `out` must have room for the body
        /// plus one terminator unit.
        pub fn $fn(
            out: &mut [u16],
            input: &[u8],
            input_len: InputLen,
            flags: ConvertFlags,
        ) -> Result<ConvertOutcome, ConvertError> {
            core(Some(out), input, input_len, flags, $endian)
        }
    };
}

variant!(utf8_to_utf16_len_le, utf8_to_utf16_le, Endian::Little);
variant!(utf8_to_utf16_len_be, utf8_to_utf16_be, Endian::Big);

/// Native-endian variants alias whichever of `le`/`be` matches this host.
pub fn utf8_to_utf16_len_ne(
    input: &[u8],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(None, input, input_len, flags, Endian::native())
}

pub fn utf8_to_utf16_ne(
    out: &mut [u16],
    input: &[u8],
    input_len: InputLen,
    flags: ConvertFlags,
) -> Result<ConvertOutcome, ConvertError> {
    core(Some(out), input, input_len, flags, Endian::native())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ConvertFlags;

    #[test]
    fn ascii_round_trips_length_and_encode() {
        let input = b"Hello";
        let len = utf8_to_utf16_len_le(input, InputLen::Exact(5), ConvertFlags::empty()).unwrap();
        assert_eq!(len, ConvertOutcome { out_len: 5, in_consumed: 5 });

        let mut out = [0u16; 6];
        let res = utf8_to_utf16_le(&mut out, input, InputLen::Exact(5), ConvertFlags::empty()).unwrap();
        assert_eq!(res, len);
        assert_eq!(&out[..5], &[0x48, 0x65, 0x6C, 0x6C, 0x6F]);
        assert_eq!(out[5], 0);
    }

    #[test]
    fn surrogate_pair_for_supplementary_scalar() {
        // U+1D11E MUSICAL SYMBOL G CLEF = F0 9D 84 9E
        let input = [0xF0u8, 0x9D, 0x84, 0x9E];
        let mut out = [0u16; 3];
        let res =
            utf8_to_utf16_le(&mut out, &input, InputLen::Exact(4), ConvertFlags::empty()).unwrap();
        assert_eq!(res, ConvertOutcome { out_len: 2, in_consumed: 4 });
        assert_eq!(&out[..2], &[0xD834, 0xDD1E]);
    }

    #[test]
    fn forbidden_bom_is_rejected() {
        let input = [0xEFu8, 0xBB, 0xBF, 0x41];
        let err = utf8_to_utf16_len_le(&input, InputLen::Exact(4), ConvertFlags::FORBID_BOM)
            .unwrap_err();
        assert_eq!(err, ConvertError::ForbiddenBom);
    }

    #[test]
    fn overlong_lead_byte_strict_vs_replace() {
        let input = [0xC0u8, 0xAF];
        let strict = utf8_to_utf16_len_le(
            &input,
            InputLen::Exact(2),
            ConvertFlags::ERROR_ON_INVALID_CODE_POINT,
        )
        .unwrap_err();
        assert_eq!(strict, ConvertError::InvalidCodePoint { in_consumed: 0 });

        let replace = utf8_to_utf16_len_le(&input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
        assert_eq!(replace, ConvertOutcome { out_len: 2, in_consumed: 2 });
    }

    #[test]
    fn truncated_tail_is_einval() {
        let input = [0xE4u8, 0xB8];
        let err = utf8_to_utf16_len_le(&input, InputLen::Exact(2), ConvertFlags::empty()).unwrap_err();
        assert_eq!(err, ConvertError::InvalidInput { in_consumed: 0 });
    }

    #[test]
    fn capacity_short_by_one_reports_body_written() {
        let input = b"AB";
        let mut out = [0u16; 2]; // room for the body, none for the terminator
        let err =
            utf8_to_utf16_le(&mut out, input, InputLen::Exact(2), ConvertFlags::empty()).unwrap_err();
        assert_eq!(err, ConvertError::OutOfMemory { in_consumed: 2, out_len: 2 });
    }

    #[test]
    fn null_terminated_input_stops_at_zero() {
        let input = b"Hi\0trailing";
        let res =
            utf8_to_utf16_len_le(input, InputLen::NullTerminated, ConvertFlags::empty()).unwrap();
        assert_eq!(res, ConvertOutcome { out_len: 2, in_consumed: 2 });
    }
}
