//! Shared decode/encode primitives used by every cross-encoding direction.
//!
//! Each direction module (`utf8_to_utf16`, `utf16_to_utf32`, ...) composes
//! these into a length-pass and an encode-pass that are driven by the same
//! decode loop, so the two passes can never disagree about how much input
//! a given scalar consumes (the invariant in spec §8 property 1).

pub mod utf16_to_utf32;
pub mod utf16_to_utf8;
pub mod utf32_to_utf16;
pub mod utf32_to_utf8;
pub mod utf8_to_utf16;
pub mod utf8_to_utf32;

use crate::endian::Endian;
use crate::input::InputLen;
use crate::scalar::{
    encode_utf8_scalar, is_high_surrogate, is_low_surrogate, is_valid_scalar, utf16_pair_to_scalar,
    utf16_len_for_scalar, utf32_cp_to_utf16_pair, utf8_len_for_scalar,
};

/// A decode attempt failed for one of two reasons. The caller (not the
/// decoder) is responsible for applying [`ConvertFlags::ERROR_ON_INVALID_CODE_POINT`]
/// policy to `Invalid`, since every source encoding needs the same policy
/// applied identically.
pub(crate) enum DecodeErr {
    /// A multi-unit sequence ran past the end of the input.
    Truncated,
    /// A malformed sequence; the `usize` is how many input units it
    /// occupies under the replace policy.
    Invalid(usize),
}

/// Result of a single decode step: either a scalar plus how many input
/// units it consumed, or `None` meaning "no more input" (clean end of
/// stream, not an error).
pub(crate) type DecodeStep = Result<Option<(u32, usize)>, DecodeErr>;

/// Reinterprets a native `u16` storage slot as holding a value encoded in
/// `endian` byte order, converting it to a host-native value for decoding.
/// This is its own inverse, so it also serves to go the other way
/// (host-native -> `endian`-encoded storage) in the encode path.
pub(crate) fn normalize_u16(raw: u16, endian: Endian) -> u16 {
    if endian == Endian::native() {
        raw
    } else {
        raw.swap_bytes()
    }
}

/// Reinterprets a native `u32` storage slot the same way as [`normalize_u16`].
pub(crate) fn normalize_u32(raw: u32, endian: Endian) -> u32 {
    if endian == Endian::native() {
        raw
    } else {
        raw.swap_bytes()
    }
}

/// Decodes one scalar from a UTF-8 byte buffer at `offset`.
pub(crate) fn decode_one_utf8(input: &[u8], input_len: InputLen, offset: usize) -> Option<DecodeStep> {
    if !input_len.in_bounds(offset) {
        return None;
    }
    let b0 = input[offset];
    if input_len.is_null_terminated() && b0 == 0 {
        return None;
    }

    if b0 < 0x80 {
        return Some(Ok(Some((b0 as u32, 1))));
    }
    if b0 == 0xC0 || b0 == 0xC1 || (0xF5..=0xFF).contains(&b0) {
        return Some(Err(DecodeErr::Invalid(1)));
    }

    let seq_len = if (b0 & 0xE0) == 0xC0 {
        2
    } else if (b0 & 0xF0) == 0xE0 {
        3
    } else if (b0 & 0xF8) == 0xF0 {
        4
    } else {
        return Some(Err(DecodeErr::Invalid(1)));
    };

    for i in 1..seq_len {
        let pos = offset + i;
        let available = pos < input.len() && input_len.in_bounds(pos);
        if !available || (input_len.is_null_terminated() && input[pos] == 0) {
            return Some(Err(DecodeErr::Truncated));
        }
    }

    let cp = match seq_len {
        2 => ((b0 as u32 & 0x1F) << 6) | (input[offset + 1] as u32 & 0x3F),
        3 => {
            ((b0 as u32 & 0x0F) << 12)
                | ((input[offset + 1] as u32 & 0x3F) << 6)
                | (input[offset + 2] as u32 & 0x3F)
        }
        _ => {
            ((b0 as u32 & 0x07) << 18)
                | ((input[offset + 1] as u32 & 0x3F) << 12)
                | ((input[offset + 2] as u32 & 0x3F) << 6)
                | (input[offset + 3] as u32 & 0x3F)
        }
    };

    if seq_len == 4 && !is_valid_scalar(cp) {
        return Some(Err(DecodeErr::Invalid(4)));
    }

    Some(Ok(Some((cp, seq_len))))
}

/// Decodes one scalar from a UTF-16 unit buffer at `offset`, given unit
/// already normalized to host endianness by the caller via [`normalize_u16`].
pub(crate) fn decode_one_utf16(
    units: &[u16],
    input_len: InputLen,
    offset: usize,
    endian: Endian,
) -> Option<DecodeStep> {
    if !input_len.in_bounds(offset) {
        return None;
    }
    let raw0 = units[offset];
    if input_len.is_null_terminated() && raw0 == 0 {
        return None;
    }
    let w1 = normalize_u16(raw0, endian);

    if !is_high_surrogate(w1) && !is_low_surrogate(w1) {
        return Some(Ok(Some((w1 as u32, 1))));
    }

    if is_high_surrogate(w1) {
        let pos = offset + 1;
        let available = pos < units.len() && input_len.in_bounds(pos);
        if !available {
            return Some(Err(DecodeErr::Truncated));
        }
        let raw1 = units[pos];
        if input_len.is_null_terminated() && raw1 == 0 {
            return Some(Err(DecodeErr::Truncated));
        }
        let w2 = normalize_u16(raw1, endian);
        if is_low_surrogate(w2) {
            return Some(Ok(Some((utf16_pair_to_scalar(w1, w2), 2))));
        }
        return Some(Err(DecodeErr::Invalid(1)));
    }

    // Lone low surrogate as a lead unit.
    Some(Err(DecodeErr::Invalid(1)))
}

/// Decodes one scalar from a UTF-32 unit buffer at `offset`.
pub(crate) fn decode_one_utf32(
    units: &[u32],
    input_len: InputLen,
    offset: usize,
    endian: Endian,
) -> Option<DecodeStep> {
    if !input_len.in_bounds(offset) {
        return None;
    }
    let raw = units[offset];
    if input_len.is_null_terminated() && raw == 0 {
        return None;
    }
    let cp = normalize_u32(raw, endian);
    if is_valid_scalar(cp) {
        Some(Ok(Some((cp, 1))))
    } else {
        Some(Err(DecodeErr::Invalid(1)))
    }
}

/// Attempts to encode `scalar` as UTF-8 at `pos` in `out`. Returns the
/// number of units the encoding occupies (whether or not `out` is
/// present), or `None` if `out` is present but has insufficient remaining
/// capacity at `pos` (in which case nothing is written).
pub(crate) fn try_encode_utf8(out: Option<&mut [u8]>, pos: usize, scalar: u32) -> Option<usize> {
    let need = utf8_len_for_scalar(scalar);
    match out {
        None => Some(need),
        Some(buf) => {
            if pos + need > buf.len() {
                return None;
            }
            let written = encode_utf8_scalar(scalar, &mut buf[pos..pos + need]);
            debug_assert_eq!(written, need);
            Some(need)
        }
    }
}

/// Attempts to encode `scalar` as one or two UTF-16 units at `pos` in
/// `out`, with the given output endianness. See [`try_encode_utf8`] for
/// the capacity contract.
pub(crate) fn try_encode_utf16(
    out: Option<&mut [u16]>,
    pos: usize,
    scalar: u32,
    endian: Endian,
) -> Option<usize> {
    let need = utf16_len_for_scalar(scalar);
    match out {
        None => Some(need),
        Some(buf) => {
            if pos + need > buf.len() {
                return None;
            }
            if need == 1 {
                buf[pos] = denormalize_u16(scalar as u16, endian);
            } else {
                let (hi, lo) = utf32_cp_to_utf16_pair(scalar);
                buf[pos] = denormalize_u16(hi, endian);
                buf[pos + 1] = denormalize_u16(lo, endian);
            }
            Some(need)
        }
    }
}

/// Attempts to encode `scalar` as one UTF-32 unit at `pos` in `out`. See
/// [`try_encode_utf8`] for the capacity contract.
pub(crate) fn try_encode_utf32(
    out: Option<&mut [u32]>,
    pos: usize,
    scalar: u32,
    endian: Endian,
) -> Option<usize> {
    match out {
        None => Some(1),
        Some(buf) => {
            if pos >= buf.len() {
                return None;
            }
            buf[pos] = denormalize_u32(scalar, endian);
            Some(1)
        }
    }
}

fn denormalize_u16(host: u16, endian: Endian) -> u16 {
    normalize_u16(host, endian)
}

fn denormalize_u32(host: u32, endian: Endian) -> u32 {
    normalize_u32(host, endian)
}

/// True if a UTF-8 BOM is present at the start of `input`, honoring both
/// exact-length bounds and a premature null terminator.
pub(crate) fn has_utf8_bom_bounded(input: &[u8], input_len: InputLen) -> bool {
    for pos in 0..3 {
        if pos >= input.len() || !input_len.in_bounds(pos) {
            return false;
        }
        if input_len.is_null_terminated() && input[pos] == 0 {
            return false;
        }
    }
    crate::bom::has_utf8_bom(input)
}

/// True if a UTF-16 BOM (either endianness) is present as the first unit
/// of `units`, honoring bounds. Returns the endianness the BOM indicates.
pub(crate) fn utf16_bom_endian_bounded(units: &[u16], input_len: InputLen) -> Option<Endian> {
    if units.is_empty() || !input_len.in_bounds(0) {
        return None;
    }
    let raw = units[0];
    if input_len.is_null_terminated() && raw == 0 {
        return None;
    }
    let b = raw.to_ne_bytes();
    if crate::bom::is_utf16_bom_le(b[0], b[1]) {
        Some(Endian::Little)
    } else if crate::bom::is_utf16_bom_be(b[0], b[1]) {
        Some(Endian::Big)
    } else {
        None
    }
}

/// True if a UTF-16 BOM matching the *given* `endian` is present as the
/// first unit of `units` — used by the fixed-endian (`le`/`be`/`ne`)
/// conversions, which skip any BOM-looking unit without validating which
/// pattern it is (matching the reference source's own behavior).
pub(crate) fn has_utf16_bom_bounded(units: &[u16], input_len: InputLen) -> bool {
    if units.is_empty() || !input_len.in_bounds(0) {
        return false;
    }
    let raw = units[0];
    if input_len.is_null_terminated() && raw == 0 {
        return false;
    }
    let b = raw.to_ne_bytes();
    crate::bom::is_utf16_bom_le(b[0], b[1]) || crate::bom::is_utf16_bom_be(b[0], b[1])
}

/// True if a UTF-32 BOM (either endianness) is present as the first unit
/// of `units`, honoring bounds. Returns the endianness the BOM indicates.
pub(crate) fn utf32_bom_endian_bounded(units: &[u32], input_len: InputLen) -> Option<Endian> {
    if units.is_empty() || !input_len.in_bounds(0) {
        return None;
    }
    let raw = units[0];
    if input_len.is_null_terminated() && raw == 0 {
        return None;
    }
    let b = raw.to_ne_bytes();
    if crate::bom::is_utf32_bom_le(b) {
        Some(Endian::Little)
    } else if crate::bom::is_utf32_bom_be(b) {
        Some(Endian::Big)
    } else {
        None
    }
}

/// See [`has_utf16_bom_bounded`]; UTF-32 analogue.
pub(crate) fn has_utf32_bom_bounded(units: &[u32], input_len: InputLen) -> bool {
    utf32_bom_endian_bounded(units, input_len).is_some()
}
