//! Whitespace/newline predicates and UTF-8 scalar-oriented trim/line
//! scanning. Equivalent to `cstr_utf32_is_whitespace`, `cstr_utf32_is_newline`,
//! `cstr_utf8_ltrim_offset`, `cstr_utf8_rtrim_offset`, `cstr_utf8_next_line`.

use crate::convert::decode_one_utf8;
use crate::input::InputLen;

/// True if `cp` is a Unicode whitespace scalar.
pub fn utf32_is_whitespace(cp: u32) -> bool {
    matches!(cp, 0x09..=0x0D)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// True if `cp` is a Unicode line-terminator scalar.
pub fn utf32_is_newline(cp: u32) -> bool {
    matches!(cp, 0x0A..=0x0D) || cp == 0x85 || cp == 0x2028 || cp == 0x2029
}

/// Decodes a single UTF-8 scalar at `offset`, tolerating the `ENOMEM`-style
/// failure from forcing a one-unit output capacity — this crate's analogue
/// of the reference source's `cstr_utf8_to_utf32(&cp, 1, NULL, ...)` idiom
/// for "decode exactly one scalar, I don't need a real output buffer".
fn decode_one_scalar(input: &[u8], offset: usize) -> Option<(u32, usize)> {
    match decode_one_utf8(input, InputLen::Exact(input.len()), offset)? {
        Ok(Some((scalar, consumed))) => Some((scalar, consumed)),
        Ok(None) => None,
        Err(crate::convert::DecodeErr::Truncated) => None,
        Err(crate::convert::DecodeErr::Invalid(consumed)) => {
            Some((crate::scalar::REPLACEMENT_SCALAR, consumed))
        }
    }
}

/// Byte offset of the first scalar in `input` that is not whitespace, or
/// `input.len()` if the entire string is whitespace.
pub fn utf8_ltrim_offset(input: &[u8]) -> usize {
    let mut offset = 0;
    while offset < input.len() {
        let (scalar, consumed) = match decode_one_scalar(input, offset) {
            Some(pair) => pair,
            None => break,
        };
        if !utf32_is_whitespace(scalar) {
            break;
        }
        offset += consumed;
    }
    offset
}

/// Byte offset just past the last non-whitespace scalar in `input`, or `0`
/// if the entire string is whitespace.
pub fn utf8_rtrim_offset(input: &[u8]) -> usize {
    let mut offset = 0;
    let mut last_non_ws_end = 0;
    while offset < input.len() {
        let (scalar, consumed) = match decode_one_scalar(input, offset) {
            Some(pair) => pair,
            None => break,
        };
        offset += consumed;
        if !utf32_is_whitespace(scalar) {
            last_non_ws_end = offset;
        }
    }
    last_non_ws_end
}

/// Scans `input` for the next line boundary starting at byte `0`.
///
/// Returns `(next_line_start, this_line_len)`: `this_line_len` is the byte
/// length of the current line excluding its terminator, and
/// `next_line_start` is the byte offset just past the terminator (equal to
/// `input.len()` if no terminator was found). `CR LF` is treated as one
/// two-byte terminator; any other newline scalar from [`utf32_is_newline`]
/// terminates a line on its own.
pub fn utf8_next_line(input: &[u8]) -> (usize, usize) {
    let mut offset = 0;
    while offset < input.len() {
        let (scalar, consumed) = match decode_one_scalar(input, offset) {
            Some(pair) => pair,
            None => break,
        };
        if utf32_is_newline(scalar) {
            let line_len = offset;
            let mut next = offset + consumed;
            if scalar == 0x0D && next < input.len() && input[next] == 0x0A {
                next += 1;
            }
            return (next, line_len);
        }
        offset += consumed;
    }
    (input.len(), input.len())
}

/// True if `input` is empty or consists only of whitespace.
pub fn utf8_is_null_or_whitespace(input: &[u8]) -> bool {
    input.is_empty() || utf8_ltrim_offset(input) == input.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_predicate_matches_table() {
        assert!(utf32_is_whitespace(0x20));
        assert!(utf32_is_whitespace(0x3000));
        assert!(utf32_is_whitespace(0x2005));
        assert!(!utf32_is_whitespace(0x41));
    }

    #[test]
    fn newline_predicate_matches_table() {
        assert!(utf32_is_newline(0x0A));
        assert!(utf32_is_newline(0x0D));
        assert!(utf32_is_newline(0x2028));
        assert!(!utf32_is_newline(0x20));
    }

    #[test]
    fn ltrim_and_rtrim_offsets() {
        let input = "  中 hi  ".as_bytes();
        let l = utf8_ltrim_offset(input);
        let r = utf8_rtrim_offset(input);
        assert_eq!(&input[l..r], "中 hi".as_bytes());
    }

    #[test]
    fn all_whitespace_trims_to_empty() {
        let input = b"   \t\n  ";
        assert_eq!(utf8_ltrim_offset(input), input.len());
        assert_eq!(utf8_rtrim_offset(input), 0);
    }

    #[test]
    fn next_line_splits_on_crlf_as_one_terminator() {
        let input = b"first\r\nsecond\nthird";
        let (next, len) = utf8_next_line(input);
        assert_eq!(len, 5);
        assert_eq!(&input[..len], b"first");
        let (next2, len2) = utf8_next_line(&input[next..]);
        assert_eq!(&input[next..next + len2], b"second");
        let _ = next2;
    }

    #[test]
    fn next_line_with_no_terminator_returns_full_length() {
        let input = b"no newline here";
        let (next, len) = utf8_next_line(input);
        assert_eq!(next, input.len());
        assert_eq!(len, input.len());
    }
}
