//! Concrete literal scenarios from spec §8, exercised end-to-end across
//! the public API rather than against a single internal module.

use uxcode::{
    utf16_to_utf32_be, utf16_to_utf32_le, utf8_to_utf16_be, utf8_to_utf16_le, utf8_to_utf32_be,
    utf8_to_utf32_le, ConvertError, ConvertFlags, ConvertOutcome, InputLen,
};

const SAMPLE_UTF8: [u8; 10] = [0x41, 0xC3, 0xA9, 0xE4, 0xB8, 0xAD, 0xF0, 0x9D, 0x84, 0x9E];

#[test]
fn utf8_through_utf16le_through_utf32le_matches_spec_literal() {
    let mut utf16 = [0u16; 6];
    let r1 = utf8_to_utf16_le(
        &mut utf16,
        &SAMPLE_UTF8,
        InputLen::Exact(SAMPLE_UTF8.len()),
        ConvertFlags::empty(),
    )
    .unwrap();
    assert_eq!(r1, ConvertOutcome { out_len: 5, in_consumed: 10 });
    assert_eq!(&utf16[..5], &[0x0041, 0x00E9, 0x4E2D, 0xD834, 0xDD1E]);

    let mut utf32 = [0u32; 5];
    let r2 = utf16_to_utf32_le(
        &mut utf32,
        &utf16[..5],
        InputLen::Exact(5),
        ConvertFlags::empty(),
    )
    .unwrap();
    assert_eq!(r2, ConvertOutcome { out_len: 4, in_consumed: 5 });
    assert_eq!(&utf32[..4], &[0x0041, 0x00E9, 0x4E2D, 0x0001_D11E]);
}

#[test]
fn utf8_through_utf16be_through_utf32be_matches_spec_literal() {
    let mut utf16 = [0u16; 6];
    let r1 = utf8_to_utf16_be(
        &mut utf16,
        &SAMPLE_UTF8,
        InputLen::Exact(SAMPLE_UTF8.len()),
        ConvertFlags::empty(),
    )
    .unwrap();
    assert_eq!(r1, ConvertOutcome { out_len: 5, in_consumed: 10 });
    // same scalars as the LE chain, each unit byte-swapped into big-endian storage
    assert_eq!(&utf16[..5], &[0x4100, 0xE900, 0x2D4E, 0x34D8, 0x1EDD]);

    let mut utf32 = [0u32; 5];
    let r2 = utf16_to_utf32_be(
        &mut utf32,
        &utf16[..5],
        InputLen::Exact(5),
        ConvertFlags::empty(),
    )
    .unwrap();
    assert_eq!(r2, ConvertOutcome { out_len: 4, in_consumed: 5 });
    assert_eq!(&utf32[..4], &[0x41000000, 0xE9000000, 0x2D4E0000, 0x1ED10100]);
}

#[test]
fn forbidden_bom_reports_zero_consumed_and_zero_written() {
    let input = [0xEFu8, 0xBB, 0xBF, 0x41];
    let err = uxcode::utf8_to_utf16_len_le(&input, InputLen::Exact(4), ConvertFlags::FORBID_BOM)
        .unwrap_err();
    assert_eq!(err, ConvertError::ForbiddenBom);
    assert_eq!(err.in_consumed(), 0);
}

#[test]
fn forbidden_bom_reports_zero_consumed_and_zero_written_be() {
    let input = [0xEFu8, 0xBB, 0xBF, 0x41];
    let err = uxcode::utf8_to_utf16_len_be(&input, InputLen::Exact(4), ConvertFlags::FORBID_BOM)
        .unwrap_err();
    assert_eq!(err, ConvertError::ForbiddenBom);
    assert_eq!(err.in_consumed(), 0);
}

#[test]
fn overlong_lead_byte_c0_af() {
    let input = [0xC0u8, 0xAF];

    let strict = utf8_to_utf32_le(
        &mut [0u32; 2],
        &input,
        InputLen::Exact(2),
        ConvertFlags::ERROR_ON_INVALID_CODE_POINT,
    )
    .unwrap_err();
    assert_eq!(strict, ConvertError::InvalidCodePoint { in_consumed: 0 });

    let mut out = [0u32; 3];
    let replaced =
        utf8_to_utf32_le(&mut out, &input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
    assert_eq!(replaced, ConvertOutcome { out_len: 2, in_consumed: 2 });
    assert_eq!(&out[..2], &[0xFFFD, 0xFFFD]);
}

#[test]
fn overlong_lead_byte_c0_af_be() {
    let input = [0xC0u8, 0xAF];

    let strict = utf8_to_utf32_be(
        &mut [0u32; 2],
        &input,
        InputLen::Exact(2),
        ConvertFlags::ERROR_ON_INVALID_CODE_POINT,
    )
    .unwrap_err();
    assert_eq!(strict, ConvertError::InvalidCodePoint { in_consumed: 0 });

    let mut out = [0u32; 3];
    let replaced =
        utf8_to_utf32_be(&mut out, &input, InputLen::Exact(2), ConvertFlags::empty()).unwrap();
    assert_eq!(replaced, ConvertOutcome { out_len: 2, in_consumed: 2 });
    // REPLACEMENT_SCALAR (U+FFFD) byte-swapped into big-endian storage
    assert_eq!(&out[..2], &[0xFDFF0000, 0xFDFF0000]);
}

#[test]
fn truncated_three_byte_tail() {
    let input = [0xE4u8, 0xB8];
    let err = uxcode::utf8_to_utf16_len_le(&input, InputLen::Exact(2), ConvertFlags::empty())
        .unwrap_err();
    assert_eq!(err, ConvertError::InvalidInput { in_consumed: 0 });
}

#[test]
fn truncated_three_byte_tail_be() {
    let input = [0xE4u8, 0xB8];
    let err = uxcode::utf8_to_utf16_len_be(&input, InputLen::Exact(2), ConvertFlags::empty())
        .unwrap_err();
    assert_eq!(err, ConvertError::InvalidInput { in_consumed: 0 });
}
