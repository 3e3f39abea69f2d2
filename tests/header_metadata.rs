mod common;

use common::{utf16, ScelBuilder};
use scel_reader::scel::format::{header, metadata};
use scel_reader::{ParseEvent, ScelError, ScelReader, Signature};

#[test]
fn short_buffers_are_rejected() {
    let data = vec![0x40, 0x15, 0x00, 0x00, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    match header::validate(&data) {
        Err(ScelError::TooSmall { len }) => assert_eq!(len, 15),
        other => panic!("expected TooSmall, got {:?}", other),
    }
    assert!(!header::is_valid(&[]));
}

#[test]
fn unknown_signature_is_rejected_with_hex_head() {
    let data: Vec<u8> = (0u8..32).collect();
    let err = ScelReader::from_bytes(data).expect_err("bad signature");
    assert!(err.is_format_error());
    match err {
        ScelError::InvalidSignature { head } => {
            assert_eq!(head, "00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F");
        }
        other => panic!("expected InvalidSignature, got {:?}", other),
    }
}

#[test]
fn both_signatures_are_accepted() {
    let mut magic = vec![0u8; 16];
    magic[..4].copy_from_slice(&[0x40, 0x15, 0x00, 0x00]);
    assert_eq!(header::validate(&magic).unwrap(), Signature::Magic);

    let mut dcs = vec![0u8; 16];
    dcs[4..7].copy_from_slice(b"DCS");
    assert_eq!(header::validate(&dcs).unwrap(), Signature::DcsMarker);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ScelReader::new("/definitely/not/here.scel").expect_err("missing file");
    assert!(matches!(err, ScelError::Io(_)));
    assert!(!err.is_format_error());
}

#[test]
fn metadata_is_read_from_fixed_ranges() {
    let data = ScelBuilder::new()
        .name("计算机词汇")
        .category("自然科学")
        .description("常用计算机术语")
        .examples("硬盘 内存 显卡")
        .build();
    let reader = ScelReader::from_bytes(data).unwrap();

    let mut events = Vec::new();
    let meta = reader.metadata(&mut events);
    assert_eq!(meta.name, "计算机词汇");
    assert_eq!(meta.category, "自然科学");
    assert_eq!(meta.description, "常用计算机术语");
    assert_eq!(meta.examples, "硬盘 内存 显卡");
    assert!(events.is_empty(), "unexpected events: {:?}", events);
}

#[test]
fn utf16_string_stops_at_embedded_terminator() {
    let mut data = utf16("abc");
    data.extend([0, 0]);
    data.extend(utf16("zz"));

    let mut events = Vec::new();
    let text = metadata::read_utf16_string(&data, 0, data.len(), &mut events);
    assert_eq!(text, "abc");
    assert!(events.is_empty());
}

#[test]
fn utf16_string_without_terminator_uses_whole_span() {
    let data = utf16("hello");
    let mut events = Vec::new();
    assert_eq!(metadata::read_utf16_string(&data, 0, data.len(), &mut events), "hello");
}

#[test]
fn utf16_string_odd_length_drops_last_byte() {
    let mut data = utf16("hello");
    data.push(b'A');

    let mut events = Vec::new();
    let text = metadata::read_utf16_string(&data, 0, data.len(), &mut events);
    assert_eq!(text, "hello");
    assert_eq!(events, vec![ParseEvent::StringOddLength { offset: 0, length: 10 }]);
}

#[test]
fn utf16_string_is_clamped_to_buffer() {
    let data = utf16("hi");
    let mut events = Vec::new();
    let text = metadata::read_utf16_string(&data, 0, 100, &mut events);
    assert_eq!(text, "hi");
    assert_eq!(events, vec![ParseEvent::StringClamped { offset: 0, length: 4 }]);
}

#[test]
fn utf16_string_out_of_range_is_empty() {
    let data = utf16("hi");
    let mut events = Vec::new();
    assert_eq!(metadata::read_utf16_string(&data, 10, 4, &mut events), "");
    assert_eq!(events, vec![ParseEvent::StringOutOfRange { offset: 10 }]);
}

#[test]
fn metadata_of_truncated_file_degrades_to_empty_strings() {
    let mut data = vec![0u8; 0x200];
    data[..4].copy_from_slice(&[0x40, 0x15, 0x00, 0x00]);
    let name = utf16("短");
    data[0x130..0x130 + name.len()].copy_from_slice(&name);

    let reader = ScelReader::from_bytes(data).unwrap();
    let mut events = Vec::new();
    let meta = reader.metadata(&mut events);
    assert_eq!(meta.name, "短");
    assert_eq!(meta.category, "");
    assert_eq!(meta.description, "");
    assert_eq!(meta.examples, "");
    assert!(events.contains(&ParseEvent::StringOutOfRange { offset: 0x338 }));
}
