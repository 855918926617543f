#[path = "../common/mod.rs"]
mod common;

use nfctag::manufacture::ManufactureData;
use nfctag::Error;

#[test]
fn sequential_block_maps_every_field() {
    let block: Vec<u8> = (0u8..16).collect();
    let data = ManufactureData::parse(&block).unwrap();

    assert_eq!(data.uid.as_bytes(), &[0, 1, 2, 4, 5, 6, 7]);
    assert_eq!(data.cb0, 3);
    assert_eq!(data.cb1, 8);
    assert_eq!(data.internal, 9);
    assert_eq!(data.lock.as_bytes(), &[10, 11]);
    assert_eq!(data.cc.as_bytes(), &[12, 13, 14, 15]);
}

#[test]
fn short_block_fails_with_invalid_length() {
    match ManufactureData::parse(&[0u8; 15]) {
        Err(Error::InvalidLength {
            expected: 16,
            actual: 15,
        }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}

#[test]
fn ntag_fixture_has_consistent_check_bytes() {
    let data = ManufactureData::parse(&common::fixtures::sample_manufacture_block()).unwrap();
    assert_eq!(data.uid.as_bytes(), &common::fixtures::sample_sn());
    assert!(data.cb0_valid());
    assert!(data.cb1_valid());
    assert_eq!(data.cc.magic(), 0xe1);
    assert_eq!(data.cc.data_area_size(), 144);
}

#[test]
fn full_read_buffer_splits_into_block_and_tag_data() {
    let buf = common::fixtures::tag_read_buffer(&[0xd1, 0x01, 0x0b, 0x55]);
    let data = ManufactureData::parse(&buf).unwrap();
    assert_eq!(data.uid.to_hex(), "048c5fca332d80");

    // Tag data begins right after the manufacture block.
    assert_eq!(buf[16], 0x03);
}
