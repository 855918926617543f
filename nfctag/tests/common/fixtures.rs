// fixtures.rs — provides commonly used test payloads and capability texts

use nfctag::test_support;

/// Serial number used by manufacture-block fixtures.
pub fn sample_sn() -> [u8; 7] {
    [0x04, 0x8c, 0x5f, 0xca, 0x33, 0x2d, 0x80]
}

/// A consistent NTAG-style manufacture block: SN0..SN2, CB0, SN3..SN6, CB1,
/// internal byte, lock bytes, capability container.
pub fn sample_manufacture_block() -> [u8; 16] {
    let sn = sample_sn();
    let cb0 = 0x88 ^ sn[0] ^ sn[1] ^ sn[2];
    let cb1 = sn[3] ^ sn[4] ^ sn[5] ^ sn[6];
    [
        sn[0], sn[1], sn[2], cb0, sn[3], sn[4], sn[5], sn[6], cb1, 0x48, 0x00, 0x00, 0xe1, 0x10,
        0x12, 0x00,
    ]
}

/// An NDEF TLV wrapping the given message bytes, closed with a terminator.
pub fn ndef_stream(message: &[u8]) -> Vec<u8> {
    test_support::terminated_stream(&[test_support::tlv(0x03, message)])
}

/// A full tag read buffer: manufacture block, then tag data at offset 16.
pub fn tag_read_buffer(message: &[u8]) -> Vec<u8> {
    let mut buf = sample_manufacture_block().to_vec();
    buf.extend_from_slice(&ndef_stream(message));
    buf
}

/// Capability text in the shape libnfc prints for a PN533 reader.
pub fn pn533_info_text() -> &'static str {
    "chip: PN533 v2.7\n\
     initator mode modulations: ISO/IEC 14443A (106 kbps), FeliCa (424 kbps, 212 kbps), ISO/IEC 14443-4B (106 kbps), Innovision Jewel (106 kbps), D.E.P. (424 kbps, 212 kbps, 106 kbps)\n\
     target mode modulations: ISO/IEC 14443A (106 kbps), FeliCa (424 kbps, 212 kbps), D.E.P. (424 kbps, 212 kbps, 106 kbps)"
}
