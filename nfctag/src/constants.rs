// nfctag/src/constants.rs
//! Common tag-memory constants used across the crate

/// TLV tag: NULL (padding, no length or value)
pub const TLV_NULL: u8 = 0x00;

/// TLV tag: lock control
pub const TLV_LOCK_CONTROL: u8 = 0x01;

/// TLV tag: memory control
pub const TLV_MEMORY_CONTROL: u8 = 0x02;

/// TLV tag: NDEF message
pub const TLV_NDEF_MESSAGE: u8 = 0x03;

/// TLV tag: terminator, ends the record stream
pub const TLV_TERMINATOR: u8 = 0xFE;

/// TLV length byte escaping to a 16-bit big-endian length
pub const TLV_EXTENDED_LENGTH: u8 = 0xFF;

/// Manufacture block length in bytes (block 0 of Type 2 tag memory)
pub const MANUFACTURE_BLOCK_LEN: usize = 16;
