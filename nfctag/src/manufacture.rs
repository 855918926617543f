// nfctag/src/manufacture.rs

//! Parser for the manufacture block (block 0) of tag memory.
//!
//! The first 16 bytes of a Type 2 tag hold the factory-programmed identity:
//! the 7-byte serial number split around a checksum byte, a second checksum,
//! an internal byte, the static lock bytes and the capability container.
//! Layout:
//!
//! ```text
//! offset  0  1  2  3   4  5  6  7   8   9   10  11  12 13 14 15
//!        SN0 SN1 SN2 CB0 SN3 SN4 SN5 SN6 CB1 INT L0  L1  CC0 .. CC3
//! ```

use crate::constants::MANUFACTURE_BLOCK_LEN;
use crate::types::{CapabilityContainer, LockBytes, Uid};
use crate::{Error, Result};

/// Identity fields extracted from a 16-byte manufacture block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ManufactureData {
    /// 7-byte serial number (SN0..SN6).
    pub uid: Uid,
    /// Check byte 0, defined as CT ^ SN0 ^ SN1 ^ SN2.
    pub cb0: u8,
    /// Check byte 1, defined as SN3 ^ SN4 ^ SN5 ^ SN6.
    pub cb1: u8,
    /// Vendor-internal byte at offset 9.
    pub internal: u8,
    /// Static lock bytes at offsets 10-11.
    pub lock: LockBytes,
    /// Capability container at offsets 12-15.
    pub cc: CapabilityContainer,
}

impl ManufactureData {
    /// Extract the manufacture fields from the start of `block`.
    ///
    /// All fields are positional; the only failure is a block shorter than
    /// 16 bytes, rejected up front rather than read past the end.
    pub fn parse(block: &[u8]) -> Result<Self> {
        if block.len() < MANUFACTURE_BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: MANUFACTURE_BLOCK_LEN,
                actual: block.len(),
            });
        }

        let uid = Uid::from_bytes([
            block[0], block[1], block[2], block[4], block[5], block[6], block[7],
        ]);

        Ok(Self {
            uid,
            cb0: block[3],
            cb1: block[8],
            internal: block[9],
            lock: LockBytes::from_bytes([block[10], block[11]]),
            cc: CapabilityContainer::from_bytes([block[12], block[13], block[14], block[15]]),
        })
    }

    /// Whether CB0 matches CT ^ SN0 ^ SN1 ^ SN2, with CT = 0x88 (the cascade
    /// tag used on 7-byte UIDs). Informational; parsing never enforces it.
    pub fn cb0_valid(&self) -> bool {
        let sn = self.uid.as_bytes();
        self.cb0 == (0x88 ^ sn[0] ^ sn[1] ^ sn[2])
    }

    /// Whether CB1 matches SN3 ^ SN4 ^ SN5 ^ SN6.
    pub fn cb1_valid(&self) -> bool {
        let sn = self.uid.as_bytes();
        self.cb1 == (sn[3] ^ sn[4] ^ sn[5] ^ sn[6])
    }
}
