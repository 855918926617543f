// nfctag/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Tag UID - Newtype Pattern (7 バイト)
///
/// Assembled from the manufacture block: SN0..SN2 before the CB0 checksum
/// byte and SN3..SN6 after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Deref)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Uid([u8; 7]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 7]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 7] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 7 {
            return Err(Error::InvalidLength {
                expected: 7,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 7];
        arr.copy_from_slice(&bytes[..7]);
        Ok(Self(arr))
    }
}

/// Lock bytes - the two static lock-bit bytes of the manufacture block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LockBytes([u8; 2]);

impl LockBytes {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// Capability container - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CapabilityContainer([u8; 4]);

impl CapabilityContainer {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Magic number byte (0xE1 on NDEF-formatted Type 2 tags).
    pub fn magic(&self) -> u8 {
        self.0[0]
    }

    /// Data area size in bytes: CC2 * 8 per the Type 2 tag spec.
    pub fn data_area_size(&self) -> usize {
        self.0[2] as usize * 8
    }
}

impl TryFrom<&[u8]> for CapabilityContainer {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}
