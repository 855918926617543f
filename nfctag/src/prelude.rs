// nfctag/src/prelude.rs

//! Convenience re-exports of the decode surface.

pub use crate::capability::{DeviceCapabilityInfo, GroupValue, InfoValue};
pub use crate::manufacture::ManufactureData;
pub use crate::ndef::{NdefCodec, NdefMessage, NdefRecord};
pub use crate::reader::{
    scan_devices, DeviceInfo, RawDeviceInfo, ReaderHandle, ReaderSource, TagEvent, TagRead,
};
pub use crate::tlv::{decode_records, TlvRecord};
pub use crate::{CapabilityContainer, Error, LockBytes, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
