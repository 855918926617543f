// nfctag/src/reader/mod.rs

//! Seams to the external reader hardware layer.
//!
//! Device enumeration and tag I/O live outside this crate; what is modeled
//! here is only the shape of that collaborator: a `ReaderSource` that scans
//! attached devices, and a `ReaderHandle` that delivers read / error /
//! stopped events for one device. `scan_devices` joins enumeration with the
//! capability parser so callers get structured info per device, and
//! `TagRead` joins a read event with the TLV decoder.

use std::collections::BTreeMap;

use crate::capability::DeviceCapabilityInfo;
use crate::ndef::NdefCodec;
use crate::tlv::{self, TlvRecord};
use crate::Result;

pub mod mock;
pub use mock::MockReader;

/// Raw enumeration record for one attached device, as the hardware layer
/// reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeviceInfo {
    /// Human-readable device name.
    pub name: String,
    /// Free-text capability description, parsed by [`DeviceCapabilityInfo`].
    pub info: String,
}

/// Enumeration record with the capability text parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub capabilities: DeviceCapabilityInfo,
}

/// One tag read delivered by a reader: the raw buffer plus the offset where
/// tag data begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRead {
    pub data: Vec<u8>,
    pub offset: usize,
}

impl TagRead {
    pub fn new(data: Vec<u8>, offset: usize) -> Self {
        Self { data, offset }
    }

    /// The tag-data portion of the buffer. Empty when the reported offset
    /// lies past the end of the buffer.
    pub fn tag_data(&self) -> &[u8] {
        self.data.get(self.offset..).unwrap_or(&[])
    }

    /// Decode the TLV records of this read.
    pub fn records(&self, codec: &dyn NdefCodec) -> Vec<TlvRecord> {
        tlv::decode_records(self.tag_data(), codec)
    }
}

/// Asynchronous notification from a running reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// A tag entered the field and was read.
    Read(TagRead),
    /// The reader reported an error; the session keeps running.
    Error(String),
    /// The reader stopped; no further events follow.
    Stopped,
}

/// Device enumeration capability of the hardware layer.
pub trait ReaderSource {
    /// Enumerate attached devices, keyed by device id.
    fn scan(&mut self) -> Result<BTreeMap<String, RawDeviceInfo>>;
}

/// Event-delivery capability for one reader device.
pub trait ReaderHandle {
    /// Begin delivering events for the given device.
    fn start(&mut self, device_id: &str) -> Result<()>;

    /// Request the reader to stop; a final [`TagEvent::Stopped`] follows.
    fn stop(&mut self) -> Result<()>;

    /// Block until the next event is available.
    fn next_event(&mut self) -> Result<TagEvent>;
}

/// Scan for devices and parse each one's capability text.
///
/// The parse happens once per scan and the result is not cached anywhere;
/// callers drop it when done.
pub fn scan_devices(source: &mut dyn ReaderSource) -> Result<BTreeMap<String, DeviceInfo>> {
    let raw = source.scan()?;
    log::debug!("scan found {} device(s)", raw.len());

    Ok(raw
        .into_iter()
        .map(|(id, dev)| {
            let capabilities = DeviceCapabilityInfo::parse(&dev.info);
            (
                id,
                DeviceInfo {
                    name: dev.name,
                    capabilities,
                },
            )
        })
        .collect())
}
