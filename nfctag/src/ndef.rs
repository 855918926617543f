// nfctag/src/ndef.rs

//! Seam to the external NDEF codec.
//!
//! NDEF message decoding is not implemented here; the TLV decoder only needs
//! a capability that turns the value bytes of a type `0x03` record into a
//! message, plus a hex renderer for display. `NdefCodec` abstracts both so
//! tests can substitute a canned codec the same way the transport layer of a
//! reader library would be mocked.

use crate::Result;

/// One record of a decoded NDEF message.
///
/// This is only the record envelope as the external codec reports it; payload
/// semantics (text, URI, MIME, ...) stay with the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NdefRecord {
    /// Type Name Format bits of the record header.
    pub tnf: u8,
    /// Record type field, raw bytes.
    pub record_type: Vec<u8>,
    /// Record id field, raw bytes (empty when the IL flag is clear).
    pub id: Vec<u8>,
    /// Record payload, raw bytes.
    pub payload: Vec<u8>,
}

/// A decoded NDEF message: an ordered list of record envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NdefMessage {
    pub records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Capability interface supplied by an external NDEF codec.
pub trait NdefCodec {
    /// Decode the value bytes of an NDEF TLV record into a message.
    fn decode_message(&self, bytes: &[u8]) -> Result<NdefMessage>;

    /// Render bytes as the display form used for TLV record values.
    fn bytes_to_hex(&self, bytes: &[u8]) -> String {
        crate::utils::bytes_to_hex(bytes)
    }
}
