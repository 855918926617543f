//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize NDEF codec stand-ins and TLV stream builders so
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::Cell;

use crate::ndef::{NdefCodec, NdefMessage, NdefRecord};
use crate::{Error, Result};

/// Codec stand-in that wraps the input bytes into a single unknown-type
/// record without interpreting them. Rejects empty input so tests can
/// exercise the decode-failure degradation path.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct EnvelopeCodec;

impl NdefCodec for EnvelopeCodec {
    fn decode_message(&self, bytes: &[u8]) -> Result<NdefMessage> {
        if bytes.is_empty() {
            return Err(Error::NdefDecode("empty message".to_string()));
        }
        Ok(NdefMessage::new(vec![NdefRecord {
            tnf: 0x05, // unknown
            record_type: Vec::new(),
            id: Vec::new(),
            payload: bytes.to_vec(),
        }]))
    }
}

/// EnvelopeCodec wrapper that counts `decode_message` delegations, for tests
/// asserting how often the TLV decoder reaches out to the external codec.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct CountingCodec {
    calls: Cell<usize>,
}

impl CountingCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode_calls(&self) -> usize {
        self.calls.get()
    }
}

impl NdefCodec for CountingCodec {
    fn decode_message(&self, bytes: &[u8]) -> Result<NdefMessage> {
        self.calls.set(self.calls.get() + 1);
        EnvelopeCodec.decode_message(bytes)
    }
}

/// Build a TLV record with a single-byte length.
#[doc(hidden)]
pub fn tlv(tlv_type: u8, value: &[u8]) -> Vec<u8> {
    assert!(value.len() < 0xff, "use tlv_extended for long values");
    let mut out = Vec::with_capacity(2 + value.len());
    out.push(tlv_type);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    out
}

/// Build a TLV record using the 0xFF extended-length escape.
#[doc(hidden)]
pub fn tlv_extended(tlv_type: u8, value: &[u8]) -> Vec<u8> {
    let len = value.len() as u16;
    let mut out = Vec::with_capacity(4 + value.len());
    out.push(tlv_type);
    out.push(0xff);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(value);
    out
}

/// Concatenate TLV records and close the stream with a terminator tag.
#[doc(hidden)]
pub fn terminated_stream(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for rec in records {
        out.extend_from_slice(rec);
    }
    out.push(crate::constants::TLV_TERMINATOR);
    out
}
