// nfctag/src/tlv/mod.rs

//! Decoder for the TLV record stream found in tag data memory.
//!
//! Tag memory is a sequence of Type-Length-Value records; the NDEF message
//! lives in the value of a type `0x03` record and a `0xFE` tag terminates
//! the stream. Input is whatever a reader handed us, so the decoder is
//! deliberately permissive: truncated or malformed trailing data yields
//! fewer or shorter records, never an error.

use crate::constants::{TLV_EXTENDED_LENGTH, TLV_NDEF_MESSAGE, TLV_TERMINATOR};
use crate::ndef::{NdefCodec, NdefMessage};

/// One decoded element of the TLV stream.
///
/// `value` is the hex rendering of the record's value bytes; the raw byte
/// form is not retained once a record has been produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TlvRecord {
    /// Tag identifier byte.
    pub tlv_type: u8,
    /// Decoded length in bytes. Absent on a terminal record.
    pub length: Option<usize>,
    /// Value bytes rendered as lowercase hex. Absent when the declared
    /// length is zero or overruns the buffer.
    pub value: Option<String>,
    /// Decoded NDEF message, present only for a type `0x03` record whose
    /// value was captured.
    pub ndef_message: Option<NdefMessage>,
}

impl TlvRecord {
    /// A record carrying only its type byte: the stream terminator, or the
    /// last readable byte when the buffer runs out.
    fn terminal(tlv_type: u8) -> Self {
        Self {
            tlv_type,
            length: None,
            value: None,
            ndef_message: None,
        }
    }

    /// True for the record that ended decoding.
    pub fn is_terminal(&self) -> bool {
        self.length.is_none()
    }
}

/// Decode a TLV record stream.
///
/// The input must already be sliced to start at the tag-data offset reported
/// by the reader. Decoding walks the stream in order and stops at the first
/// `0xFE` tag or when too few bytes remain to continue; it never fails.
///
/// Cursor layout is inherited from the original decoder: after a record is
/// emitted the cursor advances by the record length from the length byte, so
/// it lands on the last value byte and that byte is read again as the next
/// record's type. A stream carrying one value record therefore ends with a
/// short terminal record echoing that byte. The quirk is kept so existing
/// consumers see identical record sequences.
pub fn decode_records(data: &[u8], codec: &dyn NdefCodec) -> Vec<TlvRecord> {
    let mut records = Vec::new();
    let mut i = 0usize;

    while i < data.len() {
        let tlv_type = data[i];
        if tlv_type == TLV_TERMINATOR || i + 1 >= data.len() {
            records.push(TlvRecord::terminal(tlv_type));
            break;
        }

        // Cursor now sits on the length byte.
        i += 1;
        let mut length = data[i] as usize;
        if length == TLV_EXTENDED_LENGTH as usize {
            if i + 2 >= data.len() {
                // Escape byte without its two length bytes: stop without
                // emitting a partial record.
                log::debug!("tlv: extended length truncated at offset {}", i);
                break;
            }
            length = (data[i + 1] as usize) * 256 + data[i + 2] as usize;
            i += 2;
        }

        let raw_value = if length > 0 && i + length < data.len() {
            Some(&data[i + 1..i + 1 + length])
        } else {
            if length > 0 {
                log::debug!(
                    "tlv: type {:#04x} declares {} bytes but only {} remain",
                    tlv_type,
                    length,
                    data.len().saturating_sub(i + 1)
                );
            }
            None
        };

        let ndef_message = match raw_value {
            Some(value) if tlv_type == TLV_NDEF_MESSAGE => match codec.decode_message(value) {
                Ok(message) => Some(message),
                Err(e) => {
                    log::debug!("tlv: ndef decode failed: {}", e);
                    None
                }
            },
            _ => None,
        };

        records.push(TlvRecord {
            tlv_type,
            length: Some(length),
            value: raw_value.map(|value| codec.bytes_to_hex(value)),
            ndef_message,
        });

        i += length;
    }

    records
}
