// nfctag/src/lib.rs

//! nfctag
//!
//! Decoders for NFC tag memory: the TLV record stream in tag data, the
//! 16-byte manufacture block, and the free-text capability descriptions a
//! reader reports per device. All three are pure functions from bytes or
//! text to structured values; hardware I/O and NDEF message internals stay
//! with external collaborators behind the `reader` and `ndef` seams.
#![warn(missing_docs)]

pub mod capability;
pub mod constants;
pub mod error;
pub mod manufacture;
pub mod ndef;
pub mod prelude;
pub mod reader;
pub mod test_support;
pub mod tlv;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
