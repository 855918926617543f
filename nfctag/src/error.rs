// nfctag/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("device not found: {0}")]
    DeviceNotFound(String),

    #[error("reader is stopped")]
    ReaderStopped,

    #[error("ndef decode error: {0}")]
    NdefDecode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
