use thiserror::Error;

use crate::io::pnm::PnmKind;

#[derive(Error, Debug)]
pub enum UnblackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PNM header: {0}")]
    InvalidPnm(String),

    #[error("Unsupported PNM format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Expected a {expected} image, found a {found}")]
    UnexpectedKind { expected: PnmKind, found: PnmKind },

    #[error("Sample value {value} exceeds maximum {max}")]
    SampleOutOfRange { value: u64, max: u16 },

    #[error("Raster truncated after {read} of {expected} samples")]
    Truncated { read: usize, expected: usize },

    #[error("All {total} samples have already been read")]
    RasterExhausted { total: usize },

    #[error("Expected maximum value {expected}, found {found}")]
    BadDenominator { expected: u16, found: u16 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, UnblackError>;
