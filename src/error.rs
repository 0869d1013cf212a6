//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, rendering, or exporting icons.
#[derive(Debug, Error)]
pub enum IconError {
    /// The requested icon size was zero.
    #[error("requested icon size must be positive")]
    InvalidSize,

    /// The source image could not be decoded.
    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),

    /// The loader was asked to resolve a second time.
    #[error("image loader already resolved; load runs once per instance")]
    AlreadyResolved,

    /// An icon buffer with unequal width and height was supplied.
    #[error("icon buffer must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("failed to encode icon as PNG: {0}")]
    Encode(#[source] image::ImageError),

    /// Serialization produced no bytes.
    #[error("encoded payload is empty")]
    EmptyPayload,

    /// Writing an exported icon to disk failed.
    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the source file failed.
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),
}
