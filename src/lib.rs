pub mod bytestreams;
pub mod markers;
pub mod segments;
pub mod huffman_tables;

use thiserror::Error;

/// Failure kinds a scan can abort with. Every variant is fatal to the scan
/// that raised it; the scanner never retries or downgrades one to a warning.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected end of stream at offset {offset}")]
    UnexpectedEndOfStream { offset: u64 },
    #[error("seek to negative position ({position})")]
    InvalidSeek { position: i64 },
    #[error("segment marker expected at offset {offset}, found {value:#06x}")]
    MalformedMarker { value: u16, offset: u64 },
    #[error("unexpected end of huffman table ({consumed} bytes, expected {declared})")]
    SegmentLengthMismatch { declared: usize, consumed: usize },
}

pub type Result<T> = std::result::Result<T, ScanError>;
