//! Error type shared by every stage of the pipeline.
//!
//! Kept as a hand-rolled enum with a manual `Display` impl rather than
//! pulling in a derive-macro crate for it — nothing here needs more
//! than a handful of match arms.

use std::fmt;

/// All errors this tool can surface, matching the four kinds spec'd
/// for the command line tool.
#[derive(Debug)]
pub enum SdfError {
    /// A missing or ill-formed option value (spread = 0, quality
    /// outside 1..=100, unknown format tag, ...).
    InvalidArguments(String),
    /// The decoder rejected the input image.
    Decode(String),
    /// The encoder failed to write the output image.
    Encode(String),
    /// A buffer allocation failed for the chosen image size.
    OutOfMemory(String),
}

impl fmt::Display for SdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdfError::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            SdfError::Decode(msg) => write!(f, "failed to decode image: {msg}"),
            SdfError::Encode(msg) => write!(f, "failed to encode image: {msg}"),
            SdfError::OutOfMemory(msg) => write!(f, "out of memory: {msg}"),
        }
    }
}

impl std::error::Error for SdfError {}

impl From<image::ImageError> for SdfError {
    fn from(err: image::ImageError) -> SdfError {
        SdfError::Decode(err.to_string())
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SdfError>;
