//! split/error.rs

use crate::compression::CompressionError;
use crate::split::MarshalError;

fn compressed_detail(compressed_len: &Option<usize>, max_compressed: &usize) -> String {
    match compressed_len {
        Some(len) => format!(", {} compressed bytes (max {})", len, max_compressed),
        None => String::new(),
    }
}

/// Terminal outcome of a split. No payloads are returned alongside any of these.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("marshal failed: {0}")]
    Marshal(#[from] MarshalError),

    #[error("compression failed: {0}")]
    Compression(#[from] CompressionError),

    /// A single item cannot be encoded within the limits.
    ///
    /// `index` is the item's position in the caller's collection (0 when the
    /// collection was empty and its bare envelope already exceeded a limit).
    #[error(
        "{category} item {index} does not fit in a payload: {raw_len} raw bytes (max {max_uncompressed}){}",
        compressed_detail(.compressed_len, .max_compressed)
    )]
    PayloadTooLarge {
        category: &'static str,
        index: usize,
        raw_len: usize,
        compressed_len: Option<usize>,
        max_uncompressed: usize,
        max_compressed: usize,
    },
}

impl SplitError {
    /// Index of the offending item, when the error is about one.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            SplitError::PayloadTooLarge { index, .. } => Some(*index),
            _ => None,
        }
    }
}
