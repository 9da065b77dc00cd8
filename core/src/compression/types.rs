//! compression/types.rs
//! Codec identifiers, errors, and the compressor traits the splitter consumes.
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::compression::constants::codec_ids;
use crate::utils::enum_name_or_hex;

/// Compression codec identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    #[serde(rename = "none")]
    Passthrough = codec_ids::PASSTHROUGH,
    Zstd        = codec_ids::ZSTD,
    Lz4         = codec_ids::LZ4,
    Zlib        = codec_ids::ZLIB,
}

impl CompressionCodec {
    pub fn name(self) -> &'static str {
        match self {
            CompressionCodec::Passthrough => "none",
            CompressionCodec::Zstd        => "zstd",
            CompressionCodec::Lz4         => "lz4",
            CompressionCodec::Zlib        => "zlib",
        }
    }
}

impl Default for CompressionCodec {
    fn default() -> Self {
        CompressionCodec::Zlib
    }
}

fn codec_name(raw: &u16) -> String {
    enum_name_or_hex::<CompressionCodec>(*raw)
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("unsupported compression codec: {}", codec_name(.codec_id))]
    UnsupportedCodec { codec_id: u16 },

    #[error("codec {codec} does not accept level {level}")]
    InvalidLevel { codec: &'static str, level: i32 },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: &'static str, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },
}

impl CompressionError {
    pub(crate) fn process(codec: &'static str, e: impl std::fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec, msg: e.to_string() }
    }
}

/// Stateless compressor shared by every branch of a split.
///
/// Implementations must not carry state between calls; the splitter may
/// invoke the same instance from several worker threads at once.
pub trait Compressor: Send + Sync {
    fn codec(&self) -> CompressionCodec;

    /// Compress `input` as one self-contained stream, appending to `out`.
    fn compress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::new();
        self.compress_into(input, &mut out)?;
        Ok(out)
    }
}

pub trait Decompressor: Send + Sync {
    fn codec(&self) -> CompressionCodec;

    /// Decompress one self-contained stream, appending to `out`.
    fn decompress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::new();
        self.decompress_into(input, &mut out)?;
        Ok(out)
    }
}
