//! codecs/zstd.rs
//!
//! Zstd single-frame compressor/decompressor.
//!
//! Design notes:
//! - Uses the streaming encoder/decoder so no output size has to be known up front.
//! - Errors are mapped into `CompressionError` variants with codec context.

use std::io::Write;

use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

const CODEC: &str = "zstd";

pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    /// Create a new Zstd compressor with the given level.
    ///
    /// # Errors
    /// - Returns `CompressionError::InvalidLevel` if the level is outside the range zstd accepts.
    pub fn new(level: i32) -> Result<Self, CompressionError> {
        if !zstd::compression_level_range().contains(&level) {
            return Err(CompressionError::InvalidLevel { codec: CODEC, level });
        }
        Ok(Self { level })
    }
}

impl Compressor for ZstdCompressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Zstd
    }

    fn compress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = zstd::stream::Encoder::new(std::mem::take(out), self.level)
            .map_err(|e| CompressionError::CodecInitFailed { codec: CODEC, msg: e.to_string() })?;
        enc.write_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        *out = enc.finish()
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(())
    }
}

#[derive(Default)]
pub struct ZstdDecompressor;

impl ZstdDecompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for ZstdDecompressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Zstd
    }

    fn decompress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        zstd::stream::copy_decode(input, out)
            .map_err(|e| CompressionError::process(CODEC, e))
    }
}
