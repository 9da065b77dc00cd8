//! codecs/lz4.rs
//! LZ4 block compressor/decompressor with the plaintext length prepended.
use lz4_flex::block::{compress_prepend_size, decompress_size_prepended};

use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

const CODEC: &str = "lz4";

/// LZ4 compressor using the lz4_flex block API.
/// Block mode has no levels or dictionaries.
#[derive(Default)]
pub struct Lz4Compressor;

#[derive(Default)]
pub struct Lz4Decompressor;

impl Lz4Compressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for Lz4Compressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Lz4
    }

    fn compress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(&compress_prepend_size(input));
        Ok(())
    }
}

impl Lz4Decompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for Lz4Decompressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Lz4
    }

    fn decompress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let decompressed = decompress_size_prepended(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        out.extend_from_slice(&decompressed);
        Ok(())
    }
}
