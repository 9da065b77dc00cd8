//! codecs/zlib.rs
//! zlib streams via flate2. This is the encoding the intake expects by default.

use std::io::{Read, Write};
use flate2::{Compression, write::ZlibEncoder, read::ZlibDecoder};

use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

const CODEC: &str = "zlib";

pub struct ZlibCompressor {
    level: Compression,
}

impl ZlibCompressor {
    pub fn new(level: i32) -> Result<Self, CompressionError> {
        match level {
            0..=9 => Ok(Self { level: Compression::new(level as u32) }),
            _ => Err(CompressionError::InvalidLevel { codec: CODEC, level }),
        }
    }
}

impl Compressor for ZlibCompressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Zlib
    }

    fn compress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        // Each payload is its own zlib stream
        let mut enc = ZlibEncoder::new(std::mem::take(out), self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        *out = enc.finish()
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(())
    }
}

#[derive(Default)]
pub struct ZlibDecompressor;

impl ZlibDecompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for ZlibDecompressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Zlib
    }

    fn decompress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut dec = ZlibDecoder::new(input);
        dec.read_to_end(out)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(())
    }
}
