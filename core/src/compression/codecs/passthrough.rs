//! codecs/passthrough.rs
//! Identity codec, for intakes that accept plain bodies.

use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

#[derive(Default)]
pub struct PassthroughCompressor;
#[derive(Default)]
pub struct PassthroughDecompressor;

impl Compressor for PassthroughCompressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Passthrough
    }

    fn compress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}

impl Decompressor for PassthroughDecompressor {
    fn codec(&self) -> CompressionCodec {
        CompressionCodec::Passthrough
    }

    fn decompress_into(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}
