//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::constants::{DEFAULT_LEVEL_LZ4, DEFAULT_LEVEL_ZLIB, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};
use crate::compression::codecs::{
    Lz4Compressor, Lz4Decompressor, PassthroughCompressor, PassthroughDecompressor,
    ZlibCompressor, ZlibDecompressor, ZstdCompressor, ZstdDecompressor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub supports_level: bool,
    pub default_level: i32,
}

pub fn resolve(codec: CompressionCodec) -> CodecInfo {
    match codec {
        CompressionCodec::Passthrough =>
            CodecInfo { name: codec.name(), supports_level: false, default_level: 0 },
        CompressionCodec::Zstd =>
            CodecInfo { name: codec.name(), supports_level: true, default_level: DEFAULT_LEVEL_ZSTD },
        CompressionCodec::Lz4 =>
            CodecInfo { name: codec.name(), supports_level: false, default_level: DEFAULT_LEVEL_LZ4 },
        CompressionCodec::Zlib =>
            CodecInfo { name: codec.name(), supports_level: true, default_level: DEFAULT_LEVEL_ZLIB },
    }
}

/// Resolve a raw codec id, as found in older configuration files.
pub fn codec_from_id(codec_id: u16) -> Result<CompressionCodec, CompressionError> {
    CompressionCodec::try_from(codec_id)
        .map_err(|_| CompressionError::UnsupportedCodec { codec_id })
}

pub fn create_compressor(codec: CompressionCodec, level: Option<i32>)
    -> Result<Box<dyn Compressor>, CompressionError>
{
    let level = level.unwrap_or(resolve(codec).default_level);
    match codec {
        CompressionCodec::Passthrough => Ok(Box::new(PassthroughCompressor)),
        CompressionCodec::Zstd => Ok(Box::new(ZstdCompressor::new(level)?)),
        CompressionCodec::Lz4 => Ok(Box::new(Lz4Compressor::new())),
        CompressionCodec::Zlib => Ok(Box::new(ZlibCompressor::new(level)?)),
    }
}

pub fn create_decompressor(codec: CompressionCodec) -> Box<dyn Decompressor> {
    match codec {
        CompressionCodec::Passthrough => Box::new(PassthroughDecompressor),
        CompressionCodec::Zstd => Box::new(ZstdDecompressor::new()),
        CompressionCodec::Lz4 => Box::new(Lz4Decompressor::new()),
        CompressionCodec::Zlib => Box::new(ZlibDecompressor::new()),
    }
}
