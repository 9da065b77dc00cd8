//! config.rs
//! Serializer settings as the agent configuration spells them.
//!
//! The split core never reads configuration on its own; callers deserialize a
//! `SerializerConfig`, validate it, and build a `Splitter` from it.

use serde::{Deserialize, Serialize};

use crate::compression::{create_compressor, CompressionCodec, CompressionError, Compressor};
use crate::constants::{
    DEFAULT_MAX_PAYLOAD_SIZE, DEFAULT_MAX_UNCOMPRESSED_PAYLOAD_SIZE, DEFAULT_PARALLEL_MIN_ITEMS,
};
use crate::split::{ParallelismProfile, SizeLimits, Splitter};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive byte count")]
    ZeroLimit { name: &'static str },

    #[error("invalid serializer configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid compressor settings: {0}")]
    Compression(#[from] CompressionError),
}

fn default_max_payload_size() -> usize {
    DEFAULT_MAX_PAYLOAD_SIZE
}

fn default_max_uncompressed_payload_size() -> usize {
    DEFAULT_MAX_UNCOMPRESSED_PAYLOAD_SIZE
}

fn default_parallel_min_items() -> usize {
    DEFAULT_PARALLEL_MIN_ITEMS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializerConfig {
    /// Maximum compressed payload size, in bytes.
    #[serde(rename = "serializer_max_payload_size", default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Maximum uncompressed payload size, in bytes.
    #[serde(
        rename = "serializer_max_uncompressed_payload_size",
        default = "default_max_uncompressed_payload_size"
    )]
    pub max_uncompressed_payload_size: usize,

    #[serde(rename = "serializer_compressor_kind", default)]
    pub compressor_kind: CompressionCodec,

    /// `None` picks the codec's default level.
    #[serde(rename = "serializer_compressor_level", default)]
    pub compressor_level: Option<i32>,

    /// Recursion depth down to which sibling branches fork; 0 stays on the caller's thread.
    #[serde(rename = "serializer_parallel_depth", default)]
    pub parallel_depth: u32,

    #[serde(rename = "serializer_parallel_min_items", default = "default_parallel_min_items")]
    pub parallel_min_items: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            max_uncompressed_payload_size: DEFAULT_MAX_UNCOMPRESSED_PAYLOAD_SIZE,
            compressor_kind: CompressionCodec::default(),
            compressor_level: None,
            parallel_depth: 0,
            parallel_min_items: DEFAULT_PARALLEL_MIN_ITEMS,
        }
    }
}

impl SerializerConfig {
    /// Parse and validate. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SerializerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.size_limits()?;
        self.compressor()?;
        Ok(())
    }

    pub fn size_limits(&self) -> Result<SizeLimits, ConfigError> {
        SizeLimits::new(self.max_uncompressed_payload_size, self.max_payload_size)
    }

    pub fn parallelism(&self) -> ParallelismProfile {
        ParallelismProfile {
            max_parallel_depth: self.parallel_depth,
            min_parallel_items: self.parallel_min_items,
        }
    }

    pub fn compressor(&self) -> Result<Box<dyn Compressor>, ConfigError> {
        Ok(create_compressor(self.compressor_kind, self.compressor_level)?)
    }

    pub fn splitter(&self) -> Result<Splitter, ConfigError> {
        let splitter = Splitter::new(self.size_limits()?, self.compressor()?)
            .with_parallelism(self.parallelism());
        tracing::debug!(
            max_payload_size = self.max_payload_size,
            max_uncompressed_payload_size = self.max_uncompressed_payload_size,
            compressor = self.compressor_kind.name(),
            parallel_depth = self.parallel_depth,
            "serializer splitter configured"
        );
        Ok(splitter)
    }
}
