use crate::{
    compression::CompressionError,
    config::ConfigError,
    split::{MarshalError, SplitError},
};

/// Unified serializer error covering configuration, marshaling, compression and splitting.
/// - `From<T>` impls enable `?` across subsystems.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("marshal error: {0}")]
    Marshal(#[from] MarshalError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("split error: {0}")]
    Split(#[from] SplitError),
}

pub type Result<T> = std::result::Result<T, SerializerError>;
