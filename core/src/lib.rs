//! serializer-core
//!
//! Turns telemetry collections into size-bounded, optionally compressed
//! payloads for the intake. Pure Rust, no I/O.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

pub mod compression;
pub mod telemetry;
pub mod metrics;

pub mod split;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{create_compressor, create_decompressor, CompressionCodec, Compressor, Decompressor};
    pub use crate::config::SerializerConfig;
    pub use crate::metrics::{
        Event, EventsMarshaler, Serie, SeriesMarshaler, ServiceCheck, ServiceChecksMarshaler,
        SketchSeries, SketchesMarshaler,
    };
    pub use crate::split::{payloads, Marshaler, ParallelismProfile, Payloads, SizeLimits, SplitError, Splitter};
    pub use crate::types::SerializerError;
}
