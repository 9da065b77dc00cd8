//! compression/codecs/mod.rs
//! Concrete codecs behind the `Compressor` / `Decompressor` traits.
//!
//! Every call produces one self-contained stream so a payload can be
//! decoded without any other payload.

pub mod lz4;
pub mod passthrough;
pub mod zlib;
pub mod zstd;

pub use self::lz4::*;
pub use self::passthrough::*;
pub use self::zlib::*;
pub use self::zstd::*;
