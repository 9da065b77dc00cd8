//! compression/mod.rs
//! Payload compression.
//!
//! The splitter treats compression as a black box: it hands over the raw
//! envelope bytes and only measures what comes back. Codecs are resolved
//! through the registry so callers choose them by configuration.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
