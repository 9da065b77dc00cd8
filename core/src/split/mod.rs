//! split/mod.rs
//! Adaptive payload splitting.
//!
//! Given a collection of one telemetry category, produce the fewest
//! independently decodable payloads that each respect both a raw and a
//! compressed size limit, without losing or reordering a single item.

pub mod error;
pub mod limits;
pub mod marshaler;
pub mod parallelism;
pub mod splitter;

pub use error::SplitError;
pub use limits::SizeLimits;
pub use marshaler::{MarshalError, MarshalFn, Marshaler};
pub use parallelism::ParallelismProfile;
pub use splitter::{payloads, Chunk, Payload, Payloads, Splitter};
