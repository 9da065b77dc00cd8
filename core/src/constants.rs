//! constants.rs
//! Defaults shared by configuration and the metric envelopes.

/// Default maximum compressed payload size accepted by the intake (2.5 MiB).
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 2_621_440;

/// Default maximum uncompressed payload size accepted by the intake (4 MiB).
pub const DEFAULT_MAX_UNCOMPRESSED_PAYLOAD_SIZE: usize = 4_194_304;

/// Below this many items a branch is never handed to another thread.
pub const DEFAULT_PARALLEL_MIN_ITEMS: usize = 1024;

/// Envelope keys, one per category that wraps its items.
pub mod envelope_keys {
    pub const SERIES: &str = "series";
    pub const EVENTS: &str = "events";
    pub const SKETCHES: &str = "sketches";
    pub const API_KEY: &str = "apiKey";
    pub const INTERNAL_HOSTNAME: &str = "internalHostname";
}

/// Source type under which events without one are grouped.
pub const DEFAULT_EVENT_SOURCE_TYPE: &str = "api";

/// Category names used in logs and errors.
pub mod categories {
    pub const SERIES: &str = "series";
    pub const EVENTS: &str = "events";
    pub const SERVICE_CHECKS: &str = "service_checks";
    pub const SKETCHES: &str = "sketches";
}
