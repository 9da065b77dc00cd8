//! telemetry/counters.rs
//! Mutable counters collected while a split runs.
//!
//! Each recursion branch owns its own counters; sibling branches are merged
//! in positional order once both finish. Converted into an immutable
//! `SplitSnapshot` at the end of the call.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitCounters {
    pub payloads: u64,
    pub items: u64,
    pub marshal_calls: u64,
    pub compress_calls: u64,
    pub bisections: u64,
    pub fits: u64,
    pub too_big: u64,
    pub bytes_marshaled: u64,
    pub bytes_raw: u64,
    pub bytes_compressed: u64,
    pub max_depth: u32,
    /// Item count of every emitted payload, in emission order.
    pub payload_items: Vec<usize>,
}

impl SplitCounters {
    /// Record one marshal attempt of `raw_len` bytes at recursion `depth`.
    pub fn add_marshal(&mut self, raw_len: usize, depth: u32) {
        self.marshal_calls += 1;
        self.bytes_marshaled += raw_len as u64;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn add_compress(&mut self) {
        self.compress_calls += 1;
    }

    /// Record an emitted payload.
    ///
    /// - `items`: number of records in the leaf
    /// - `raw_len`: envelope length before compression
    /// - `encoded_len`: length actually handed to the caller
    pub fn add_payload(&mut self, items: usize, raw_len: usize, encoded_len: usize) {
        self.fits += 1;
        self.payloads += 1;
        self.items += items as u64;
        self.bytes_raw += raw_len as u64;
        self.bytes_compressed += encoded_len as u64;
        self.payload_items.push(items);
    }

    /// Record a node that did not fit and was bisected.
    pub fn add_bisection(&mut self) {
        self.too_big += 1;
        self.bisections += 1;
    }

    /// Record an irreducible item that did not fit.
    pub fn add_rejected(&mut self) {
        self.too_big += 1;
    }

    pub fn merge(&mut self, other: &SplitCounters) {
        self.payloads += other.payloads;
        self.items += other.items;
        self.marshal_calls += other.marshal_calls;
        self.compress_calls += other.compress_calls;
        self.bisections += other.bisections;
        self.fits += other.fits;
        self.too_big += other.too_big;
        self.bytes_marshaled += other.bytes_marshaled;
        self.bytes_raw += other.bytes_raw;
        self.bytes_compressed += other.bytes_compressed;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.payload_items.extend_from_slice(&other.payload_items);
    }
}

impl AddAssign for SplitCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
