//! telemetry/snapshot.rs
//! Immutable summary of one split call.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::SplitCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSnapshot {
    pub payloads: u64,
    pub items: u64,
    pub marshal_calls: u64,
    pub compress_calls: u64,
    pub bisections: u64,
    pub fits: u64,
    pub too_big: u64,
    pub max_depth: u32,
    pub bytes_raw: u64,
    pub bytes_compressed: u64,
    pub bytes_marshaled: u64,
    /// `bytes_compressed / bytes_raw` of the emitted payloads.
    pub compression_ratio: f64,
    /// Bytes marshaled across all attempts per emitted raw byte.
    pub marshal_amplification: f64,
    pub payload_items: Vec<usize>,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl SplitSnapshot {
    pub fn from(counters: &SplitCounters, timer: &TelemetryTimer) -> Self {
        let compression_ratio = if counters.bytes_raw > 0 {
            counters.bytes_compressed as f64 / counters.bytes_raw as f64
        } else {
            0.0
        };
        let marshal_amplification = if counters.bytes_raw > 0 {
            counters.bytes_marshaled as f64 / counters.bytes_raw as f64
        } else {
            0.0
        };

        Self {
            payloads: counters.payloads,
            items: counters.items,
            marshal_calls: counters.marshal_calls,
            compress_calls: counters.compress_calls,
            bisections: counters.bisections,
            fits: counters.fits,
            too_big: counters.too_big,
            max_depth: counters.max_depth,
            bytes_raw: counters.bytes_raw,
            bytes_compressed: counters.bytes_compressed,
            bytes_marshaled: counters.bytes_marshaled,
            compression_ratio,
            marshal_amplification,
            payload_items: counters.payload_items.clone(),
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Item index at which each payload starts, in the caller's collection.
    pub fn boundaries(&self) -> Vec<usize> {
        self.payload_items
            .iter()
            .scan(0usize, |start, &n| {
                let at = *start;
                *start += n;
                Some(at)
            })
            .collect()
    }

    /// Internal invariants of a completed split.
    pub fn sanity_check(&self) -> bool {
        self.payloads == self.payload_items.len() as u64
            && self.items == self.payload_items.iter().sum::<usize>() as u64
            && self.fits == self.payloads
            && self.bytes_marshaled >= self.bytes_raw
            && self.marshal_calls == self.fits + self.too_big
    }
}
