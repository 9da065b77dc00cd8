//! metrics/sketches.rs
//! Distribution sketches and the `{"sketches": [...]}` envelope.
//!
//! A `Sketch` is a log-bucketed distribution with 1% relative accuracy on
//! quantiles. Each flush summarises it into a `SketchPoint` carrying the
//! aggregates plus the sparse bins (`k` keys, `n` counts).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::categories;
use crate::metrics::serialize_finite;
use crate::split::{MarshalError, Marshaler};

const RELATIVE_ACCURACY: f64 = 0.01;
/// Values closer to zero than this share the zero bin.
const MIN_INDEXABLE: f64 = 1e-9;
/// Keeps keys of the smallest indexable magnitude strictly positive.
const KEY_BIAS: i32 = 1100;

fn log_gamma() -> f64 {
    let gamma = (1.0 + RELATIVE_ACCURACY) / (1.0 - RELATIVE_ACCURACY);
    gamma.ln()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sketch {
    count: u64,
    min: f64,
    max: f64,
    sum: f64,
    bins: BTreeMap<i32, u32>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(value: f64) -> i32 {
        let magnitude = value.abs();
        if magnitude.is_nan() || magnitude < MIN_INDEXABLE {
            return 0;
        }
        // `as` saturates, so infinities land on the outermost bins.
        let key = ((magnitude.ln() / log_gamma()).ceil() as i32).saturating_add(KEY_BIAS);
        if value < 0.0 { -key } else { key }
    }

    /// Non-finite values are dropped; they have no place in the aggregates.
    pub fn insert(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
        *self.bins.entry(Self::key(value)).or_insert(0) += 1;
    }

    pub fn insert_many(&mut self, values: &[f64]) {
        for v in values {
            self.insert(*v);
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn bins(&self) -> &BTreeMap<i32, u32> {
        &self.bins
    }
}

/// One flushed sketch as the intake reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SketchPoint {
    pub ts: i64,
    pub cnt: u64,
    #[serde(serialize_with = "serialize_finite")]
    pub min: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub max: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub sum: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub avg: f64,
    pub k: Vec<i32>,
    pub n: Vec<u32>,
}

impl SketchPoint {
    pub fn new(ts: i64, sketch: &Sketch) -> Self {
        let avg = if sketch.count > 0 { sketch.sum / sketch.count as f64 } else { 0.0 };
        Self {
            ts,
            cnt: sketch.count,
            min: sketch.min,
            max: sketch.max,
            sum: sketch.sum,
            avg,
            k: sketch.bins.keys().copied().collect(),
            n: sketch.bins.values().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SketchSeries {
    #[serde(rename = "metric")]
    pub name: String,
    pub tags: Vec<String>,
    pub host: String,
    pub interval: i64,
    pub points: Vec<SketchPoint>,
}

#[derive(Serialize)]
struct SketchesEnvelope<'a> {
    sketches: &'a [SketchSeries],
}

#[derive(Deserialize)]
struct OwnedSketchesEnvelope {
    sketches: Vec<SketchSeries>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SketchesMarshaler;

impl SketchesMarshaler {
    pub fn decode(payload: &[u8]) -> Result<Vec<SketchSeries>, MarshalError> {
        let envelope: OwnedSketchesEnvelope = serde_json::from_slice(payload)
            .map_err(MarshalError::decode(categories::SKETCHES))?;
        Ok(envelope.sketches)
    }
}

impl Marshaler for SketchesMarshaler {
    type Item = SketchSeries;

    fn category(&self) -> &'static str {
        categories::SKETCHES
    }

    fn marshal(&self, items: &[SketchSeries]) -> Result<Vec<u8>, MarshalError> {
        serde_json::to_vec(&SketchesEnvelope { sketches: items })
            .map_err(MarshalError::json(categories::SKETCHES))
    }
}
