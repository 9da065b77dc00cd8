//! metrics/series.rs
//! Timeseries points and the `{"series": [...]}` envelope.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::categories;
use crate::metrics::finite;
use crate::split::{MarshalError, Marshaler};

/// One sample. Encoded as `[timestamp, value]` with the timestamp truncated
/// to whole seconds. Non-finite timestamps or values fail to marshal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub ts: f64,
    pub value: f64,
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ts = finite::<S::Error>("timestamp", self.ts)?;
        let value = finite::<S::Error>("value", self.value)?;
        (ts as i64, value).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (ts, value) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Point { ts, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    #[default]
    Gauge,
    Rate,
    Count,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Serie {
    #[serde(rename = "metric")]
    pub name: String,
    pub points: Vec<Point>,
    pub tags: Vec<String>,
    pub host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device: String,
    #[serde(rename = "type")]
    pub mtype: MetricType,
    pub interval: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_type_name: String,
}

#[derive(Serialize)]
struct SeriesEnvelope<'a> {
    series: &'a [Serie],
}

#[derive(Deserialize)]
struct OwnedSeriesEnvelope {
    series: Vec<Serie>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesMarshaler;

impl SeriesMarshaler {
    /// Decode one (decompressed) payload back into its series.
    pub fn decode(payload: &[u8]) -> Result<Vec<Serie>, MarshalError> {
        let envelope: OwnedSeriesEnvelope = serde_json::from_slice(payload)
            .map_err(MarshalError::decode(categories::SERIES))?;
        Ok(envelope.series)
    }
}

impl Marshaler for SeriesMarshaler {
    type Item = Serie;

    fn category(&self) -> &'static str {
        categories::SERIES
    }

    fn marshal(&self, items: &[Serie]) -> Result<Vec<u8>, MarshalError> {
        serde_json::to_vec(&SeriesEnvelope { series: items })
            .map_err(MarshalError::json(categories::SERIES))
    }
}
