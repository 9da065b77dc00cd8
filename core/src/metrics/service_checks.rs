//! metrics/service_checks.rs
//! Service checks, marshaled as a bare JSON array.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::constants::categories;
use crate::split::{MarshalError, Marshaler};

/// Check status, encoded as its integer value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ServiceCheckStatus {
    Ok       = 0,
    Warning  = 1,
    Critical = 2,
    Unknown  = 3,
}

impl Default for ServiceCheckStatus {
    fn default() -> Self {
        ServiceCheckStatus::Ok
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceCheck {
    #[serde(rename = "check")]
    pub check_name: String,
    #[serde(rename = "host_name")]
    pub host: String,
    #[serde(rename = "timestamp")]
    pub ts: i64,
    pub status: ServiceCheckStatus,
    pub message: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceChecksMarshaler;

impl ServiceChecksMarshaler {
    pub fn decode(payload: &[u8]) -> Result<Vec<ServiceCheck>, MarshalError> {
        serde_json::from_slice(payload).map_err(MarshalError::decode(categories::SERVICE_CHECKS))
    }
}

impl Marshaler for ServiceChecksMarshaler {
    type Item = ServiceCheck;

    fn category(&self) -> &'static str {
        categories::SERVICE_CHECKS
    }

    fn marshal(&self, items: &[ServiceCheck]) -> Result<Vec<u8>, MarshalError> {
        serde_json::to_vec(items).map_err(MarshalError::json(categories::SERVICE_CHECKS))
    }
}
