//! metrics/mod.rs
//! Telemetry categories and their marshal adapters.
//!
//! | Category       | Envelope                                           |
//! | -------------- | -------------------------------------------------- |
//! | series         | `{"series": [...]}`                                |
//! | events         | `{"apiKey", "events": {"<source>": [...]}, ...}`   |
//! | service checks | `[...]`                                            |
//! | sketches       | `{"sketches": [...]}`                              |

pub mod events;
pub mod series;
pub mod service_checks;
pub mod sketches;

use serde::{ser, Serializer};

pub use events::*;
pub use series::*;
pub use service_checks::*;
pub use sketches::*;

/// JSON has no encoding for NaN or infinities; refuse them instead of
/// letting serde_json write `null`.
pub(crate) fn finite<E: ser::Error>(field: &str, value: f64) -> Result<f64, E> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(E::custom(format_args!("{} is not a finite number: {}", field, value)))
    }
}

pub(crate) fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(finite("value", *value)?)
}
