//! split/limits.rs
//! The two size budgets a payload must respect.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    max_uncompressed: usize,
    max_compressed: usize,
}

impl SizeLimits {
    /// Both limits are byte counts and must be non-zero.
    pub fn new(max_uncompressed: usize, max_compressed: usize) -> Result<Self, ConfigError> {
        if max_uncompressed == 0 {
            return Err(ConfigError::ZeroLimit { name: "max_uncompressed" });
        }
        if max_compressed == 0 {
            return Err(ConfigError::ZeroLimit { name: "max_compressed" });
        }
        Ok(Self { max_uncompressed, max_compressed })
    }

    pub fn max_uncompressed(&self) -> usize {
        self.max_uncompressed
    }

    pub fn max_compressed(&self) -> usize {
        self.max_compressed
    }

    pub fn raw_fits(&self, raw_len: usize) -> bool {
        raw_len <= self.max_uncompressed
    }

    pub fn compressed_fits(&self, compressed_len: usize) -> bool {
        compressed_len <= self.max_compressed
    }

    /// `compressed_len` is `None` when the payload is sent uncompressed.
    pub fn fits(&self, raw_len: usize, compressed_len: Option<usize>) -> bool {
        self.raw_fits(raw_len) && compressed_len.map_or(true, |c| self.compressed_fits(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limits_are_rejected() {
        assert!(SizeLimits::new(0, 10).is_err());
        assert!(SizeLimits::new(10, 0).is_err());
    }

    #[test]
    fn limits_are_inclusive() {
        let limits = SizeLimits::new(100, 10).unwrap();
        assert!(limits.fits(100, Some(10)));
        assert!(!limits.fits(101, Some(10)));
        assert!(!limits.fits(100, Some(11)));
        assert!(limits.fits(100, None));
    }
}
