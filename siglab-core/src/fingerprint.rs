//! Config fingerprinting: deterministic identification of synthesis jobs.
//!
//! - `shape_hash()`: tree structure and leaf kinds only, for grouping jobs
//!   that differ only in parameter values.
//! - `full_hash()`: the complete config, sampling window and seed included.
//!   Two jobs with the same full hash and a seed produce identical samples.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SynthConfig;

/// Hex-encoded BLAKE3 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub String);

impl Fingerprint {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(blake3::hash(bytes).to_hex().to_string())
    }

    /// First 12 hex digits, for display.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SynthConfig {
    pub fn shape_hash(&self) -> Fingerprint {
        Fingerprint::from_bytes(self.signal.shape().as_bytes())
    }

    /// BLAKE3 digest of the config's JSON form.
    pub fn full_hash(&self) -> Result<Fingerprint, serde_json::Error> {
        // Struct fields serialize in declaration order, so the JSON is canonical.
        let json = serde_json::to_string(self)?;
        Ok(Fingerprint::from_bytes(json.as_bytes()))
    }
}
