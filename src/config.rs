//! Bridge configuration.
//!
//! Hosts may hand a JSON object to the session constructors, e.g.
//! `{"overflow": "saturate", "batch_threads": 4}`. Missing fields take
//! their defaults.

use serde::Deserialize;

use crate::error::{GoldError, Result};

/// What to do when `win_total - collected_gold` leaves the i32 range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with `GoldError::ArithmeticOverflow`.
    #[default]
    Checked,
    /// Two's-complement wraparound.
    Wrap,
    /// Clamp to `i32::MIN` / `i32::MAX`.
    Saturate,
}

impl OverflowPolicy {
    /// Decode the policy byte used by the C ABI: 0 = checked, 1 = wrap, 2 = saturate.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(OverflowPolicy::Checked),
            1 => Ok(OverflowPolicy::Wrap),
            2 => Ok(OverflowPolicy::Saturate),
            other => Err(GoldError::InvalidPolicy(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub overflow: OverflowPolicy,
    pub batch_threads: u8,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            overflow: OverflowPolicy::Checked,
            batch_threads: 1,
        }
    }
}

impl BridgeConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
