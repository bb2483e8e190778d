//! Error types for the gold bridge.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GoldError>;

/// Status returned across the FFI boundary when a call succeeds.
pub const STATUS_OK: i32 = 0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoldError {
    #[error("arithmetic overflow computing {win_total} - {collected_gold}")]
    ArithmeticOverflow { win_total: i32, collected_gold: i32 },

    #[error("null pointer passed across the bridge")]
    NullPointer,

    #[error("unknown overflow policy code: {0}")]
    InvalidPolicy(u8),

    #[error("invalid map header: {0}")]
    InvalidHeader(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("gold amount must not be negative: {0}")]
    NegativeAmount(i32),
}

impl GoldError {
    /// Stable negative code for C callers.
    pub fn status_code(&self) -> i32 {
        match self {
            GoldError::ArithmeticOverflow { .. } => -1,
            GoldError::NullPointer => -2,
            GoldError::InvalidPolicy(_) => -3,
            GoldError::InvalidHeader(_) => -4,
            GoldError::InvalidConfig(_) => -5,
            GoldError::InvalidUtf8 => -6,
            GoldError::NegativeAmount(_) => -7,
        }
    }
}

impl From<serde_json::Error> for GoldError {
    fn from(err: serde_json::Error) -> Self {
        GoldError::InvalidConfig(err.to_string())
    }
}
