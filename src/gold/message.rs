//! The `GOLD: <n>` status line.

use tracing::{debug, warn};

use crate::config::OverflowPolicy;
use crate::error::{GoldError, Result};

/// Label that prefixes every status line.
pub const GOLD_LABEL: &str = "GOLD: ";

/// Gold still required to win: `win_total - collected_gold` under `policy`.
pub fn remaining(win_total: i32, collected_gold: i32, policy: OverflowPolicy) -> Result<i32> {
    match policy {
        OverflowPolicy::Wrap => Ok(win_total.wrapping_sub(collected_gold)),
        OverflowPolicy::Saturate => Ok(win_total.saturating_sub(collected_gold)),
        OverflowPolicy::Checked => win_total.checked_sub(collected_gold).ok_or_else(|| {
            warn!(win_total, collected_gold, "gold difference overflows i32");
            GoldError::ArithmeticOverflow {
                win_total,
                collected_gold,
            }
        }),
    }
}

/// Formats the status line, e.g. `(10, 3)` gives `"GOLD: 7"`.
pub fn hello_message(
    win_total: i32,
    collected_gold: i32,
    policy: OverflowPolicy,
) -> Result<String> {
    let value = remaining(win_total, collected_gold, policy)?;
    let message = format!("{GOLD_LABEL}{value}");
    debug!(win_total, collected_gold, ?policy, %message, "formatted gold message");
    Ok(message)
}

/// `hello_message` with the default (checked) policy.
pub fn hello(win_total: i32, collected_gold: i32) -> Result<String> {
    hello_message(win_total, collected_gold, OverflowPolicy::default())
}
