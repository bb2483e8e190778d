//! Ledger operations: picking up gold and reporting what is left.

use tracing::{debug, warn};

use super::message::hello_message;
use crate::error::{GoldError, Result};
use crate::state::Session;

/// Add `amount` gold to the ledger and return the new total.
///
/// The ledger is left unchanged on error.
pub fn pickup(session: &mut Session, amount: i32) -> Result<i32> {
    if amount < 0 {
        warn!(amount, "rejected negative pickup");
        return Err(GoldError::NegativeAmount(amount));
    }

    let total = session
        .collected_gold
        .checked_add(amount)
        .ok_or(GoldError::ArithmeticOverflow {
            win_total: session.win_total,
            collected_gold: session.collected_gold,
        })?;

    session.collected_gold = total;
    debug!(map = %session.map_name, amount, total, "gold picked up");
    Ok(total)
}

/// Pick up a single coin and answer the way the dungeon's PICKUP command does:
/// `"SUCCESS, GOLD COINS: <total>"`, or `"FAIL"` when the ledger cannot take it.
pub fn pickup_message(session: &mut Session) -> String {
    match pickup(session, 1) {
        Ok(total) => format!("SUCCESS, GOLD COINS: {total}"),
        Err(_) => "FAIL".to_string(),
    }
}

pub fn session_hello(session: &Session) -> Result<String> {
    hello_message(session.win_total, session.collected_gold, session.policy)
}

/// Whether the collected gold meets the win total.
///
/// This is only the gold half of the game's win condition; whether the player
/// stands on an exit tile is for the host to check.
pub fn gold_target_met(session: &Session) -> bool {
    session.collected_gold >= session.win_total
}
