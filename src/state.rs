//! Per-player gold ledger held behind an opaque handle.

use crate::config::{BridgeConfig, OverflowPolicy};
use crate::gold::header::MapHeader;

/// The gold a player has collected against a map's win criterion.
pub struct Session {
    pub map_name: String,
    pub win_total: i32,
    pub collected_gold: i32,
    pub policy: OverflowPolicy,
}

impl Session {
    pub fn new(win_total: i32) -> Self {
        Session::with_config(win_total, &BridgeConfig::default())
    }

    pub fn with_config(win_total: i32, config: &BridgeConfig) -> Self {
        Session {
            map_name: String::new(),
            win_total,
            collected_gold: 0,
            policy: config.overflow,
        }
    }

    pub fn from_header(header: &MapHeader, config: &BridgeConfig) -> Self {
        Session {
            map_name: header.name.clone(),
            ..Session::with_config(header.win, config)
        }
    }
}
