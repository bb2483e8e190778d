//! Formatting many status lines at once on rayon.

use rayon::prelude::*;
use tracing::{debug, warn};

use super::message::hello_message;
use crate::config::{BridgeConfig, OverflowPolicy};
use crate::error::Result;

fn format_all(pairs: &[(i32, i32)], policy: OverflowPolicy) -> Vec<Result<String>> {
    pairs
        .par_iter()
        .map(|&(win, gold)| hello_message(win, gold, policy))
        .collect()
}

/// Format one line per `(win_total, collected_gold)` pair, in input order,
/// on rayon's global pool.
pub fn hello_batch(pairs: &[(i32, i32)], policy: OverflowPolicy) -> Vec<Result<String>> {
    debug!(len = pairs.len(), "formatting gold batch on global pool");
    format_all(pairs, policy)
}

/// Long-lived batch formatter owning a dedicated pool sized by
/// `BridgeConfig::batch_threads`.
pub struct Batcher {
    pub policy: OverflowPolicy,
    thread_pool: Option<rayon::ThreadPool>,
}

impl Batcher {
    /// `batch_threads == 0` is treated as 1. If the pool cannot be built,
    /// batches run on the calling thread.
    pub fn new(config: &BridgeConfig) -> Self {
        let num_threads = if config.batch_threads == 0 {
            1
        } else {
            config.batch_threads as usize
        };
        let thread_pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!(%err, num_threads, "batch pool unavailable, formatting inline");
                None
            }
        };

        Batcher {
            policy: config.overflow,
            thread_pool,
        }
    }

    /// Worker count batches run with (1 when formatting inline).
    pub fn num_threads(&self) -> usize {
        self.thread_pool
            .as_ref()
            .map_or(1, rayon::ThreadPool::current_num_threads)
    }

    pub fn hello_batch(&self, pairs: &[(i32, i32)]) -> Vec<Result<String>> {
        let policy = self.policy;
        debug!(len = pairs.len(), threads = self.num_threads(), "formatting gold batch");
        match &self.thread_pool {
            Some(pool) => pool.install(|| format_all(pairs, policy)),
            None => pairs
                .iter()
                .map(|&(win, gold)| hello_message(win, gold, policy))
                .collect(),
        }
    }
}
