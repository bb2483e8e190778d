//! Core gold logic.
//!
//! Everything here is plain Rust on plain values; the FFI layer in `ffi/`
//! wraps these functions with null checks and C string conversions.

pub mod batch;
pub mod header;
pub mod message;
pub mod session;

pub use batch::{hello_batch, Batcher};
pub use header::{parse_name_line, parse_win_line, MapHeader};
pub use message::{hello, hello_message, remaining, GOLD_LABEL};
pub use session::{gold_target_met, pickup, pickup_message, session_hello};
