//! C FFI layer.
//!
//! This module exports C ABI functions for hosts such as a JVM game server
//! binding through its foreign-function interface.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `gold` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.
//!
//! Every string these functions return is owned by the caller and must be
//! released with `gb_string_free`. The library keeps no reference to it.

pub mod batch;
pub mod header;
pub mod hello;
pub mod logging;
pub mod session;

use std::ffi::{c_char, CStr, CString};

use crate::config::BridgeConfig;
use crate::error::{GoldError, Result};

pub use batch::{gb_batcher_create, gb_batcher_destroy, gb_batcher_hello, gb_hello_batch};
pub use header::gb_parse_win;
pub use hello::{gb_hello, gb_hello_into, gb_hello_with_policy, gb_string_free};
pub use logging::gb_init_logging;
pub use session::{
    gb_session_collected, gb_session_create, gb_session_create_with_config, gb_session_destroy,
    gb_session_from_header, gb_session_gold_target_met, gb_session_hello, gb_session_pickup,
    gb_session_pickup_message,
};

/// Hand a Rust string to the caller. Returns null if it holds an interior NUL.
pub(crate) fn into_raw_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Borrow a NUL-terminated UTF-8 string from the caller.
///
/// # Safety
/// - `ptr` must be null or point to a NUL-terminated string that outlives `'a`
pub(crate) unsafe fn borrow_str<'a>(ptr: *const c_char) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(GoldError::NullPointer);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| GoldError::InvalidUtf8)
}

/// Parse an optional JSON config. Null means defaults.
///
/// # Safety
/// - `config_json` must be null or a NUL-terminated UTF-8 string
pub(crate) unsafe fn config_from_ptr(config_json: *const c_char) -> Result<BridgeConfig> {
    if config_json.is_null() {
        return Ok(BridgeConfig::default());
    }
    BridgeConfig::from_json(borrow_str(config_json)?)
}

/// Write a status code through an optional out-pointer.
///
/// # Safety
/// - `out` must be null or valid for a single `i32` write
pub(crate) unsafe fn write_status(out: *mut i32, status: i32) {
    if !out.is_null() {
        *out = status;
    }
}
