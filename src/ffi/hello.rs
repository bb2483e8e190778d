//! The `hello` bridge function and string ownership.

use std::ffi::{c_char, CString};

use tracing::warn;

use super::{into_raw_c_string, write_status};
use crate::config::OverflowPolicy;
use crate::error::STATUS_OK;
use crate::gold;

/// Returns `"GOLD: <win_total - collected_gold>"` as a new C string.
///
/// Uses the checked overflow policy.
///
/// # Returns
/// A caller-owned string to be freed with `gb_string_free`, or null if the
/// subtraction overflows i32.
#[no_mangle]
pub extern "C" fn gb_hello(win_total: i32, collected_gold: i32) -> *mut c_char {
    match gold::hello(win_total, collected_gold) {
        Ok(message) => into_raw_c_string(message),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Like `gb_hello`, with an explicit overflow policy.
///
/// Policy codes: 0 = checked, 1 = wrap, 2 = saturate.
///
/// # Safety
/// - `out_status` must be null or valid for a single `i32` write
///
/// # Returns
/// A caller-owned string, or null on failure. When `out_status` is non-null it
/// receives 0 on success or a negative status code.
#[no_mangle]
pub unsafe extern "C" fn gb_hello_with_policy(
    win_total: i32,
    collected_gold: i32,
    policy: u8,
    out_status: *mut i32,
) -> *mut c_char {
    let result = OverflowPolicy::from_code(policy)
        .and_then(|policy| gold::hello_message(win_total, collected_gold, policy));

    match result {
        Ok(message) => {
            write_status(out_status, STATUS_OK);
            into_raw_c_string(message)
        }
        Err(err) => {
            write_status(out_status, err.status_code());
            std::ptr::null_mut()
        }
    }
}

/// Writes the status line into a caller-provided buffer.
///
/// At most `cap - 1` bytes are copied, followed by a NUL. A null `buf` or a
/// `cap` of 0 writes nothing and only measures.
///
/// # Safety
/// - `buf` must be null or point to at least `cap` writable bytes
///
/// # Returns
/// The full message length excluding the NUL (compare with `cap` to detect
/// truncation), or a negative status code on error.
#[no_mangle]
pub unsafe extern "C" fn gb_hello_into(
    win_total: i32,
    collected_gold: i32,
    policy: u8,
    buf: *mut c_char,
    cap: usize,
) -> i64 {
    let result = OverflowPolicy::from_code(policy)
        .and_then(|policy| gold::hello_message(win_total, collected_gold, policy));

    let message = match result {
        Ok(message) => message,
        Err(err) => return err.status_code() as i64,
    };

    let bytes = message.as_bytes();
    if !buf.is_null() && cap > 0 {
        let n = bytes.len().min(cap - 1);
        let out = std::slice::from_raw_parts_mut(buf as *mut u8, cap);
        out[..n].copy_from_slice(&bytes[..n]);
        out[n] = 0;
        if n < bytes.len() {
            warn!(needed = bytes.len() + 1, cap, "gold message truncated");
        }
    }
    bytes.len() as i64
}

/// Frees a string returned by any `gb_*` function.
///
/// # Safety
/// - `ptr` must be null or a pointer returned by this library that has not
///   been freed yet
#[no_mangle]
pub unsafe extern "C" fn gb_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
