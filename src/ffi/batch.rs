//! Batch formatting across the bridge.

use std::ffi::c_char;

use tracing::warn;

use super::{config_from_ptr, into_raw_c_string};
use crate::config::OverflowPolicy;
use crate::error::Result;
use crate::gold::{self, Batcher};

/// Borrow the caller's parallel arrays as `(win, gold)` pairs.
///
/// # Safety
/// - `wins` and `golds` must each point to at least `len` i32 values
unsafe fn pairs_from_raw(wins: *const i32, golds: *const i32, len: usize) -> Vec<(i32, i32)> {
    let wins = std::slice::from_raw_parts(wins, len);
    let golds = std::slice::from_raw_parts(golds, len);
    wins.iter().copied().zip(golds.iter().copied()).collect()
}

/// Hand each result to the caller's `out` array, returning the success count.
///
/// # Safety
/// - `out` must point to at least `results.len()` writable pointers
unsafe fn write_results(results: Vec<Result<String>>, out: *mut *mut c_char) -> u64 {
    let out = std::slice::from_raw_parts_mut(out, results.len());
    let mut written = 0;
    for (slot, result) in out.iter_mut().zip(results) {
        *slot = match result {
            Ok(message) => {
                written += 1;
                into_raw_c_string(message)
            }
            Err(_) => std::ptr::null_mut(),
        };
    }
    written
}

/// Formats `len` status lines from parallel `wins` / `golds` arrays on the
/// global rayon pool.
///
/// `out[i]` receives a caller-owned string for pair `i`, or null if that pair
/// failed. Each non-null entry must be freed with `gb_string_free`.
///
/// # Safety
/// - `wins` and `golds` must each point to at least `len` i32 values
/// - `out` must point to at least `len` writable pointers
///
/// # Returns
/// Number of successfully formatted entries. Returns 0 without touching `out`
/// on a null pointer or unknown policy code.
#[no_mangle]
pub unsafe extern "C" fn gb_hello_batch(
    wins: *const i32,
    golds: *const i32,
    len: usize,
    policy: u8,
    out: *mut *mut c_char,
) -> u64 {
    if wins.is_null() || golds.is_null() || out.is_null() || len == 0 {
        return 0;
    }
    let Ok(policy) = OverflowPolicy::from_code(policy) else {
        return 0;
    };

    let pairs = pairs_from_raw(wins, golds, len);
    write_results(gold::hello_batch(&pairs, policy), out)
}

/// Creates a batch formatter whose worker pool is built once, sized by the
/// config's `batch_threads`, and reused by every `gb_batcher_hello` call.
///
/// # Safety
/// - `config_json` must be null (defaults) or a NUL-terminated UTF-8 string
/// - The returned pointer must eventually be freed with `gb_batcher_destroy()`
///
/// # Returns
/// A new batcher, or null if the config does not parse.
#[no_mangle]
pub unsafe extern "C" fn gb_batcher_create(config_json: *const c_char) -> *mut Batcher {
    match config_from_ptr(config_json) {
        Ok(config) => Box::into_raw(Box::new(Batcher::new(&config))),
        Err(err) => {
            warn!(%err, "rejected batcher config");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a batcher and shuts down its worker pool.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gb_batcher_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gb_batcher_destroy(ptr: *mut Batcher) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Like `gb_hello_batch`, using the batcher's pool and configured policy.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Batcher, or null
/// - `wins` and `golds` must each point to at least `len` i32 values
/// - `out` must point to at least `len` writable pointers
///
/// # Returns
/// Number of successfully formatted entries, or 0 on a null pointer.
#[no_mangle]
pub unsafe extern "C" fn gb_batcher_hello(
    ptr: *const Batcher,
    wins: *const i32,
    golds: *const i32,
    len: usize,
    out: *mut *mut c_char,
) -> u64 {
    if ptr.is_null() || wins.is_null() || golds.is_null() || out.is_null() || len == 0 {
        return 0;
    }

    let batcher = &*ptr;
    let pairs = pairs_from_raw(wins, golds, len);
    write_results(batcher.hello_batch(&pairs), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::gb_string_free;
    use std::ffi::{CStr, CString};
    use std::ptr;

    unsafe fn collect(out: &[*mut c_char]) -> Vec<Option<String>> {
        out.iter()
            .map(|&raw| {
                if raw.is_null() {
                    return None;
                }
                let s = CStr::from_ptr(raw).to_str().unwrap().to_owned();
                gb_string_free(raw);
                Some(s)
            })
            .collect()
    }

    #[test]
    fn test_batch() {
        unsafe {
            let wins = [10, 3, i32::MAX, 0];
            let golds = [3, 10, -1, 0];
            let mut out = [ptr::null_mut(); 4];

            let written =
                gb_hello_batch(wins.as_ptr(), golds.as_ptr(), wins.len(), 0, out.as_mut_ptr());
            assert_eq!(written, 3);
            assert_eq!(
                collect(&out),
                vec![
                    Some("GOLD: 7".to_string()),
                    Some("GOLD: -7".to_string()),
                    None,
                    Some("GOLD: 0".to_string()),
                ]
            );
        }
    }

    #[test]
    fn test_batch_rejects_bad_input() {
        unsafe {
            let wins = [1];
            let golds = [1];
            let mut out = [ptr::null_mut(); 1];
            assert_eq!(
                gb_hello_batch(wins.as_ptr(), golds.as_ptr(), 1, 9, out.as_mut_ptr()),
                0
            );
            assert!(out[0].is_null());
            assert_eq!(
                gb_hello_batch(ptr::null(), golds.as_ptr(), 1, 0, out.as_mut_ptr()),
                0
            );
        }
    }

    #[test]
    fn test_batcher_honours_configured_threads_and_policy() {
        unsafe {
            let json = CString::new(r#"{"overflow": "saturate", "batch_threads": 4}"#).unwrap();
            let batcher = gb_batcher_create(json.as_ptr());
            assert!(!batcher.is_null());
            assert_eq!((*batcher).num_threads(), 4);

            let wins = [i32::MAX, 10];
            let golds = [-1, 3];
            for _ in 0..10 {
                let mut out = [ptr::null_mut(); 2];
                let written =
                    gb_batcher_hello(batcher, wins.as_ptr(), golds.as_ptr(), 2, out.as_mut_ptr());
                assert_eq!(written, 2);
                assert_eq!(
                    collect(&out),
                    vec![
                        Some("GOLD: 2147483647".to_string()),
                        Some("GOLD: 7".to_string()),
                    ]
                );
            }
            assert_eq!((*batcher).num_threads(), 4);

            gb_batcher_destroy(batcher);
        }
    }

    #[test]
    fn test_batcher_defaults_and_errors() {
        unsafe {
            let batcher = gb_batcher_create(ptr::null());
            assert!(!batcher.is_null());
            assert_eq!((*batcher).num_threads(), 1);
            assert_eq!((*batcher).policy, OverflowPolicy::Checked);
            gb_batcher_destroy(batcher);

            let bad = CString::new(r#"{"batch_threads": "many"}"#).unwrap();
            assert!(gb_batcher_create(bad.as_ptr()).is_null());

            let wins = [1];
            let mut out = [ptr::null_mut(); 1];
            assert_eq!(
                gb_batcher_hello(ptr::null(), wins.as_ptr(), wins.as_ptr(), 1, out.as_mut_ptr()),
                0
            );
            gb_batcher_destroy(ptr::null_mut()); // Should not crash
        }
    }
}
