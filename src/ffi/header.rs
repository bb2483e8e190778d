//! Map header parsing across the bridge.

use std::ffi::c_char;

use super::borrow_str;
use crate::error::{GoldError, STATUS_OK};
use crate::gold;

/// Parses a `win <n>` map header line.
///
/// # Safety
/// - `line` must be null or a NUL-terminated UTF-8 string
/// - `out_win` must be valid for a single `i32` write
///
/// # Returns
/// 0 on success with the value in `out_win`, or a negative status code.
#[no_mangle]
pub unsafe extern "C" fn gb_parse_win(line: *const c_char, out_win: *mut i32) -> i32 {
    if out_win.is_null() {
        return GoldError::NullPointer.status_code();
    }

    match borrow_str(line).and_then(gold::parse_win_line) {
        Ok(win) => {
            *out_win = win;
            STATUS_OK
        }
        Err(err) => err.status_code(),
    }
}
