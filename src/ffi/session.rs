//! Session creation, destruction, pickups, and status queries.

use std::ffi::c_char;

use tracing::warn;

use super::{borrow_str, config_from_ptr, into_raw_c_string};
use crate::error::{GoldError, Result, STATUS_OK};
use crate::gold::{self, MapHeader};
use crate::state::Session;

/// Creates a session with the default config.
///
/// # Safety
/// The returned pointer must eventually be freed with `gb_session_destroy()`.
#[no_mangle]
pub extern "C" fn gb_session_create(win_total: i32) -> *mut Session {
    Box::into_raw(Box::new(Session::new(win_total)))
}

/// Creates a session configured from a JSON object such as
/// `{"overflow": "wrap"}`.
///
/// # Safety
/// - `config_json` must be null or a NUL-terminated UTF-8 string
///
/// # Returns
/// A new session, or null if the config does not parse.
#[no_mangle]
pub unsafe extern "C" fn gb_session_create_with_config(
    win_total: i32,
    config_json: *const c_char,
) -> *mut Session {
    match config_from_ptr(config_json) {
        Ok(config) => Box::into_raw(Box::new(Session::with_config(win_total, &config))),
        Err(err) => {
            warn!(%err, "rejected session config");
            std::ptr::null_mut()
        }
    }
}

/// Creates a session from map file text (`name ...` then `win ...`).
///
/// # Safety
/// - `map_text` must be a NUL-terminated UTF-8 string
/// - `config_json` must be null or a NUL-terminated UTF-8 string
///
/// # Returns
/// A new session, or null on a malformed header or config.
#[no_mangle]
pub unsafe extern "C" fn gb_session_from_header(
    map_text: *const c_char,
    config_json: *const c_char,
) -> *mut Session {
    let build = || -> Result<Session> {
        let header = MapHeader::parse(borrow_str(map_text)?)?;
        let config = config_from_ptr(config_json)?;
        Ok(Session::from_header(&header, &config))
    };

    match build() {
        Ok(session) => Box::into_raw(Box::new(session)),
        Err(err) => {
            warn!(%err, "could not create session from map header");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a session and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a `gb_session_*` constructor, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gb_session_destroy(ptr: *mut Session) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Records `amount` gold picked up by the player.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session, or null
///
/// # Returns
/// 0 on success, or a negative status code (null pointer, negative amount,
/// overflow). The ledger is unchanged on failure.
#[no_mangle]
pub unsafe extern "C" fn gb_session_pickup(ptr: *mut Session, amount: i32) -> i32 {
    if ptr.is_null() {
        return GoldError::NullPointer.status_code();
    }

    let session = &mut *ptr;
    match gold::pickup(session, amount) {
        Ok(_) => STATUS_OK,
        Err(err) => err.status_code(),
    }
}

/// Gold collected so far, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session, or null
#[no_mangle]
pub unsafe extern "C" fn gb_session_collected(ptr: *const Session) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).collected_gold
}

/// 1 once the collected gold meets the win total, else 0 (also for null).
/// The exit-tile half of the win condition is left to the host.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session, or null
#[no_mangle]
pub unsafe extern "C" fn gb_session_gold_target_met(ptr: *const Session) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    gold::gold_target_met(&*ptr) as u8
}

/// Picks up one coin, answering `"SUCCESS, GOLD COINS: <n>"` or `"FAIL"`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session, or null
///
/// # Returns
/// A caller-owned string to be freed with `gb_string_free`, or null if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gb_session_pickup_message(ptr: *mut Session) -> *mut c_char {
    if ptr.is_null() {
        return std::ptr::null_mut();
    }
    into_raw_c_string(gold::pickup_message(&mut *ptr))
}

/// The session's status line, e.g. `"GOLD: 2"`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session, or null
///
/// # Returns
/// A caller-owned string to be freed with `gb_string_free`, or null on a null
/// pointer or overflow under the session's policy.
#[no_mangle]
pub unsafe extern "C" fn gb_session_hello(ptr: *const Session) -> *mut c_char {
    if ptr.is_null() {
        return std::ptr::null_mut();
    }

    match gold::session_hello(&*ptr) {
        Ok(message) => into_raw_c_string(message),
        Err(_) => std::ptr::null_mut(),
    }
}
