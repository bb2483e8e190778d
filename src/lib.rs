//! Gold Bridge - `GOLD: <n>` status lines over a C ABI
//!
//! This library exports the dungeon server's HELLO answer, the gold a player
//! still needs to win, as plain C functions so that a managed host can call it
//! through its foreign-function interface.
//!
//! Strings returned by `gb_*` functions belong to the caller and are released
//! with `gb_string_free`.
//!
//! The exports take only the values they use. A JNI host binding
//! `native String hello(int, int)` needs a thin C shim that accepts the
//! `JNIEnv*` and `jobject` without inspecting them, calls `gb_hello`, copies
//! the result into a `jstring` with `NewStringUTF`, and frees the original
//! with `gb_string_free`.

pub mod config;
pub mod error;
pub mod ffi;
pub mod gold;
pub mod state;

pub use config::{BridgeConfig, OverflowPolicy};
pub use error::{GoldError, Result};
pub use state::Session;

#[cfg(test)]
mod tests;
