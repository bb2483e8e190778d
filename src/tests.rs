use crate::error::STATUS_OK;
use crate::ffi::{
    gb_batcher_create, gb_batcher_destroy, gb_batcher_hello, gb_hello, gb_hello_batch,
    gb_hello_into, gb_session_create, gb_session_destroy, gb_session_gold_target_met,
    gb_session_hello, gb_session_pickup, gb_string_free,
};
use crate::gold;
use rayon::prelude::*;
use std::ffi::{c_char, CStr};
use std::ptr;
use std::thread;

unsafe fn take(raw: *mut c_char) -> String {
    assert!(!raw.is_null(), "expected a string, got null");
    let s = CStr::from_ptr(raw).to_str().unwrap().to_owned();
    gb_string_free(raw);
    s
}

#[test]
fn test_hello_examples() {
    unsafe {
        assert_eq!(take(gb_hello(10, 3)), "GOLD: 7");
        assert_eq!(take(gb_hello(3, 10)), "GOLD: -7");
        assert_eq!(take(gb_hello(0, 0)), "GOLD: 0");
    }
}

#[test]
fn test_hello_repeat_calls_identical() {
    unsafe {
        let a = take(gb_hello(123, 45));
        let b = take(gb_hello(123, 45));
        assert_eq!(a, b);
        assert_eq!(a, "GOLD: 78");
    }
}

#[test]
fn test_hello_overflow_boundary() {
    // Default policy is checked: overflow yields a null handle
    assert!(gb_hello(i32::MAX, -1).is_null());
    assert!(gb_hello(i32::MIN, 1).is_null());

    unsafe {
        // Just inside the range still formats
        assert_eq!(take(gb_hello(i32::MAX, 0)), "GOLD: 2147483647");
        assert_eq!(take(gb_hello(-1, i32::MAX)), "GOLD: -2147483648");
    }
}

#[test]
fn test_ffi_and_core_agree() {
    let pairs = [(10, 3), (-20, 5), (7, -7), (0, 1)];
    for (win, gold_taken) in pairs {
        let expected = gold::hello(win, gold_taken).unwrap();
        unsafe {
            assert_eq!(take(gb_hello(win, gold_taken)), expected);

            let mut buf = [0 as c_char; 32];
            let len = gb_hello_into(win, gold_taken, 0, buf.as_mut_ptr(), buf.len());
            assert_eq!(len as usize, expected.len());
            assert_eq!(CStr::from_ptr(buf.as_ptr()).to_str().unwrap(), expected);
        }
    }
}

#[test]
fn test_concurrent_callers_threads() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..1000 {
                    let win = t * 1000 + i;
                    let got = unsafe { take(gb_hello(win, i)) };
                    assert_eq!(got, format!("GOLD: {}", t * 1000));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_callers_rayon() {
    let results: Vec<(i32, String)> = (-500..500)
        .into_par_iter()
        .map(|i| (i, unsafe { take(gb_hello(i, -i)) }))
        .collect();

    for (i, s) in results {
        assert_eq!(s, format!("GOLD: {}", 2 * i));
    }
}

#[test]
fn test_player_session_flow() {
    unsafe {
        let session = gb_session_create(2);
        assert!(!session.is_null());
        assert_eq!(take(gb_session_hello(session)), "GOLD: 2");

        assert_eq!(gb_session_pickup(session, 1), STATUS_OK);
        assert_eq!(take(gb_session_hello(session)), "GOLD: 1");
        assert_eq!(gb_session_gold_target_met(session), 0);

        assert_eq!(gb_session_pickup(session, 1), STATUS_OK);
        assert_eq!(take(gb_session_hello(session)), "GOLD: 0");
        assert_eq!(gb_session_gold_target_met(session), 1);

        gb_session_destroy(session);
        gb_session_destroy(ptr::null_mut()); // Should not crash
    }
}

#[test]
fn test_batch_matches_single_calls() {
    let wins: Vec<i32> = (0..64).map(|i| i * 3).collect();
    let golds: Vec<i32> = (0..64).collect();
    let mut out = vec![ptr::null_mut(); wins.len()];

    unsafe {
        let written =
            gb_hello_batch(wins.as_ptr(), golds.as_ptr(), wins.len(), 0, out.as_mut_ptr());
        assert_eq!(written, 64);

        for (i, raw) in out.into_iter().enumerate() {
            let single = take(gb_hello(wins[i], golds[i]));
            assert_eq!(take(raw), single);
        }
    }
}

#[test]
fn test_batcher_handle_reused_from_many_threads() {
    let batcher = unsafe { gb_batcher_create(ptr::null()) } as usize;

    let handles: Vec<_> = (0..4)
        .map(|t| {
            thread::spawn(move || {
                let wins: Vec<i32> = (0..32).map(|i| i + t).collect();
                let golds: Vec<i32> = vec![t; 32];
                let mut out = vec![ptr::null_mut(); 32];
                unsafe {
                    let written = gb_batcher_hello(
                        batcher as *const _,
                        wins.as_ptr(),
                        golds.as_ptr(),
                        32,
                        out.as_mut_ptr(),
                    );
                    assert_eq!(written, 32);
                    for (i, raw) in out.into_iter().enumerate() {
                        assert_eq!(take(raw), format!("GOLD: {i}"));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    unsafe { gb_batcher_destroy(batcher as *mut _) };
}
