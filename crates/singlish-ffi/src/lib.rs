// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// singlish-ffi: C-compatible FFI layer for TransliteratorHandle.
//
// Memory management rules:
// - Opaque `TransliteratorHandle` pointer: created by `singlish_new`, freed by
//   `singlish_free`.
// - Returned strings: caller must free with `singlish_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
// - A handle is immutable once created and may be used from several threads
//   at the same time.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

use singlish_si::{EngineConfig, TransliteratorHandle};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new transliterator handle.
///
/// - `config_toml`: engine configuration as a TOML document, or NULL for the
///   defaults.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `singlish_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn singlish_new(
    config_toml: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut TransliteratorHandle {
    let config = if config_toml.is_null() {
        EngineConfig::default()
    } else {
        let Some(toml) = cstr_to_str(config_toml) else {
            set_error(error_out, "config_toml is not valid UTF-8");
            return ptr::null_mut();
        };
        match EngineConfig::from_toml_str(toml) {
            Ok(config) => config,
            Err(e) => {
                set_error(error_out, &e.to_string());
                return ptr::null_mut();
            }
        }
    };

    match TransliteratorHandle::new(config, "si") {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a TransliteratorHandle created by `singlish_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn singlish_free(handle: *mut TransliteratorHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Conversion ──────────────────────────────────────────────────

/// Convert Singlish text to Sinhala script.
///
/// Returns a heap-allocated C string. Caller must free with `singlish_free_str`.
/// Returns NULL if `handle` or `text` is NULL or `text` is not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn singlish_convert(
    handle: *const TransliteratorHandle,
    text: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.convert(text).output_text)
}

/// Number of words `singlish_convert` would leave unchanged for `text`.
/// Returns -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn singlish_passthrough_count(
    handle: *const TransliteratorHandle,
    text: *const c_char,
) -> isize {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(text) = cstr_to_str(text) else {
        return -1;
    };
    isize::try_from(handle.convert(text).passthrough_count).unwrap_or(isize::MAX)
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned by any singlish_* function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn singlish_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    // Input came from a C string, so it holds no interior NUL.
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}
