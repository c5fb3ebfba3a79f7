// C ABI method bodies. Symbol names follow `logbridge_abi::method_symbol`.
//
// Null handles are ignored and messages are decoded lossily: nothing a
// caller passes across the boundary can make these functions misbehave
// beyond what the pointer contracts below state.

#![allow(non_snake_case)]

use std::borrow::Cow;

use logbridge_abi::{GetLoggerFn, LogFn, Logger, LoggerHandle, ReleaseFn};

use crate::backend;
use crate::manager::{CoreLogger, LogManager};

// Signatures must match the declared function types.
const _: GetLoggerFn = logbridge__LogManager__get_logger;
const _: LogFn = logbridge__Logger__info;
const _: LogFn = logbridge__Logger__warn;
const _: LogFn = logbridge__Logger__error;
const _: ReleaseFn = logbridge__Logger__release;

unsafe fn text<'a>(ptr: *const u8, len: usize) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    String::from_utf8_lossy(std::slice::from_raw_parts(ptr, len))
}

unsafe fn with_logger(handle: *mut LoggerHandle, f: impl FnOnce(&CoreLogger)) {
    if let Some(logger) = handle.cast::<CoreLogger>().as_ref() {
        f(logger);
    }
}

/// # Safety
/// `name` must be null or point to `len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn logbridge__LogManager__get_logger(
    name: *const u8,
    len: usize,
) -> *mut LoggerHandle {
    backend::init();
    let logger = LogManager::get_logger(text(name, len).into_owned());
    Box::into_raw(Box::new(logger)).cast()
}

/// # Safety
/// `logger` must be null or a live handle from `get_logger`; `message` must
/// be null or point to `len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn logbridge__Logger__info(logger: *mut LoggerHandle, message: *const u8, len: usize) {
    with_logger(logger, |l| l.info(&text(message, len)));
}

/// # Safety
/// See [`logbridge__Logger__info`].
#[no_mangle]
pub unsafe extern "C" fn logbridge__Logger__warn(logger: *mut LoggerHandle, message: *const u8, len: usize) {
    with_logger(logger, |l| l.warn(&text(message, len)));
}

/// # Safety
/// See [`logbridge__Logger__info`].
#[no_mangle]
pub unsafe extern "C" fn logbridge__Logger__error(logger: *mut LoggerHandle, message: *const u8, len: usize) {
    with_logger(logger, |l| l.error(&text(message, len)));
}

/// # Safety
/// `logger` must be null or a live handle from `get_logger`. The handle is
/// invalid after this call.
#[no_mangle]
pub unsafe extern "C" fn logbridge__Logger__release(logger: *mut LoggerHandle) {
    if !logger.is_null() {
        drop(Box::from_raw(logger.cast::<CoreLogger>()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_handles_null_and_invalid_utf8() {
        unsafe {
            assert_eq!(text(std::ptr::null(), 10), "");
            let bytes = b"ok\xFFok";
            assert_eq!(text(bytes.as_ptr(), bytes.len()), "ok\u{FFFD}ok");
        }
    }

    #[test]
    fn handle_round_trips_through_release() {
        let name = "ffi::tests";
        unsafe {
            let handle = logbridge__LogManager__get_logger(name.as_ptr(), name.len());
            assert!(!handle.is_null());
            assert_eq!((*handle.cast::<CoreLogger>()).name(), name);
            logbridge__Logger__release(handle);
        }
    }

    #[test]
    fn null_handle_is_ignored() {
        let msg = "dropped";
        unsafe {
            logbridge__Logger__info(std::ptr::null_mut(), msg.as_ptr(), msg.len());
            logbridge__Logger__release(std::ptr::null_mut());
        }
    }
}
