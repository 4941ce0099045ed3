//! `Integer_*` entry points
use crate::status::FibStatus;
use intbox_core::{Error, IntegerBox, Result};
use intbox_ffi_macro::intbox_method;
use std::os::raw::c_int;

#[intbox_method("Integer#new")]
pub extern "C" fn integer_new(n: c_int) -> Box<IntegerBox> {
    let integer = Box::new(IntegerBox::new(n));
    log::trace!("Integer_new({}) -> {:p}", n, integer);
    integer
}

#[intbox_method("Integer#get")]
pub extern "C" fn integer_get(integer: Option<&IntegerBox>) -> c_int {
    match integer {
        Some(integer) => integer.get(),
        None => {
            log::error!("Integer_get: {}", Error::NullHandle);
            0
        }
    }
}

/// Naive Fibonacci of the stored value. Slow for large values; the sum
/// wraps past `INT_MAX`.
#[intbox_method("Integer#fib")]
pub extern "C" fn integer_fib(integer: Option<&IntegerBox>) -> c_int {
    match integer {
        Some(integer) => integer.fibonacci(),
        None => {
            log::error!("Integer_fib: {}", Error::NullHandle);
            0
        }
    }
}

#[intbox_method("Integer#set")]
pub extern "C" fn integer_set(integer: Option<&mut IntegerBox>, n: c_int) {
    match integer {
        Some(integer) => integer.set(n),
        None => log::error!("Integer_set: {}", Error::NullHandle),
    }
}

#[intbox_method("Integer#delete")]
pub extern "C" fn integer_delete(integer: Option<Box<IntegerBox>>) {
    if let Some(integer) = integer {
        log::trace!("Integer_delete({:p})", integer);
        drop(integer);
    }
}

/// Like `Integer_fib` but reports overflow instead of wrapping.
/// `out` is written only when `FibStatus::Ok` is returned.
#[intbox_method("Integer#fib_checked")]
pub extern "C" fn integer_fib_checked(
    integer: Option<&IntegerBox>,
    out: Option<&mut c_int>,
) -> FibStatus {
    let (Some(integer), Some(out)) = (integer, out) else {
        return FibStatus::NullHandle;
    };
    store_fib(integer.checked_fibonacci(), out)
}

fn store_fib(result: Result<i32>, out: &mut c_int) -> FibStatus {
    match result {
        Ok(n) => {
            *out = n;
            FibStatus::Ok
        }
        Err(e) => {
            log::debug!("Integer_fib__checked: {}", e);
            FibStatus::from(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario() {
        let mut integer = integer_new(7);
        assert_eq!(integer_get(Some(&*integer)), 7);
        assert_eq!(integer_fib(Some(&*integer)), 13);
        integer_set(Some(&mut *integer), 5);
        assert_eq!(integer_get(Some(&*integer)), 5);
        assert_eq!(integer_fib(Some(&*integer)), 5);
        integer_delete(Some(integer));
    }

    #[test]
    fn test_known_values() {
        let mut integer = integer_new(10);
        assert_eq!(integer_fib(Some(&*integer)), 55);
        integer_set(Some(&mut *integer), 20);
        assert_eq!(integer_fib(Some(&*integer)), 6765);
        integer_set(Some(&mut *integer), -3);
        assert_eq!(integer_fib(Some(&*integer)), -3);
        integer_delete(Some(integer));
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let integer = integer_new(15);
        let first = integer_fib(Some(&*integer));
        for _ in 0..3 {
            assert_eq!(integer_get(Some(&*integer)), 15);
            assert_eq!(integer_fib(Some(&*integer)), first);
        }
        integer_delete(Some(integer));
    }

    #[test]
    fn test_null_handles() {
        integer_delete(None);
        assert_eq!(integer_get(None), 0);
        assert_eq!(integer_fib(None), 0);
        integer_set(None, 3);
    }

    #[test]
    fn test_fib_checked() {
        let integer = integer_new(10);
        let mut out = -1;
        assert_eq!(
            integer_fib_checked(Some(&*integer), Some(&mut out)),
            FibStatus::Ok
        );
        assert_eq!(out, 55);
        integer_delete(Some(integer));
    }

    #[test]
    fn test_fib_checked_null() {
        let mut out = -1;
        assert_eq!(
            integer_fib_checked(None, Some(&mut out)),
            FibStatus::NullHandle
        );
        assert_eq!(out, -1);
        let integer = integer_new(3);
        assert_eq!(integer_fib_checked(Some(&*integer), None), FibStatus::NullHandle);
        integer_delete(Some(integer));
    }

    #[test]
    fn test_store_fib_overflow() {
        let mut out = -1;
        assert_eq!(
            store_fib(Err(Error::Overflow { index: 47 }), &mut out),
            FibStatus::Overflow
        );
        assert_eq!(out, -1);
        assert_eq!(store_fib(Ok(1836311903), &mut out), FibStatus::Ok);
        assert_eq!(out, 1836311903);
    }

    #[test]
    fn test_handle_is_a_plain_pointer() {
        let integer = integer_new(9);
        let raw = Box::into_raw(integer);
        // What a foreign caller holds
        let again = unsafe { Box::from_raw(raw) };
        assert_eq!(integer_get(Some(&*again)), 9);
        integer_delete(Some(again));
    }
}
