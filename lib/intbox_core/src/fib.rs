//! Naive Fibonacci.
//!
//! Both functions recurse twice per step without memoization, so the
//! number of calls grows like φⁿ. Large `n` is expected to be slow.
use crate::error::{Error, Result};

/// Returns fib(n).
///
/// Any `n <= 1` is a base case and is returned as is, negatives included
/// (`fibonacci(-5) == -5`). The sum wraps on overflow like a C `int`.
pub fn fibonacci(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
}

/// Same as `fibonacci` but fails on the first sum that does not fit.
pub fn checked_fibonacci(n: i32) -> Result<i32> {
    if n <= 1 {
        return Ok(n);
    }
    let a = checked_fibonacci(n - 1)?;
    let b = checked_fibonacci(n - 2)?;
    a.checked_add(b).ok_or(Error::Overflow { index: n })
}
