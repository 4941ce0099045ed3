use anyhow::{bail, Result};
use intbox_ffi::{
    integer_delete, integer_fib, integer_fib_checked, integer_get, integer_new, integer_set,
    FibStatus,
};
use serde::Serialize;
use std::fmt;
use std::hint::black_box;
use std::ops::Range;
use std::time::Instant;

/// A way of computing naive fib
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Plain Rust recursion
    Native,
    /// `Integer_new` / `Integer_fib` / `Integer_delete`, called in-process as
    /// Rust functions. The compiler may inline them, so this measures the
    /// handle round trip rather than a foreign call.
    Ffi,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Native, Backend::Ffi];

    pub fn fib(self, n: i32) -> i32 {
        match self {
            Backend::Native => intbox_core::fibonacci(n),
            Backend::Ffi => fib_through_handle(n),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Backend::Native => f.pad("native"),
            Backend::Ffi => f.pad("ffi"),
        }
    }
}

/// Allocate a box holding `n`, take its fib and free it
pub fn fib_through_handle(n: i32) -> i32 {
    let integer = integer_new(n);
    let fib = integer_fib(Some(&*integer));
    integer_delete(Some(integer));
    fib
}

pub fn fib_checked(n: i32) -> Result<i32> {
    let integer = integer_new(n);
    let mut out = 0;
    let status = integer_fib_checked(Some(&*integer), Some(&mut out));
    integer_delete(Some(integer));
    checked_result(n, status, out)
}

fn checked_result(n: i32, status: FibStatus, out: i32) -> Result<i32> {
    match status {
        FibStatus::Ok => Ok(out),
        FibStatus::Overflow => bail!("fib({}) does not fit in a 32-bit integer", n),
        FibStatus::NullHandle => bail!("[BUG] null handle for fib({})", n),
    }
}

/// Create 7, read it, take fib, set 5, read it, take fib
pub fn scenario() -> Vec<String> {
    let mut lines = vec![];
    let mut integer = integer_new(7);
    lines.push("new(7)".to_string());
    lines.push(format!("get() = {}", integer_get(Some(&*integer))));
    lines.push(format!("fib() = {}", integer_fib(Some(&*integer))));
    integer_set(Some(&mut *integer), 5);
    lines.push("set(5)".to_string());
    lines.push(format!("get() = {}", integer_get(Some(&*integer))));
    lines.push(format!("fib() = {}", integer_fib(Some(&*integer))));
    integer_delete(Some(integer));
    lines
}

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub from: i32,
    pub to: i32,
    pub results: Vec<BenchResult>,
}

#[derive(Debug, Serialize)]
pub struct BenchResult {
    pub backend: Backend,
    /// Total for the whole range
    pub seconds: f64,
    /// One entry per n, in range order
    pub timings: Vec<Timing>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Timing {
    pub n: i32,
    pub seconds: f64,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "fib(n) for n in {}..{}", self.from, self.to)?;
        for result in &self.results {
            writeln!(f, "{:<7}: {:.6} sec", result.backend, result.seconds)?;
            for timing in &result.timings {
                writeln!(f, "  n = {:<4}: {:.6} sec", timing.n, timing.seconds)?;
            }
        }
        Ok(())
    }
}

/// Time every backend over `range` (end exclusive)
pub fn bench(range: Range<i32>) -> Result<BenchReport> {
    if range.start > range.end {
        bail!("invalid range {}..{}", range.start, range.end);
    }
    let results = Backend::ALL
        .iter()
        .map(|backend| time_backend(*backend, range.clone()))
        .collect();
    Ok(BenchReport {
        from: range.start,
        to: range.end,
        results,
    })
}

fn time_backend(backend: Backend, range: Range<i32>) -> BenchResult {
    let timings = range
        .map(|n| {
            let start = Instant::now();
            black_box(backend.fib(black_box(n)));
            Timing {
                n,
                seconds: start.elapsed().as_secs_f64(),
            }
        })
        .collect::<Vec<_>>();
    let seconds = timings.iter().map(|t| t.seconds).sum();
    log::debug!("{}: {} sec", backend, seconds);
    BenchResult {
        backend,
        seconds,
        timings,
    }
}
