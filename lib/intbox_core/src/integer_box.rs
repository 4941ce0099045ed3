//! Mutable cell holding one `int`.
//! Foreign callers see it only through a pointer, so the layout is fixed.
use crate::error::Result;
use crate::fib;
use std::fmt;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegerBox {
    value: i32,
}

impl IntegerBox {
    pub fn new(value: i32) -> IntegerBox {
        IntegerBox { value }
    }

    /// Returns the stored value
    pub fn get(&self) -> i32 {
        self.value
    }

    /// Overwrites the stored value. Any `i32` is accepted
    pub fn set(&mut self, n: i32) {
        self.value = n;
    }

    /// Naive Fibonacci of the stored value (see `fib::fibonacci`)
    pub fn fibonacci(&self) -> i32 {
        fib::fibonacci(self.value)
    }

    pub fn checked_fibonacci(&self) -> Result<i32> {
        fib::checked_fibonacci(self.value)
    }
}

impl From<i32> for IntegerBox {
    fn from(n: i32) -> Self {
        IntegerBox::new(n)
    }
}

impl From<IntegerBox> for i32 {
    fn from(b: IntegerBox) -> Self {
        b.value
    }
}

impl fmt::Display for IntegerBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
