use intbox_core::Error;

/// Result code of `Integer_fib__checked`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibStatus {
    Ok = 0,
    NullHandle = 1,
    Overflow = 2,
}

impl From<&Error> for FibStatus {
    fn from(e: &Error) -> Self {
        match e {
            Error::NullHandle => FibStatus::NullHandle,
            Error::Overflow { .. } => FibStatus::Overflow,
        }
    }
}
