//! C ABI for `IntegerBox`.
//!
//! Handles are plain pointers to a heap-allocated `IntegerBox`. `NULL`
//! arrives as `None`; every entry point tolerates it, and `Integer_delete`
//! treats it as a silent no-op. Freeing the same handle twice is the
//! caller's bug.
pub mod integer;
pub mod status;
pub use self::integer::{
    integer_delete, integer_fib, integer_fib_checked, integer_get, integer_new, integer_set,
};
pub use self::status::FibStatus;
pub use intbox_core::IntegerBox;
