mod error;
mod fib;
mod integer_box;
pub use crate::error::{Error, Result};
pub use crate::fib::{checked_fibonacci, fibonacci};
pub use crate::integer_box::IntegerBox;
