#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// An entry point received a null handle
    #[error("null IntegerBox handle")]
    NullHandle,
    /// Sum of fib(index-1) and fib(index-2) does not fit in 32 bits
    #[error("fib({index}) overflows a 32-bit integer")]
    Overflow { index: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
