use clap::{Parser, Subcommand};

#[derive(clap::Parser, Debug)]
#[clap(name = "intbox", author, version, about)]
pub struct Arguments {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute fib(n) through the C ABI
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i32,
        /// Fail instead of wrapping when the result does not fit in 32 bits
        #[arg(long)]
        checked: bool,
    },
    /// Walk an IntegerBox through new, get, fib and set
    Scenario,
    /// Time naive fib over a range of n, natively and through the C ABI
    Bench {
        #[arg(long, default_value_t = 25)]
        from: i32,
        /// Exclusive
        #[arg(long, default_value_t = 35)]
        to: i32,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_command_line_args() -> Arguments {
    Arguments::parse()
}
