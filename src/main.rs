use anyhow::Result;
use intbox::cli::{self, Command};
use intbox::runner;

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse_command_line_args();

    match &args.command {
        Command::Fib { n, checked } => {
            let fib = if *checked {
                runner::fib_checked(*n)?
            } else {
                runner::fib_through_handle(*n)
            };
            println!("fib({}) = {}", n, fib);
        }
        Command::Scenario => {
            for line in runner::scenario() {
                println!("{}", line);
            }
        }
        Command::Bench { from, to, json } => {
            let report = runner::bench(*from..*to)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }
    Ok(())
}
