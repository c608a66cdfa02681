//! Gas Mileage CLI
//!
//! Reads `gas_purchases.txt` from the current directory, writes
//! `mpg_results.txt` next to it, and echoes the report to the console.
//!
//! # Usage
//!
//! ```bash
//! gas-mileage        # produce the report
//! gas-mileage -h     # show the input format
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to trace parsing and statistics

use chrono::Local;
use gas_mileage::{publish, MileageError, PurchaseLedger, Report, Result, Settings};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path;
use std::process;

const HELP: &str = "\
gas-mileage - Read gas purchase records from a file, then compute average gas
mileage and other statistics.

Usage: gas-mileage [-h]

  -h    Print this help message and exit.

The input file gas_purchases.txt must be in the current working directory.
Lines whose first non-blank character is # are comments and are ignored.
Every other line is one gas purchase, with comma-separated fields:

  date, location, gallons, price per gallon, cost, odometer mileage[, comment]

  date        MM/DD/YYYY, never earlier than the previous purchase
  location    text without commas, shown up to 23 characters
  gallons     decimal, 0.1 to 40.0
  price       decimal price per gallon, 0.75 to 5.00
  cost        decimal; must be within 0.05 of gallons x price
  mileage     whole odometer reading, never lower than the previous purchase
  comment     optional text, shown up to 25 characters

Example:

  # Transit Connect gas purchases
  08/06/2016, Costco Cville, 8.788, 1.669, 14.67, 246
  08/28/2016, Wawa Fburg, 10.050, 1.959, 19.69, 1135, traveling to DC

The report is written to mpg_results.txt in the current working directory
(overwritten if present) and shown on the console. It lists every purchase
with its computed MPG, the overall MPG, the ten best and worst MPGs between
15 and 40, min/max/avg gallons, price and cost, and the cost per mile.
The first purchase has no MPG of its own, so its gallons are left out of the
overall MPG but still count toward the file totals.
";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Report,
    Help,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    match args {
        [] => Ok(Invocation::Report),
        [flag] if flag == "-h" => Ok(Invocation::Help),
        _ => Err(MileageError::Invocation),
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if parse_args(&args)? == Invocation::Help {
        print!("{}", HELP);
        return Ok(());
    }

    let settings = Settings::default();
    if !settings.input_path.is_file() {
        return Err(MileageError::MissingInputFile {
            path: settings.input_path,
        });
    }

    let file = File::open(&settings.input_path)?;
    let ledger = PurchaseLedger::from_reader(BufReader::new(file), &settings.limits)?;
    let stats = ledger.statistics(&settings.limits)?;

    let input_path = path::absolute(&settings.input_path)?;
    let output_path = path::absolute(&settings.output_path)?;
    let text = Report {
        records: ledger.records(),
        stats: &stats,
        input_path: &input_path,
        output_path: &output_path,
        generated: Local::now().date_naive(),
    }
    .to_string();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    publish(&text, &output_path, &mut handle)?;

    write!(handle, "\nPress Enter key to exit")?;
    handle.flush()?;
    drop(handle);

    let mut acknowledgement = String::new();
    io::stdin().read_line(&mut acknowledgement)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Invocation::Report);
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Invocation::Help);
        assert!(matches!(
            parse_args(&args(&["--help"])),
            Err(MileageError::Invocation)
        ));
        assert!(matches!(
            parse_args(&args(&["-h", "extra"])),
            Err(MileageError::Invocation)
        ));
    }
}
