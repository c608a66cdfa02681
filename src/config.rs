//! Run settings: file locations and sanity limits.
//!
//! Everything is a compile-time default. Library callers can build their own
//! `Settings` when they need different files or bounds.

use rust_decimal::Decimal;
use std::path::PathBuf;

/// Input file looked up in the current working directory.
pub const DEFAULT_INPUT_FILE: &str = "gas_purchases.txt";

/// Report file written to the current working directory (overwritten).
pub const DEFAULT_OUTPUT_FILE: &str = "mpg_results.txt";

/// Bounds used to sanity check purchases and to filter the best/worst lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    pub min_gallons: Decimal,
    pub max_gallons: Decimal,
    pub min_price: Decimal,
    pub max_price: Decimal,
    /// Largest accepted |gallons x price - cost|.
    pub max_cost_error: Decimal,
    /// Location text is clamped to this many characters.
    pub max_location_len: usize,
    /// Comment text is clamped to this many characters.
    pub max_comment_len: usize,
    /// Lower edge of the plausibility band for the worst-MPG list.
    pub min_mpg: Decimal,
    /// Upper edge of the plausibility band for the best-MPG list.
    pub max_mpg: Decimal,
    /// Length of the best and worst MPG lists.
    pub ranking_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min_gallons: Decimal::new(1, 1),
            max_gallons: Decimal::new(40, 0),
            min_price: Decimal::new(75, 2),
            max_price: Decimal::new(5, 0),
            max_cost_error: Decimal::new(5, 2),
            max_location_len: 23,
            max_comment_len: 25,
            min_mpg: Decimal::new(15, 0),
            max_mpg: Decimal::new(40, 0),
            ranking_len: 10,
        }
    }
}

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub limits: Limits,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            limits: Limits::default(),
        }
    }
}
