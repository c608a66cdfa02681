//! # Gas Mileage
//!
//! Reads a chronological log of fuel purchases, validates every line, and
//! produces a fixed-layout fuel economy report.
//!
//! ## Design Principles
//!
//! - **Decimal arithmetic**: gallons, prices and costs use `rust_decimal`
//! - **Fail fast**: the first bad line aborts the run with its line number
//! - **Single pass statistics**: `RunStatistics` is a fold over the records
//! - **Render once**: the same text goes to the report file and the console
//!
//! ## Example
//!
//! ```no_run
//! use gas_mileage::{Limits, PurchaseLedger, Report};
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let log = "08/06/2016, Costco Cville, 8.788, 1.669, 14.67, 246\n\
//!            08/16/2016, Costco Cville, 9.904, 1.699, 16.83, 506\n";
//! let limits = Limits::default();
//! let ledger = PurchaseLedger::from_reader(Cursor::new(log), &limits).unwrap();
//! let stats = ledger.statistics(&limits).unwrap();
//! let report = Report {
//!     records: ledger.records(),
//!     stats: &stats,
//!     input_path: Path::new("gas_purchases.txt"),
//!     output_path: Path::new("mpg_results.txt"),
//!     generated: chrono::Local::now().date_naive(),
//! };
//! print!("{}", report);
//! ```

pub mod config;
pub mod decimal;
pub mod error;
pub mod ledger;
pub mod record;
pub mod report;
pub mod stats;
pub mod validate;

pub use config::{Limits, Settings, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use decimal::Fixed;
pub use error::{MileageError, RecordFault, Result};
pub use ledger::PurchaseLedger;
pub use record::{PurchaseRecord, RawRecord};
pub use report::{publish, Report};
pub use stats::{Extremum, RunStatistics, Spread};
pub use validate::Validator;
