//! Error types for the mileage calculator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mileage operations
pub type Result<T> = std::result::Result<T, MileageError>;

/// Errors that abort a run. None of them are recoverable.
#[derive(Error, Debug)]
pub enum MileageError {
    /// Anything other than no arguments or a single `-h`
    #[error("Invalid command line parameters, for help, enter gas-mileage -h")]
    Invocation,

    /// Input file is absent from the working directory
    #[error("Input file not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    /// A data line failed parsing or validation
    #[error("Line {line}: {fault}")]
    MalformedRecord { line: u64, fault: RecordFault },

    /// Fewer than two purchases, so no economy can be computed
    #[error("Must be at least two gas purchases to compute MPG, found {records}")]
    InsufficientData { records: usize },

    /// The odometer never moved after the first purchase
    #[error("No miles driven after the first gas purchase, cannot compute MPG")]
    NoDistance,

    /// Failed to create or write the report file
    #[error("Error producing output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single purchase line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordFault {
    /// Line splits into fewer than the six mandatory fields
    #[error("expected at least 6 comma-separated fields, found {found}")]
    TooFewFields { found: usize },

    /// Line is not valid UTF-8 text
    #[error("line is not valid UTF-8 text")]
    InvalidEncoding,

    /// Date is not a real calendar date in MM/DD/YYYY form
    #[error("invalid date '{0}', expected MM/DD/YYYY")]
    InvalidDate(String),

    /// Numeric field does not parse
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// Date is earlier than the previous purchase
    #[error("dates out of sequence")]
    DateOutOfSequence,

    /// Gallons outside the configured bounds
    #[error("gallons out of range")]
    GallonsOutOfRange,

    /// Price per gallon outside the configured bounds
    #[error("price per gallon out of range")]
    PriceOutOfRange,

    /// Cost differs from gallons x price by more than the tolerance
    #[error("cost doesn't equal gallons x price")]
    CostMismatch,

    /// Odometer reading is lower than the previous purchase
    #[error("mileages out of sequence")]
    MileageOutOfSequence,
}

impl RecordFault {
    /// Tags the fault with the input line it came from.
    pub fn at_line(self, line: u64) -> MileageError {
        MileageError::MalformedRecord { line, fault: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message_names_line() {
        let err = RecordFault::DateOutOfSequence.at_line(7);
        assert_eq!(err.to_string(), "Line 7: dates out of sequence");
    }

    #[test]
    fn test_insufficient_data_message() {
        let err = MileageError::InsufficientData { records: 1 };
        assert!(err.to_string().contains("at least two gas purchases"));
    }
}
