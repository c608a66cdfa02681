//! Purchase record models: raw text fields and the validated record.

use crate::error::RecordFault;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Number of mandatory fields on a purchase line.
pub const REQUIRED_FIELDS: usize = 6;

/// Field separator. Quoting and escaping are not supported.
pub const DELIMITER: char = ',';

/// Text fields of one data line, trimmed but not yet type-converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the input file.
    pub line: u64,
    pub date: String,
    pub location: String,
    pub gallons: String,
    pub price: String,
    pub cost: String,
    pub odometer: String,
    /// Everything after the sixth delimiter, or `None` if there is nothing.
    pub comment: Option<String>,
}

impl RawRecord {
    /// Splits one data line into its fields.
    ///
    /// The trailing comment is everything after the sixth delimiter, so
    /// `..., 246, stuck in traffic, again` has the comment `stuck in traffic, again`.
    pub fn from_line(line: u64, text: &str) -> Result<Self, RecordFault> {
        let fields: Vec<&str> = text
            .splitn(REQUIRED_FIELDS + 1, DELIMITER)
            .map(str::trim)
            .collect();
        if fields.len() < REQUIRED_FIELDS {
            return Err(RecordFault::TooFewFields {
                found: fields.len(),
            });
        }

        Ok(RawRecord {
            line,
            date: fields[0].to_string(),
            location: fields[1].to_string(),
            gallons: fields[2].to_string(),
            price: fields[3].to_string(),
            cost: fields[4].to_string(),
            odometer: fields[5].to_string(),
            comment: fields
                .get(REQUIRED_FIELDS)
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string()),
        })
    }
}

/// A validated fuel purchase. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRecord {
    /// 1-based line number in the input file.
    pub line: u64,
    pub date: NaiveDate,
    /// Station name or location, already clamped.
    pub location: String,
    pub gallons: Decimal,
    pub price_per_gallon: Decimal,
    pub total_cost: Decimal,
    /// Odometer reading in miles.
    pub odometer: u64,
    /// Free-form note, already clamped; empty when absent.
    pub comment: String,
}

/// Clamps `text` to at most `max_chars` characters.
pub fn clamp_text(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_fields_without_comment() {
        let raw =
            RawRecord::from_line(3, "08/06/2016, Costco Cville, 8.788, 1.669, 14.67, 246\r").unwrap();

        assert_eq!(raw.line, 3);
        assert_eq!(raw.location, "Costco Cville");
        assert_eq!(raw.odometer, "246");
        assert_eq!(raw.comment, None);
    }

    #[test]
    fn test_comment_keeps_embedded_delimiters() {
        let raw =
            RawRecord::from_line(1, "08/06/2016,A,1,1,1,1, stuck in traffic, again ").unwrap();

        assert_eq!(raw.comment.as_deref(), Some("stuck in traffic, again"));
    }

    #[test]
    fn test_blank_comment_is_none() {
        let raw = RawRecord::from_line(1, "08/06/2016,A,1,1,1,1,   ").unwrap();
        assert_eq!(raw.comment, None);
    }

    #[test]
    fn test_too_few_fields() {
        let err = RawRecord::from_line(9, "08/06/2016, A, 1").unwrap_err();
        assert_eq!(err, RecordFault::TooFewFields { found: 3 });
    }

    #[test]
    fn test_clamp_text_counts_characters() {
        assert_eq!(clamp_text("Costco Cville", 6), "Costco");
        assert_eq!(clamp_text("short", 23), "short");
        assert_eq!(clamp_text("Überlingen Tankstelle", 4), "Über");
    }
}
