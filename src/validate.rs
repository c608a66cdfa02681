//! Per-record validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! date format, date order, gallons range, price range, receipt arithmetic,
//! odometer order. Text fields are clamped, never rejected.

use crate::config::Limits;
use crate::decimal::parse_decimal;
use crate::error::RecordFault;
use crate::record::{clamp_text, PurchaseRecord, RawRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Date layout used in the input file.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Validates records one at a time, in file order.
///
/// Only the previously accepted date and odometer reading are remembered,
/// which is all the ordering checks need.
#[derive(Debug)]
pub struct Validator<'a> {
    limits: &'a Limits,
    previous: Option<(NaiveDate, u64)>,
}

impl<'a> Validator<'a> {
    pub fn new(limits: &'a Limits) -> Self {
        Validator {
            limits,
            previous: None,
        }
    }

    /// Converts and checks one raw record, remembering it on success.
    pub fn accept(&mut self, raw: RawRecord) -> Result<PurchaseRecord, RecordFault> {
        let limits = self.limits;

        let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT)
            .map_err(|_| RecordFault::InvalidDate(raw.date.clone()))?;
        if let Some((prev_date, _)) = self.previous {
            if date < prev_date {
                return Err(RecordFault::DateOutOfSequence);
            }
        }

        let gallons = number("gallons", &raw.gallons)?;
        if !(limits.min_gallons..=limits.max_gallons).contains(&gallons) {
            return Err(RecordFault::GallonsOutOfRange);
        }

        let price_per_gallon = number("price per gallon", &raw.price)?;
        if !(limits.min_price..=limits.max_price).contains(&price_per_gallon) {
            return Err(RecordFault::PriceOutOfRange);
        }

        let total_cost = number("cost", &raw.cost)?;
        if (gallons * price_per_gallon - total_cost).abs() > limits.max_cost_error {
            return Err(RecordFault::CostMismatch);
        }

        let odometer: u64 = raw
            .odometer
            .parse()
            .map_err(|_| RecordFault::InvalidNumber {
                field: "odometer mileage",
                value: raw.odometer.clone(),
            })?;
        if let Some((_, prev_odometer)) = self.previous {
            if odometer < prev_odometer {
                return Err(RecordFault::MileageOutOfSequence);
            }
        }

        self.previous = Some((date, odometer));

        Ok(PurchaseRecord {
            line: raw.line,
            date,
            location: clamp_text(&raw.location, limits.max_location_len),
            gallons,
            price_per_gallon,
            total_cost,
            odometer,
            comment: raw
                .comment
                .map(|c| clamp_text(&c, limits.max_comment_len))
                .unwrap_or_default(),
        })
    }
}

fn number(field: &'static str, value: &str) -> Result<Decimal, RecordFault> {
    parse_decimal(value).map_err(|_| RecordFault::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
