//! Purchase log reader.
//!
//! Reads the delimited input, skips comment lines, and validates
//! each purchase line before it joins the ledger. The first bad line aborts
//! the read; there is no skip-and-continue mode.

use crate::config::Limits;
use crate::error::{RecordFault, Result};
use crate::record::{PurchaseRecord, RawRecord};
use crate::stats::RunStatistics;
use crate::validate::Validator;
use log::{debug, info};
use std::io::{BufRead, ErrorKind};

/// The ordered, validated purchases from one input file.
#[derive(Debug, Clone)]
pub struct PurchaseLedger {
    records: Vec<PurchaseRecord>,
}

impl PurchaseLedger {
    /// Reads and validates every purchase line from `reader`.
    ///
    /// Lines whose first non-whitespace character is `#` are comments. They
    /// are not purchases but still count toward the line numbers used in
    /// error messages. Every other line, blank ones included, is a purchase
    /// line and must carry all six fields.
    pub fn from_reader<R: BufRead>(reader: R, limits: &Limits) -> Result<Self> {
        let mut validator = Validator::new(limits);
        let mut records = Vec::new();

        for (idx, text) in reader.lines().enumerate() {
            let line = idx as u64 + 1;
            let text = match text {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(RecordFault::InvalidEncoding.at_line(line));
                }
                Err(e) => return Err(e.into()),
            };

            if is_comment(&text) {
                debug!("Line {}: skipping comment", line);
                continue;
            }

            let record = RawRecord::from_line(line, &text)
                .and_then(|raw| validator.accept(raw))
                .map_err(|fault| fault.at_line(line))?;

            debug!(
                "Line {}: {} {} gallons at {} ({} miles)",
                line, record.date, record.gallons, record.location, record.odometer
            );
            records.push(record);
        }

        info!("Read {} gas purchases", records.len());
        Ok(PurchaseLedger { records })
    }

    /// Validated purchases in file order.
    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Computes the run statistics. Needs at least two purchases.
    pub fn statistics(&self, limits: &Limits) -> Result<RunStatistics> {
        RunStatistics::compute(&self.records, limits)
    }
}

fn is_comment(text: &str) -> bool {
    text.trim_start().starts_with('#')
}
