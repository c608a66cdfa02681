//! Fixed-layout text report.
//!
//! The report is rendered once and then written to two sinks: the output
//! file first, then the console. Column widths, padding, precision and
//! labels are a fixed format, trailing spaces included.

use crate::decimal::Fixed;
use crate::error::{MileageError, Result};
use crate::record::PurchaseRecord;
use crate::stats::{RunStatistics, Spread};
use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

const COLUMN_TITLES: &str =
    " Nbr    Date      Location                 Gals. Price/Gal.  Cost  Mileage  MPG   Comments";
const COLUMN_RULE: &str =
    "----  ----------  ----------------------- ------   -----    ------ ------  -----  --------------------";

/// Width of the location column; matches the rule above.
const LOCATION_WIDTH: usize = 23;

/// Comments are padded to this width, so every row has the same length.
const COMMENT_WIDTH: usize = 25;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Everything needed to render the report text.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub records: &'a [PurchaseRecord],
    pub stats: &'a RunStatistics,
    pub input_path: &'a Path,
    pub output_path: &'a Path,
    /// Date printed in the title line.
    pub generated: NaiveDate,
}

impl Report<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Gas Mileage Statistics as of {}",
            self.generated.format(DATE_FORMAT)
        )?;
        writeln!(f)?;
        writeln!(f, "Input file:   {}", self.input_path.display())?;
        writeln!(f, "Output file:  {} ", self.output_path.display())?;
        writeln!(f)?;
        writeln!(f, "{}", COLUMN_TITLES)?;
        writeln!(f, "{}", COLUMN_RULE)
    }

    fn write_rows(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (record, economy)) in self
            .records
            .iter()
            .zip(self.stats.economies.iter())
            .enumerate()
        {
            writeln!(
                f,
                "{:>4}  {}  {:<location$} {:>6}   {:>5}    {:>6} {:>6}  {:>5}  {:<comment$}",
                idx + 1,
                record.date.format(DATE_FORMAT),
                record.location,
                Fixed::volume(record.gallons),
                Fixed::volume(record.price_per_gallon),
                Fixed::money(record.total_cost),
                record.odometer,
                Fixed::money(*economy),
                record.comment,
                location = LOCATION_WIDTH,
                comment = COMMENT_WIDTH,
            )?;
        }
        Ok(())
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;

        writeln!(f)?;
        writeln!(
            f,
            "Overall MPG = {} miles / {} gallons = {} MPG",
            stats.mpg_miles,
            Fixed::volume(stats.mpg_gallons),
            Fixed::money(stats.overall_economy)
        )?;
        writeln!(f)?;
        write_ranking(f, "Ten best MPGs:  ", &stats.best)?;
        writeln!(f)?;
        write_ranking(f, "Ten worst MPGs: ", &stats.worst)?;
        writeln!(f)?;
        write_spread(
            f,
            "Gallons per purchase:",
            &stats.gallons,
            Fixed::volume,
            "",
            stats.average_gallons,
        )?;
        writeln!(f)?;
        write_spread(
            f,
            "Price per gallon:",
            &stats.price,
            Fixed::volume,
            "",
            stats.average_price,
        )?;
        writeln!(f)?;
        write_spread(
            f,
            "Cost per purchase:",
            &stats.cost,
            Fixed::money,
            "$",
            stats.average_cost,
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Total gallons = {}, total cost = ${}, gas cost per mile = ${}",
            Fixed::volume(stats.total_gallons),
            Fixed::money(stats.total_cost),
            Fixed::new(stats.cost_per_mile, 3)
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_rows(f)?;
        self.write_summary(f)
    }
}

fn write_ranking(f: &mut fmt::Formatter<'_>, label: &str, values: &[Decimal]) -> fmt::Result {
    write!(f, "{}", label)?;
    for value in values {
        write!(f, "{}  ", Fixed::money(*value))?;
    }
    writeln!(f)
}

fn write_spread(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    spread: &Spread,
    fixed: fn(Decimal) -> Fixed,
    unit: &str,
    average: Decimal,
) -> fmt::Result {
    writeln!(
        f,
        "{label}  Min = {unit}{} (Nbr {}),  Max = {unit}{} (Nbr {}),  Avg = {unit}{}",
        fixed(spread.min.value),
        spread.min.number,
        fixed(spread.max.value),
        spread.max.number,
        fixed(average),
    )
}

/// Writes the rendered report to `output_path`, then echoes it to `console`.
///
/// The file is overwritten if it exists. Nothing reaches the console unless
/// the file write succeeded.
pub fn publish<W: Write>(text: &str, output_path: &Path, console: &mut W) -> Result<()> {
    fs::write(output_path, text).map_err(|source| MileageError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!("Wrote report to {}", output_path.display());

    console.write_all(text.as_bytes())?;
    console.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::ledger::PurchaseLedger;
    use std::io::BufReader;

    const SAMPLE: &str = include_str!("../tests/data/gas_purchases.txt");
    const EXPECTED_BODY: &str = include_str!("../tests/data/expected_body.txt");

    fn render(input: &str) -> String {
        let limits = Limits::default();
        let ledger = PurchaseLedger::from_reader(BufReader::new(input.as_bytes()), &limits).unwrap();
        let stats = ledger.statistics(&limits).unwrap();
        Report {
            records: ledger.records(),
            stats: &stats,
            input_path: Path::new("/home/driver/gas_purchases.txt"),
            output_path: Path::new("/home/driver/mpg_results.txt"),
            generated: NaiveDate::from_ymd_opt(2018, 6, 14).unwrap(),
        }
        .to_string()
    }

    #[test]
    fn test_header_lines() {
        let text = render(SAMPLE);
        let lines: Vec<&str> = text.lines().take(6).collect();
        assert_eq!(
            lines,
            [
                "",
                "Gas Mileage Statistics as of 06/14/2018",
                "",
                "Input file:   /home/driver/gas_purchases.txt",
                "Output file:  /home/driver/mpg_results.txt ",
                "",
            ]
        );
    }

    #[test]
    fn test_sample_body_matches_documented_layout() {
        let text = render(SAMPLE);
        let body: Vec<&str> = text.lines().skip(6).collect();
        let expected: Vec<&str> = EXPECTED_BODY.lines().collect();
        assert_eq!(body, expected);
        assert!(text.ends_with(EXPECTED_BODY));
    }

    #[test]
    fn test_one_row_per_record_with_padded_comments() {
        let text = render(SAMPLE);
        let rows: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("----"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(rows.len(), 13);
        assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        assert!(rows[0].ends_with(&format!("  0.00  {}", " ".repeat(25))));
        assert!(text.ends_with("$0.067\n"));
    }

    #[test]
    fn test_empty_ranking_line() {
        // Every tankful is far below the plausibility band.
        let input = "01/01/2020, A, 10.000, 2.000, 20.00, 100\n\
                     01/02/2020, B, 10.000, 2.000, 20.00, 150\n";
        let text = render(input);
        assert!(text.contains("\nTen best MPGs:  \n"));
        assert!(text.contains("\nTen worst MPGs: \n"));
        assert!(text.contains("   2  01/02/2020  B"));
        assert!(text.contains("   150   5.00  "));
    }

    #[test]
    fn test_publish_writes_file_then_console() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mpg_results.txt");
        fs::write(&path, "stale contents that are longer than the report").unwrap();

        let mut console = Vec::new();
        publish("\nreport\n", &path, &mut console).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\nreport\n");
        assert_eq!(console, b"\nreport\n");
    }

    #[test]
    fn test_publish_failure_skips_console() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("mpg_results.txt");

        let mut console = Vec::new();
        let err = publish("report\n", &path, &mut console).unwrap_err();

        assert!(matches!(err, MileageError::OutputWrite { .. }));
        assert!(console.is_empty());
    }
}
