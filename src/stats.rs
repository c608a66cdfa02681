//! Run statistics over the validated purchase sequence.
//!
//! Built once by folding over the records. The first purchase feeds the
//! whole-file totals and extrema but not the MPG-scope totals, since there is
//! no earlier odometer reading to measure its tankful against.

use crate::config::Limits;
use crate::error::{MileageError, Result};
use crate::record::PurchaseRecord;
use log::debug;
use rust_decimal::Decimal;

/// A value and the 1-based purchase number it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremum {
    pub value: Decimal,
    pub number: usize,
}

/// Smallest and largest value seen. Ties keep the earliest purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub min: Extremum,
    pub max: Extremum,
}

impl Spread {
    fn seed(value: Decimal) -> Self {
        let first = Extremum { value, number: 1 };
        Spread {
            min: first,
            max: first,
        }
    }

    fn track(self, value: Decimal, number: usize) -> Self {
        let candidate = Extremum { value, number };
        Spread {
            min: if value < self.min.value { candidate } else { self.min },
            max: if value > self.max.value { candidate } else { self.max },
        }
    }
}

/// Everything the report needs, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStatistics {
    pub record_count: usize,
    /// MPG per purchase in file order; the first entry is always zero.
    pub economies: Vec<Decimal>,
    pub gallons: Spread,
    pub price: Spread,
    pub cost: Spread,
    pub total_gallons: Decimal,
    pub total_cost: Decimal,
    /// Gallons from the second purchase onward.
    pub mpg_gallons: Decimal,
    /// Miles driven between the first and last purchase.
    pub mpg_miles: u64,
    pub overall_economy: Decimal,
    pub average_gallons: Decimal,
    /// Total cost over total gallons, so larger purchases weigh more.
    pub average_price: Decimal,
    pub average_cost: Decimal,
    /// Cost after the first purchase over MPG-scope miles.
    pub cost_per_mile: Decimal,
    /// Highest plausible MPG values, descending.
    pub best: Vec<Decimal>,
    /// Lowest plausible MPG values, ascending.
    pub worst: Vec<Decimal>,
}

/// Running state of the fold.
struct Accumulator {
    economies: Vec<Decimal>,
    gallons: Spread,
    price: Spread,
    cost: Spread,
    total_gallons: Decimal,
    total_cost: Decimal,
    mpg_gallons: Decimal,
    mpg_miles: u64,
}

impl Accumulator {
    fn seed(first: &PurchaseRecord) -> Self {
        Accumulator {
            economies: vec![Decimal::ZERO],
            gallons: Spread::seed(first.gallons),
            price: Spread::seed(first.price_per_gallon),
            cost: Spread::seed(first.total_cost),
            total_gallons: first.gallons,
            total_cost: first.total_cost,
            mpg_gallons: Decimal::ZERO,
            mpg_miles: 0,
        }
    }

    fn absorb(mut self, number: usize, previous: &PurchaseRecord, current: &PurchaseRecord) -> Self {
        let miles = current.odometer.saturating_sub(previous.odometer);

        self.economies.push(ratio(Decimal::from(miles), current.gallons));
        self.gallons = self.gallons.track(current.gallons, number);
        self.price = self.price.track(current.price_per_gallon, number);
        self.cost = self.cost.track(current.total_cost, number);
        self.total_gallons += current.gallons;
        self.total_cost += current.total_cost;
        self.mpg_gallons += current.gallons;
        self.mpg_miles += miles;
        self
    }
}

impl RunStatistics {
    /// Folds over `records`, which must already be validated and in file order.
    pub fn compute(records: &[PurchaseRecord], limits: &Limits) -> Result<Self> {
        let first = match records {
            [first, _, ..] => first,
            _ => {
                return Err(MileageError::InsufficientData {
                    records: records.len(),
                })
            }
        };

        let acc = records
            .windows(2)
            .enumerate()
            .fold(Accumulator::seed(first), |acc, (idx, pair)| {
                acc.absorb(idx + 2, &pair[0], &pair[1])
            });

        if acc.mpg_miles == 0 {
            return Err(MileageError::NoDistance);
        }

        let count = Decimal::from(records.len());
        let miles = Decimal::from(acc.mpg_miles);
        let (best, worst) = rank(&acc.economies, limits);

        let stats = RunStatistics {
            record_count: records.len(),
            overall_economy: ratio(miles, acc.mpg_gallons),
            average_gallons: ratio(acc.total_gallons, count),
            average_price: ratio(acc.total_cost, acc.total_gallons),
            average_cost: ratio(acc.total_cost, count),
            cost_per_mile: ratio(acc.total_cost - first.total_cost, miles),
            best,
            worst,
            economies: acc.economies,
            gallons: acc.gallons,
            price: acc.price,
            cost: acc.cost,
            total_gallons: acc.total_gallons,
            total_cost: acc.total_cost,
            mpg_gallons: acc.mpg_gallons,
            mpg_miles: acc.mpg_miles,
        };

        debug!(
            "Overall MPG {} over {} miles, {} gallons",
            stats.overall_economy, stats.mpg_miles, stats.mpg_gallons
        );
        Ok(stats)
    }
}

/// Best and worst MPG lists. Values outside the plausibility band are
/// dropped from both lists, though they stay in the per-purchase table.
fn rank(economies: &[Decimal], limits: &Limits) -> (Vec<Decimal>, Vec<Decimal>) {
    let mut plausible: Vec<Decimal> = economies
        .iter()
        .copied()
        .filter(|v| (limits.min_mpg..=limits.max_mpg).contains(v))
        .collect();
    plausible.sort_unstable_by(|a, b| b.cmp(a));

    let best = plausible.iter().take(limits.ranking_len).copied().collect();
    let worst = plausible.iter().rev().take(limits.ranking_len).copied().collect();

    (best, worst)
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
