//! GDP estimation.
//!
//! The estimate is deliberately rough: population times a random
//! multiplier, divided by the exchange rate. The multiplier is drawn
//! fresh per record per cycle, so re-running a refresh on unchanged
//! inputs may change the estimate for any record with a valid rate,
//! while records without one stay at None. The draw goes through
//! [`MultiplierSource`] so tests can pin it and assert exact outputs.

use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{GDP_MULTIPLIER_MAX, GDP_MULTIPLIER_MIN, GDP_SCALE};

/// Source of the GDP multiplier draw.
pub trait MultiplierSource: Send + Sync {
    /// One uniform draw from [1000, 2000).
    fn draw(&self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngMultiplier;

impl MultiplierSource for ThreadRngMultiplier {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen_range(GDP_MULTIPLIER_MIN..GDP_MULTIPLIER_MAX)
    }
}

/// Pinned source for deterministic assertions.
#[derive(Debug, Clone, Copy)]
pub struct FixedMultiplier(pub f64);

impl MultiplierSource for FixedMultiplier {
    fn draw(&self) -> f64 {
        self.0
    }
}

/// Estimate GDP from population and an exchange rate.
///
/// - A missing, zero, or negative rate yields None for every population
///   value; "currency missing" and "code not in the snapshot" collapse
///   into the same outcome.
/// - A non-positive population with a valid rate yields exactly zero.
/// - Otherwise `population * draw / rate`, rounded to 2 decimal places
///   half-away-from-zero.
pub fn estimate(
    population: i64,
    rate: Option<Decimal>,
    multiplier: &dyn MultiplierSource,
) -> Option<Decimal> {
    let rate = rate.filter(|r| *r > Decimal::ZERO)?;

    if population <= 0 {
        return Some(Decimal::ZERO);
    }

    // The draw is bounded to [1000, 2000), always representable.
    let draw = Decimal::from_f64(multiplier.draw())?;

    Some(
        (Decimal::from(population) * draw / rate)
            .round_dp_with_strategy(GDP_SCALE, RoundingStrategy::MidpointAwayFromZero),
    )
}
