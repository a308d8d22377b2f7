use rand::Rng;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::AmountConfig;
use crate::types::{Amount, AMOUNT_SCALE};

/// Draws deposit and withdrawal amounts from a two-band uniform distribution.
///
/// With `small_probability` the amount comes from `[min, small_threshold]`, otherwise from
/// `[small_threshold, max]`. Results are rounded half-up to four decimal places.
#[derive(Debug, Clone)]
pub struct AmountSampler {
    min: Amount,
    max: Amount,
    small_probability: f64,
    lower: f64,
    threshold: f64,
    upper: f64
}

impl AmountSampler {
    pub fn new(config: &AmountConfig) -> Self {
        Self {
            min: config.min,
            max: config.max,
            small_probability: config.small_probability,
            lower: as_f64(config.min),
            threshold: as_f64(config.small_threshold),
            upper: as_f64(config.max)
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Amount {
        let raw = if rng.random_bool(self.small_probability) {
            rng.random_range(self.lower..=self.threshold)
        } else {
            rng.random_range(self.threshold..=self.upper)
        };

        let mut amount = Decimal::from_f64(raw)
            .map(round_half_up)
            .unwrap_or(self.min)
            .clamp(self.min, self.max);

        amount.rescale(AMOUNT_SCALE);
        amount
    }
}

/// Rounds to four decimal places, midpoints away from zero.
pub(super) fn round_half_up(value: Amount) -> Amount {
    value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn as_f64(value: Amount) -> f64 {
    value.to_f64().unwrap_or_default()
}
