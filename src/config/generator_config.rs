use rust_decimal::Decimal;

use crate::config::ConfigError;
use crate::models::EventType;
use crate::types::{Amount, AMOUNT_SCALE, ClientId, TransactionId};

/// Relative selection weights for each event type.
///
/// The weights are consumed as cumulative thresholds against a single uniform draw, so they
/// need not sum to exactly one: whatever is left after the first four goes to chargebacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventWeights {
    pub deposit: f64,
    pub withdrawal: f64,
    pub dispute: f64,
    pub resolve: f64,
    pub chargeback: f64
}

impl EventWeights {
    /// Maps a uniform draw in `[0, 1)` onto an event type.
    pub fn select(&self, roll: f64) -> EventType {
        let mut threshold = self.deposit;

        if roll < threshold {
            return EventType::Deposit;
        }

        threshold += self.withdrawal;

        if roll < threshold {
            return EventType::Withdrawal;
        }

        threshold += self.dispute;

        if roll < threshold {
            return EventType::Dispute;
        }

        threshold += self.resolve;

        if roll < threshold {
            return EventType::Resolve;
        }

        EventType::Chargeback
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("deposit", self.deposit),
            ("withdrawal", self.withdrawal),
            ("dispute", self.dispute),
            ("resolve", self.resolve),
            ("chargeback", self.chargeback)
        ]
    }
}

impl Default for EventWeights {
    fn default() -> Self {
        Self {
            deposit: 0.40,
            withdrawal: 0.35,
            dispute: 0.15,
            resolve: 0.06,
            chargeback: 0.04
        }
    }
}

/// Bounds of the two-band amount distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountConfig {
    pub min: Amount,
    pub max: Amount,
    /// Upper edge of the "small" band and lower edge of the "large" band.
    pub small_threshold: Amount,
    pub small_probability: f64
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            min: Decimal::new(1, 2),
            max: Decimal::new(10_000, 0),
            small_threshold: Decimal::new(100, 0),
            small_probability: 0.7
        }
    }
}

/// Decimal holds at most 28 significant digits, four of which the fraction always takes.
const MAX_AMOUNT_DIGITS: u32 = 28;

impl AmountConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let limit = Decimal::from_i128_with_scale(10i128.pow(MAX_AMOUNT_DIGITS - AMOUNT_SCALE), 0);

        for (name, value) in [("min", self.min), ("threshold", self.small_threshold), ("max", self.max)] {
            if value <= Decimal::ZERO {
                return Err(ConfigError::NonPositiveAmount { name, value });
            }

            if value.normalize().scale() > AMOUNT_SCALE {
                return Err(ConfigError::AmountTooPrecise { name, value, scale: AMOUNT_SCALE });
            }

            if value >= limit {
                return Err(ConfigError::AmountTooLarge { name, value, limit, scale: AMOUNT_SCALE });
            }
        }

        if self.min > self.small_threshold || self.small_threshold > self.max || self.min >= self.max {
            return Err(ConfigError::UnorderedAmountBounds {
                min: self.min,
                threshold: self.small_threshold,
                max: self.max
            });
        }

        check_probability("small-probability", self.small_probability)
    }
}

/// Everything needed to produce one run of the ledger stream.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub clients: ClientId,
    pub events: usize,
    pub weights: EventWeights,
    pub amounts: AmountConfig,
    /// Secondary gate applied to a chargeback after one was selected and is feasible.
    pub chargeback_throttle: f64
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            clients: 1_000,
            events: 10_000_000,
            weights: EventWeights::default(),
            amounts: AmountConfig::default(),
            chargeback_throttle: 0.04
        }
    }
}

impl GeneratorConfig {
    /// Rejects configurations that cannot produce a meaningful stream.
    ///
    /// Called once before generation starts; the generator itself assumes a valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clients == 0 {
            return Err(ConfigError::NoClients);
        }

        let limit = TransactionId::MAX as usize;

        if self.events > limit {
            return Err(ConfigError::TooManyEvents { events: self.events, limit });
        }

        for (name, value) in self.weights.named() {
            check_probability(name, value)?;
        }

        check_probability("chargeback-throttle", self.chargeback_throttle)?;

        self.amounts.validate()
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { name, value });
    }

    Ok(())
}
