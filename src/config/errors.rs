use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Configuration error: at least one client is required")]
    NoClients,
    #[error("Configuration error: [{events}] events exceed the transaction id space of [{limit}]")]
    TooManyEvents {
        events: usize,
        limit: usize
    },
    #[error("Configuration error: probability [{name}] must be within [0, 1], got [{value}]")]
    InvalidProbability {
        name: &'static str,
        value: f64
    },
    #[error("Configuration error: amount bound [{name}] must be positive, got [{value}]")]
    NonPositiveAmount {
        name: &'static str,
        value: Decimal
    },
    #[error("Configuration error: amount bound [{name}] has more than {scale} decimal places: [{value}]")]
    AmountTooPrecise {
        name: &'static str,
        value: Decimal,
        scale: u32
    },
    #[error("Configuration error: amount bound [{name}] must stay below [{limit}] to keep {scale} decimal places, got [{value}]")]
    AmountTooLarge {
        name: &'static str,
        value: Decimal,
        limit: Decimal,
        scale: u32
    },
    #[error("Configuration error: amount bounds must satisfy min <= threshold <= max and min < max, got [{min}] <= [{threshold}] <= [{max}]")]
    UnorderedAmountBounds {
        min: Decimal,
        threshold: Decimal,
        max: Decimal
    }
}
