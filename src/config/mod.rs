mod errors;
mod generator_config;

pub use errors::ConfigError;
pub use generator_config::{AmountConfig, EventWeights, GeneratorConfig};
