mod amount_sampler;
#[cfg(test)]
mod tests;

pub use amount_sampler::AmountSampler;
