use super::amount_sampler::round_half_up;
use super::AmountSampler;
use crate::config::AmountConfig;

use std::str::FromStr;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

#[test]
fn test_sampled_amounts_stay_within_bounds_with_four_decimal_places() {
    let config = AmountConfig::default();
    let sampler = AmountSampler::new(&config);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10_000 {
        let amount = sampler.sample(&mut rng);

        assert!(amount >= config.min && amount <= config.max, "{amount} out of bounds");
        assert_eq!(amount.scale(), 4);
        assert_eq!(amount.to_string().split('.').nth(1).map(str::len), Some(4));
    }
}

#[test]
fn test_small_probability_of_one_keeps_amounts_in_small_band() {
    let config = AmountConfig { small_probability: 1.0, ..AmountConfig::default() };
    let sampler = AmountSampler::new(&config);
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1_000 {
        assert!(sampler.sample(&mut rng) <= config.small_threshold);
    }
}

#[test]
fn test_small_probability_of_zero_keeps_amounts_in_large_band() {
    let config = AmountConfig { small_probability: 0.0, ..AmountConfig::default() };
    let sampler = AmountSampler::new(&config);
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..1_000 {
        assert!(sampler.sample(&mut rng) >= config.small_threshold);
    }
}

#[test]
fn test_small_band_is_drawn_roughly_at_configured_rate() {
    let config = AmountConfig::default();
    let sampler = AmountSampler::new(&config);
    let mut rng = StdRng::seed_from_u64(17);

    let samples = 20_000;
    let small = (0..samples)
        .filter(|_| sampler.sample(&mut rng) < config.small_threshold)
        .count();
    let ratio = small as f64 / samples as f64;

    assert!((0.67..0.73).contains(&ratio), "small ratio {ratio}");
}

#[test]
fn test_degenerate_band_yields_the_bound_itself() -> Result<()> {
    let config = AmountConfig {
        min: Decimal::from_str("5")?,
        small_threshold: Decimal::from_str("5")?,
        max: Decimal::from_str("6")?,
        small_probability: 1.0
    };
    let sampler = AmountSampler::new(&config);
    let mut rng = StdRng::seed_from_u64(19);

    assert_eq!(sampler.sample(&mut rng).to_string(), "5.0000");

    Ok(())
}

#[test]
fn test_same_seed_reproduces_the_same_amounts() {
    let sampler = AmountSampler::new(&AmountConfig::default());
    let mut first = StdRng::seed_from_u64(23);
    let mut second = StdRng::seed_from_u64(23);

    for _ in 0..100 {
        assert_eq!(sampler.sample(&mut first), sampler.sample(&mut second));
    }
}

#[test]
fn test_rounding_sends_midpoints_up() -> Result<()> {
    let test_cases = vec![
        ("1.23455", "1.2346"),
        ("1.23445", "1.2345"),
        ("2.00005", "2.0001"),
        ("2.00004", "2.0000"),
        ("99.99995", "100.0000"),
        ("0.01", "0.01")
    ];

    for (input, expected) in test_cases {
        assert_eq!(round_half_up(Decimal::from_str(input)?).to_string(), expected);
    }

    Ok(())
}

#[test]
fn test_largest_accepted_bounds_keep_four_decimal_places() -> Result<()> {
    let config = AmountConfig {
        min: Decimal::from_str("1")?,
        small_threshold: Decimal::from_str("100")?,
        max: Decimal::from_str("999999999999999999999999.9999")?,
        small_probability: 0.0
    };
    let sampler = AmountSampler::new(&config);
    let mut rng = StdRng::seed_from_u64(29);

    for _ in 0..1_000 {
        let amount = sampler.sample(&mut rng);

        assert_eq!(amount.scale(), 4, "{amount} lost decimal places");
        assert!(amount >= config.small_threshold && amount <= config.max);
    }

    Ok(())
}
