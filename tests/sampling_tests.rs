//! Integration tests for draw semantics and statistical properties.

use searchspace::{Domain, Sampled, choice, loguniform, qrandn, quniform, randint, randn, uniform};

// =============================================================================
// Scalar-or-sequence result shape
// =============================================================================

#[test]
fn size_one_collapses_to_a_scalar() {
    let domain = uniform(0.0, 1.0).unwrap();
    assert!(matches!(domain.sample(None, 1).unwrap(), Sampled::Scalar(_)));
}

#[test]
fn larger_sizes_return_sequences_of_that_length() {
    let domain = uniform(0.0, 1.0).unwrap();
    let sampled = domain.sample(None, 100).unwrap();
    assert!(matches!(sampled, Sampled::Sequence(_)));
    assert_eq!(sampled.len(), 100);
}

// =============================================================================
// Bounds membership
// =============================================================================

#[test]
fn uniform_float_draws_respect_bounds() {
    let domain = uniform(-5.0, 5.0).unwrap();
    for value in domain.sample(None, 10_000).unwrap().into_vec() {
        assert!((-5.0..=5.0).contains(&value));
    }
}

#[test]
fn uniform_integer_upper_bound_never_appears() {
    let domain = randint(0, 10).unwrap();
    for value in domain.sample(None, 10_000).unwrap().into_vec() {
        assert!((0..10).contains(&value), "drew {value}, upper is exclusive");
    }
}

#[test]
fn randint_scenario_never_draws_the_upper_bound() {
    let domain = randint(1, 5).unwrap();
    let values = domain.sample(None, 5).unwrap().into_vec();
    assert_eq!(values.len(), 5);
    for value in values {
        assert!((1..5).contains(&value));
    }
}

#[test]
fn categorical_draws_are_members() {
    let domain = choice(vec!["a", "b", "c"]).unwrap();
    let values = domain.sample(None, 3).unwrap().into_vec();
    assert_eq!(values.len(), 3);
    for value in values {
        assert!(["a", "b", "c"].contains(&value));
    }
}

// =============================================================================
// Quantization grids
// =============================================================================

#[test]
fn quantized_uniform_lands_on_the_step_grid() {
    let domain = quniform(0.0, 10.0, 2.5).unwrap();
    for _ in 0..100 {
        let value = domain.sample(None, 1).unwrap().scalar().unwrap();
        assert!(
            [0.0, 2.5, 5.0, 7.5, 10.0].contains(&value),
            "{value} is off the 2.5 grid"
        );
    }
}

#[test]
fn quantized_sequences_land_on_the_step_grid() {
    let domain = quniform(0.0, 10.0, 2.5).unwrap();
    for value in domain.sample(None, 1000).unwrap().into_vec() {
        let steps = value / 2.5;
        assert!(
            (steps - steps.round()).abs() < 1e-9,
            "{value} is off the 2.5 grid"
        );
    }
}

#[test]
fn quantized_normal_lands_on_the_step_grid() {
    let domain = qrandn(0.0, 1.0, 0.5).unwrap();
    for value in domain.sample(None, 1000).unwrap().into_vec() {
        let steps = value / 0.5;
        assert!(
            (steps - steps.round()).abs() < 1e-9,
            "{value} is off the 0.5 grid"
        );
    }
}

// =============================================================================
// Distribution shapes
// =============================================================================

#[test]
fn loguniform_is_uniform_per_order_of_magnitude() {
    // Over [1, 100] with base 10, each decade should receive about half
    // of the draws.
    let domain = loguniform(1.0, 100.0, 10.0).unwrap();
    let values = domain.sample(None, 10_000).unwrap().into_vec();

    let mut first_decade = 0_usize;
    for value in &values {
        assert!((1.0..=100.0).contains(value));
        if *value < 10.0 {
            first_decade += 1;
        }
    }

    // 10 sigma tolerance around the expected 5000.
    assert!(
        (4500..=5500).contains(&first_decade),
        "{first_decade} of 10000 draws in [1, 10), expected about half"
    );
}

#[test]
fn loguniform_histogram_is_flat_in_log_space() {
    let domain = loguniform(1.0, 100.0, 10.0).unwrap();
    let values = domain.sample(None, 10_000).unwrap().into_vec();

    // Bucket by log10 into 10 equal-width bins over [0, 2].
    let mut buckets = [0_usize; 10];
    for value in values {
        let position = (value.log10() / 2.0 * 10.0).floor() as usize;
        buckets[position.min(9)] += 1;
    }

    for (i, count) in buckets.iter().enumerate() {
        assert!(
            (700..=1300).contains(count),
            "bucket {i} holds {count} draws, expected about 1000"
        );
    }
}

#[test]
fn uniform_float_covers_the_range_evenly() {
    let domain = uniform(0.0, 1.0).unwrap();
    let values = domain.sample(None, 10_000).unwrap().into_vec();
    let below_half = values.iter().filter(|v| **v < 0.5).count();
    assert!(
        (4500..=5500).contains(&below_half),
        "{below_half} of 10000 draws below 0.5"
    );
}

#[test]
fn uniform_integer_hits_every_value() {
    let domain = randint(0, 5).unwrap();
    let mut seen = [false; 5];
    for value in domain.sample(None, 1000).unwrap().into_vec() {
        seen[usize::try_from(value).unwrap()] = true;
    }
    assert!(seen.iter().all(|s| *s), "some values in [0, 5) never drawn");
}

#[test]
fn normal_draws_center_on_the_mean() {
    let domain = randn(3.0, 2.0).unwrap();
    let values = domain.sample(None, 10_000).unwrap().into_vec();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    assert!((mean - 3.0).abs() < 0.15, "sample mean {mean} too far from 3");
}

// =============================================================================
// Repeated draws
// =============================================================================

#[test]
fn sequential_draws_are_independent() {
    // 40 draws from a continuous range collide with probability ~0.
    let domain = uniform(0.0, 1.0).unwrap();
    let mut values: Vec<f64> = (0..40)
        .map(|_| domain.sample(None, 1).unwrap().scalar().unwrap())
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    assert_eq!(values.len(), 40, "continuous draws should not repeat");
}
