//! Reproducibility of the process-wide generator.
//!
//! Kept in its own binary: the generator is process-wide, so this test
//! must not run alongside other draws.

use searchspace::{Domain, loguniform, randint, seed, uniform};

#[test]
fn seeding_makes_draws_reproducible() {
    let float = uniform(0.0, 1.0).unwrap();
    let int = randint(0, 100).unwrap();
    let log = loguniform(1.0, 1000.0, 10.0).unwrap();

    seed(42);
    let floats_a = float.sample(None, 10).unwrap().into_vec();
    let ints_a = int.sample(None, 10).unwrap().into_vec();
    let logs_a = log.sample(None, 10).unwrap().into_vec();

    seed(42);
    let floats_b = float.sample(None, 10).unwrap().into_vec();
    let ints_b = int.sample(None, 10).unwrap().into_vec();
    let logs_b = log.sample(None, 10).unwrap().into_vec();

    assert_eq!(floats_a, floats_b);
    assert_eq!(ints_a, ints_b);
    assert_eq!(logs_a, logs_b);
}
