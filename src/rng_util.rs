//! Process-wide random number generation.
//!
//! All domains draw from a single `fastrand::Rng` behind a mutex, so
//! sampling from several domains concurrently is safe. Seeding is the
//! caller's concern; unseeded processes start from OS entropy.

use std::sync::OnceLock;

use parking_lot::Mutex;

static PROCESS_RNG: OnceLock<Mutex<fastrand::Rng>> = OnceLock::new();

fn process_rng() -> &'static Mutex<fastrand::Rng> {
    PROCESS_RNG.get_or_init(|| Mutex::new(fastrand::Rng::new()))
}

/// Reseed the process-wide generator.
///
/// Using the same seed makes subsequent draws reproducible, provided no
/// other thread is sampling at the same time.
pub fn seed(seed: u64) {
    trace_info!(seed, "reseeding process rng");
    *process_rng().lock() = fastrand::Rng::with_seed(seed);
}

/// Run `f` with exclusive access to the process-wide generator.
pub(crate) fn with_rng<T>(f: impl FnOnce(&mut fastrand::Rng) -> T) -> T {
    f(&mut process_rng().lock())
}

/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Generate a normal variate with the given mean and standard deviation,
/// via the Box-Muller transform.
pub(crate) fn normal(rng: &mut fastrand::Rng, mean: f64, sd: f64) -> f64 {
    // 1 - f64() lies in (0, 1], keeping the logarithm finite.
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();

    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * core::f64::consts::PI * u2).cos();
    mean + z * sd
}
