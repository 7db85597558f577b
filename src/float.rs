//! Continuous float domain and its sampling strategies.

use core::any::Any;
use core::fmt;

use crate::domain::{Domain, Sampled};
use crate::error::{Error, Result};
use crate::rng_util;

/// Sampling strategies attachable to a [`Float`] domain.
///
/// `Quantized` wraps any other strategy and rounds its draws to a step
/// grid; `Grid` is a sentinel marking the domain for external enumeration
/// and cannot be drawn from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatSampler {
    /// Uniform draws in `[lower, upper)`.
    Uniform,
    /// Uniform draws in log space, so each order of magnitude is equally
    /// likely.
    LogUniform {
        /// Base of the logarithm.
        base: f64,
    },
    /// Normal draws; only valid on a domain unbounded on both sides.
    Normal {
        /// Mean of the distribution.
        mean: f64,
        /// Standard deviation of the distribution.
        sd: f64,
    },
    /// Sentinel for grid search: the domain is enumerated externally.
    Grid,
    /// Wraps another sampler and rounds its draws to multiples of `q`.
    Quantized {
        /// The sampler producing raw draws.
        inner: Box<FloatSampler>,
        /// Quantization step.
        q: f64,
    },
}

impl fmt::Display for FloatSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "Uniform"),
            Self::LogUniform { .. } => write!(f, "LogUniform"),
            Self::Normal { .. } => write!(f, "Normal"),
            Self::Grid => write!(f, "Grid"),
            Self::Quantized { inner, .. } => write!(f, "Quantized({inner})"),
        }
    }
}

impl FloatSampler {
    pub(crate) fn sample(
        &self,
        domain: &Float,
        spec: Option<&dyn Any>,
        size: usize,
    ) -> Result<Sampled<f64>> {
        match self {
            Self::Uniform => {
                check_finite_bounds(domain.lower, domain.upper)?;
                let draws = rng_util::with_rng(|rng| {
                    (0..size)
                        .map(|_| rng_util::f64_range(rng, domain.lower, domain.upper))
                        .collect()
                });
                Ok(Sampled::from_draws(draws))
            }
            Self::LogUniform { base } => {
                check_log_bounds(domain.lower, domain.upper)?;
                let log_low = domain.lower.ln() / base.ln();
                let log_high = domain.upper.ln() / base.ln();
                let draws = rng_util::with_rng(|rng| {
                    (0..size)
                        .map(|_| base.powf(rng_util::f64_range(rng, log_low, log_high)))
                        .collect()
                });
                Ok(Sampled::from_draws(draws))
            }
            Self::Normal { mean, sd } => {
                if domain.lower.is_finite() || domain.upper.is_finite() {
                    return Err(Error::InvalidNormalBounds {
                        lower: domain.lower,
                        upper: domain.upper,
                    });
                }
                let draws = rng_util::with_rng(|rng| {
                    (0..size)
                        .map(|_| rng_util::normal(rng, *mean, *sd))
                        .collect()
                });
                Ok(Sampled::from_draws(draws))
            }
            Self::Grid => Err(Error::GridNotSampleable),
            Self::Quantized { inner, q } => {
                // Raw draw first, then quantize, then cast. Quantizing after
                // the cast would round differently at grid boundaries.
                let raw = inner.sample(domain, spec, size)?;
                Ok(match raw {
                    Sampled::Scalar(value) => Sampled::Scalar(domain.cast(quantize(value, *q))),
                    Sampled::Sequence(values) => Sampled::Sequence(
                        values.into_iter().map(|v| quantize(v, *q)).collect(),
                    ),
                })
            }
        }
    }
}

/// Round `value` to the nearest multiple of `q`.
fn quantize(value: f64, q: f64) -> f64 {
    (value / q).round() * q
}

/// Relative-tolerance float equality.
fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}

fn check_finite_bounds(lower: f64, upper: f64) -> Result<()> {
    if !lower.is_finite() {
        return Err(Error::MissingBound {
            sampler: "uniform",
            side: "lower",
        });
    }
    if !upper.is_finite() {
        return Err(Error::MissingBound {
            sampler: "uniform",
            side: "upper",
        });
    }
    Ok(())
}

fn check_log_bounds(lower: f64, upper: f64) -> Result<()> {
    if lower <= 0.0 || upper <= 0.0 || !upper.is_finite() {
        return Err(Error::InvalidLogBounds { lower, upper });
    }
    Ok(())
}

/// A continuous float range `[lower, upper]`.
///
/// Unbounded sides are represented by `f64::NEG_INFINITY` and
/// `f64::INFINITY` sentinels. Builder methods return a new copy with the
/// chosen sampler attached, so a base domain can seed several independent
/// chains.
///
/// # Examples
///
/// ```
/// use searchspace::{Domain, Float};
///
/// let x = Float::new(0.0, 1.0).unwrap().uniform().unwrap();
/// let v = x.sample(None, 1).unwrap().scalar().unwrap();
/// assert!((0.0..=1.0).contains(&v));
///
/// // Log-scale across four orders of magnitude
/// let lr = Float::new(1e-5, 1e-1).unwrap().loguniform(10.0).unwrap();
///
/// // Rounded to a 0.25 grid
/// let step = Float::new(0.0, 1.0)
///     .unwrap()
///     .uniform()
///     .unwrap()
///     .quantized(0.25)
///     .unwrap();
/// # let _ = (lr, step);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Float {
    lower: f64,
    upper: f64,
    sampler: Option<FloatSampler>,
}

impl Float {
    /// Creates a new float domain with the given bounds.
    ///
    /// Pass `f64::NEG_INFINITY` / `f64::INFINITY` for unbounded sides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `lower > upper` or either bound
    /// is NaN.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            sampler: None,
        })
    }

    /// A float domain unbounded on both sides, as required by
    /// [`normal`](Self::normal) sampling.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            sampler: None,
        }
    }

    /// The lower bound (`f64::NEG_INFINITY` when unbounded).
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The upper bound (`f64::INFINITY` when unbounded).
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Cast a raw draw to the domain's native type.
    #[must_use]
    pub fn cast(&self, value: f64) -> f64 {
        value
    }

    /// Returns a copy with a uniform sampler over `[lower, upper)` attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBound`] unless both bounds are finite, or
    /// [`Error::SamplerAlreadySet`] if a sampler is already attached.
    pub fn uniform(&self) -> Result<Self> {
        check_finite_bounds(self.lower, self.upper)?;
        self.set_sampler(FloatSampler::Uniform, false)
    }

    /// Returns a copy with a log-uniform sampler attached: draws are
    /// uniform in `base`-log space, so values spanning several orders of
    /// magnitude are sampled with uniform density per order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] unless `base > 0`,
    /// [`Error::InvalidLogBounds`] unless `0 < lower` and
    /// `0 < upper < f64::INFINITY`, or [`Error::SamplerAlreadySet`] if a
    /// sampler is already attached.
    pub fn loguniform(&self, base: f64) -> Result<Self> {
        if base.is_nan() || base <= 0.0 {
            return Err(Error::InvalidBase(base));
        }
        check_log_bounds(self.lower, self.upper)?;
        self.set_sampler(FloatSampler::LogUniform { base }, false)
    }

    /// Returns a copy with a normal sampler attached. The domain must be
    /// unbounded on both sides; clip externally if a bounded normal is
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStdDev`] unless `sd > 0`,
    /// [`Error::InvalidNormalBounds`] if either bound is finite, or
    /// [`Error::SamplerAlreadySet`] if a sampler is already attached.
    pub fn normal(&self, mean: f64, sd: f64) -> Result<Self> {
        if sd.is_nan() || sd <= 0.0 {
            return Err(Error::InvalidStdDev(sd));
        }
        if self.lower.is_finite() || self.upper.is_finite() {
            return Err(Error::InvalidNormalBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        self.set_sampler(FloatSampler::Normal { mean, sd }, false)
    }

    /// Returns a copy whose current sampler (default if none is attached)
    /// is wrapped in a quantizer rounding draws to multiples of `q`.
    /// Quantization makes the upper bound inclusive. An existing quantizer
    /// is replaced, not nested; this is the only builder allowed to
    /// override an attached sampler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuantizationFactor`] unless `q > 0`, or
    /// [`Error::NotDivisible`] if a finite bound is not a multiple of `q`.
    pub fn quantized(&self, q: f64) -> Result<Self> {
        if q.is_nan() || q <= 0.0 {
            return Err(Error::InvalidQuantizationFactor(q));
        }
        for bound in [self.lower, self.upper] {
            if bound.is_finite() && !is_close(bound / q, (bound / q).round()) {
                return Err(Error::NotDivisible { bound, q });
            }
        }
        let inner = match self.sampler() {
            FloatSampler::Quantized { inner, .. } => *inner,
            sampler => sampler,
        };
        self.set_sampler(
            FloatSampler::Quantized {
                inner: Box::new(inner),
                q,
            },
            true,
        )
    }
}

impl Domain for Float {
    type Value = f64;
    type Sampler = FloatSampler;

    fn default_sampler() -> FloatSampler {
        FloatSampler::Uniform
    }

    fn attached_sampler(&self) -> Option<&FloatSampler> {
        self.sampler.as_ref()
    }

    fn set_sampler(&self, sampler: FloatSampler, allow_override: bool) -> Result<Self> {
        if let Some(existing) = &self.sampler
            && !allow_override
        {
            return Err(Error::SamplerAlreadySet {
                existing: existing.to_string(),
                requested: sampler.to_string(),
            });
        }
        trace_debug!(domain = %self.domain_descriptor(), sampler = %sampler, "attaching sampler");
        let mut new = self.clone();
        new.sampler = Some(sampler);
        Ok(new)
    }

    fn sample(&self, spec: Option<&dyn Any>, size: usize) -> Result<Sampled<f64>> {
        trace_debug!(domain = %self.domain_descriptor(), size, "sampling float domain");
        self.sampler().sample(self, spec, size)
    }

    fn is_valid(&self, value: &f64) -> bool {
        (self.lower..=self.upper).contains(value)
    }

    fn is_grid(&self) -> bool {
        matches!(self.sampler, Some(FloatSampler::Grid))
    }

    fn domain_descriptor(&self) -> String {
        format!("({}, {})", self.lower, self.upper)
    }
}
