//! Integer domain and its sampling strategies.
//!
//! Uniform integer draws use a half-open range: `lower` inclusive, `upper`
//! exclusive. This differs from the float domain's closed interval and is
//! relied upon by `randint` callers, so it is part of the contract.

use core::any::Any;
use core::fmt;

use crate::domain::{Domain, Sampled};
use crate::error::{Error, Result};
use crate::rng_util;

/// Sampling strategies attachable to an [`Integer`] domain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntSampler {
    /// Uniform draws in `[lower, upper)`.
    Uniform,
    /// Uniform draws in log space, rounded to the nearest integer.
    LogUniform {
        /// Base of the logarithm.
        base: f64,
    },
    /// Sentinel for grid search: the domain is enumerated externally.
    Grid,
    /// Wraps another sampler and rounds its draws to multiples of `q`.
    Quantized {
        /// The sampler producing raw draws.
        inner: Box<IntSampler>,
        /// Quantization step.
        q: i64,
    },
}

impl fmt::Display for IntSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "Uniform"),
            Self::LogUniform { .. } => write!(f, "LogUniform"),
            Self::Grid => write!(f, "Grid"),
            Self::Quantized { inner, .. } => write!(f, "Quantized({inner})"),
        }
    }
}

impl IntSampler {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub(crate) fn sample(
        &self,
        domain: &Integer,
        spec: Option<&dyn Any>,
        size: usize,
    ) -> Result<Sampled<i64>> {
        match self {
            Self::Uniform => {
                if domain.lower >= domain.upper {
                    return Err(Error::EmptyIntegerRange {
                        lower: domain.lower,
                        upper: domain.upper,
                    });
                }
                let draws = rng_util::with_rng(|rng| {
                    (0..size)
                        .map(|_| rng.i64(domain.lower..domain.upper))
                        .collect()
                });
                Ok(Sampled::from_draws(draws))
            }
            Self::LogUniform { base } => {
                if domain.lower <= 0 {
                    return Err(Error::InvalidLogBounds {
                        lower: domain.lower as f64,
                        upper: domain.upper as f64,
                    });
                }
                let log_low = (domain.lower as f64).ln() / base.ln();
                let log_high = (domain.upper as f64).ln() / base.ln();
                // Round to the nearest integer, never truncate; rounding may
                // land on the upper bound.
                let draws = rng_util::with_rng(|rng| {
                    (0..size)
                        .map(|_| {
                            base.powf(rng_util::f64_range(rng, log_low, log_high)).round() as i64
                        })
                        .collect()
                });
                Ok(Sampled::from_draws(draws))
            }
            Self::Grid => Err(Error::GridNotSampleable),
            Self::Quantized { inner, q } => {
                // Raw draw first, then quantize in float space, then cast
                // back to the native integer type.
                let raw = inner.sample(domain, spec, size)?;
                let q = *q as f64;
                let quantize = |v: i64| domain.cast(((v as f64) / q).round() * q);
                Ok(match raw {
                    Sampled::Scalar(value) => Sampled::Scalar(quantize(value)),
                    Sampled::Sequence(values) => {
                        Sampled::Sequence(values.into_iter().map(quantize).collect())
                    }
                })
            }
        }
    }
}

/// An integer range with `lower` inclusive and, for uniform sampling,
/// `upper` exclusive.
///
/// # Examples
///
/// ```
/// use searchspace::{Domain, Integer};
///
/// let layers = Integer::new(1, 5).unwrap().uniform().unwrap();
/// let n = layers.sample(None, 1).unwrap().scalar().unwrap();
/// assert!((1..5).contains(&n));
///
/// // Log-scale batch sizes, stepped to multiples of 8
/// let batch = Integer::new(8, 1024)
///     .unwrap()
///     .loguniform(2.0)
///     .unwrap()
///     .quantized(8)
///     .unwrap();
/// # let _ = batch;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integer {
    lower: i64,
    upper: i64,
    sampler: Option<IntSampler>,
}

impl Integer {
    /// Creates a new integer domain with the given bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `lower > upper`.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        if lower > upper {
            return Err(Error::InvalidBounds {
                lower: lower as f64,
                upper: upper as f64,
            });
        }
        Ok(Self {
            lower,
            upper,
            sampler: None,
        })
    }

    /// The inclusive lower bound.
    #[must_use]
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// The upper bound; exclusive under uniform sampling, inclusive for
    /// validity checks.
    #[must_use]
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// Cast a raw draw to the domain's native type, truncating toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn cast(&self, value: f64) -> i64 {
        value as i64
    }

    /// Returns a copy with a uniform sampler over `[lower, upper)` attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIntegerRange`] if the half-open range holds no
    /// values, or [`Error::SamplerAlreadySet`] if a sampler is already
    /// attached.
    pub fn uniform(&self) -> Result<Self> {
        if self.lower >= self.upper {
            return Err(Error::EmptyIntegerRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        self.set_sampler(IntSampler::Uniform, false)
    }

    /// Returns a copy with a log-uniform sampler attached: draws are
    /// uniform in `base`-log space and rounded to the nearest integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase`] unless `base > 0`,
    /// [`Error::InvalidLogBounds`] unless `lower > 0`, or
    /// [`Error::SamplerAlreadySet`] if a sampler is already attached.
    #[allow(clippy::cast_precision_loss)]
    pub fn loguniform(&self, base: f64) -> Result<Self> {
        if base.is_nan() || base <= 0.0 {
            return Err(Error::InvalidBase(base));
        }
        if self.lower <= 0 {
            return Err(Error::InvalidLogBounds {
                lower: self.lower as f64,
                upper: self.upper as f64,
            });
        }
        self.set_sampler(IntSampler::LogUniform { base }, false)
    }

    /// Returns a copy whose current sampler (default if none is attached)
    /// is wrapped in a quantizer rounding draws to multiples of `q`.
    /// Quantization makes the upper bound inclusive. Unlike the float
    /// domain there is no divisibility check on the bounds. An existing
    /// quantizer is replaced, not nested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuantizationFactor`] unless `q > 0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn quantized(&self, q: i64) -> Result<Self> {
        if q <= 0 {
            return Err(Error::InvalidQuantizationFactor(q as f64));
        }
        let inner = match self.sampler() {
            IntSampler::Quantized { inner, .. } => *inner,
            sampler => sampler,
        };
        self.set_sampler(
            IntSampler::Quantized {
                inner: Box::new(inner),
                q,
            },
            true,
        )
    }
}

impl Domain for Integer {
    type Value = i64;
    type Sampler = IntSampler;

    fn default_sampler() -> IntSampler {
        IntSampler::Uniform
    }

    fn attached_sampler(&self) -> Option<&IntSampler> {
        self.sampler.as_ref()
    }

    fn set_sampler(&self, sampler: IntSampler, allow_override: bool) -> Result<Self> {
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

    fn sample(&self, spec: Option<&dyn Any>, size: usize) -> Result<Sampled<i64>> {
        trace_debug!(domain = %self.domain_descriptor(), size, "sampling integer domain");
        self.sampler().sample(self, spec, size)
    }

    fn is_valid(&self, value: &i64) -> bool {
        (self.lower..=self.upper).contains(value)
    }

    fn is_grid(&self) -> bool {
        matches!(self.sampler, Some(IntSampler::Grid))
    }

    fn domain_descriptor(&self) -> String {
        format!("({}, {})", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(matches!(
            Integer::new(10, 1),
            Err(Error::InvalidBounds { .. })
        ));
    }

    #[test]
    fn uniform_upper_bound_is_exclusive() {
        let domain = Integer::new(0, 10).unwrap().uniform().unwrap();
        for value in domain.sample(None, 10_000).unwrap().into_vec() {
            assert!((0..10).contains(&value), "value {value} out of [0, 10)");
        }
    }

    #[test]
    fn uniform_rejects_empty_range() {
        assert!(matches!(
            Integer::new(5, 5).unwrap().uniform(),
            Err(Error::EmptyIntegerRange { .. })
        ));
    }

    #[test]
    fn default_sampler_rejects_empty_range_at_draw_time() {
        let domain = Integer::new(5, 5).unwrap();
        assert!(matches!(
            domain.sample(None, 1),
            Err(Error::EmptyIntegerRange { .. })
        ));
    }

    #[test]
    fn loguniform_requires_positive_lower() {
        assert!(matches!(
            Integer::new(0, 10).unwrap().loguniform(10.0),
            Err(Error::InvalidLogBounds { .. })
        ));
    }

    #[test]
    fn loguniform_draws_whole_range() {
        let domain = Integer::new(1, 1000).unwrap().loguniform(10.0).unwrap();
        for value in domain.sample(None, 500).unwrap().into_vec() {
            assert!((1..=1000).contains(&value));
        }
    }

    #[test]
    fn quantized_skips_divisibility_check() {
        // (1, 10) is not divisible by 3; integer quantization allows it.
        assert!(
            Integer::new(1, 10)
                .unwrap()
                .uniform()
                .unwrap()
                .quantized(3)
                .is_ok()
        );
    }

    #[test]
    fn quantized_draws_are_multiples_of_step() {
        let domain = Integer::new(0, 10)
            .unwrap()
            .uniform()
            .unwrap()
            .quantized(3)
            .unwrap();
        for value in domain.sample(None, 200).unwrap().into_vec() {
            assert_eq!(value % 3, 0, "value {value} not on the step grid");
        }
    }

    #[test]
    fn quantized_replaces_existing_quantizer() {
        let domain = Integer::new(0, 12)
            .unwrap()
            .uniform()
            .unwrap()
            .quantized(3)
            .unwrap()
            .quantized(2)
            .unwrap();
        assert_eq!(
            domain.attached_sampler(),
            Some(&IntSampler::Quantized {
                inner: Box::new(IntSampler::Uniform),
                q: 2,
            })
        );
    }

    #[test]
    fn second_sampler_needs_override() {
        let domain = Integer::new(1, 10).unwrap().uniform().unwrap();
        assert!(matches!(
            domain.loguniform(10.0),
            Err(Error::SamplerAlreadySet { .. })
        ));
    }

    #[test]
    fn is_valid_keeps_upper_inclusive() {
        // Validity is a closed interval even though uniform draws exclude
        // the upper bound.
        let domain = Integer::new(0, 10).unwrap();
        assert!(domain.is_valid(&0));
        assert!(domain.is_valid(&10));
        assert!(!domain.is_valid(&11));
    }

    #[test]
    fn grid_domain_reports_and_refuses() {
        let domain = Integer::new(0, 10)
            .unwrap()
            .set_sampler(IntSampler::Grid, false)
            .unwrap();
        assert!(domain.is_grid());
        assert!(matches!(
            domain.sample(None, 1),
            Err(Error::GridNotSampleable)
        ));
    }

    #[test]
    fn cast_truncates_toward_zero() {
        let domain = Integer::new(0, 10).unwrap();
        assert_eq!(domain.cast(7.0), 7);
        assert_eq!(domain.cast(7.9), 7);
    }

    #[test]
    fn descriptor_renders_bounds() {
        assert_eq!(Integer::new(0, 10).unwrap().domain_descriptor(), "(0, 10)");
    }

    #[test]
    fn accessors_expose_bounds() {
        let domain = Integer::new(2, 8).unwrap();
        assert_eq!(domain.lower(), 2);
        assert_eq!(domain.upper(), 8);
    }
}
