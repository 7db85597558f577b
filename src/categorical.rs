//! Categorical domain over an ordered list of arbitrary values.

use core::any::Any;
use core::fmt::{self, Debug};

use crate::domain::{Domain, Sampled};
use crate::error::{Error, Result};
use crate::rng_util;

/// Sampling strategies attachable to a [`Categorical`] domain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CategoricalSampler {
    /// Independent draws with replacement, uniform over the categories.
    Uniform,
    /// Sentinel for grid search: the domain is enumerated externally.
    Grid,
}

impl fmt::Display for CategoricalSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "Uniform"),
            Self::Grid => write!(f, "Grid"),
        }
    }
}

impl CategoricalSampler {
    pub(crate) fn sample<T: Clone>(
        &self,
        domain: &Categorical<T>,
        _spec: Option<&dyn Any>,
        size: usize,
    ) -> Result<Sampled<T>> {
        match self {
            Self::Uniform => {
                let draws = rng_util::with_rng(|rng| {
                    (0..size)
                        .map(|_| domain.categories[rng.usize(0..domain.categories.len())].clone())
                        .collect()
                });
                Ok(Sampled::from_draws(draws))
            }
            Self::Grid => Err(Error::GridNotSampleable),
        }
    }
}

/// A domain over an explicit list of category values.
///
/// The order of categories is significant only for indexed access, not for
/// sampling. The list must be non-empty.
///
/// # Examples
///
/// ```
/// use searchspace::{Categorical, Domain};
///
/// let opt = Categorical::new(vec!["sgd", "adam", "rmsprop"])
///     .unwrap()
///     .uniform()
///     .unwrap();
/// let picked = opt.sample(None, 1).unwrap().scalar().unwrap();
/// assert!(opt.is_valid(&picked));
/// assert_eq!(opt.len(), 3);
/// assert_eq!(opt.get(1), Some(&"adam"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Categorical<T: Clone> {
    categories: Vec<T>,
    sampler: Option<CategoricalSampler>,
}

impl<T: Clone> Categorical<T> {
    /// Creates a new categorical domain over the given values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCategories`] if `categories` is empty.
    pub fn new(categories: Vec<T>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::EmptyCategories);
        }
        Ok(Self {
            categories,
            sampler: None,
        })
    }

    /// The category values, in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[T] {
        &self.categories
    }

    /// The number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false: construction rejects empty category lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The category at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.categories.get(index)
    }

    /// Cast is the identity for categorical values.
    #[must_use]
    pub fn cast(&self, value: T) -> T {
        value
    }

    /// Returns a copy with a uniform sampler attached: draws are
    /// independent and with replacement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SamplerAlreadySet`] if a sampler is already
    /// attached.
    pub fn uniform(&self) -> Result<Self>
    where
        T: Debug + PartialEq,
    {
        self.set_sampler(CategoricalSampler::Uniform, false)
    }
}

impl<T: Clone + Debug + PartialEq> Domain for Categorical<T> {
    type Value = T;
    type Sampler = CategoricalSampler;

    fn default_sampler() -> CategoricalSampler {
        CategoricalSampler::Uniform
    }

    fn attached_sampler(&self) -> Option<&CategoricalSampler> {
        self.sampler.as_ref()
    }

    fn set_sampler(&self, sampler: CategoricalSampler, allow_override: bool) -> Result<Self> {
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

    fn sample(&self, spec: Option<&dyn Any>, size: usize) -> Result<Sampled<T>> {
        trace_debug!(domain = %self.domain_descriptor(), size, "sampling categorical domain");
        self.sampler().sample(self, spec, size)
    }

    fn is_valid(&self, value: &T) -> bool {
        self.categories.contains(value)
    }

    fn is_grid(&self) -> bool {
        matches!(self.sampler, Some(CategoricalSampler::Grid))
    }

    fn domain_descriptor(&self) -> String {
        format!("{:?}", self.categories)
    }
}
