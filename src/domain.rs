//! Central domain trait and the scalar-or-sequence draw result.
//!
//! A [`Domain`] is a typed description of the valid value range or set for
//! one parameter. Concrete domains ([`Float`](crate::Float),
//! [`Integer`](crate::Integer), [`Categorical`](crate::Categorical)) pair
//! the description with at most one attached sampling strategy and expose
//! the surface a search driver needs: draw values, validate externally
//! proposed values, and decide whether to enumerate instead of sample.

use core::any::Any;
use core::fmt::Display;

use crate::error::Result;

/// Common capabilities of a typed search-space domain.
///
/// Domains are immutable value descriptors: [`set_sampler`](Self::set_sampler)
/// and the per-domain builder methods return a new copy rather than
/// mutating in place, so a base domain can seed several independent
/// builder chains.
pub trait Domain: Clone {
    /// The native value type produced by sampling.
    type Value: Clone;

    /// The sampling strategies attachable to this domain.
    type Sampler: Clone + Display;

    /// The sampler used when none has been attached.
    fn default_sampler() -> Self::Sampler;

    /// The attached sampler, if any.
    fn attached_sampler(&self) -> Option<&Self::Sampler>;

    /// Returns a copy of this domain with `sampler` attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SamplerAlreadySet`](crate::Error::SamplerAlreadySet)
    /// if a sampler is already attached and `allow_override` is false.
    fn set_sampler(&self, sampler: Self::Sampler, allow_override: bool) -> Result<Self>;

    /// The attached sampler, or a freshly constructed default.
    fn sampler(&self) -> Self::Sampler {
        self.attached_sampler()
            .cloned()
            .unwrap_or_else(Self::default_sampler)
    }

    /// Draws `size` values from this domain.
    ///
    /// `spec` is an opaque context forwarded to the sampler; external
    /// drivers resolving conditional or nested spaces thread their
    /// partially resolved configuration through it. The built-in samplers
    /// never inspect it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GridNotSampleable`](crate::Error::GridNotSampleable)
    /// if the attached sampler is the grid sentinel, or a configuration
    /// error if the default sampler's bound requirements are not met.
    fn sample(&self, spec: Option<&dyn Any>, size: usize) -> Result<Sampled<Self::Value>>;

    /// Returns true if `value` lies in this domain.
    fn is_valid(&self, value: &Self::Value) -> bool;

    /// Returns true if the attached sampler marks this domain for external
    /// enumeration rather than random draws.
    fn is_grid(&self) -> bool;

    /// Human-readable rendering of the valid range, for logging and
    /// display only.
    fn domain_descriptor(&self) -> String;
}

/// The result of drawing from a domain.
///
/// A single draw collapses to a bare [`Scalar`](Self::Scalar); larger draws
/// yield a [`Sequence`](Self::Sequence).
///
/// # Examples
///
/// ```
/// use searchspace::{Domain, Float, Sampled};
///
/// let x = Float::new(0.0, 1.0).unwrap().uniform().unwrap();
/// assert!(matches!(x.sample(None, 1).unwrap(), Sampled::Scalar(_)));
/// assert_eq!(x.sample(None, 5).unwrap().len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sampled<T> {
    /// A single drawn value.
    Scalar(T),
    /// Multiple drawn values, in draw order.
    Sequence(Vec<T>),
}

impl<T> Sampled<T> {
    /// Collapses a vector of draws: exactly one element becomes a scalar,
    /// anything else stays a sequence.
    pub(crate) fn from_draws(mut draws: Vec<T>) -> Self {
        if draws.len() == 1 {
            Self::Scalar(draws.remove(0))
        } else {
            Self::Sequence(draws)
        }
    }

    /// The number of drawn values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
        }
    }

    /// Returns true if no values were drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single drawn value, or `None` for a sequence.
    #[must_use]
    pub fn scalar(self) -> Option<T> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// All drawn values as a vector, regardless of shape.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::Sequence(values) => values,
        }
    }
}
