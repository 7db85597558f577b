#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Typed search-space domains and composable sampling strategies for
//! hyperparameter tuning. Describe a parameter as "a float uniformly
//! distributed in `[a, b)`", "an integer log-uniform between two powers of
//! two", or "one of these categorical values", then draw concrete samples
//! from that description — the part of a tuning system that produces
//! candidate values, with no optimizer or trial scheduling attached.
//!
//! # Getting Started
//!
//! Build a space from the convenience constructors and draw from it:
//!
//! ```
//! use searchspace::prelude::*;
//!
//! let lr = loguniform(1e-4, 1e-1, 10.0).unwrap();
//! let layers = randint(1, 5).unwrap();
//! let act = choice(vec!["relu", "sigmoid", "tanh"]).unwrap();
//!
//! let v = lr.sample(None, 1).unwrap().scalar().unwrap();
//! assert!((1e-4..=1e-1).contains(&v));
//!
//! let n = layers.sample(None, 1).unwrap().scalar().unwrap();
//! assert!((1..5).contains(&n));
//!
//! assert!(act.is_valid(&"relu"));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Float`], [`Integer`], [`Categorical`] | Describe the valid value range or set for one parameter. |
//! | [`Domain`] | Common capability surface: `sample`, `is_valid`, `is_grid`, `domain_descriptor`. |
//! | [`FloatSampler`], [`IntSampler`], [`CategoricalSampler`] | Strategies for drawing from a domain (uniform, log-uniform, normal, quantized, grid sentinel). |
//! | [`Sampled`] | Draw result: a bare scalar for single draws, a sequence otherwise. |
//! | [`PolynomialExpansionSet`] | Value holder describing a polynomial feature-expansion configuration. |
//!
//! Domains are immutable value descriptors. The builder methods
//! (`uniform()`, `loguniform(base)`, `normal(mean, sd)`, `quantized(q)`)
//! each return a new copy with the sampler attached, so one base domain can
//! seed several independent chains:
//!
//! ```
//! use searchspace::{Domain, Float};
//!
//! let base = Float::new(0.0, 10.0).unwrap();
//! let coarse = base.uniform().unwrap().quantized(2.5).unwrap();
//! let fine = base.uniform().unwrap().quantized(0.5).unwrap();
//! assert!(base.attached_sampler().is_none());
//! let _ = (coarse, fine);
//! ```
//!
//! A domain owns at most one sampler; attaching a second without an
//! explicit override is a configuration error. All configuration errors
//! surface eagerly at construction time — only sampling a grid-marked
//! domain fails at draw time, because that is a usage error.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on the domain and sampler descriptor types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at sampler attachment and draw sites | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod categorical;
mod domain;
mod error;
mod expansion;
mod float;
mod integer;
mod rng_util;
mod space;

pub use categorical::{Categorical, CategoricalSampler};
pub use domain::{Domain, Sampled};
pub use error::{Error, Result};
pub use expansion::PolynomialExpansionSet;
pub use float::{Float, FloatSampler};
pub use integer::{IntSampler, Integer};
pub use rng_util::seed;
pub use space::{
    choice, lograndint, loguniform, polynomial_expansion_set, qlograndint, qloguniform, qrandint,
    qrandn, quniform, randint, randn, uniform,
};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use searchspace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::categorical::{Categorical, CategoricalSampler};
    pub use crate::domain::{Domain, Sampled};
    pub use crate::error::{Error, Result};
    pub use crate::expansion::PolynomialExpansionSet;
    pub use crate::float::{Float, FloatSampler};
    pub use crate::integer::{IntSampler, Integer};
    pub use crate::rng_util::seed;
    pub use crate::space::{
        choice, lograndint, loguniform, polynomial_expansion_set, qlograndint, qloguniform,
        qrandint, qrandn, quniform, randint, randn, uniform,
    };
}
