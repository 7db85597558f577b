//! Convenience constructors building a domain and attaching its sampler in
//! one call.
//!
//! Each function is a one-line composition of the builder chain on the
//! underlying domain type; the semantics (bound requirements, inclusivity,
//! quantization) are documented on the builders themselves.

use core::fmt::Debug;
use std::collections::BTreeSet;

use crate::categorical::Categorical;
use crate::error::Result;
use crate::expansion::PolynomialExpansionSet;
use crate::float::Float;
use crate::integer::Integer;

/// A float drawn uniformly between `lower` and `upper`.
///
/// # Errors
///
/// Returns an error if either bound is infinite or the bounds are
/// inverted.
pub fn uniform(lower: f64, upper: f64) -> Result<Float> {
    Float::new(lower, upper)?.uniform()
}

/// A float drawn uniformly between `lower` and `upper`, rounded to an
/// increment of `q`. Quantization makes the upper bound inclusive.
///
/// # Errors
///
/// Returns an error if either bound is infinite, the bounds are inverted,
/// or a bound is not divisible by `q`.
pub fn quniform(lower: f64, upper: f64, q: f64) -> Result<Float> {
    Float::new(lower, upper)?.uniform()?.quantized(q)
}

/// A float drawn log-uniformly between `lower` and `upper`, with `base`
/// as the base of the logarithm — sugar for sampling in different orders
/// of magnitude.
///
/// # Errors
///
/// Returns an error unless `0 < lower <= upper < inf` and `base > 0`.
pub fn loguniform(lower: f64, upper: f64, base: f64) -> Result<Float> {
    Float::new(lower, upper)?.loguniform(base)
}

/// A float drawn log-uniformly between `lower` and `upper`, rounded to an
/// increment of `q`. Quantization makes the upper bound inclusive.
///
/// # Errors
///
/// Returns an error unless `0 < lower <= upper < inf`, `base > 0`, and
/// both bounds are divisible by `q`.
pub fn qloguniform(lower: f64, upper: f64, q: f64, base: f64) -> Result<Float> {
    Float::new(lower, upper)?.loguniform(base)?.quantized(q)
}

/// A categorical value drawn uniformly from `categories`.
///
/// # Errors
///
/// Returns an error if `categories` is empty.
pub fn choice<T: Clone + Debug + PartialEq>(categories: Vec<T>) -> Result<Categorical<T>> {
    Categorical::new(categories)?.uniform()
}

/// An integer drawn uniformly between `lower` (inclusive) and `upper`
/// (exclusive).
///
/// # Errors
///
/// Returns an error if the bounds are inverted or the half-open range is
/// empty.
pub fn randint(lower: i64, upper: i64) -> Result<Integer> {
    Integer::new(lower, upper)?.uniform()
}

/// An integer drawn log-uniformly between `lower` and `upper`, with
/// `base` as the base of the logarithm.
///
/// # Errors
///
/// Returns an error unless `lower > 0`, the bounds are ordered, and
/// `base > 0`.
pub fn lograndint(lower: i64, upper: i64, base: f64) -> Result<Integer> {
    Integer::new(lower, upper)?.loguniform(base)
}

/// An integer drawn uniformly between `lower` and `upper`, rounded to an
/// increment of `q`. Quantization makes the upper bound inclusive.
///
/// # Errors
///
/// Returns an error if the bounds are inverted, the range is empty, or
/// `q <= 0`.
pub fn qrandint(lower: i64, upper: i64, q: i64) -> Result<Integer> {
    Integer::new(lower, upper)?.uniform()?.quantized(q)
}

/// An integer drawn log-uniformly between `lower` and `upper`, rounded to
/// an increment of `q`. Quantization makes the upper bound inclusive.
///
/// # Errors
///
/// Returns an error unless `lower > 0`, the bounds are ordered,
/// `base > 0`, and `q > 0`.
pub fn qlograndint(lower: i64, upper: i64, q: i64, base: f64) -> Result<Integer> {
    Integer::new(lower, upper)?.loguniform(base)?.quantized(q)
}

/// A float drawn normally with the given `mean` and `sd`, on an unbounded
/// domain.
///
/// # Errors
///
/// Returns an error unless `sd > 0`.
pub fn randn(mean: f64, sd: f64) -> Result<Float> {
    Float::unbounded().normal(mean, sd)
}

/// A float drawn normally with the given `mean` and `sd`, rounded to an
/// increment of `q`.
///
/// # Errors
///
/// Returns an error unless `sd > 0` and `q > 0`.
pub fn qrandn(mean: f64, sd: f64, q: f64) -> Result<Float> {
    Float::unbounded().normal(mean, sd)?.quantized(q)
}

/// A polynomial feature-expansion descriptor. When `highest_poly_order`
/// is `None` it defaults to the number of starting monomials.
#[must_use]
pub fn polynomial_expansion_set(
    init_monomials: BTreeSet<String>,
    highest_poly_order: Option<usize>,
    allow_self_inter: bool,
) -> PolynomialExpansionSet {
    PolynomialExpansionSet::new(init_monomials, highest_poly_order, allow_self_inter)
}
