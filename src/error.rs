/// Errors produced while describing or drawing from a search space.
///
/// Every variant except [`Error::GridNotSampleable`] is a configuration
/// error detected eagerly when a domain or sampler is built. Grid sampling
/// fails at draw time instead: marking a domain for enumeration and then
/// drawing from it is a usage error, not a construction error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: lower ({lower}) must be less than or equal to upper ({upper})")]
    InvalidBounds {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when a sampler requires a bound the domain does not have.
    #[error("{sampler} sampling requires a finite {side} bound")]
    MissingBound {
        /// The sampler that needs the bound.
        sampler: &'static str,
        /// Which bound is missing, `"lower"` or `"upper"`.
        side: &'static str,
    },

    /// Returned when log-uniform sampling is requested with non-positive
    /// or infinite bounds.
    #[error("log-uniform requires strictly positive finite bounds, got ({lower}, {upper})")]
    InvalidLogBounds {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when normal sampling is requested on a bounded domain.
    #[error("normal sampling requires an unbounded domain, got ({lower}, {upper})")]
    InvalidNormalBounds {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when a finite bound is not divisible by the quantization
    /// factor.
    #[error("bound {bound} is not divisible by quantization factor {q}")]
    NotDivisible {
        /// The offending bound.
        bound: f64,
        /// The quantization factor.
        q: f64,
    },

    /// Returned when attaching a sampler to a domain that already has one,
    /// without an explicit override.
    #[error("domain already has sampler {existing}, tried to attach {requested}")]
    SamplerAlreadySet {
        /// The sampler currently attached.
        existing: String,
        /// The sampler whose attachment was refused.
        requested: String,
    },

    /// Returned when the logarithm base is not strictly positive.
    #[error("invalid base: {0} must be strictly positive")]
    InvalidBase(f64),

    /// Returned when the standard deviation is not strictly positive.
    #[error("invalid standard deviation: {0} must be strictly positive")]
    InvalidStdDev(f64),

    /// Returned when the quantization factor is not strictly positive.
    #[error("invalid quantization factor: {0} must be strictly positive")]
    InvalidQuantizationFactor(f64),

    /// Returned when a categorical domain is built with no categories.
    #[error("categorical categories cannot be empty")]
    EmptyCategories,

    /// Returned when an integer range contains no sampleable values
    /// (the upper bound is exclusive).
    #[error("empty integer range: [{lower}, {upper}) contains no values")]
    EmptyIntegerRange {
        /// The inclusive lower bound.
        lower: i64,
        /// The exclusive upper bound.
        upper: i64,
    },

    /// Returned when `sample()` is invoked on a grid-marked domain.
    /// Grid domains are enumerated by the search driver, never drawn.
    #[error("do not call sample() on a grid domain")]
    GridNotSampleable,
}

pub type Result<T> = core::result::Result<T, Error>;
