//! Polynomial feature-expansion descriptor.

use core::fmt;
use std::collections::BTreeSet;

/// Describes a polynomial feature-expansion configuration: the starting
/// monomials, the highest polynomial order to expand to, and whether a
/// feature may interact with itself.
///
/// This is a plain value holder consumed by feature-engineering drivers;
/// it is not part of the sampling engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolynomialExpansionSet {
    init_monomials: BTreeSet<String>,
    highest_poly_order: usize,
    allow_self_inter: bool,
}

impl PolynomialExpansionSet {
    /// Creates a new expansion descriptor. When `highest_poly_order` is
    /// `None` it defaults to the number of starting monomials.
    #[must_use]
    pub fn new(
        init_monomials: BTreeSet<String>,
        highest_poly_order: Option<usize>,
        allow_self_inter: bool,
    ) -> Self {
        let highest_poly_order = highest_poly_order.unwrap_or(init_monomials.len());
        Self {
            init_monomials,
            highest_poly_order,
            allow_self_inter,
        }
    }

    /// The starting monomials.
    #[must_use]
    pub fn init_monomials(&self) -> &BTreeSet<String> {
        &self.init_monomials
    }

    /// The highest polynomial order to expand to.
    #[must_use]
    pub fn highest_poly_order(&self) -> usize {
        self.highest_poly_order
    }

    /// Whether a feature may interact with itself.
    #[must_use]
    pub fn allow_self_inter(&self) -> bool {
        self.allow_self_inter
    }
}

impl fmt::Display for PolynomialExpansionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolynomialExpansionSet")
    }
}
