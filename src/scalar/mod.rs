//! # Numeric policy
//!
//! One scalar type is chosen per computation and every stage of a reduction
//! runs over it. The reference behavior (pivot tie-breaking, zero tests)
//! assumes exact arithmetic, so the rational types are the default choice:
//!
//! - [`BigRational`] — exact, arbitrary-precision components;
//! - [`Rational64`] — exact with `i64` components, enough for small matrices;
//! - `f64` — floating point. Zero tests stay exact comparisons; callers
//!   substituting floats must pre-round values that should compare equal to
//!   zero, or near-zero residue will be treated as a usable pivot.

use num_traits::Signed;

pub use num_rational::{BigRational, Rational64};

/// Element type a reduction can run over.
///
/// Covers everything the pivoting and elimination steps need: field
/// arithmetic with division, signed magnitude for partial pivoting, and exact
/// zero/one tests, all supplied by the `num-traits` hierarchy.
pub trait Scalar: Clone + Signed + PartialOrd {}

impl<T> Scalar for T where T: Clone + Signed + PartialOrd {}
