//! Core traits for ingestion validators
//!
//! Validators sit at the boundary: nothing they reject ever reaches a
//! classifier, so the classifiers can assume finite, non-negative input.

use crate::errors::ClassifyResult;

/// Boundary validator
pub trait Validator {
    /// The type of value this validator handles
    type Input: ?Sized;

    /// Validate one input
    fn validate(&self, input: &Self::Input) -> ClassifyResult<()>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
