//! Implementation of the FiniteF64 primitive

use crate::{error::ErrorMessage, DateError, DateResult};
use num_traits::FromPrimitive;

/// A `f64` that is known to be finite.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    #[inline]
    pub fn as_inner(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Scales the value by `factor` and truncates the result toward zero.
    ///
    /// Fails with a range error when the scaled value leaves the `i64` range.
    pub(crate) fn scaled_trunc(&self, factor: f64) -> DateResult<i64> {
        let scaled = self.0 * factor;
        if !scaled.is_finite() {
            return Err(DateError::range().with_message("number value is not a finite value."));
        }
        i64::from_f64(scaled.trunc())
            .ok_or_else(|| DateError::range().with_enum(ErrorMessage::DateOutOfRange))
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = DateError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DateError::invalid_argument().with_enum(ErrorMessage::InvalidAmount));
        }
        Ok(Self(value))
    }
}
