//! Confidence score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised when a confidence score falls outside the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("confidence must be between 0 and 100, got {0}")]
pub struct ConfidenceOutOfRange(pub f64);

/// An upstream-reported confidence score between 0 and 100 inclusive.
///
/// Deserialization is fail-closed: any value outside the range, or one that
/// is not a finite number, is rejected. Completion replies carrying a bogus
/// score therefore fail schema validation as a whole rather than smuggling
/// the score through. Fractional scores such as `85.0` are accepted and
/// rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    /// Zero confidence.
    pub const ZERO: Self = Self(0);

    /// Full confidence.
    pub const FULL: Self = Self(100);

    /// Creates a new Confidence, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Returns the score as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceOutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ConfidenceOutOfRange(value));
        }
        Ok(Self(value.round() as u8))
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}
