//! Value objects produced by the parsers.
//!
//! Both numeric results are defined entirely by their value and carry their
//! range invariant in the type, so a `Price` or `Rating` held anywhere in the
//! crate is already known to be valid.

use serde::{Deserialize, Serialize};

/// A parsed, non-negative, finite price. Currency is not tracked.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Returns `None` for negative, NaN, or infinite amounts.
    pub fn new(amount: f64) -> Option<Self> {
        (amount.is_finite() && amount >= 0.0).then_some(Self(amount))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A rating on the closed 0 to 5 scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;

    /// Clamp `value` into `[0, 5]`. NaN has no position on the scale and yields `None`.
    pub fn clamped(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        Some(Self(value.clamp(Self::MIN, Self::MAX)))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
