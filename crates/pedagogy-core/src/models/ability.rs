use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::constants::{MAX_ABILITY, MIN_ABILITY};

/// Latent ability (theta) clamped to [-4.0, 4.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Ability(f64);

impl Ability {
    pub const MIN: f64 = MIN_ABILITY;
    pub const MAX: f64 = MAX_ABILITY;

    /// Create a new Ability, clamping to [MIN, MAX]. Non-finite input maps to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Ability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Ability> for f64 {
    fn from(a: Ability) -> Self {
        a.0
    }
}

impl Add<f64> for Ability {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl Sub<f64> for Ability {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}
