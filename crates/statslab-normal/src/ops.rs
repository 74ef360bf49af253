//! Arithmetic on Normal distributions
//!
//! Adding or multiplying by a constant translates or rescales the
//! distribution. Adding or subtracting two distributions models the sum or
//! difference of independent variables, so variances add.

use crate::NormalDist;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add<f64> for NormalDist {
    type Output = NormalDist;

    fn add(self, rhs: f64) -> NormalDist {
        NormalDist::from_parts_unchecked(self.mean() + rhs, self.stdev())
    }
}

impl Add<NormalDist> for f64 {
    type Output = NormalDist;

    fn add(self, rhs: NormalDist) -> NormalDist {
        rhs + self
    }
}

impl Add for NormalDist {
    type Output = NormalDist;

    fn add(self, rhs: NormalDist) -> NormalDist {
        NormalDist::from_parts_unchecked(
            self.mean() + rhs.mean(),
            self.stdev().hypot(rhs.stdev()),
        )
    }
}

impl Sub<f64> for NormalDist {
    type Output = NormalDist;

    fn sub(self, rhs: f64) -> NormalDist {
        NormalDist::from_parts_unchecked(self.mean() - rhs, self.stdev())
    }
}

impl Sub<NormalDist> for f64 {
    type Output = NormalDist;

    fn sub(self, rhs: NormalDist) -> NormalDist {
        -(rhs - self)
    }
}

impl Sub for NormalDist {
    type Output = NormalDist;

    fn sub(self, rhs: NormalDist) -> NormalDist {
        NormalDist::from_parts_unchecked(
            self.mean() - rhs.mean(),
            self.stdev().hypot(rhs.stdev()),
        )
    }
}

/// Scaling by a negative constant mirrors the distribution; sigma stays positive.
impl Mul<f64> for NormalDist {
    type Output = NormalDist;

    fn mul(self, rhs: f64) -> NormalDist {
        NormalDist::from_parts_unchecked(self.mean() * rhs, self.stdev() * rhs.abs())
    }
}

impl Mul<NormalDist> for f64 {
    type Output = NormalDist;

    fn mul(self, rhs: NormalDist) -> NormalDist {
        rhs * self
    }
}

/// Dividing by zero yields infinite or NaN parameters, as `f64` division does.
impl Div<f64> for NormalDist {
    type Output = NormalDist;

    fn div(self, rhs: f64) -> NormalDist {
        NormalDist::from_parts_unchecked(self.mean() / rhs, self.stdev() / rhs.abs())
    }
}

impl Neg for NormalDist {
    type Output = NormalDist;

    fn neg(self) -> NormalDist {
        NormalDist::from_parts_unchecked(-self.mean(), self.stdev())
    }
}
