//! `ext` hidden submodule supplies helper newtypes and enums that are
//! used throughout `ggmath` crate.
//!

use crate::floats::{almost_equal, FloatOperations};
use serde::{Deserialize, Serialize};
use std::{
    f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, TAU},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// [`Sign`] unit-only enum represents sign of a cofactor (either negative or positive).
///
/// Cofactor expansion uses it to alternate signs of minors.
///
/// # Example
/// ```rust
/// # use ggmath::Sign;
/// let mut sign: Sign = Sign::Positive;
/// sign = -sign;
/// assert_eq!(sign, Sign::Negative * Sign::Positive);
/// assert_eq!(1 * (sign as i8), -1);
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative sign (-1).
    ///
    Negative = -1,
    /// Positive sign (+1).
    ///
    Positive = 1,
}
impl Sign {
    /// Returns `(-1)^n` as a sign.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::Sign;
    /// assert_eq!(Sign::alternating(0), Sign::Positive);
    /// assert_eq!(Sign::alternating(3), Sign::Negative);
    /// assert_eq!(Sign::alternating(1) * Sign::alternating(2), Sign::Negative);
    /// ```
    ///
    pub fn alternating(n: usize) -> Sign {
        if n % 2 == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// Applies sign to given value.
    ///
    pub fn apply(self, value: f64) -> f64 {
        value * f64::from(self as i8)
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}
impl Mul<Self> for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self == rhs {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}
impl MulAssign<Self> for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// [`Angle`] is a newtype that restricts angle values to [0.0; TAU).
/// Non-finite values (NaN and infinities) are kept as they are, so they reach
/// every matrix that is built from such angle.
///
/// Underlying value is stored in radians, so every transform builder that takes an [`Angle`]
/// is unambiguous about units.
///
/// # Example
/// ```rust
/// # use ggmath::Angle;
/// # use std::f64::consts::FRAC_PI_2;
/// let angle: Angle = Angle::from_radians(-FRAC_PI_2);
/// assert_eq!(angle, Angle::from_degrees(270.0));
/// assert!((angle.degrees() - 270.0).abs() < 1e-9);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialOrd)]
pub struct Angle(f64);
impl Angle {
    /// Angle that corresponds to zero.
    ///
    pub const ZERO: Angle = Angle(0.0);
    /// Angle that corresponds to 30 degree angle.
    ///
    pub const DEG30: Angle = Angle(FRAC_PI_6);
    /// Angle that corresponds to 45 degree angle.
    ///
    pub const DEG45: Angle = Angle(FRAC_PI_4);
    /// Angle that corresponds to 60 degree angle.
    ///
    pub const DEG60: Angle = Angle(FRAC_PI_3);
    /// Angle that corresponds to 90 degree angle.
    ///
    pub const DEG90: Angle = Angle(FRAC_PI_2);
    /// Angle that corresponds to 180 degree angle.
    ///
    pub const DEG180: Angle = Angle(2.0 * FRAC_PI_2);
    /// Angle that corresponds to 270 degree angle.
    ///
    pub const DEG270: Angle = Angle(3.0 * FRAC_PI_2);

    /// Normalizes given angle (in radians) to [0.0; 2 * PI).
    ///
    /// Non-finite angles are returned unchanged.
    ///
    fn normalize(angle: f64) -> f64 {
        if !angle.is_finite() {
            return angle;
        }

        let normalized: f64 = angle - ((angle / TAU).floor() * TAU);
        if normalized >= TAU {
            0.0
        } else {
            normalized
        }
    }

    /// Returns angle value in radians.
    ///
    pub fn radians(&self) -> f64 {
        self.0
    }
    /// Returns angle value in degrees.
    ///
    pub fn degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    /// Initializes angle from radians.
    ///
    pub fn from_radians(radians: f64) -> Self {
        Angle(Self::normalize(radians))
    }
    /// Initializes angle from degrees.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::Angle;
    /// let angle: Angle = Angle::from_degrees(90.0);
    /// assert_eq!(angle, Angle::DEG90);
    /// ```
    ///
    pub fn from_degrees(degrees: f64) -> Self {
        Angle::from_radians(degrees.to_radians())
    }

    /// Returns sine of angle.
    ///
    pub fn sin(&self) -> f64 {
        self.0.sin()
    }
    /// Returns cosine of angle.
    ///
    pub fn cos(&self) -> f64 {
        self.0.cos()
    }
    /// Returns tangent of angle.
    ///
    pub fn tan(&self) -> f64 {
        self.0.tan()
    }
    /// Returns sine and cosine of angle packed in tuple.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::Angle;
    /// let angle: Angle = Angle::from_degrees(90.0);
    /// assert_eq!(angle.sin_cos(), (angle.sin(), angle.cos()));
    /// ```
    ///
    pub fn sin_cos(&self) -> (f64, f64) {
        self.0.sin_cos()
    }
}
impl FloatOperations for Angle {
    fn correct_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.round_up_to(digits))
    }
}
impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle::from_radians(-self.0)
    }
}
impl Add<Self> for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 + rhs.0)
    }
}
impl Sub<Self> for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 - rhs.0)
    }
}
impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.0 * rhs)
    }
}
impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.0 / rhs)
    }
}
impl AddAssign<Self> for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign<Self> for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign<f64> for Angle {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}
impl DivAssign<f64> for Angle {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.0, other.0)
    }
}
