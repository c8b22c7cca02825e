//! `floats` submodule implements several consts, functions and traits that help in
//! work with `f64` type.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`FloatOperations`] trait and [`CLOSE_TO_ZERO`], [`CLOSE_TO_ONE`] consts are dealing with
//! distortions that may be caused by float operations.
//!

/// Constant that is used in floating point equality.
///
/// It represents amount of difference that is allowed for two `f64` values to still be considered
/// equal. It is applied both as an absolute difference (for values that are close to zero)
/// and as a difference relative to the magnitude of compared values.
///
/// The absolute part is a floor: any two values whose magnitudes are below `EPSILON`
/// are considered equal (`almost_equal(1e-6, 9e-6)` is `true`), even if their ratio is large.
/// Values that are that small have to be compared on a rescaled basis (or exactly).
///
pub const EPSILON: f64 = 0.00001;
/// This function implements floating point equality for `ggmath` crate.
///
/// It is used by `almost_equal` methods on vectors and matrices.
///
/// # Example
/// ```rust
/// # use ggmath::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal(1e-12, 0.0));
/// assert!(!almost_equal(1.0, 1.1));
/// ```
///
pub fn almost_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }

    let diff: f64 = (a - b).abs();
    let norm: f64 = (a.abs() + b.abs()).min(f64::MAX);
    diff < EPSILON.max(norm * EPSILON)
}

/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered small enough to then be floored.
///
pub const CLOSE_TO_ZERO: f64 = 0.0001;
/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered big enough to then be ceiled.
///
pub const CLOSE_TO_ONE: f64 = 0.9999;
/// [`FloatOperations`] trait defines `correct_to` and `round_up_to` associated functions that work
/// with floating point values.
///
pub trait FloatOperations {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// For example, this function fixes such things as -0.0 into 0.0,
    /// 0.0001 (anything that is less than `CLOSE_TO_ZERO`) into 0.0 and
    /// 0.9999 (anything that is greater than `CLOSE_TO_ONE`) into 1.0.
    ///
    fn correct_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
impl FloatOperations for f64 {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::floats::FloatOperations;
    /// assert_eq!(-0.0_f64.correct_to(0), 0.0);
    /// assert_eq!(0.00009_f64.correct_to(0), 0.0);
    /// assert_eq!(0.99999_f64.correct_to(0), 1.0);
    /// assert_eq!(6.123e-17_f64.correct_to(0), 0.0);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        let mul: f64 = 10_f64.powi(digits);

        let n: f64 = self * mul;

        if n == -0.0 {
            return 0.0;
        }

        let fract: f64 = n.abs().fract();
        if !(CLOSE_TO_ZERO..=CLOSE_TO_ONE).contains(&fract) {
            let rounded: f64 = n.round() / mul;
            return if rounded == -0.0 { 0.0 } else { rounded };
        }

        n / mul
    }

    /// Rounds to given amount of digits after floating point.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::floats::FloatOperations;
    /// assert_eq!(12.345_f64.round_up_to(1), 12.3);
    /// assert_eq!(12.345_f64.round_up_to(-1), 10.0);
    /// ```
    ///
    fn round_up_to(self, digits: i32) -> Self {
        let mul: f64 = 10_f64.powi(digits);
        (self * mul).round() / mul
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
