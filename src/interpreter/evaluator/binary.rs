use crate::{interpreter::token::BinaryOperator, util::num::is_odd_integer};

impl BinaryOperator {
    /// Applies the operator to a left operand `a` and a right operand `b`.
    ///
    /// Division by zero and out-of-domain powers or roots yield NaN or
    /// infinity rather than an error; the evaluator turns those into domain
    /// errors.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::interpreter::token::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Subtract.apply(5.0, 3.0), 2.0);
    /// assert_eq!(BinaryOperator::Root.apply(9.0, 2.0), 3.0);
    /// assert!(BinaryOperator::Divide.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Power => a.powf(b),
            Self::Root => root(a, b),
        }
    }
}

/// Computes the `degree`-th root of `radicand` as `radicand^(1/degree)`.
///
/// Negative radicands only have a real root for odd integral degrees; every
/// other negative radicand gives NaN. There are no complex results.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::evaluator::binary::root;
///
/// assert!((root(-8.0, 3.0) + 2.0).abs() < 1e-12);
/// assert!(root(-4.0, 2.0).is_nan());
/// ```
#[must_use]
pub fn root(radicand: f64, degree: f64) -> f64 {
    if radicand < 0.0 && is_odd_integer(degree) {
        -(-radicand).powf(degree.recip())
    } else {
        radicand.powf(degree.recip())
    }
}
