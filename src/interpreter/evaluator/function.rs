use crate::interpreter::token::Function;

impl Function {
    /// Applies the function to a real argument.
    ///
    /// Out-of-domain arguments produce NaN or infinity, which the evaluator
    /// reports as a domain error.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::interpreter::token::Function;
    ///
    /// assert_eq!(Function::Log10.apply(100.0), 2.0);
    /// assert!(Function::Ln.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Sinh => x.sinh(),
            Self::Cos => x.cos(),
            Self::Cosh => x.cosh(),
            Self::Tan => x.tan(),
            Self::Tanh => x.tanh(),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
        }
    }
}
