use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::eval_postfix, parser::to_postfix, registry::Registry, token::Token,
        tokenizer::tokenize,
    },
};

/// Evaluates expressions against one operator registry.
///
/// A `Calculator` is immutable once built. Each call is independent, so a
/// single instance can serve any number of callers, on any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    registry: Registry,
}

impl Calculator {
    /// Creates a calculator over the standard operator table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Registry::standard())
    }

    /// Creates a calculator over a custom registry.
    #[must_use]
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// The operator table this calculator evaluates against.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Tokenizes and converts an expression, returning its postfix form.
    ///
    /// # Errors
    /// [`CalcError::EmptyExpression`], [`CalcError::Lex`] or
    /// [`CalcError::Parse`].
    ///
    /// # Example
    /// ```
    /// use shuntcalc::{Calculator, interpreter::token::format_tokens};
    ///
    /// let rpn = Calculator::new().postfix("S(30)").unwrap();
    /// assert_eq!(format_tokens(&rpn), "30 S");
    /// ```
    pub fn postfix(&self, expression: &str) -> Result<Vec<Token>, CalcError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let infix = tokenize(expression, &self.registry)?;
        Ok(to_postfix(&infix, &self.registry)?)
    }

    /// Evaluates an expression.
    ///
    /// Runs tokenize, infix-to-postfix conversion and postfix evaluation,
    /// stopping at the first failure and returning that stage's error
    /// unchanged.
    ///
    /// # Errors
    /// Any [`CalcError`] variant.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::{Calculator, error::CalcError};
    ///
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.evaluate("2+3*4").unwrap(), 14.0);
    /// assert_eq!(calculator.evaluate("   "), Err(CalcError::EmptyExpression));
    /// ```
    #[tracing::instrument(level = "debug", skip(self), err(Display))]
    pub fn evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        let rpn = self.postfix(expression)?;
        let value = eval_postfix(&rpn, &self.registry)?;
        tracing::debug!(value, "evaluated");
        Ok(value)
    }
}
