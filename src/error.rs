/// Lexing errors.
///
/// Defines all error types that can occur while turning raw input into
/// tokens: characters outside the notation, numbers that fail to parse and
/// unary minus signs with nothing sensible to attach to.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised while converting infix tokens to postfix order,
/// such as mismatched parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating postfix tokens: malformed
/// operand counts and numeric domain failures, including the factorial
/// specialisation.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::{DomainError, EvalError, FactorialError};

#[derive(Debug, Clone, PartialEq)]
/// Any failure of a single evaluation attempt.
///
/// Every pipeline stage reports its own error type; the driver wraps the
/// first one it sees in this enum and discards all intermediate state.
pub enum CalcError {
    /// The expression was empty or contained only whitespace.
    EmptyExpression,
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The infix-to-postfix conversion failed.
    Parse(ParseError),
    /// The postfix sequence was malformed.
    Eval(EvalError),
    /// A computation left the real domain or produced a non-finite value.
    Domain(DomainError),
}

impl CalcError {
    /// Returns `true` for domain failures, including factorial misuse.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::evaluate;
    ///
    /// assert!(evaluate("1/0").unwrap_err().is_domain());
    /// assert!(evaluate("(-1)!").unwrap_err().is_domain());
    /// assert!(!evaluate("(1").unwrap_err().is_domain());
    /// ```
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns `true` only when a factorial received a negative or
    /// non-integral operand.
    #[must_use]
    pub const fn is_factorial(&self) -> bool {
        matches!(self, Self::Domain(DomainError::Factorial(_)))
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression cannot be empty."),
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyExpression => None,
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Domain(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<DomainError> for CalcError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<FactorialError> for CalcError {
    fn from(e: FactorialError) -> Self {
        Self::Domain(DomainError::Factorial(e))
    }
}
