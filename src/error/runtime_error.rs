#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents malformed postfix input detected by the evaluator.
pub enum EvalError {
    /// An operator found fewer operands on the stack than its arity.
    MissingOperand {
        /// The operator's symbol.
        symbol:   char,
        /// Number of operands the operator consumes.
        expected: usize,
        /// Number of operands that were available.
        found:    usize,
    },
    /// Evaluation finished with a stack that did not hold exactly one value.
    OperandCount {
        /// Number of values left on the stack.
        remaining: usize,
    },
    /// A parenthesis appeared in postfix input.
    UnexpectedParen,
    /// An operator token has no entry in the registry.
    UnknownOperator {
        /// The operator's symbol.
        symbol: char,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { symbol, expected, found } => write!(f,
                                                                       "Operator '{symbol}' requires {expected} operand(s), but found {found}."),
            Self::OperandCount { remaining } => write!(f,
                                                       "Invalid RPN expression (too many/few operands): {remaining} value(s) left."),
            Self::UnexpectedParen => write!(f, "Invalid RPN expression: unexpected parenthesis."),
            Self::UnknownOperator { symbol } => {
                write!(f, "Unknown token during evaluation: '{symbol}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}

#[derive(Debug, Clone, PartialEq)]
/// Represents numeric failures: results outside the reals or non-finite
/// values.
pub enum DomainError {
    /// A value on the stack became NaN or infinite.
    NotFinite {
        /// Symbol of the operator that produced the value, if any.
        symbol: Option<char>,
        /// The offending value.
        value:  f64,
    },
    /// Factorial received an operand it is not defined for.
    Factorial(FactorialError),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite { symbol: Some(symbol), value } => write!(f,
                                                                      "Math domain error or division by zero: '{symbol}' produced {value}."),
            Self::NotFinite { symbol: None, value } => {
                write!(f, "Math domain error: value {value} is not finite.")
            },
            Self::Factorial(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFinite { .. } => None,
            Self::Factorial(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Factorial is only defined for non-negative integers.
pub enum FactorialError {
    /// The operand was below zero.
    Negative {
        /// The operand.
        value: f64,
    },
    /// The operand had a fractional part.
    NonIntegral {
        /// The operand.
        value: f64,
    },
}

impl std::fmt::Display for FactorialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative { value } => write!(f,
                                               "Factorial only defined for non-negative integers, but found {value}."),
            Self::NonIntegral { value } => write!(f,
                                                  "Factorial only defined for integers, but found fractional {value}."),
        }
    }
}

impl std::error::Error for FactorialError {}
