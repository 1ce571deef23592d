#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix tokens to
/// postfix order.
pub enum ParseError {
    /// A `)` had no matching `(`.
    MissingOpenParen {
        /// Index of the closing parenthesis in the token sequence.
        index: usize,
    },
    /// A `(` was never closed.
    MissingCloseParen,
    /// An operator token has no entry in the registry.
    UnknownOperator {
        /// The operator's symbol.
        symbol: char,
        /// Index of the operator in the token sequence.
        index:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOpenParen { index } => write!(f,
                                                       "Mismatched parentheses in expression: missing '(' for token {index}."),
            Self::MissingCloseParen => {
                write!(f, "Mismatched parentheses in expression: missing ')'.")
            },
            Self::UnknownOperator { symbol, index } => write!(f,
                                                              "Invalid token found during parsing: '{symbol}' (token {index})."),
        }
    }
}

impl std::error::Error for ParseError {}
