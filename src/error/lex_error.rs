#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that is not part of the notation.
    UnexpectedCharacter {
        /// The offending input text.
        text:     String,
        /// Offset of the text in the input.
        position: usize,
    },
    /// A numeric literal matched the number shape but could not be parsed.
    InvalidNumber {
        /// The literal as written.
        text:     String,
        /// Offset of the literal in the input.
        position: usize,
    },
    /// A unary minus ended the expression.
    DanglingMinus {
        /// Offset of the minus sign in the input.
        position: usize,
    },
    /// A unary minus was followed by something other than a number or `p`.
    MisplacedMinus {
        /// The token that followed the minus sign.
        found:    String,
        /// Offset of the minus sign in the input.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { text, position } => {
                write!(f, "Error at position {position}: Unexpected character '{text}'.")
            },
            Self::InvalidNumber { text, position } => {
                write!(f, "Error at position {position}: Invalid number '{text}'.")
            },
            Self::DanglingMinus { position } => write!(f,
                                                       "Error at position {position}: Unary minus is missing its operand."),
            Self::MisplacedMinus { found, position } => write!(f,
                                                               "Error at position {position}: Unary minus must precede a number, but found '{found}'."),
        }
    }
}

impl std::error::Error for LexError {}
