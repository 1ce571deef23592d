/// Prefix functions of one argument.
///
/// All trigonometric functions take radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `S`
    Sin,
    /// `s`
    Sinh,
    /// `C`
    Cos,
    /// `c`
    Cosh,
    /// `T`
    Tan,
    /// `t`
    Tanh,
    /// `l`, the natural logarithm.
    Ln,
    /// `L`, the base-10 logarithm.
    Log10,
}

/// Infix operators of two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// Binary `-`. Unary minus never becomes an operator; it is folded into
    /// the number it precedes.
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `r`: `a r b` is the `b`-th root of `a`.
    Root,
}

/// Every operator kind the calculator knows about.
///
/// The evaluator matches this enum exhaustively, so a new variant cannot be
/// added without also giving it an evaluation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// A prefix function such as `S` or `L`.
    Function(Function),
    /// An infix operator.
    Binary(BinaryOperator),
    /// Postfix `!`.
    Factorial,
}

/// Where an operator sits relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    /// Before its single operand, like `S30`.
    Prefix,
    /// After its single operand, like `6!`.
    Postfix,
    /// Between two operands.
    Infix,
}

impl Operator {
    /// The character that spells this operator in source text.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::interpreter::token::{BinaryOperator, Function, Operator};
    ///
    /// assert_eq!(Operator::Function(Function::Log10).symbol(), 'L');
    /// assert_eq!(Operator::Binary(BinaryOperator::Subtract).symbol(), '-');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Function(f) => match f {
                Function::Sin => 'S',
                Function::Sinh => 's',
                Function::Cos => 'C',
                Function::Cosh => 'c',
                Function::Tan => 'T',
                Function::Tanh => 't',
                Function::Ln => 'l',
                Function::Log10 => 'L',
            },
            Self::Binary(op) => match op {
                BinaryOperator::Add => '+',
                BinaryOperator::Subtract => '-',
                BinaryOperator::Multiply => '*',
                BinaryOperator::Divide => '/',
                BinaryOperator::Power => '^',
                BinaryOperator::Root => 'r',
            },
            Self::Factorial => '!',
        }
    }

    /// Where the operator sits relative to its operands.
    #[must_use]
    pub const fn fixity(self) -> Fixity {
        match self {
            Self::Function(_) => Fixity::Prefix,
            Self::Binary(_) => Fixity::Infix,
            Self::Factorial => Fixity::Postfix,
        }
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self.fixity() {
            Fixity::Infix => 2,
            Fixity::Prefix | Fixity::Postfix => 1,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical token shared by every stage of the pipeline.
///
/// Tokens are plain values: the tokenizer creates them, the converter
/// reorders them and the evaluator consumes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, already signed if it followed a unary minus.
    Number(f64),
    /// The constant `p` (π).
    Constant,
    /// Any operator or function.
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl Token {
    /// Returns `true` if a `-` following this token is a binary minus.
    ///
    /// That is the case after a number, the constant, `!` and `)`.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Constant | Self::Operator(Operator::Factorial) | Self::CloseParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Constant => write!(f, "p"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence as space-separated source notation.
///
/// # Example
/// ```
/// use shuntcalc::{Calculator, interpreter::token::format_tokens};
///
/// let rpn = Calculator::new().postfix("2+3*4").unwrap();
/// assert_eq!(format_tokens(&rpn), "2 3 4 * +");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
