use std::f64::consts::PI;

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        lexer::Lexeme,
        registry::Registry,
        token::{BinaryOperator, Operator, Token},
    },
};

pub type LexResult<T> = Result<T, LexError>;

/// Splits an expression into tokens.
///
/// Whitespace is removed before anything else, so `1 0` reads as `10`.
/// Every operator, function letter, parenthesis and
/// the constant `p` is its own token; other letters are rejected.
///
/// A `-` is binary when it follows a number, the constant, `!` or `)`.
/// Anywhere else it is a unary minus and is folded into the number (or
/// constant) right after it, which is emitted as a signed
/// [`Token::Number`]. `+` is always binary.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for characters outside the notation.
/// - [`LexError::InvalidNumber`] for a lone `.`.
/// - [`LexError::DanglingMinus`] when a unary minus ends the input.
/// - [`LexError::MisplacedMinus`] when a unary minus is followed by
///   anything other than a number or `p`.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::{
///     registry::Registry,
///     token::{BinaryOperator, Operator, Token},
///     tokenizer::tokenize,
/// };
///
/// let tokens = tokenize("5 - -3", &Registry::standard()).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(5.0),
///                 Token::Operator(Operator::Binary(BinaryOperator::Subtract)),
///                 Token::Number(-3.0)]);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn tokenize(text: &str, registry: &Registry) -> LexResult<Vec<Token>> {
    let (compact, offsets) = strip_whitespace(text);
    let mut tokens: Vec<Token> = Vec::new();
    // Position of a unary minus waiting for its number.
    let mut pending_minus: Option<usize> = None;
    let mut lexer = Lexeme::lexer(&compact);

    while let Some(lexeme) = lexer.next() {
        let position = offsets.get(lexer.span().start).copied().unwrap_or(text.len());
        let slice = lexer.slice();

        let token = match lexeme {
            Ok(Lexeme::Number(n)) => Token::Number(n),
            Ok(Lexeme::Constant) => Token::Constant,
            Ok(Lexeme::LParen) => Token::OpenParen,
            Ok(Lexeme::RParen) => Token::CloseParen,
            Ok(Lexeme::Minus) => {
                if tokens.last().is_some_and(Token::ends_operand) {
                    Token::Operator(Operator::Binary(BinaryOperator::Subtract))
                } else if let Some(minus_at) = pending_minus {
                    return Err(LexError::MisplacedMinus { found:    slice.to_string(),
                                                          position: minus_at, });
                } else {
                    pending_minus = Some(position);
                    continue;
                }
            },
            Ok(Lexeme::Symbol(c)) => match registry.lookup(c) {
                Some(definition) => Token::Operator(definition.operator),
                None => {
                    return Err(LexError::UnexpectedCharacter { text: slice.to_string(),
                                                               position });
                },
            },
            Err(()) => return Err(lex_failure(slice, position)),
        };

        if let Some(minus_at) = pending_minus.take() {
            let signed = match token {
                Token::Number(n) => Token::Number(-n),
                Token::Constant => Token::Number(-PI),
                other => {
                    return Err(LexError::MisplacedMinus { found:    other.to_string(),
                                                          position: minus_at, });
                },
            };
            tracing::trace!(token = %signed, "folded unary minus");
            tokens.push(signed);
            continue;
        }

        tokens.push(token);
    }

    if let Some(position) = pending_minus {
        return Err(LexError::DanglingMinus { position });
    }

    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Classifies input the lexer could not match.
fn lex_failure(slice: &str, position: usize) -> LexError {
    if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        LexError::InvalidNumber { text: slice.to_string(),
                                  position }
    } else {
        LexError::UnexpectedCharacter { text: slice.to_string(),
                                        position }
    }
}

/// Removes all whitespace from `text`.
///
/// Also returns, for every byte of the compacted string, the character
/// offset it came from in `text`, so errors can point at the original
/// input.
fn strip_whitespace(text: &str) -> (String, Vec<usize>) {
    let mut compact = String::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());

    for (position, c) in text.chars().enumerate().filter(|(_, c)| !c.is_whitespace()) {
        compact.push(c);
        offsets.extend(std::iter::repeat_n(position, c.len_utf8()));
    }

    (compact, offsets)
}
