use logos::Logos;

/// Represents a raw lexeme in the source input.
///
/// Lexemes are the first, context-free cut of the input, which must already
/// be free of whitespace. They do not yet know whether a `-` is unary or binary, nor which operator a symbol
/// spells; [`crate::interpreter::tokenizer::tokenize`] resolves both.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Numeric literal tokens, such as `3`, `3.`, `3.14` or `.5`.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `p`
    #[token("p")]
    Constant,
    /// `-`, either unary or binary.
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other single character. Only characters with a registry entry
    /// become tokens.
    #[regex(r"[^0-9.()p\-\s]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}
