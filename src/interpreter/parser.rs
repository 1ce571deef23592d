use crate::{
    error::ParseError,
    interpreter::{
        registry::{OperatorDefinition, Registry},
        token::{Fixity, Operator, Token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts infix tokens into postfix (RPN) order with the shunting-yard
/// algorithm.
///
/// Numbers and the constant go straight to the output, as does postfix `!`
/// since it has no right operand to wait for. Prefix functions and `(` are
/// pushed on the operator stack. An infix operator first pops every stacked
/// operator that binds tighter, or equally tight when the incoming operator
/// is left-associative. A `)` unwinds the stack down to its `(` and then
/// also emits a prefix function sitting right below it, so `S(30)` becomes
/// `30 S`.
///
/// # Errors
/// - [`ParseError::MissingOpenParen`] for a `)` without a matching `(`.
/// - [`ParseError::MissingCloseParen`] for a `(` that is never closed.
/// - [`ParseError::UnknownOperator`] for an operator the registry lacks.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::{
///     parser::to_postfix,
///     registry::Registry,
///     token::format_tokens,
///     tokenizer::tokenize,
/// };
///
/// let registry = Registry::standard();
/// let infix = tokenize("2^3^2", &registry).unwrap();
/// let rpn = to_postfix(&infix, &registry).unwrap();
/// assert_eq!(format_tokens(&rpn), "2 3 2 ^ ^");
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = tokens.len()))]
pub fn to_postfix(tokens: &[Token], registry: &Registry) -> ParseResult<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for (index, &token) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) | Token::Constant => output.push(token),
            Token::OpenParen => stack.push(token),
            Token::CloseParen => {
                loop {
                    match stack.pop() {
                        Some(Token::OpenParen) => break,
                        Some(top) => output.push(top),
                        None => return Err(ParseError::MissingOpenParen { index }),
                    }
                }

                if let Some(&Token::Operator(top)) = stack.last()
                   && definition(registry, top, index)?.is_prefix()
                {
                    stack.pop();
                    output.push(Token::Operator(top));
                }
            },
            Token::Operator(op) => {
                let current = definition(registry, op, index)?;
                match current.fixity() {
                    Fixity::Prefix => stack.push(token),
                    Fixity::Postfix => output.push(token),
                    Fixity::Infix => {
                        while let Some(&Token::Operator(top)) = stack.last() {
                            if !definition(registry, top, index)?.yields_to(current) {
                                break;
                            }
                            tracing::trace!(operator = %top, incoming = %op, "pop to output");
                            stack.pop();
                            output.push(Token::Operator(top));
                        }
                        stack.push(token);
                    },
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::OpenParen {
            return Err(ParseError::MissingCloseParen);
        }
        output.push(token);
    }

    tracing::debug!(count = output.len(), "converted to postfix");
    Ok(output)
}

/// Looks up an operator, turning a missing entry into a parse error.
fn definition(registry: &Registry,
              operator: Operator,
              index: usize)
              -> ParseResult<&OperatorDefinition> {
    registry.definition(operator)
            .ok_or(ParseError::UnknownOperator { symbol: operator.symbol(),
                                                 index })
}
