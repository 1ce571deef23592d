use std::f64::consts::PI;

use crate::{
    error::{CalcError, DomainError, EvalError},
    interpreter::{
        evaluator::unary::factorial,
        registry::Registry,
        token::{Operator, Token},
    },
};

/// Result type used by the evaluator.
///
/// Evaluation only ever fails with [`CalcError::Eval`] or
/// [`CalcError::Domain`].
pub type EvalResult<T> = Result<T, CalcError>;

/// Evaluates postfix (RPN) tokens to a single number.
///
/// Numbers push themselves and `p` pushes π. An operator pops its operands
/// (for binary operators the first value popped is the right operand),
/// applies its rule and pushes the result. Every value pushed must be
/// finite. Exactly one value must remain at the end.
///
/// # Errors
/// - [`EvalError::MissingOperand`] when an operator finds too few values.
/// - [`EvalError::OperandCount`] when the final stack does not hold exactly
///   one value.
/// - [`EvalError::UnexpectedParen`] for parentheses in the input.
/// - [`EvalError::UnknownOperator`] for an operator the registry lacks.
/// - [`DomainError::NotFinite`] for NaN or infinite values.
/// - [`DomainError::Factorial`] for factorial of a negative or fractional
///   operand.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::{
///     evaluator::core::eval_postfix,
///     registry::Registry,
///     token::{BinaryOperator, Operator, Token},
/// };
///
/// let rpn = [Token::Number(2.0),
///            Token::Number(3.0),
///            Token::Number(4.0),
///            Token::Operator(Operator::Binary(BinaryOperator::Multiply)),
///            Token::Operator(Operator::Binary(BinaryOperator::Add))];
///
/// assert_eq!(eval_postfix(&rpn, &Registry::standard()).unwrap(), 14.0);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = tokens.len()))]
pub fn eval_postfix(tokens: &[Token], registry: &Registry) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for &token in tokens {
        let (value, produced_by) = match token {
            Token::Number(n) => (n, None),
            Token::Constant => (PI, None),
            Token::OpenParen | Token::CloseParen => return Err(EvalError::UnexpectedParen.into()),
            Token::Operator(op) => (apply(op, &mut stack, registry)?, Some(op.symbol())),
        };

        if !value.is_finite() {
            return Err(DomainError::NotFinite { symbol: produced_by,
                                                value }.into());
        }

        tracing::trace!(%token, value, depth = stack.len() + 1, "push");
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(EvalError::OperandCount { remaining: rest.len() }.into()),
    }
}

/// Pops the operands of `op` from `stack` and applies it.
fn apply(op: Operator, stack: &mut Vec<f64>, registry: &Registry) -> EvalResult<f64> {
    let definition = registry.definition(op)
                             .ok_or(EvalError::UnknownOperator { symbol: op.symbol() })?;

    let arity = definition.arity();
    if stack.len() < arity {
        return Err(EvalError::MissingOperand { symbol:   op.symbol(),
                                               expected: arity,
                                               found:    stack.len(), }.into());
    }
    let operands = stack.split_off(stack.len() - arity);

    let value = match (op, operands.as_slice()) {
        (Operator::Binary(binary), &[a, b]) => binary.apply(a, b),
        (Operator::Function(function), &[x]) => function.apply(x),
        (Operator::Factorial, &[x]) => factorial(x)?,
        _ => {
            return Err(EvalError::MissingOperand { symbol:   op.symbol(),
                                                   expected: op.arity(),
                                                   found:    operands.len(), }.into());
        },
    };

    Ok(value)
}
