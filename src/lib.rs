//! # shuntcalc
//!
//! shuntcalc evaluates arithmetic expressions written in a compact
//! single-letter notation. Expressions are tokenized, converted to postfix
//! order with the shunting-yard algorithm and evaluated on a value stack.
//!
//! | symbol | meaning |
//! |---|---|
//! | `+ - * /` | arithmetic |
//! | `^` | power (right-associative) |
//! | `r` | root: `a r b` is the `b`-th root of `a` |
//! | `S s C c T t` | sin, sinh, cos, cosh, tan, tanh (radians) |
//! | `l L` | natural and base-10 logarithm |
//! | `!` | factorial (postfix) |
//! | `p` | π |

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting or evaluating an expression, and [`error::CalcError`], the
/// single type returned to callers.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and operator symbols for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together the operator registry, the lexer and
/// tokenizer, the shunting-yard converter and the postfix evaluator.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides [`Calculator`], the entry point for evaluating expressions.
/// - Manages the flow of tokens and errors between stages.
pub mod interpreter;
/// General numeric helpers.
///
/// Safe conversions between `f64` and integer types, and predicates used by
/// the evaluator.
pub mod util;

pub use error::CalcError;
pub use interpreter::calculator::Calculator;

/// Evaluates a single expression with the standard operators.
///
/// The input is trimmed first; blank input fails with
/// [`CalcError::EmptyExpression`]. Any stage failure is returned unchanged
/// and no partial result is produced.
///
/// # Errors
/// Returns the first error raised by the tokenizer, the converter or the
/// evaluator.
///
/// # Examples
/// ```
/// use shuntcalc::evaluate;
///
/// assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
/// assert_eq!(evaluate("6!").unwrap(), 720.0);
/// assert_eq!(evaluate("p").unwrap(), std::f64::consts::PI);
///
/// // Mismatched parenthesis.
/// assert!(evaluate("(1+2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    Calculator::new().evaluate(expression)
}
