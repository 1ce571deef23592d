/// Postfix evaluation with a value stack.
///
/// Walks RPN tokens, applies operators to popped operands and rejects any
/// non-finite intermediate value.
pub mod core;

/// Factorial evaluation.
///
/// Validates the operand before computing, unlike the other operators which
/// rely on the non-finite check.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+ - * / ^ r` on `f64`.
pub mod binary;

/// Prefix function evaluation.
///
/// Trigonometric, hyperbolic and logarithmic functions.
pub mod function;
