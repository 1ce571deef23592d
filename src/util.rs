/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without silent data loss, plus small predicates on
/// `f64` values used by the evaluator.
pub mod num;
