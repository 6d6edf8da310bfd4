/// The variable store and evaluation result type.
///
/// Holds the single flat namespace every statement of a program reads and
/// writes.
pub mod core;

/// Expression evaluation.
///
/// Gives every expression node its `evaluate` rule: literals, variable
/// references, negation and binary operations.
pub mod expression;

/// Binary and unary operator evaluation.
///
/// Implements arithmetic, concatenation and comparisons over already
/// evaluated operands, including all operand kind checks.
pub mod binary;

/// Statement execution.
///
/// Gives every statement node its `run` rule: printing, assignment,
/// conditionals, loops and blocks.
pub mod statement;
