/// Block parsing.
///
/// Parses brace-delimited statement lists used by `if`, `else` and `while`.
pub mod block;

/// Core parsing functions.
///
/// Contains the program entry point and the top level of the expression
/// grammar.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing for comparison, additive and
/// multiplicative operators.
pub mod binary;

/// Statement parsing.
///
/// Handles `print`, assignments, `if`/`else` and `while`.
pub mod statement;

/// Unary and primary expression parsing.
///
/// Parses prefix negation, literals, variable references and parenthesised
/// groups.
pub mod unary;

/// Parser utilities.
///
/// Token expectation helpers shared by the other parser modules.
pub mod utils;

/// Post-parse validation.
///
/// Rejects programs that are syntactically valid but statically known to be
/// ill-typed, such as adding a boolean literal.
pub mod validate;
