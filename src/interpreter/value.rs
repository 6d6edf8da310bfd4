/// Runtime values and their type tags.
///
/// Defines the `Value` enum produced by evaluating expressions and the
/// `ValueKind` tag the context records next to every variable.
pub mod core;
