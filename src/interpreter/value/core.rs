use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// There is no implicit coercion between strings, booleans and numbers.
/// Integers and reals mix freely in arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point). Every division
    /// produces one.
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and required by `if` and `while`
    /// conditions.
    Bool(bool),
    /// A string value.
    Str(String),
}

/// The runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Tag of [`Value::Integer`].
    Integer,
    /// Tag of [`Value::Real`].
    Float,
    /// Tag of [`Value::Bool`].
    Boolean,
    /// Tag of [`Value::Str`].
    String,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// Returns the runtime type tag of the value.
    ///
    /// # Example
    /// ```
    /// use tinyscript::interpreter::value::core::{Value, ValueKind};
    ///
    /// assert_eq!(Value::from("hi").kind(), ValueKind::String);
    /// assert_eq!(Value::from(2.0).kind(), ValueKind::Float);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Str(_) => ValueKind::String,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or integer.
    /// - `Err(RuntimeError::TypeError)`: If not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.kind()),
                                               line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the conditions of `if` and `while` statements.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::TypeError)`: If not boolean.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::TypeError { details: format!("condition must be a boolean, found {}",
                                                                self.kind()),
                                               line }),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
        };
        write!(f, "{name}")
    }
}

/// Integral reals keep a trailing `.0` so that `6 / 3` prints as `2.0`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}
