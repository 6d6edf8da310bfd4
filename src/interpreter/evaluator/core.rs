use indexmap::IndexMap;

use crate::{
    error::RuntimeError,
    interpreter::value::core::{Value, ValueKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context is one flat variable namespace mapping names to values. Each
/// stored value carries its runtime type tag, so a later assignment replaces
/// both the value and its kind.
///
/// ## Usage
///
/// A `Context` is created by the caller and passed into every run. Reusing
/// the same instance for several runs keeps variables alive between them;
/// two runs must never share one context at the same time.
///
/// ```
/// use tinyscript::interpreter::{
///     evaluator::core::Context,
///     value::core::{Value, ValueKind},
/// };
///
/// let mut context = Context::new();
/// context.set("x", Value::Integer(5));
/// context.set("x", "hi".into());
///
/// assert_eq!(context.kind_of("x"), Some(ValueKind::String));
/// assert_eq!(context.len(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Context {
    /// Variables in order of first assignment.
    variables: IndexMap<String, Value>,
}

impl Context {
    /// Creates a new, empty evaluation context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Looks up a variable, failing with
    /// [`RuntimeError::UndefinedVariable`] if it was never assigned.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Returns the runtime type tag of a variable.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.get(name).map(Value::kind)
    }

    /// Binds `name` to `value`, replacing any prior binding. A replaced
    /// variable keeps its position in the table.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Number of variables currently defined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Removes every variable.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Iterates over the variables in order of first assignment.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// Renders the variable table with one row per variable.
impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "-".repeat(30);

        writeln!(f, "Name\tValue\tType")?;
        writeln!(f, "{rule}")?;
        for (name, value) in self.iter() {
            writeln!(f, "{name}\t{value}\t{}", value.kind())?;
        }
        writeln!(f, "{rule}")
    }
}
