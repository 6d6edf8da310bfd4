/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: integers, floats, booleans and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A double quoted string literal, without its quotes.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expressions are pure: evaluating one reads the context but never changes
/// it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use tinyscript::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }

    /// The number of nodes on the longest path from `self` down to a leaf.
    ///
    /// The parser keeps this bounded, so the recursion here stays shallow.
    ///
    /// ## Example
    /// ```
    /// use tinyscript::ast::{Expr, UnaryOperator};
    ///
    /// let leaf = Expr::Variable { name: "x".to_string(),
    ///                             line: 1, };
    /// let negated = Expr::UnaryOp { op:   UnaryOperator::Negate,
    ///                               expr: Box::new(leaf.clone()),
    ///                               line: 1, };
    ///
    /// assert_eq!(leaf.height(), 1);
    /// assert_eq!(negated.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => 1,
            Self::UnaryOp { expr, .. } => expr.height() + 1,
            Self::BinaryOp { left, right, .. } => left.height().max(right.height()) + 1,
        }
    }

    /// Returns `true` if the expression is a boolean literal.
    #[must_use]
    pub const fn is_bool_literal(&self) -> bool {
        matches!(self,
                 Self::Literal { value: LiteralValue::Bool(_),
                                 .. })
    }
}

/// Represents a statement.
///
/// Statements are executed in order against one shared context. Blocks do not
/// open a new scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `print(<expr>)`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `<name> = <expr>`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (<cond>) { ... } else { ... }` with an optional else block.
    If {
        /// The condition; must evaluate to a boolean.
        condition:   Expr,
        /// Block run when the condition holds.
        then_branch: Box<Self>,
        /// Block run otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (<cond>) { ... }`
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An ordered sequence of statements, such as the contents of a block.
    Compound {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Print { line, .. }
            | Self::Assignment { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Compound { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for `<`, `>`, `==` and `!=`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Less | Self::Greater | Self::Equal | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
