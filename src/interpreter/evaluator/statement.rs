use tracing::trace;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        output::OutputSink,
    },
};

impl Statement {
    /// Executes the statement against `context`.
    ///
    /// - `Print` writes the value's textual form as one line of output.
    /// - `Assignment` stores the value and its kind, replacing any previous
    ///   binding.
    /// - `If` runs the then block or, if present, the else block.
    /// - `While` re-evaluates its condition before every iteration. There is
    ///   no iteration cap.
    /// - `Compound` runs its statements in order without opening a scope.
    ///
    /// # Errors
    /// The first failing expression aborts the statement. Side effects of
    /// statements that already ran are kept.
    ///
    /// # Example
    /// ```
    /// use tinyscript::{
    ///     ast::{Expr, LiteralValue, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let print = Statement::Print { expr: Expr::Literal { value: LiteralValue::Real(2.0),
    ///                                                      line:  1, },
    ///                                line: 1, };
    ///
    /// let mut output: Vec<String> = Vec::new();
    /// print.run(&mut Context::new(), &mut output).unwrap();
    ///
    /// assert_eq!(output, ["2.0"]);
    /// ```
    pub fn run(&self, context: &mut Context, output: &mut dyn OutputSink) -> EvalResult<()> {
        match self {
            Self::Print { expr, .. } => {
                let value = expr.evaluate(context)?;
                output.write(&value.to_string());
                Ok(())
            },
            Self::Assignment { name, value, line } => {
                let value = value.evaluate(context)?;
                trace!(line, name = name.as_str(), kind = %value.kind(), "assign");
                context.set(name, value);
                Ok(())
            },
            Self::If { condition,
                       then_branch,
                       else_branch,
                       line, } => {
                if condition.evaluate(context)?.as_bool(*line)? {
                    then_branch.run(context, output)
                } else if let Some(else_branch) = else_branch {
                    else_branch.run(context, output)
                } else {
                    Ok(())
                }
            },
            Self::While { condition,
                          body,
                          line, } => {
                while condition.evaluate(context)?.as_bool(*line)? {
                    body.run(context, output)?;
                }
                Ok(())
            },
            Self::Compound { statements, .. } => {
                for statement in statements {
                    statement.run(context, output)?;
                }
                Ok(())
            },
        }
    }
}
