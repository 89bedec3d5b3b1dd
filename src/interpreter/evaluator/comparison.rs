use crate::{
    ast::{Condition, Location, Operand},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::evaluator::core::Context,
    util::num::i64_to_f64_checked,
};

impl Context<'_> {
    /// Evaluates a comparison.
    ///
    /// Both operands are resolved, left first, then the operator is applied.
    ///
    /// # Parameters
    /// - `condition`: The comparison to evaluate.
    /// - `loc`: Location of the conditional or loop, used for errors.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if either side names an undeclared
    /// variable.
    pub fn eval_condition(&self, condition: &Condition, loc: Location) -> Result<bool, RuntimeError> {
        let left = self.eval_comparison_operand(&condition.left, loc)?;
        let right = self.eval_comparison_operand(&condition.right, loc)?;

        Ok(condition.operator.compare(left, right))
    }

    fn eval_comparison_operand(&self, operand: &Operand, loc: Location) -> Result<f64, RuntimeError> {
        match operand {
            Operand::Variable { name, .. } => self.lookup(name, loc),
            Operand::Number { value, .. } => {
                let kind = RuntimeErrorKind::LiteralTooLarge { literal: value.to_string() };
                i64_to_f64_checked(*value, RuntimeError::new(kind, loc))
            },
        }
    }
}
