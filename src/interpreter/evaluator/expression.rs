use crate::{
    ast::{Expression, Location},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::evaluator::core::Context,
    util::num::i64_to_f64_checked,
};

/// The four arithmetic operators an expression is split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithmeticOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOperator {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
}

/// Splits expression text into trimmed operands and the operators between
/// them. There is always one more operand than operators; operands may be
/// empty.
fn split_expression(text: &str) -> (Vec<&str>, Vec<ArithmeticOperator>) {
    let mut operands = Vec::new();
    let mut operators = Vec::new();
    let mut start = 0;

    for (index, c) in text.char_indices() {
        if let Some(operator) = ArithmeticOperator::from_char(c) {
            operands.push(text[start..index].trim());
            operators.push(operator);
            start = index + c.len_utf8();
        }
    }
    operands.push(text[start..].trim());

    (operands, operators)
}

impl Context<'_> {
    /// Evaluates a flattened expression.
    ///
    /// The text is split on `+ - * /` and folded from left to right. There is
    /// no precedence, so `2 + 3 * 4` is `20`. Operands are resolved in order
    /// and the first failure wins.
    ///
    /// # Parameters
    /// - `expression`: The expression to evaluate.
    /// - `loc`: Location of the statement, used for errors.
    ///
    /// # Errors
    /// - `UndefinedVariable` for a name that was never declared.
    /// - `MissingOperand` if an operator has nothing on one side.
    /// - `DivisionByZero` if a divisor evaluates to zero.
    ///
    /// # Example
    /// ```
    /// use likho::{
    ///     ast::{Expression, Location},
    ///     interpreter::evaluator::core::{Context, RunOptions},
    /// };
    ///
    /// let options = RunOptions::default();
    /// let mut context = Context::new(&options);
    /// context.variables.insert("x".to_string(), 2.0);
    ///
    /// let value = context.eval_expression(&Expression::new("x + 3 * 4"), Location::new(1, 1));
    /// assert_eq!(value, Ok(20.0));
    /// ```
    pub fn eval_expression(&self, expression: &Expression, loc: Location) -> Result<f64, RuntimeError> {
        let (operands, operators) = split_expression(expression.as_str());
        let mut operands = operands.into_iter();

        let first = operands.next().unwrap_or_default();
        let mut result = self.eval_operand(first, expression, loc)?;

        for (operator, operand) in operators.into_iter().zip(operands) {
            let value = self.eval_operand(operand, expression, loc)?;
            result = match operator {
                ArithmeticOperator::Add => result + value,
                ArithmeticOperator::Sub => result - value,
                ArithmeticOperator::Mul => result * value,
                ArithmeticOperator::Div => {
                    if value == 0.0 {
                        return Err(RuntimeError::new(RuntimeErrorKind::DivisionByZero, loc));
                    }
                    result / value
                },
            };
        }

        Ok(result)
    }

    /// Resolves one operand: a run of digits is a number, anything else is a
    /// variable name.
    fn eval_operand(&self, operand: &str, expression: &Expression, loc: Location)
                    -> Result<f64, RuntimeError> {
        if operand.is_empty() {
            let kind = RuntimeErrorKind::MissingOperand { expression: expression.to_string() };
            return Err(RuntimeError::new(kind, loc));
        }

        if operand.bytes().all(|b| b.is_ascii_digit()) {
            let too_large = || {
                RuntimeError::new(RuntimeErrorKind::LiteralTooLarge { literal: operand.to_string() },
                                  loc)
            };
            let value = operand.parse::<i64>().map_err(|_| too_large())?;
            return i64_to_f64_checked(value, too_large());
        }

        self.lookup(operand, loc)
    }

    /// Reads a variable.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no declaration for `name` has run yet.
    pub fn lookup(&self, name: &str, loc: Location) -> Result<f64, RuntimeError> {
        self.variables.get(name).copied().ok_or_else(|| {
            RuntimeError::new(RuntimeErrorKind::UndefinedVariable { name: name.to_string() }, loc)
        })
    }
}
