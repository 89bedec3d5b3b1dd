use crate::{ast::Statement, error::Frame};

/// The statements currently executing, outermost first.
///
/// The language has no functions, so this only ever mirrors the nesting of
/// conditionals and loops around the running statement.
///
/// # Example
/// ```
/// use likho::{
///     ast::{Expression, Location, Statement, StatementKind},
///     interpreter::evaluator::stack::ExecutionStack,
/// };
///
/// let statement = Statement::Declaration { name:  "x".to_string(),
///                                          value: Expression::new("1"),
///                                          loc:   Location::new(2, 3), };
///
/// let mut stack = ExecutionStack::default();
/// stack.push(&statement);
/// assert_eq!(stack.depth(), 1);
/// assert_eq!(stack.snapshot()[0].kind, StatementKind::Declaration);
///
/// stack.pop();
/// assert_eq!(stack.depth(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionStack {
    frames: Vec<Frame>,
}

impl ExecutionStack {
    /// Pushes a frame for `statement`.
    pub fn push(&mut self, statement: &Statement) {
        let loc = statement.location();
        self.frames.push(Frame { kind:   statement.kind(),
                                 line:   loc.line,
                                 column: loc.column, });
    }

    /// Pops the innermost frame.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Copies the current frames.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Frame> {
        self.frames.clone()
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }
}
