use log::{debug, trace};

use crate::{
    ast::{Condition, Expression, Location, PrintValue, Statement},
    interpreter::evaluator::core::{BreakpointHit, Context, EvalResult, Interrupt},
    util::num::format_number,
};

impl Context<'_> {
    /// Executes a single statement.
    ///
    /// If the statement's line is a breakpoint, the run stops before anything
    /// happens and the current stack is reported. Otherwise a frame is pushed
    /// for the duration of the statement. A runtime error passing through
    /// gets the stack attached unless a deeper statement already did.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        let loc = statement.location();

        if self.breakpoints.contains(&loc.line) {
            return Err(Interrupt::Breakpoint(BreakpointHit { line:   loc.line,
                                                             column: loc.column,
                                                             stack:  self.stack.snapshot(), }));
        }

        trace!("{} at {loc}", statement.kind());
        self.stack.push(statement);

        let result = match statement {
            Statement::Declaration { name, value, .. } => self.eval_declaration(name, value, loc),
            Statement::Print { value, .. } => self.eval_print(value, loc),
            Statement::Conditional { condition,
                                     body,
                                     else_body,
                                     .. } => self.eval_conditional(condition, body, else_body, loc),
            Statement::Loop { condition, body, .. } => self.eval_loop(condition, body, loc),
        };

        let result = result.map_err(|interrupt| match interrupt {
                               Interrupt::Fault(mut error) => {
                                   if error.stack_trace.is_empty() {
                                       error.stack_trace = self.stack.snapshot();
                                   }
                                   Interrupt::Fault(error)
                               },
                               breakpoint @ Interrupt::Breakpoint(_) => breakpoint,
                           });

        self.stack.pop();
        result
    }

    fn eval_declaration(&mut self, name: &str, value: &Expression, loc: Location) -> EvalResult<()> {
        let value = self.eval_expression(value, loc)?;
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    fn eval_print(&mut self, value: &PrintValue, loc: Location) -> EvalResult<()> {
        let line = match value {
            PrintValue::Text(text) => text.clone(),
            PrintValue::Expression(expression) => {
                format_number(self.eval_expression(expression, loc)?)
            },
        };
        self.output.push(line);
        Ok(())
    }

    fn eval_conditional(&mut self, condition: &Condition, body: &[Statement],
                        else_body: &[Statement], loc: Location)
                        -> EvalResult<()> {
        if self.eval_condition(condition, loc)? {
            self.eval_block(body)
        } else {
            self.eval_block(else_body)
        }
    }

    /// Runs a loop until its condition fails or the iteration cap is hit.
    ///
    /// The condition is checked before every iteration. A loop whose
    /// condition still holds after `max_iterations` iterations stops
    /// silently and is recorded in `truncated_loops`.
    fn eval_loop(&mut self, condition: &Condition, body: &[Statement], loc: Location)
                 -> EvalResult<()> {
        let mut iterations = 0;

        while self.eval_condition(condition, loc)? {
            if iterations == self.max_iterations {
                debug!("loop at {loc} stopped after {iterations} iterations");
                if !self.truncated_loops.contains(&loc) {
                    self.truncated_loops.push(loc);
                }
                break;
            }

            self.eval_block(body)?;
            iterations += 1;
        }

        Ok(())
    }
}
