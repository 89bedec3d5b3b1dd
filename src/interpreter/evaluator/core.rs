use std::collections::{HashMap, HashSet};

use log::debug;

use crate::{
    ast::{Location, Program, Statement},
    error::{Frame, RuntimeError},
    interpreter::evaluator::stack::ExecutionStack,
};

/// Default number of iterations after which a loop is cut off.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Settings for a single run, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Source lines to stop at. Lines without a statement are inert.
    pub breakpoints:    HashSet<usize>,
    /// Iteration cap applied to every loop.
    pub max_iterations: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { breakpoints:    HashSet::new(),
               max_iterations: DEFAULT_MAX_ITERATIONS, }
    }
}

impl RunOptions {
    /// Options with the given breakpoints and the default iteration cap.
    #[must_use]
    pub fn with_breakpoints(breakpoints: impl IntoIterator<Item = usize>) -> Self {
        Self { breakpoints: breakpoints.into_iter().collect(),
               ..Self::default() }
    }
}

/// Where a run stopped because of a breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointHit {
    /// Line of the statement that was about to run.
    pub line:   usize,
    /// Column of that statement's keyword.
    pub column: usize,
    /// Enclosing statements, outermost first. The paused statement itself is
    /// not on the stack yet.
    pub stack:  Vec<Frame>,
}

impl BreakpointHit {
    /// Location of the paused statement.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

impl std::fmt::Display for BreakpointHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Paused at line {}, col {}", self.line, self.column)
    }
}

/// Anything that stops a run early.
///
/// Both cases travel up through `?` like an error; only [`interpret`] tells
/// them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interrupt {
    /// A runtime error.
    Fault(RuntimeError),
    /// A breakpoint was reached.
    Breakpoint(BreakpointHit),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Fault(error)
    }
}

/// Result type used by the evaluator.
///
/// All statement evaluation returns either a value of type `T` or the
/// [`Interrupt`] that ended the run.
pub type EvalResult<T> = Result<T, Interrupt>;

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    /// Every statement ran.
    Finished {
        /// Printed lines in order.
        output:          Vec<String>,
        /// Loops that were cut off by the iteration cap, in the order they
        /// first hit it.
        truncated_loops: Vec<Location>,
    },
    /// A breakpoint stopped the run. Output up to that point is discarded.
    Paused(BreakpointHit),
}

/// Stores the state of one run.
///
/// A fresh `Context` is built for every call to [`interpret`], so runs never
/// share variables, output or stack frames.
pub struct Context<'a> {
    /// Variable values by name. Declarations insert or overwrite.
    pub variables:       HashMap<String, f64>,
    /// Printed lines.
    pub output:          Vec<String>,
    /// Statements currently executing.
    pub stack:           ExecutionStack,
    /// Lines to pause at.
    pub breakpoints:     &'a HashSet<usize>,
    /// Iteration cap for loops.
    pub max_iterations:  usize,
    /// Loops that hit the cap.
    pub truncated_loops: Vec<Location>,
}

impl<'a> Context<'a> {
    /// Creates an empty context for the given options.
    #[must_use]
    pub fn new(options: &'a RunOptions) -> Self {
        Self { variables:       HashMap::new(),
               output:          Vec::new(),
               stack:           ExecutionStack::default(),
               breakpoints:     &options.breakpoints,
               max_iterations:  options.max_iterations,
               truncated_loops: Vec::new(), }
    }

    /// Runs statements in order, stopping at the first interrupt.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }
}

/// Runs a parsed program.
///
/// # Errors
/// Returns the first [`RuntimeError`], with its stack trace attached.
///
/// # Example
/// ```
/// use likho::interpreter::{
///     evaluator::core::{Execution, RunOptions, interpret},
///     lexer::lex,
///     parser::core::parse,
/// };
///
/// let program = parse(lex("maano x = 2\nlikho x * 3").unwrap()).unwrap();
/// let execution = interpret(&program, &RunOptions::default()).unwrap();
///
/// assert_eq!(execution,
///            Execution::Finished { output:          vec!["6".to_string()],
///                                  truncated_loops: vec![], });
/// ```
pub fn interpret(program: &Program, options: &RunOptions) -> Result<Execution, RuntimeError> {
    debug!("interpreting {} statements with {} breakpoints",
           program.body.len(),
           options.breakpoints.len());

    let mut context = Context::new(options);

    match context.eval_block(&program.body) {
        Ok(()) => Ok(Execution::Finished { output:          context.output,
                                           truncated_loops: context.truncated_loops, }),
        Err(Interrupt::Breakpoint(hit)) => {
            debug!("paused at line {}", hit.line);
            Ok(Execution::Paused(hit))
        },
        Err(Interrupt::Fault(error)) => {
            debug!("runtime error: {error}");
            Err(error)
        },
    }
}
