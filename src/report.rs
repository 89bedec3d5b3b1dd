use std::time::Duration;

use crate::{
    ast::{Location, Program},
    error::{Diagnostic, RuntimeError, SyntaxError},
    interpreter::{evaluator::core::BreakpointHit, lexer::Lexeme},
};

/// The coarse result of a run, as shown to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The program ran to completion.
    Ok,
    /// Lexing, parsing or execution failed.
    Error,
    /// A breakpoint stopped the run.
    Paused,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Error => write!(f, "error"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

/// How a run ended, with the payload for each case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every statement ran.
    Completed {
        /// Loops that were cut off by the iteration cap.
        truncated_loops: Vec<Location>,
    },
    /// Lexing, brace validation or parsing failed.
    SyntaxError(SyntaxError),
    /// Execution failed.
    RuntimeError(RuntimeError),
    /// A breakpoint stopped the run.
    Paused(BreakpointHit),
}

impl Outcome {
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Completed { .. } => Status::Ok,
            Self::SyntaxError(_) | Self::RuntimeError(_) => Status::Error,
            Self::Paused(_) => Status::Paused,
        }
    }
}

/// Wall-clock time spent in each phase. Phases that did not run stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    pub lex:       Duration,
    /// Brace validation and parsing.
    pub parse:     Duration,
    pub lint:      Duration,
    pub interpret: Duration,
    pub total:     Duration,
}

/// Everything a host needs to display after one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// How the run ended.
    pub outcome:     Outcome,
    /// Printed lines. Only filled for a completed run.
    pub output:      Vec<String>,
    /// Lint warnings. Present whenever parsing succeeded.
    pub warnings:    Vec<Diagnostic>,
    /// The error diagnostic of a failed run.
    pub diagnostics: Vec<Diagnostic>,
    /// The tokens, if lexing succeeded.
    pub tokens:      Vec<Lexeme>,
    /// The syntax tree, if parsing succeeded.
    pub program:     Option<Program>,
    /// Time spent per phase.
    pub timing:      Timing,
}

impl RunReport {
    #[must_use]
    pub const fn status(&self) -> Status {
        self.outcome.status()
    }

    /// Builds the report for a run that stopped with a syntax error.
    #[must_use]
    pub fn syntax_error(error: SyntaxError, tokens: Vec<Lexeme>, timing: Timing) -> Self {
        Self { diagnostics: vec![Diagnostic::from(&error)],
               outcome: Outcome::SyntaxError(error),
               output: Vec::new(),
               warnings: Vec::new(),
               tokens,
               program: None,
               timing }
    }
}
