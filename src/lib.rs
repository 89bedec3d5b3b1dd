//! # likho
//!
//! likho is the execution core of a small teaching language written in Rust.
//! It lexes, parses, lints and interprets programs built from five keywords:
//! `maano` (declare), `likho` (print), `agar` (if), `warna` (else) and
//! `jabtak` (while), and reports every intermediate stage together with
//! line and column accurate diagnostics and breakpoint support.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::time::Instant;

use log::{debug, trace};

use crate::{
    error::Diagnostic,
    interpreter::{
        evaluator::core::{Execution, RunOptions, interpret},
        lexer::lex,
        lint::lint,
        parser::{braces::validate_braces, core::parse},
    },
    report::{Outcome, RunReport, Timing},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and related types that represent
/// the syntactic structure of a program as a tree. The AST is built by the
/// parser and traversed by the lint pass and the evaluator.
///
/// # Responsibilities
/// - Defines statements, conditions, operands and flattened expressions.
/// - Attaches source locations to every statement for diagnostics and
///   breakpoints.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or running code, and the diagnostic view shared with lint warnings.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers and detailed messages.
/// - Carries the stack trace of a runtime failure.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, linting, evaluation and the
/// pretty-printers.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for each phase on its own.
pub mod interpreter;
/// The result of a full run.
///
/// Holds [`RunReport`], the outcome and status enums, and per-phase timings.
pub mod report;
/// General utilities for safe numeric conversion and formatting.
pub mod util;

/// Runs a program through every phase and reports the result.
///
/// The phases are lexing, brace validation, parsing, linting and
/// interpretation. The first failing phase ends the run. Lint warnings are
/// attached to every report produced after a successful parse, including
/// runtime errors and paused runs.
///
/// Never fails itself; failures are described by [`RunReport::outcome`].
///
/// # Examples
/// ```
/// use likho::{interpreter::evaluator::core::RunOptions, report::Status, run_program};
///
/// let report = run_program("maano x = 5\nmaano y = 10\nlikho x + y", &RunOptions::default());
/// assert_eq!(report.status(), Status::Ok);
/// assert_eq!(report.output, vec!["15"]);
/// assert!(report.warnings.is_empty());
///
/// // Reading a variable that was never declared fails at run time.
/// let report = run_program("likho y", &RunOptions::default());
/// assert_eq!(report.status(), Status::Error);
/// assert_eq!(report.diagnostics[0].message, "Undefined variable 'y'.");
/// ```
#[must_use]
pub fn run_program(source: &str, options: &RunOptions) -> RunReport {
    let start = Instant::now();
    let mut timing = Timing::default();

    trace!("lexing {} bytes", source.len());
    let phase = Instant::now();
    let lexed = lex(source);
    timing.lex = phase.elapsed();

    let tokens = match lexed {
        Ok(tokens) => tokens,
        Err(error) => {
            debug!("lexing failed: {error}");
            timing.total = start.elapsed();
            return RunReport::syntax_error(error, Vec::new(), timing);
        },
    };

    let phase = Instant::now();
    let parsed = validate_braces(&tokens).and_then(|()| parse(tokens.clone()));
    timing.parse = phase.elapsed();

    let program = match parsed {
        Ok(program) => program,
        Err(error) => {
            debug!("parsing failed: {error}");
            timing.total = start.elapsed();
            return RunReport::syntax_error(error, tokens, timing);
        },
    };

    let phase = Instant::now();
    let warnings = lint(&program);
    timing.lint = phase.elapsed();

    let phase = Instant::now();
    let executed = interpret(&program, options);
    timing.interpret = phase.elapsed();

    let (outcome, output, diagnostics) = match executed {
        Ok(Execution::Finished { output,
                                 truncated_loops, }) => {
            (Outcome::Completed { truncated_loops }, output, Vec::new())
        },
        Ok(Execution::Paused(hit)) => (Outcome::Paused(hit), Vec::new(), Vec::new()),
        Err(error) => {
            let diagnostic = Diagnostic::from(&error);
            (Outcome::RuntimeError(error), Vec::new(), vec![diagnostic])
        },
    };

    timing.total = start.elapsed();
    debug!("run finished with status {}", outcome.status());

    RunReport { outcome,
                output,
                warnings,
                diagnostics,
                tokens,
                program: Some(program),
                timing }
}
