/// Core evaluation logic and context management.
///
/// Contains the per-run [`Context`](core::Context), the run options, the
/// interrupt type shared by faults and breakpoints, and the [`interpret`]
/// entry point.
///
/// [`interpret`]: core::interpret
pub mod core;

/// Statement execution.
///
/// Breakpoint checks, stack frames, declarations, prints, conditionals and
/// loops with the iteration cap.
pub mod statement;

/// Evaluation of flattened arithmetic expressions.
///
/// Splits expression text on the four operators and folds it left to right.
pub mod expression;

/// Evaluation of comparisons used by conditionals and loops.
pub mod comparison;

/// The execution stack.
///
/// Frames for the statements that are currently running, used for stack
/// traces and breakpoint reports.
pub mod stack;
