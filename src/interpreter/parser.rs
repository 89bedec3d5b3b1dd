/// Parser entry points and shared result type.
///
/// Holds [`core::parse`], which turns a token vector into a [`Program`], and
/// the greedy expression collector used by declarations and prints.
///
/// [`Program`]: crate::ast::Program
pub mod core;

/// Statement parsing.
///
/// One function per keyword: declarations, prints, conditionals and loops.
pub mod statement;

/// Block parsing.
///
/// Collects statements up to the closing brace of a conditional or loop.
pub mod block;

/// Brace balance checking.
///
/// A cheap pass over the token stream that reports unmatched or unclosed
/// braces before the parser runs.
pub mod braces;

/// Utility functions for the parser.
///
/// Token expectations, operands and comparisons shared by statement parsers.
pub mod utils;
