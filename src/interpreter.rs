/// The evaluator module executes a parsed program.
///
/// The evaluator walks the statements depth first, keeps the variable
/// environment, evaluates expressions and comparisons, enforces the loop
/// iteration cap, and stops at breakpoints. It is the execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Executes declarations, prints, conditionals and loops.
/// - Reports runtime errors such as division by zero or undefined variables.
/// - Tracks the statement stack for stack traces and breakpoint reports.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for keywords,
/// identifiers, integers, strings, operators and braces, each with its
/// source span. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column
///   spans.
/// - Handles integer and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid characters, unterminated strings and
///   oversized literals.
pub mod lexer;
/// Static checks over a parsed program.
///
/// The lint pass never fails and never runs code. It flags variables that
/// are declared but unused, names used without a declaration, and loops
/// that never update their own condition variable.
pub mod lint;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token vector produced by the lexer and builds
/// the statement tree. Braces are validated up front so that unbalanced
/// blocks are reported at the brace that caused them.
///
/// # Responsibilities
/// - Converts tokens into statements.
/// - Validates the grammar, reporting errors with line and column.
pub mod parser;
/// Human readable renderings of tokens and syntax trees.
///
/// Used for display only; nothing parses this text back.
pub mod printer;
