/// Syntax errors.
///
/// Defines all error types that can occur during lexing, brace validation
/// and parsing of source code. A syntax error is always fatal to the phase
/// that raised it; there is no recovery.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the errors raised while a program runs, such as division by zero
/// or reading an undefined variable, together with the stack trace captured
/// at the point of failure.
pub mod runtime_error;
/// Editor-facing diagnostics.
///
/// A diagnostic is the flattened `{message, line, column, severity}` view of
/// a syntax error, a runtime error or a lint warning.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};
pub use runtime_error::{Frame, RuntimeError, RuntimeErrorKind, format_stack_trace};
pub use syntax_error::SyntaxError;
