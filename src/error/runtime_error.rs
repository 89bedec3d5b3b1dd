use crate::ast::{Location, StatementKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// What went wrong while a program was running.
pub enum RuntimeErrorKind {
    /// Tried to read a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An operator had nothing on one of its sides, as in `- 5`.
    MissingOperand {
        /// The whole expression being evaluated.
        expression: String,
    },
    /// A number could not be represented exactly.
    ///
    /// `lex` already rejects such literals, so only a syntax tree built by
    /// hand can reach this at run time.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
}

impl std::fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MissingOperand { expression } => {
                write!(f, "Missing operand in expression '{expression}'.")
            },
            Self::LiteralTooLarge { literal } => write!(f, "Literal {literal} is too large."),
        }
    }
}

/// One entry of a stack trace: a statement that was executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// The kind of the statement.
    pub kind:   StatementKind,
    /// Line of the statement's keyword.
    pub line:   usize,
    /// Column of the statement's keyword.
    pub column: usize,
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}, col {}", self.kind, self.line, self.column)
    }
}

/// Represents an error that aborted a run.
///
/// The location is the innermost statement that was executing. The stack
/// trace lists the enclosing statements in push order: the outermost first
/// and the failing statement last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    /// What went wrong.
    pub kind:        RuntimeErrorKind,
    /// The source line where the error occurred.
    pub line:        usize,
    /// The source column where the error occurred.
    pub column:      usize,
    /// Statements active when the error occurred. Empty until the error
    /// passes through the first statement boundary.
    pub stack_trace: Vec<Frame>,
}

impl RuntimeError {
    /// Creates an error at `loc` without a stack trace.
    #[must_use]
    pub const fn new(kind: RuntimeErrorKind, loc: Location) -> Self {
        Self { kind,
               line: loc.line,
               column: loc.column,
               stack_trace: Vec::new() }
    }

    /// Where the error occurred.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}, col {}: {}", self.line, self.column, self.kind)
    }
}

impl std::error::Error for RuntimeError {}

/// Formats frames innermost first, one per line.
///
/// ## Example
/// ```
/// use likho::{
///     ast::StatementKind,
///     error::{Frame, runtime_error::format_stack_trace},
/// };
///
/// let frames = [Frame { kind:   StatementKind::Loop,
///                       line:   2,
///                       column: 1, },
///               Frame { kind:   StatementKind::Print,
///                       line:   3,
///                       column: 5, }];
///
/// assert_eq!(format_stack_trace(&frames),
///            "#1 print at line 3, col 5\n#2 loop at line 2, col 1");
/// ```
#[must_use]
pub fn format_stack_trace(frames: &[Frame]) -> String {
    frames.iter()
          .rev()
          .enumerate()
          .map(|(i, frame)| format!("#{} {frame}", i + 1))
          .collect::<Vec<_>>()
          .join("\n")
}
