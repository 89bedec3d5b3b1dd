use crate::{
    ast::Location,
    error::{RuntimeError, SyntaxError},
};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The phase that produced it failed.
    Error,
    /// Advisory only; the program still runs.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A message attached to a source position, ready for an editor gutter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human readable message, without location prefix.
    pub message:  String,
    /// Line the diagnostic points at.
    pub line:     usize,
    /// Column the diagnostic points at.
    pub column:   usize,
    /// Error or warning.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a warning at `loc`.
    #[must_use]
    pub fn warning(message: impl Into<String>, loc: Location) -> Self {
        Self { message:  message.into(),
               line:     loc.line,
               column:   loc.column,
               severity: Severity::Warning, }
    }

    /// Creates an error at `loc`.
    #[must_use]
    pub fn error(message: impl Into<String>, loc: Location) -> Self {
        Self { message:  message.into(),
               line:     loc.line,
               column:   loc.column,
               severity: Severity::Error, }
    }

    /// Where the diagnostic points.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "line {}, col {}: {}: {}",
               self.line, self.column, self.severity, self.message)
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(error: &SyntaxError) -> Self {
        Self::error(error.message(), error.location())
    }
}

impl From<&RuntimeError> for Diagnostic {
    fn from(error: &RuntimeError) -> Self {
        Self::error(error.kind.to_string(), error.location())
    }
}
