use crate::ast::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// Found a character outside the recognized set.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// Line of the opening quote.
        line:   usize,
        /// Column of the opening quote.
        column: usize,
    },
    /// An integer literal was too large to be represented exactly.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for, if anything specific.
        expected: Option<String>,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Line of the last token consumed.
        line:     usize,
        /// Column of the last token consumed.
        column:   usize,
    },
    /// A declaration or print has nothing to evaluate.
    MissingExpression {
        /// The token after which an expression was required.
        after:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A condition used an operator that does not compare.
    InvalidComparison {
        /// The operator found.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A block was opened with `{` but never closed.
    MissingClosingBrace {
        /// Line of the opening brace.
        line:   usize,
        /// Column of the opening brace.
        column: usize,
    },
    /// A `}` without a matching `{`.
    UnmatchedClosingBrace {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The source contains no tokens at all.
    EmptyProgram,
}

impl SyntaxError {
    /// Where the error should be shown. An empty program points at the
    /// start of the source.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnexpectedCharacter { line, column, .. }
            | Self::UnterminatedString { line, column }
            | Self::LiteralTooLarge { line, column, .. }
            | Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedEndOfInput { line, column, .. }
            | Self::MissingExpression { line, column, .. }
            | Self::InvalidComparison { line, column, .. }
            | Self::MissingClosingBrace { line, column }
            | Self::UnmatchedClosingBrace { line, column } => Location::new(*line, *column),
            Self::EmptyProgram => Location::new(1, 1),
        }
    }

    /// The error message without its location prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter { character, .. } => {
                format!("Unexpected character '{character}'.")
            },
            Self::UnterminatedString { .. } => "Unterminated string literal.".to_string(),
            Self::LiteralTooLarge { literal, .. } => format!("Literal {literal} is too large."),
            Self::UnexpectedToken { token,
                                    expected: Some(expected),
                                    .. } => {
                format!("Unexpected token '{token}', expected {expected}.")
            },
            Self::UnexpectedToken { token, .. } => format!("Unexpected token '{token}'."),
            Self::UnexpectedEndOfInput { expected, .. } => {
                format!("Unexpected end of input, expected {expected}.")
            },
            Self::MissingExpression { after, .. } => format!("Expected expression after '{after}'."),
            Self::InvalidComparison { operator, .. } => format!(
                "'{operator}' is not a comparison operator. Use one of < > <= >= == !=."
            ),
            Self::MissingClosingBrace { .. } => "Missing closing brace '}'.".to_string(),
            Self::UnmatchedClosingBrace { .. } => "Unmatched '}'.".to_string(),
            Self::EmptyProgram => "Program is empty after lexing.".to_string(),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Location { line, column } = self.location();
        write!(f, "Error on line {line}, col {column}: {}", self.message())
    }
}

impl std::error::Error for SyntaxError {}
