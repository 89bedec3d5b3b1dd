use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::ParseResult,
    },
};

/// Checks that braces are balanced and that there is something to parse.
///
/// Runs before the parser so that the learner gets a brace error pointing at
/// the innermost unclosed `{` instead of whatever the parser trips over
/// first.
///
/// # Errors
/// - `UnmatchedClosingBrace` at the first `}` without a partner.
/// - `MissingClosingBrace` at the innermost `{` left open.
/// - `EmptyProgram` if there are no tokens.
///
/// # Example
/// ```
/// use likho::{
///     error::SyntaxError,
///     interpreter::{lexer::lex, parser::braces::validate_braces},
/// };
///
/// let tokens = lex("agar x > 1 {\n  jabtak x < 5 {\n}").unwrap();
/// assert_eq!(validate_braces(&tokens),
///            Err(SyntaxError::MissingClosingBrace { line:   1,
///                                                   column: 12, }));
/// ```
pub fn validate_braces(tokens: &[Lexeme]) -> ParseResult<()> {
    if tokens.is_empty() {
        return Err(SyntaxError::EmptyProgram);
    }

    let mut open = Vec::new();

    for lexeme in tokens {
        match lexeme.token {
            Token::LBrace => open.push(lexeme.location()),
            Token::RBrace => {
                if open.pop().is_none() {
                    let loc = lexeme.location();
                    return Err(SyntaxError::UnmatchedClosingBrace { line:   loc.line,
                                                                    column: loc.column, });
                }
            },
            _ => {},
        }
    }

    match open.pop() {
        Some(loc) => Err(SyntaxError::MissingClosingBrace { line:   loc.line,
                                                            column: loc.column, }),
        None => Ok(()),
    }
}
