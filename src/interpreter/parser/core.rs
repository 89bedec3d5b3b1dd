use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{Expression, Program},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::statement::parse_statement,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program.
///
/// The parser takes ownership of the tokens and consumes them front to back.
/// Parsing stops at the first error.
///
/// Grammar: `program := statement*`
///
/// # Errors
/// Returns a [`SyntaxError`] naming the offending token (or the end of
/// input) and its location.
///
/// # Example
/// ```
/// use likho::interpreter::{lexer::lex, parser::core::parse};
///
/// let tokens = lex("maano x = 5\nlikho x").unwrap();
/// let program = parse(tokens).unwrap();
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse(tokens: Vec<Lexeme>) -> ParseResult<Program> {
    trace!("parsing {} tokens", tokens.len());

    let mut tokens = tokens.into_iter().peekable();
    let mut body = Vec::new();

    while tokens.peek().is_some() {
        body.push(parse_statement(&mut tokens)?);
    }

    Ok(Program { body })
}

/// Collects an expression.
///
/// An expression is the longest run of operator, identifier and number
/// tokens. Anything else ends it, including a string, a brace or a keyword.
/// The collected token values are joined with single spaces; the evaluator
/// re-splits that text at run time.
///
/// Grammar: `expression := (operator | identifier | number)*`
///
/// The result may be empty; callers decide whether that is an error.
pub fn parse_expression<I>(tokens: &mut Peekable<I>) -> Expression
    where I: Iterator<Item = Lexeme>
{
    let mut parts = Vec::new();

    while let Some(lexeme) = tokens.next_if(|lexeme| {
                                       matches!(lexeme.token,
                                                Token::Operator(_)
                                                | Token::Identifier(_)
                                                | Token::Number(_))
                                   })
    {
        parts.push(lexeme.token.value());
    }

    Expression::new(parts.join(" "))
}
