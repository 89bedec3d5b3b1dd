use std::iter::Peekable;

use crate::{
    ast::{Location, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token, TokenKind},
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses the statements of a block up to and including its closing brace.
///
/// Statements are collected until the next token is a brace. That brace
/// must be `}` and is consumed. Blocks do not nest directly, so a `{` here
/// means the block was never closed.
///
/// Grammar: `block := statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `open`: Location of the opening brace.
///
/// # Errors
/// - `MissingClosingBrace` at `open` if the input ends or a `{` shows up
///   where a statement should start.
pub fn parse_block<I>(tokens: &mut Peekable<I>, open: Location) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = Lexeme>
{
    let mut statements = Vec::new();

    while let Some(lexeme) = tokens.peek() {
        if lexeme.token.kind() == TokenKind::Brace {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    match tokens.next() {
        Some(Lexeme { token: Token::RBrace,
                      .. }) => Ok(statements),
        _ => Err(SyntaxError::MissingClosingBrace { line:   open.line,
                                                    column: open.column, }),
    }
}
