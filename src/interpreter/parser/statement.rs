use std::iter::Peekable;

use crate::{
    ast::{Location, PrintValue, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Operator, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_identifier, expect_open_brace, expect_operator, parse_comparison},
        },
    },
};

/// Parses a single statement.
///
/// A statement always starts with a keyword:
/// - `maano` starts a declaration,
/// - `likho` starts a print,
/// - `agar` starts a conditional,
/// - `jabtak` starts a loop.
///
/// The statement's location is the location of its keyword.
///
/// # Errors
/// Returns `UnexpectedToken` if the first token is anything else, including
/// a stray `warna`, and propagates errors from the statement parsers.
pub fn parse_statement<I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = Lexeme>
{
    let Some(Lexeme { token, span }) = tokens.next() else {
        return Err(SyntaxError::UnexpectedEndOfInput { expected: "statement".to_string(),
                                                       line:     1,
                                                       column:   1, });
    };
    let loc = span.start;

    match token {
        Token::Declare => parse_declaration(tokens, loc),
        Token::Print => parse_print(tokens, loc),
        Token::If => parse_conditional(tokens, loc),
        Token::While => parse_loop(tokens, loc),
        other => Err(SyntaxError::UnexpectedToken { token:    other.value(),
                                                    expected: None,
                                                    line:     loc.line,
                                                    column:   loc.column, }),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `maano <identifier> = <expression>`.
/// Declaring an existing name again overwrites its value; this is the only
/// way to update a variable.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the identifier or `=` is missing,
/// - no expression follows `=` (reported at the identifier).
fn parse_declaration<I>(tokens: &mut Peekable<I>, loc: Location) -> ParseResult<Statement>
    where I: Iterator<Item = Lexeme>
{
    let (name, name_loc) = expect_identifier(tokens, loc)?;
    expect_operator(tokens, Operator::Assign, name_loc)?;

    let value = parse_expression(tokens);
    if value.is_empty() {
        return Err(SyntaxError::MissingExpression { after:  "=".to_string(),
                                                    line:   name_loc.line,
                                                    column: name_loc.column, });
    }

    Ok(Statement::Declaration { name, value, loc })
}

/// Parses a print statement.
///
/// Uses one token of lookahead: if a string literal follows `likho` it is
/// printed verbatim, otherwise an expression is collected. A string that
/// follows an expression is not part of it; `likho x "a"` is a print of `x`
/// followed by a stray string.
///
/// # Errors
/// Returns `MissingExpression` if neither a string nor an expression
/// follows.
fn parse_print<I>(tokens: &mut Peekable<I>, loc: Location) -> ParseResult<Statement>
    where I: Iterator<Item = Lexeme>
{
    if let Some(Lexeme { token: Token::Str(text),
                         .. }) = tokens.next_if(|lexeme| matches!(lexeme.token, Token::Str(_)))
    {
        return Ok(Statement::Print { value: PrintValue::Text(text),
                                     loc });
    }

    let value = parse_expression(tokens);
    if value.is_empty() {
        return Err(SyntaxError::MissingExpression { after:  "likho".to_string(),
                                                    line:   loc.line,
                                                    column: loc.column, });
    }

    Ok(Statement::Print { value: PrintValue::Expression(value),
                          loc })
}

/// Parses a conditional with an optional `warna` branch.
///
/// Syntax:
/// ```text
///     agar <comparison> { <statements> }
///     agar <comparison> { <statements> } warna { <statements> }
/// ```
///
/// # Errors
/// Propagates errors from the comparison and both blocks.
fn parse_conditional<I>(tokens: &mut Peekable<I>, loc: Location) -> ParseResult<Statement>
    where I: Iterator<Item = Lexeme>
{
    let (condition, condition_end) = parse_comparison(tokens, loc)?;
    let open = expect_open_brace(tokens, condition_end)?;
    let body = parse_block(tokens, open)?;

    let else_body = match tokens.next_if(|lexeme| lexeme.token == Token::Else) {
        Some(else_keyword) => {
            let open = expect_open_brace(tokens, else_keyword.location())?;
            parse_block(tokens, open)?
        },
        None => Vec::new(),
    };

    Ok(Statement::Conditional { condition,
                                body,
                                else_body,
                                loc })
}

/// Parses a loop.
///
/// Syntax: `jabtak <comparison> { <statements> }`
///
/// # Errors
/// Propagates errors from the comparison and the block.
fn parse_loop<I>(tokens: &mut Peekable<I>, loc: Location) -> ParseResult<Statement>
    where I: Iterator<Item = Lexeme>
{
    let (condition, condition_end) = parse_comparison(tokens, loc)?;
    let open = expect_open_brace(tokens, condition_end)?;
    let body = parse_block(tokens, open)?;

    Ok(Statement::Loop { condition,
                         body,
                         loc })
}
