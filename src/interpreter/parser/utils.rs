use std::iter::Peekable;

use crate::{
    ast::{ComparisonOperator, Condition, Location, Operand},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Operator, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for a token that is not what the parser wanted.
fn unexpected(lexeme: &Lexeme, expected: &str) -> SyntaxError {
    let Location { line, column } = lexeme.location();
    SyntaxError::UnexpectedToken { token: lexeme.token.value(),
                                   expected: Some(expected.to_string()),
                                   line,
                                   column }
}

/// Builds the error for input that ran out, located at the last token
/// consumed.
fn end_of_input(expected: &str, after: Location) -> SyntaxError {
    SyntaxError::UnexpectedEndOfInput { expected: expected.to_string(),
                                        line:     after.line,
                                        column:   after.column, }
}

/// Parses a plain identifier and returns its name and location.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `after`: Location of the previous token, for end-of-input errors.
///
/// # Errors
/// Returns a `SyntaxError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn expect_identifier<I>(tokens: &mut Peekable<I>,
                                                           after: Location)
                                                           -> ParseResult<(String, Location)>
    where I: Iterator<Item = Lexeme>
{
    match tokens.next() {
        Some(Lexeme { token: Token::Identifier(name),
                      span, }) => Ok((name, span.start)),
        Some(lexeme) => Err(unexpected(&lexeme, "identifier")),
        None => Err(end_of_input("identifier", after)),
    }
}

/// Consumes the given operator and returns its location.
///
/// # Errors
/// Returns a `SyntaxError` if a different token follows or the input ends.
pub(in crate::interpreter::parser) fn expect_operator<I>(tokens: &mut Peekable<I>,
                                                         operator: Operator,
                                                         after: Location)
                                                         -> ParseResult<Location>
    where I: Iterator<Item = Lexeme>
{
    let expected = format!("operator '{operator}'");
    match tokens.next() {
        Some(Lexeme { token: Token::Operator(op),
                      span, }) if op == operator => Ok(span.start),
        Some(lexeme) => Err(unexpected(&lexeme, &expected)),
        None => Err(end_of_input(&expected, after)),
    }
}

/// Consumes the `{` that opens a block and returns its location.
///
/// # Errors
/// Returns a `SyntaxError` if a different token follows or the input ends.
pub(in crate::interpreter::parser) fn expect_open_brace<I>(tokens: &mut Peekable<I>,
                                                           after: Location)
                                                           -> ParseResult<Location>
    where I: Iterator<Item = Lexeme>
{
    match tokens.next() {
        Some(Lexeme { token: Token::LBrace,
                      span, }) => Ok(span.start),
        Some(lexeme) => Err(unexpected(&lexeme, "brace '{'")),
        None => Err(end_of_input("brace '{'", after)),
    }
}

/// Parses one side of a comparison: an identifier or a number.
///
/// # Errors
/// Returns a `SyntaxError` for any other token or the end of input.
fn parse_operand<I>(tokens: &mut Peekable<I>, after: Location) -> ParseResult<Operand>
    where I: Iterator<Item = Lexeme>
{
    match tokens.next() {
        Some(Lexeme { token: Token::Identifier(name),
                      span, }) => Ok(Operand::Variable { name,
                                                         loc: span.start }),
        Some(Lexeme { token: Token::Number(value),
                      span, }) => Ok(Operand::Number { value,
                                                       loc: span.start }),
        Some(lexeme) => Err(unexpected(&lexeme, "identifier or number")),
        None => Err(end_of_input("identifier or number", after)),
    }
}

/// Maps a lexer operator onto a comparison operator.
const fn comparison_operator(operator: Operator) -> Option<ComparisonOperator> {
    match operator {
        Operator::Less => Some(ComparisonOperator::Less),
        Operator::Greater => Some(ComparisonOperator::Greater),
        Operator::LessEqual => Some(ComparisonOperator::LessEqual),
        Operator::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Operator::EqualEqual => Some(ComparisonOperator::Equal),
        Operator::BangEqual => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}

/// Parses a comparison of the form `<operand> <operator> <operand>`.
///
/// Exactly one comparison operator is allowed and neither side may be an
/// expression.
///
/// Grammar: `comparison := (identifier | number) operator (identifier |
/// number)`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `agar` or `jabtak` keyword.
/// - `keyword`: Location of that keyword.
///
/// # Returns
/// The condition and the location of its last token.
///
/// # Errors
/// - `UnexpectedToken` if an operand or the operator is missing.
/// - `InvalidComparison` if the operator is arithmetic or `=`, `!`.
pub(in crate::interpreter::parser) fn parse_comparison<I>(tokens: &mut Peekable<I>,
                                                          keyword: Location)
                                                          -> ParseResult<(Condition, Location)>
    where I: Iterator<Item = Lexeme>
{
    let left = parse_operand(tokens, keyword)?;
    let left_loc = left.location();

    let (operator, operator_loc) = match tokens.next() {
        Some(Lexeme { token: Token::Operator(op),
                      span, }) => match comparison_operator(op) {
            Some(operator) => (operator, span.start),
            None => {
                return Err(SyntaxError::InvalidComparison { operator: op.to_string(),
                                                            line:     span.start.line,
                                                            column:   span.start.column, });
            },
        },
        Some(lexeme) => return Err(unexpected(&lexeme, "comparison operator")),
        None => return Err(end_of_input("comparison operator", left_loc)),
    };

    let right = parse_operand(tokens, operator_loc)?;
    let right_loc = right.location();

    Ok((Condition { left,
                    operator,
                    right },
        right_loc))
}
