use logos::{Logos, Skip};

use crate::{ast::Location, error::SyntaxError, util::num::MAX_SAFE_I64_INT};

/// The keywords of the language, in the order declare, print, if, else,
/// while.
pub const KEYWORDS: [&str; 5] = ["maano", "likho", "agar", "warna", "jabtak"];

/// Returns `true` if `word` is one of the [`KEYWORDS`].
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Represents a lexical token in the source input.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `maano`, declares or re-declares a variable.
    #[token("maano")]
    Declare,
    /// `likho`, prints a string or a number.
    #[token("likho")]
    Print,
    /// `agar`
    #[token("agar")]
    If,
    /// `warna`
    #[token("warna")]
    Else,
    /// `jabtak`
    #[token("jabtak")]
    While,
    /// Identifier tokens; a run of ASCII letters such as `total`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// String literal tokens. The quotes are not part of the value.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Any operator character, optionally followed by `=`.
    #[regex(r"[+\-*/=<>!]=?", parse_operator)]
    Operator(Operator),
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Line feeds only move the position bookkeeping forward.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// The coarse token categories shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the five [`KEYWORDS`].
    Keyword,
    /// A variable name.
    Identifier,
    /// An integer literal.
    Number,
    /// A string literal.
    String,
    /// An arithmetic, assignment or comparison operator.
    Operator,
    /// `{` or `}`.
    Brace,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Operator => "operator",
            Self::Brace => "brace",
        };
        write!(f, "{kind}")
    }
}

impl Token {
    /// The category of the token.
    ///
    /// `NewLine` and `Ignored` never leave the lexer; they are reported as
    /// operators only to keep the match exhaustive.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Declare | Self::Print | Self::If | Self::Else | Self::While => TokenKind::Keyword,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Number(_) => TokenKind::Number,
            Self::Str(_) => TokenKind::String,
            Self::LBrace | Self::RBrace => TokenKind::Brace,
            Self::Operator(_) | Self::NewLine | Self::Ignored => TokenKind::Operator,
        }
    }

    /// The token's value as written in the source (strings without quotes).
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Declare => KEYWORDS[0].to_string(),
            Self::Print => KEYWORDS[1].to_string(),
            Self::If => KEYWORDS[2].to_string(),
            Self::Else => KEYWORDS[3].to_string(),
            Self::While => KEYWORDS[4].to_string(),
            Self::Identifier(name) | Self::Str(name) => name.clone(),
            Self::Number(value) => value.to_string(),
            Self::Operator(op) => op.to_string(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::NewLine => "\n".to_string(),
            Self::Ignored => String::new(),
        }
    }
}

/// The operators recognized by the lexer.
///
/// Each of `+ - * / = < > !` may be followed by `=` to form a single token.
/// Only the comparison subset is meaningful inside conditions; the rest can
/// only appear inside expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `+=`
    PlusEqual,
    /// `-`
    Minus,
    /// `-=`
    MinusEqual,
    /// `*`
    Star,
    /// `*=`
    StarEqual,
    /// `/`
    Slash,
    /// `/=`
    SlashEqual,
    /// `=`
    Assign,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
}

impl Operator {
    /// Looks up the operator spelled by `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Plus,
            "+=" => Self::PlusEqual,
            "-" => Self::Minus,
            "-=" => Self::MinusEqual,
            "*" => Self::Star,
            "*=" => Self::StarEqual,
            "/" => Self::Slash,
            "/=" => Self::SlashEqual,
            "=" => Self::Assign,
            "==" => Self::EqualEqual,
            "<" => Self::Less,
            "<=" => Self::LessEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterEqual,
            "!" => Self::Bang,
            "!=" => Self::BangEqual,
            _ => return None,
        };
        Some(op)
    }

    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::PlusEqual => "+=",
            Self::Minus => "-",
            Self::MinusEqual => "-=",
            Self::Star => "*",
            Self::StarEqual => "*=",
            Self::Slash => "/",
            Self::SlashEqual => "/=",
            Self::Assign => "=",
            Self::EqualEqual => "==",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Bang => "!",
            Self::BangEqual => "!=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The source range covered by a token.
///
/// Both ends are inclusive: `end` is the position of the token's last
/// character, which is what an editor needs to underline it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Position of the first character.
    pub start: Location,
    /// Position of the last character.
    pub end:   Location,
}

/// A token together with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The token itself.
    pub token: Token,
    /// Where the token was found.
    pub span:  Span,
}

impl Lexeme {
    /// Location of the token's first character.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.span.start
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// columns can be derived from token spans.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Converts source text into a sequence of located tokens.
///
/// Lexing stops at the first problem: a character outside the recognized
/// set, an unterminated string literal, or an integer literal too large to
/// be represented exactly.
///
/// # Errors
/// Returns a [`SyntaxError`] located at the offending character.
///
/// # Example
/// ```
/// use likho::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("maano x = 5").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].token, Token::Identifier("x".to_string()));
/// assert_eq!(tokens[3].span.start.column, 11);
///
/// assert!(lex("likho \"open").is_err());
/// ```
pub fn lex(source: &str) -> Result<Vec<Lexeme>, SyntaxError> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let extras = lexer.extras;
        let start = Location::new(extras.line, column_at(source, extras.line_start, span.start));

        let Ok(token) = token else {
            return Err(classify_error(lexer.slice(), start));
        };

        // Strings may span lines, so the extras already point past the token.
        let start = if let Token::Str(_) = token {
            string_start(source, span.start)
        } else {
            start
        };
        let end = end_of(lexer.slice(), start);
        lexemes.push(Lexeme { token,
                              span: Span { start, end } });
    }

    Ok(lexemes)
}

/// Maps a logos error to the diagnostic the learner sees.
fn classify_error(slice: &str, location: Location) -> SyntaxError {
    let Location { line, column } = location;
    match slice.chars().next() {
        Some('"') => SyntaxError::UnterminatedString { line, column },
        Some(c) if c.is_ascii_digit() => SyntaxError::LiteralTooLarge { literal: slice.to_string(),
                                                                         line,
                                                                         column },
        Some(character) => SyntaxError::UnexpectedCharacter { character,
                                                              line,
                                                              column },
        None => SyntaxError::UnexpectedEndOfInput { expected: "token".to_string(),
                                                    line,
                                                    column },
    }
}

/// Column of byte offset `offset`, counted in characters from `line_start`.
fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(1, |prefix| prefix.chars().count() + 1)
}

/// Recomputes the start of a string literal that may have moved the line
/// bookkeeping past itself.
fn string_start(source: &str, offset: usize) -> Location {
    let before = source.get(..offset).unwrap_or_default();
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Location::new(line, column_at(source, line_start, offset))
}

/// Position of the last character of `slice`, given where it starts.
fn end_of(slice: &str, start: Location) -> Location {
    let mut position = start;
    let mut chars = slice.chars().peekable();

    while let Some(c) = chars.next() {
        if chars.peek().is_none() {
            break;
        }
        if c == '\n' {
            position.line += 1;
            position.column = 1;
        } else {
            position.column += 1;
        }
    }

    position
}

/// Parses an integer literal that fits the exactly representable range.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal is larger than `MAX_SAFE_I64_INT`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice()
       .parse()
       .ok()
       .filter(|value| *value <= MAX_SAFE_I64_INT)
}

/// Strips the quotes from a string literal and accounts for embedded line
/// feeds.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let text = slice[1..slice.len() - 1].to_string();

    if let Some(last) = slice.rfind('\n') {
        lex.extras.line += slice.matches('\n').count();
        lex.extras.line_start = lex.span().start + last + 1;
    }

    text
}

fn parse_operator(lex: &logos::Lexer<Token>) -> Option<Operator> {
    Operator::from_symbol(lex.slice())
}

fn newline(lex: &mut logos::Lexer<Token>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}
