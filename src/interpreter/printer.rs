use crate::{
    ast::{PrintValue, Program, Statement},
    interpreter::lexer::Lexeme,
};

/// Formats tokens one per line as `N. KIND: "value"`, numbered from 1.
///
/// # Example
/// ```
/// use likho::interpreter::{lexer::lex, printer::format_tokens};
///
/// let tokens = lex("likho x").unwrap();
/// assert_eq!(format_tokens(&tokens), "1. KEYWORD: \"likho\"\n2. IDENTIFIER: \"x\"");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Lexeme]) -> String {
    tokens.iter()
          .enumerate()
          .map(|(i, lexeme)| {
              format!("{}. {}: \"{}\"",
                      i + 1,
                      lexeme.token.kind().to_string().to_uppercase(),
                      lexeme.token.value())
          })
          .collect::<Vec<_>>()
          .join("\n")
}

/// Formats the syntax tree one node per line, indented by two spaces per
/// level of nesting.
///
/// The root is `program`. A conditional's `warna` branch is introduced by an
/// `else` line at the conditional's own depth, followed by its statements
/// one level deeper. The result ends with a newline.
///
/// # Example
/// ```
/// use likho::interpreter::{lexer::lex, parser::core::parse, printer::format_program};
///
/// let program = parse(lex("maano x = 5\nagar x > 1 { likho \"big\" }").unwrap()).unwrap();
///
/// assert_eq!(format_program(&program),
///            "program\n  declaration (5) [name: x]\n  conditional (x > 1)\n    print \"big\"\n");
/// ```
#[must_use]
pub fn format_program(program: &Program) -> String {
    let mut out = String::from("program\n");
    for statement in &program.body {
        write_statement(&mut out, statement, 1);
    }
    out
}

fn write_statement(out: &mut String, statement: &Statement, depth: usize) {
    let indent = "  ".repeat(depth);

    let line = match statement {
        Statement::Declaration { name, value, .. } => format!("declaration ({value}) [name: {name}]"),
        Statement::Print { value: PrintValue::Text(text),
                           .. } => format!("print \"{text}\""),
        Statement::Print { value: PrintValue::Expression(expression),
                           .. } => format!("print ({expression})"),
        Statement::Conditional { condition, .. } => format!("conditional ({condition})"),
        Statement::Loop { condition, .. } => format!("loop ({condition})"),
    };
    out.push_str(&indent);
    out.push_str(&line);
    out.push('\n');

    match statement {
        Statement::Conditional { body, else_body, .. } => {
            write_block(out, body, depth + 1);
            if !else_body.is_empty() {
                out.push_str(&indent);
                out.push_str("else\n");
                write_block(out, else_body, depth + 1);
            }
        },
        Statement::Loop { body, .. } => write_block(out, body, depth + 1),
        Statement::Declaration { .. } | Statement::Print { .. } => {},
    }
}

fn write_block(out: &mut String, statements: &[Statement], depth: usize) {
    for statement in statements {
        write_statement(out, statement, depth);
    }
}
