use likho::{
    ast::{ComparisonOperator, Condition, Expression, Location, Operand, PrintValue, Program,
          Statement},
    error::SyntaxError,
    interpreter::{
        lexer::lex,
        parser::{braces::validate_braces, core::parse},
    },
};

fn parse_src(src: &str) -> Result<Program, SyntaxError> {
    parse(lex(src).unwrap())
}

fn validate(src: &str) -> Result<(), SyntaxError> {
    validate_braces(&lex(src).unwrap())
}

fn variable(name: &str, line: usize, column: usize) -> Operand {
    Operand::Variable { name: name.to_string(),
                        loc:  Location::new(line, column), }
}

fn number(value: i64, line: usize, column: usize) -> Operand {
    Operand::Number { value,
                      loc: Location::new(line, column) }
}

#[test]
fn declaration() {
    let program = parse_src("maano total = a + 2 * b").unwrap();

    assert_eq!(program.body,
               vec![Statement::Declaration { name:  "total".to_string(),
                                             value: Expression::new("a + 2 * b"),
                                             loc:   Location::new(1, 1), }]);
}

#[test]
fn print_text_and_expression() {
    let program = parse_src("likho \"hi\"\nlikho x - 1").unwrap();

    assert_eq!(program.body,
               vec![Statement::Print { value: PrintValue::Text("hi".to_string()),
                                       loc:   Location::new(1, 1), },
                    Statement::Print { value: PrintValue::Expression(Expression::new("x - 1")),
                                       loc:   Location::new(2, 1), }]);
}

#[test]
fn expression_stops_at_keyword() {
    let program = parse_src("maano x = 1 likho x").unwrap();
    assert_eq!(program.body.len(), 2);
}

#[test]
fn conditional_with_else() {
    let program = parse_src("agar x >= 10 {\n  likho \"big\"\n} warna {\n  likho \"small\"\n}").unwrap();

    assert_eq!(program.body,
               vec![Statement::Conditional {
                   condition: Condition { left:     variable("x", 1, 6),
                                          operator: ComparisonOperator::GreaterEqual,
                                          right:    number(10, 1, 11), },
                   body:      vec![Statement::Print { value: PrintValue::Text("big".to_string()),
                                                      loc:   Location::new(2, 3), }],
                   else_body: vec![Statement::Print { value: PrintValue::Text("small".to_string()),
                                                      loc:   Location::new(4, 3), }],
                   loc:       Location::new(1, 1),
               }]);
}

#[test]
fn conditional_without_else_has_empty_else_body() {
    let program = parse_src("agar 1 == 1 { }").unwrap();

    let Statement::Conditional { body, else_body, .. } = &program.body[0] else {
        panic!("expected a conditional");
    };
    assert!(body.is_empty());
    assert!(else_body.is_empty());
}

#[test]
fn nested_loop() {
    let program = parse_src("jabtak i < 3 {\n  jabtak j != i {\n    maano j = j + 1\n  }\n}").unwrap();

    let Statement::Loop { condition, body, loc } = &program.body[0] else {
        panic!("expected a loop");
    };
    assert_eq!(*loc, Location::new(1, 1));
    assert_eq!(condition.operator, ComparisonOperator::Less);

    let Statement::Loop { condition, body, loc } = &body[0] else {
        panic!("expected an inner loop");
    };
    assert_eq!(*loc, Location::new(2, 3));
    assert_eq!(condition.to_string(), "j != i");
    assert_eq!(body[0].location(), Location::new(3, 5));
}

#[test]
fn missing_identifier() {
    assert_eq!(parse_src("maano = 5"),
               Err(SyntaxError::UnexpectedToken { token:    "=".to_string(),
                                                  expected: Some("identifier".to_string()),
                                                  line:     1,
                                                  column:   7, }));
}

#[test]
fn missing_assignment() {
    assert_eq!(parse_src("maano x 5"),
               Err(SyntaxError::UnexpectedToken { token:    "5".to_string(),
                                                  expected: Some("operator '='".to_string()),
                                                  line:     1,
                                                  column:   9, }));
}

#[test]
fn missing_expression_after_equals() {
    assert_eq!(parse_src("maano x ="),
               Err(SyntaxError::MissingExpression { after:  "=".to_string(),
                                                    line:   1,
                                                    column: 7, }));
}

#[test]
fn missing_expression_after_print() {
    assert_eq!(parse_src("likho"),
               Err(SyntaxError::MissingExpression { after:  "likho".to_string(),
                                                    line:   1,
                                                    column: 1, }));
}

#[test]
fn statement_must_start_with_keyword() {
    assert_eq!(parse_src("x = 5"),
               Err(SyntaxError::UnexpectedToken { token:    "x".to_string(),
                                                  expected: None,
                                                  line:     1,
                                                  column:   1, }));
    assert_eq!(parse_src("warna { }"),
               Err(SyntaxError::UnexpectedToken { token:    "warna".to_string(),
                                                  expected: None,
                                                  line:     1,
                                                  column:   1, }));
}

#[test]
fn string_after_expression_is_a_new_statement() {
    assert_eq!(parse_src("likho x \"a\""),
               Err(SyntaxError::UnexpectedToken { token:    "a".to_string(),
                                                  expected: None,
                                                  line:     1,
                                                  column:   9, }));
}

#[test]
fn arithmetic_in_condition_is_rejected() {
    let error = parse_src("agar x + 1 { likho x }").unwrap_err();

    assert_eq!(error,
               SyntaxError::InvalidComparison { operator: "+".to_string(),
                                                line:     1,
                                                column:   8, });
    assert_eq!(error.to_string(),
               "Error on line 1, col 8: '+' is not a comparison operator. Use one of < > <= >= \
                == !=.");
}

#[test]
fn missing_comparison_operand() {
    assert_eq!(parse_src("agar x > { }"),
               Err(SyntaxError::UnexpectedToken { token:    "{".to_string(),
                                                  expected: Some("identifier or number".to_string()),
                                                  line:     1,
                                                  column:   10, }));
}

#[test]
fn input_ends_before_block() {
    assert_eq!(parse_src("jabtak x < 3"),
               Err(SyntaxError::UnexpectedEndOfInput { expected: "brace '{'".to_string(),
                                                       line:     1,
                                                       column:   12, }));
}

#[test]
fn brace_inside_block_is_missing_closing_brace() {
    assert_eq!(parse_src("agar x > 1 { { } }"),
               Err(SyntaxError::MissingClosingBrace { line:   1,
                                                      column: 12, }));
    assert_eq!(parse_src("maano x = 1\njabtak x < 3 {\n  likho x\n  {\n}\n}"),
               Err(SyntaxError::MissingClosingBrace { line:   2,
                                                      column: 14, }));
}

#[test]
fn block_missing_closing_brace() {
    assert_eq!(parse_src("agar x > 1 { likho x"),
               Err(SyntaxError::MissingClosingBrace { line:   1,
                                                      column: 12, }));
}

#[test]
fn balanced_braces_pass() {
    assert_eq!(validate("agar x > 1 { jabtak x < 2 { } } warna { }"), Ok(()));
}

#[test]
fn unmatched_closing_brace() {
    assert_eq!(validate("likho 1\n}"),
               Err(SyntaxError::UnmatchedClosingBrace { line:   2,
                                                        column: 1, }));
}

#[test]
fn innermost_unclosed_brace_is_reported() {
    assert_eq!(validate("agar x > 1 {\n  jabtak x < 5 {\n    likho x\n}"),
               Err(SyntaxError::MissingClosingBrace { line:   1,
                                                      column: 12, }));
    assert_eq!(validate("agar x > 1 { }\njabtak x < 5 {\n  likho x"),
               Err(SyntaxError::MissingClosingBrace { line:   2,
                                                      column: 14, }));
}

#[test]
fn no_tokens_is_empty_program() {
    assert_eq!(validate("\n\n"), Err(SyntaxError::EmptyProgram));
    assert_eq!(SyntaxError::EmptyProgram.to_string(),
               "Error on line 1, col 1: Program is empty after lexing.");
}
