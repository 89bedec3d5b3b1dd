use likho::interpreter::{
    lexer::lex,
    parser::core::parse,
    printer::{format_program, format_tokens},
};

const PROGRAM: &str = "maano x = 5
agar x > 3 {
  likho \"big\"
  jabtak x < 7 {
    maano x = x + 1
  }
} warna {
  likho x
}";

#[test]
fn tokens_one_per_line() {
    let tokens = lex("maano x = 5\nlikho \"hi\" }").unwrap();

    assert_eq!(format_tokens(&tokens),
               "1. KEYWORD: \"maano\"\n2. IDENTIFIER: \"x\"\n3. OPERATOR: \"=\"\n4. NUMBER: \
                \"5\"\n5. KEYWORD: \"likho\"\n6. STRING: \"hi\"\n7. BRACE: \"}\"");
}

#[test]
fn no_tokens_prints_nothing() {
    assert_eq!(format_tokens(&[]), "");
}

#[test]
fn tree_with_else() {
    let program = parse(lex(PROGRAM).unwrap()).unwrap();

    assert_eq!(format_program(&program),
               "program
  declaration (5) [name: x]
  conditional (x > 3)
    print \"big\"
    loop (x < 7)
      declaration (x + 1) [name: x]
  else
    print (x)
");
}

#[test]
fn printed_tree_recovers_nesting() {
    let program = parse(lex(PROGRAM).unwrap()).unwrap();
    let printed = format_program(&program);

    let depths: Vec<(usize, &str)> =
        printed.lines()
               .map(|line| {
                   let trimmed = line.trim_start();
                   let depth = (line.len() - trimmed.len()) / 2;
                   (depth, trimmed.split_whitespace().next().unwrap_or_default())
               })
               .collect();

    assert_eq!(depths,
               vec![(0, "program"),
                    (1, "declaration"),
                    (1, "conditional"),
                    (2, "print"),
                    (2, "loop"),
                    (3, "declaration"),
                    (1, "else"),
                    (2, "print")]);
}

#[test]
fn printed_tokens_recover_kind_and_value() {
    let tokens = lex("jabtak i <= 10 { }").unwrap();
    let printed = format_tokens(&tokens);

    for (lexeme, line) in tokens.iter().zip(printed.lines()) {
        let (_, rest) = line.split_once(". ").unwrap();
        let (kind, value) = rest.split_once(": ").unwrap();

        assert_eq!(kind, lexeme.token.kind().to_string().to_uppercase());
        assert_eq!(value.trim_matches('"'), lexeme.token.value());
    }
}
