use std::fs::{self};

use likho::{
    ast::{Expression, Location, PrintValue, Program, Statement},
    error::RuntimeErrorKind,
    interpreter::evaluator::core::{RunOptions, interpret},
    report::{Outcome, RunReport, Status},
    run_program,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_likho_blocks(&content).into_iter().enumerate() {
            count += 1;
            let report = run(&code);
            if report.status() != Status::Ok {
                panic!("Example {} in {:?} failed:\n{}\nOutcome: {:?}",
                       i + 1,
                       path,
                       code,
                       report.outcome);
            }
        }
    }

    assert!(count > 0, "No likho examples found in book/src");
}

fn extract_likho_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```likho") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run(src: &str) -> RunReport {
    run_program(src, &RunOptions::default())
}

fn assert_output(src: &str, expected: &[&str]) {
    let report = run(src);
    assert_eq!(report.status(),
               Status::Ok,
               "Script failed: {:?}",
               report.outcome);
    assert_eq!(report.output, expected);
}

fn runtime_error(src: &str) -> likho::error::RuntimeError {
    match run(src).outcome {
        Outcome::RuntimeError(error) => error,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn declaration_and_sum() {
    let report = run("maano x = 5\nmaano y = 10\nlikho x + y");
    assert_eq!(report.output, vec!["15"]);
    assert!(report.warnings.is_empty());
    assert!(report.diagnostics.is_empty());
}

#[test]
fn else_branch_runs_when_condition_fails() {
    assert_output("maano x = 2\nagar x > 5 { likho \"big\" } warna { likho \"small\" }",
                  &["small"]);
    assert_output("maano x = 9\nagar x > 5 { likho \"big\" } warna { likho \"small\" }",
                  &["big"]);
}

#[test]
fn operators_have_no_precedence() {
    assert_output("likho 2 + 3 * 4", &["20"]);
    assert_output("likho 10 - 4 / 2", &["3"]);
    assert_output("maano a = 6\nlikho a * 2 - 2", &["10"]);
}

#[test]
fn numbers_print_without_trailing_zero() {
    assert_output("likho 7 / 2", &["3.5"]);
    assert_output("likho 2 - 5", &["-3"]);
    assert_output("likho 10 / 5", &["2"]);
    assert_output("likho 0 - 5 * 0", &["0"]);
}

#[test]
fn overflow_prints_infinity() {
    assert_output("maano x = 10\njabtak x > 1 { maano x = x * x }\nlikho x", &["Infinity"]);
    assert_output("maano x = 10\njabtak x > 1 { maano x = x * x }\nlikho 0 - x",
                  &["-Infinity"]);
}

#[test]
fn extreme_magnitudes_print_in_exponent_form() {
    assert_output("likho 1 / 1000000000", &["1e-9"]);
    assert_output("maano x = 1000000000\nlikho x * x * x", &["1e+27"]);
    assert_output("maano x = 1000000000\nlikho x * x * 100", &["100000000000000000000"]);
}

#[test]
fn redeclaration_updates_value() {
    assert_output("maano x = 1\nmaano x = x + 1\nlikho x", &["2"]);
}

#[test]
fn string_prints_verbatim() {
    assert_output("likho \"hello world\"", &["hello world"]);
    assert_output("likho \"two\nlines\"", &["two\nlines"]);
}

#[test]
fn comparisons() {
    assert_output("agar 2 < 3 { likho 1 }", &["1"]);
    assert_output("agar 3 > 2 { likho 1 }", &["1"]);
    assert_output("agar 2 <= 2 { likho 1 }", &["1"]);
    assert_output("agar 3 >= 3 { likho 1 }", &["1"]);
    assert_output("agar 2 == 2 { likho 1 }", &["1"]);
    assert_output("agar 2 != 3 { likho 1 }", &["1"]);
    assert_output("agar 2 == 3 { likho 1 }", &[]);
}

#[test]
fn loop_counts() {
    assert_output("maano i = 0\njabtak i < 3 {\n  likho i\n  maano i = i + 1\n}",
                  &["0", "1", "2"]);
}

#[test]
fn loop_false_at_entry_runs_zero_times() {
    assert_output("maano i = 5\njabtak i < 3 {\n  likho i\n  maano i = i + 1\n}", &[]);
}

#[test]
fn runaway_loop_stops_at_cap() {
    let report = run("maano i = 0\njabtak i < 1 { likho \"tick\" }");

    assert_eq!(report.status(), Status::Ok);
    assert_eq!(report.output.len(), 1000);
    assert_eq!(report.outcome,
               Outcome::Completed { truncated_loops: vec![Location::new(2, 1)] });
}

#[test]
fn iteration_cap_is_configurable() {
    let options = RunOptions { max_iterations: 5,
                               ..RunOptions::default() };
    let report = run_program("jabtak 1 < 2 { likho 1 }", &options);

    assert_eq!(report.output.len(), 5);
    assert_eq!(report.outcome,
               Outcome::Completed { truncated_loops: vec![Location::new(1, 1)] });
}

#[test]
fn loop_that_ends_on_the_cap_is_not_truncated() {
    let options = RunOptions { max_iterations: 3,
                               ..RunOptions::default() };
    let report = run_program("maano i = 0\njabtak i < 3 { maano i = i + 1 }\nlikho i", &options);

    assert_eq!(report.output, vec!["3"]);
    assert_eq!(report.outcome,
               Outcome::Completed { truncated_loops: vec![] });
}

#[test]
fn division_by_zero_is_error() {
    let error = runtime_error("maano x = 1 / 0");

    assert_eq!(error.kind, RuntimeErrorKind::DivisionByZero);
    assert_eq!(error.location(), Location::new(1, 1));
    assert_eq!(error.stack_trace.len(), 1);
}

#[test]
fn division_by_zero_is_located_at_innermost_statement() {
    let error = runtime_error("maano x = 1\nagar x == 1 {\n  jabtak x < 2 {\n    maano x = x / 0\n  }\n}");

    assert_eq!(error.location(), Location::new(4, 5));
    assert_eq!(error.stack_trace
                    .iter()
                    .map(|frame| (frame.line, frame.column))
                    .collect::<Vec<_>>(),
               vec![(2, 1), (3, 3), (4, 5)]);
}

#[test]
fn unknown_variable_is_error() {
    let report = run("likho y");

    assert_eq!(report.status(), Status::Error);
    assert_eq!(report.diagnostics[0].message, "Undefined variable 'y'.");
    assert_eq!(report.diagnostics[0].location(), Location::new(1, 1));
    assert_eq!(report.warnings[0].message, "Variable 'y' is used before declaration.");
}

#[test]
fn leading_operator_is_missing_operand() {
    let error = runtime_error("likho - 5");
    assert_eq!(error.kind,
               RuntimeErrorKind::MissingOperand { expression: "- 5".to_string() });

    let error = runtime_error("likho 1 + + 2");
    assert_eq!(error.kind,
               RuntimeErrorKind::MissingOperand { expression: "1 + + 2".to_string() });
}

#[test]
fn oversized_literal_in_built_tree_is_runtime_error() {
    let program =
        Program { body: vec![Statement::Print { value: PrintValue::Expression(Expression::new("1 + 9007199254740992")),
                                                loc:   Location::new(1, 1), }] };
    let error = interpret(&program, &RunOptions::default()).unwrap_err();

    assert_eq!(error.kind,
               RuntimeErrorKind::LiteralTooLarge { literal: "9007199254740992".to_string() });
    assert_eq!(error.location(), Location::new(1, 1));
}

#[test]
fn runtime_error_discards_output() {
    let report = run("likho 1\nlikho 1 / 0");

    assert_eq!(report.status(), Status::Error);
    assert!(report.output.is_empty());
    assert!(report.program.is_some());
}

#[test]
fn missing_closing_brace_is_syntax_error() {
    let report = run("agar x > 1 { likho x");

    assert_eq!(report.status(), Status::Error);
    assert_eq!(report.diagnostics[0].location(), Location::new(1, 12));
    assert_eq!(report.diagnostics[0].message, "Missing closing brace '}'.");
    assert!(report.program.is_none());
    assert!(report.warnings.is_empty());
}

#[test]
fn empty_program_is_syntax_error() {
    assert_eq!(run("").status(), Status::Error);
    assert_eq!(run("  \n\t\n").status(), Status::Error);
}

#[test]
fn runs_are_deterministic() {
    let src = fs::read_to_string("tests/example.likho").unwrap();
    let first = run(&src);
    let second = run(&src);

    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.output, second.output);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.tokens, second.tokens);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.likho").unwrap();
    let report = run(&contents);

    assert_eq!(report.status(), Status::Ok, "{:?}", report.outcome);
    assert_eq!(report.output,
               vec!["Table of 3", "3", "6", "9", "12", "15", "big total", "45"]);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}
