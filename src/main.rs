use std::{fs, process::ExitCode};

use clap::Parser;
use likho::{
    error::format_stack_trace,
    interpreter::{
        evaluator::core::{DEFAULT_MAX_ITERATIONS, RunOptions},
        printer::{format_program, format_tokens},
    },
    report::Outcome,
    run_program,
};

/// likho runs programs written in a tiny teaching language and shows every
/// stage of the work.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells likho to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Stops before the statement on this line. May be given more than once.
    #[arg(short, long = "breakpoint", value_name = "LINE")]
    breakpoints: Vec<usize>,

    /// Number of iterations after which a loop is cut off.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Prints the tokens before running.
    #[arg(long)]
    tokens: bool,

    /// Prints the syntax tree before running.
    #[arg(long)]
    ast: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let options = RunOptions { breakpoints:    args.breakpoints.into_iter().collect(),
                               max_iterations: args.max_iterations, };

    let report = run_program(&script, &options);

    if args.tokens && !report.tokens.is_empty() {
        println!("{}\n", format_tokens(&report.tokens));
    }
    if args.ast
       && let Some(program) = &report.program
    {
        println!("{}", format_program(program));
    }

    for line in &report.output {
        println!("{line}");
    }
    for warning in &report.warnings {
        eprintln!("{warning}");
    }

    match &report.outcome {
        Outcome::Completed { truncated_loops } => {
            for loc in truncated_loops {
                eprintln!("Loop at {loc} stopped after {} iterations.", args.max_iterations);
            }
            ExitCode::SUCCESS
        },
        Outcome::Paused(hit) => {
            eprintln!("{hit}");
            if !hit.stack.is_empty() {
                eprintln!("{}", format_stack_trace(&hit.stack));
            }
            ExitCode::SUCCESS
        },
        Outcome::SyntaxError(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
        Outcome::RuntimeError(error) => {
            eprintln!("{error}");
            eprintln!("{}", format_stack_trace(&error.stack_trace));
            ExitCode::FAILURE
        },
    }
}
