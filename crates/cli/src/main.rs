//! Parse one SQL statement from the command line and print the outcome
//! with timing.
//!
//! Exit codes: 0 on success, 1 on argument misuse, 2 when the input does
//! not parse.

use std::time::Instant;

use clap::Parser;
use clap::error::ErrorKind;
use squall_lib::{ParseOptions, parse_with_options, to_sql};

#[derive(Parser)]
#[command(name = "squall", version, about = "Parse one SQL statement and print the result")]
struct Cli {
    /// The SQL text to parse.
    sql: String,

    /// Drive the grammar without constructing the tree.
    #[arg(long)]
    no_ast: bool,

    /// Log parser tracing to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
        }
    };

    let level = if cli.verbose {
        log::Level::Trace
    } else {
        log::Level::Warn
    };
    if simple_logger::init_with_level(level).is_err() {
        eprintln!("failed to initialize logging");
    }

    let options = ParseOptions {
        disable_statement_construction: cli.no_ast,
    };
    let started = Instant::now();
    let result = parse_with_options(&cli.sql, options);
    let elapsed = started.elapsed();

    if result.is_success() {
        println!("Parsing successful.");
        if let Some(statement) = &result.statement {
            println!("{}", to_sql(statement, &cli.sql));
        }
        println!("(parse took {} microseconds)", elapsed.as_micros());
        0
    } else {
        println!("Parsing NOT successful.");
        for error in &result.errors {
            println!("Error: {error}");
        }
        2
    }
}
