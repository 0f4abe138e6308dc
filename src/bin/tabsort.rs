//! Command-line interface for tabsort
//!
//! Reads one line of bracketed table text (or takes it as an argument),
//! parses and sorts it, and prints the result.
//!
//! Usage:
//!   tabsort                          - prompt and read one line from stdin
//!   tabsort '<text>'                 - process the given text
//!   tabsort '<text>' --format json   - emit the sorted set as JSON

use std::io::{self, BufRead};

use clap::{Arg, Command};

use tabsort::tables::pipeline::{self, OutputFormat};

const PROMPT: &str =
    "Please enter data in the format: [[element1, element2], [element3, element4]]";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("tabsort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse bracketed table text, sort it, and print the result")
        .arg(
            Arg::new("input")
                .help("Table text; read from standard input when omitted")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text', 'json' or 'yaml'")
                .default_value("text"),
        )
        .get_matches();

    let format_name = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let format = OutputFormat::from_name(format_name).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let input = match matches.get_one::<String>("input") {
        Some(text) => text.clone(),
        None => read_input_line()?,
    };

    match pipeline::process(&input, format) {
        Ok(output) => {
            if format == OutputFormat::Text {
                println!("Sorted tables:");
            }
            println!("{}", output);
        }
        Err(error) if error.is_invalid_input() => {
            tracing::debug!(%error, "rejected input");
            println!("Invalid input.");
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Prompt and read one line from standard input.
fn read_input_line() -> anyhow::Result<String> {
    println!("{}", PROMPT);
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
