//! Quanta command-line shell.
//!
//! Evaluates a quantity expression given as arguments, or prompts for one
//! expression per line when run without arguments. Each line is evaluated
//! independently; nothing carries over between lines.

use anyhow::Result;
use clap::Parser;
use quanta_calc::lexer::Scanner;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quanta", version, about = "Calculator for quantities with units")]
struct Cli {
    /// Expression to evaluate, e.g. '2 kg + 2000g in grams'. Starts an
    /// interactive prompt when omitted.
    expression: Vec<String>,

    /// Print the token stream instead of evaluating.
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if !cli.expression.is_empty() {
        let input = cli.expression.join(" ");
        if !run_line(&input, cli.tokens) {
            std::process::exit(1);
        }
        return Ok(());
    }
    repl(cli.tokens)
}

fn repl(tokens: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "\n > ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let input = line.trim_end_matches('\n');
        if input.trim().is_empty() {
            continue;
        }
        run_line(input, tokens);
    }
}

/// Evaluates (or tokenizes) a single line; returns whether it succeeded.
fn run_line(input: &str, tokens: bool) -> bool {
    if tokens {
        let rendered: Vec<String> = Scanner::new(input).map(|t| t.to_string()).collect();
        println!("{}", rendered.join("  "));
        return true;
    }
    match quanta_calc::calculate(input) {
        Ok(result) => {
            println!("{result}");
            true
        }
        Err(err) => {
            eprintln!("{}", err.render());
            false
        }
    }
}
