use std::{fs, process::ExitCode};

use clap::Parser;
use infix::{
    error::Error,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse},
};
use log::info;

/// infix evaluates integer arithmetic expressions such as `(2 + 3) * 4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells infix to read expressions from a file, one per line. Blank lines
    /// and lines starting with `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream of each expression before evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed tree of each expression, fully parenthesised, before
    /// its value.
    #[arg(short, long)]
    show_tree: bool,

    contents: String,
}

fn run(source: &str, args: &Args) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    if args.tokens {
        let listing: Vec<String> = tokens.iter().map(|(token, _)| format!("{token:?}")).collect();
        println!("{}", listing.join(", "));
    }

    let tree = parse(&tokens)?;
    if args.show_tree {
        println!("{tree}");
    }

    Ok(evaluate(&tree)?)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if !args.file {
        return match run(&args.contents, &args) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let script = match fs::read_to_string(&args.contents) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", &args.contents);
            return ExitCode::FAILURE;
        },
    };

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        info!("evaluating line {}", index + 1);
        match run(line, &args) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Line {}: {e}", index + 1);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
