use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use mathqa::{
    batch::{Problem, solve_problems},
    catalog::{OperatorCatalog, read_argument_set},
    number::Number,
    options::extract_options,
    program::{ProgramForm, linearize, token::strip_to_tokens, validate_linear_program},
};
use tracing_subscriber::{EnvFilter, fmt};

/// mathqa converts, validates and runs the arithmetic programs that solve
/// math word problems, and reads their multiple-choice options.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Operator catalog, one `name | arity` per line. The built-in catalog is
    /// used when omitted.
    #[arg(short, long, global = true)]
    operators: Option<PathBuf>,

    /// Allowed arguments, one per line. Restricts what `linearize`, `validate`
    /// and `solve` accept in argument position.
    #[arg(short, long, global = true)]
    arguments: Option<PathBuf>,

    /// Tells mathqa to read the input from a file, one entry per line.
    #[arg(short, long, global = true)]
    file: bool,

    /// Logs progress as well as problems.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Converts nested programs into linear form.
    Linearize { contents: String },
    /// Checks linear programs against the operator catalog.
    Validate { contents: String },
    /// Runs programs and prints their answers.
    Solve {
        contents: String,

        /// Problem text the `n<i>` placeholders are bound from.
        #[arg(short, long, default_value = "")]
        problem: String,

        /// Reads the programs in nested form.
        #[arg(short, long)]
        nested: bool,
    },
    /// Prints the five canonical values of an option string.
    Options { contents: String },
}

fn main() {
    let args = Args::parse();

    // MATHQA_LOG or RUST_LOG controls the level
    let default_level = if args.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env("MATHQA_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                                      .unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    let catalog = args.operators.as_ref().map_or_else(OperatorCatalog::builtin, |path| {
                                             OperatorCatalog::from_path(path).unwrap_or_else(|e| {
                                                                                 eprintln!("{e}");
                                                                                 std::process::exit(1);
                                                                             })
                                         });
    let allowed = args.arguments.as_ref().map(|path| read_argument_set(&read_or_exit(path)));

    match args.command {
        Command::Linearize { contents } => {
            for line in inputs(contents, args.file) {
                match linearize(&line, &catalog, allowed.as_ref()) {
                    Ok(program) => println!("{program}"),
                    Err(failure) => eprintln!("{failure}"),
                }
            }
        },
        Command::Validate { contents } => {
            for line in inputs(contents, args.file) {
                match validate_linear_program(&strip_to_tokens(&line), &catalog, allowed.as_ref()) {
                    Ok(()) => println!("valid"),
                    Err(e) => println!("invalid: {e}"),
                }
            }
        },
        Command::Solve { contents,
                         problem,
                         nested, } => {
            let form = if nested { ProgramForm::Nested } else { ProgramForm::Linear };
            let problems: Vec<Problem> = inputs(contents, args.file).into_iter()
                                                                    .map(|program| Problem::new(program, problem.as_str()))
                                                                    .collect();

            match solve_problems(&problems, &catalog, form, allowed.as_ref()) {
                Ok(outcomes) => {
                    for outcome in outcomes {
                        match outcome {
                            Ok(Some(answer)) => println!("{}", Number::rounded(answer)),
                            Ok(None) => println!("no result: empty program"),
                            Err(e) => println!("no result: {e}"),
                        }
                    }
                },
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                },
            }
        },
        Command::Options { contents } => {
            for line in inputs(contents, args.file) {
                match extract_options(&line) {
                    Ok(options) => println!("{options}"),
                    Err(e) => eprintln!("{e}"),
                }
            }
        },
    }
}

/// The entries to process: the argument itself, or the non-blank lines of the
/// file it names.
fn inputs(contents: String, file: bool) -> Vec<String> {
    if !file {
        return vec![contents];
    }

    read_or_exit(Path::new(&contents)).lines()
                                          .map(str::trim)
                                          .filter(|line| !line.is_empty())
                                          .map(str::to_string)
                                          .collect()
}

fn read_or_exit(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| {
                                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                          path.display());
                                std::process::exit(1);
                            })
}
