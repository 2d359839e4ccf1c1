use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use tel_lang::cli::{self, CheckOptions, CheckResult, CliError};
use tel_lang::{DEFAULT_MAX_DEPTH, LiftOptions};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "tel")]
#[command(about = "TEL - lift filter expressions into an AST and render them back")]
#[command(version)]
struct Cli {
    /// Maximum expression nesting depth
    #[arg(long, global = true, env = "TEL_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a TEL expression
    Check {
        /// The expression (reads from stdin if not provided)
        expression: Option<String>,

        /// Only validate syntax, don't lift
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the canonical form of a TEL expression
    Format {
        /// The expression (reads from stdin if not provided)
        expression: Option<String>,
    },

    /// Print the lifted AST as JSON
    Ast {
        /// The expression (reads from stdin if not provided)
        expression: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = LiftOptions::default().with_max_depth(cli.max_depth);

    let result = match cli.command {
        Commands::Check {
            expression,
            syntax_only,
        } => run_check(expression, syntax_only, options),
        Commands::Format { expression } => read_expression(expression)
            .and_then(|e| cli::execute_format(&e, &options))
            .map(|text| println!("{}", text)),
        Commands::Ast { expression, pretty } => read_expression(expression)
            .and_then(|e| cli::execute_ast(&e, &options, pretty))
            .map(|json| println!("{}", json)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_expression(expression: Option<String>) -> Result<String, CliError> {
    match expression {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(
    expression: Option<String>,
    syntax_only: bool,
    options: LiftOptions,
) -> Result<(), CliError> {
    let options = CheckOptions {
        expression: read_expression(expression)?,
        syntax_only,
        options,
    };

    match cli::execute_check(&options)? {
        CheckResult::Empty => println!("Expression is empty"),
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Valid(_) => println!("Expression is valid"),
    }
    Ok(())
}
