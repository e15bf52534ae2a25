use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use sieve_lang::cli::{self, CheckOptions, CheckResult, CliError, OutputFormat};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sieve")]
#[command(about = "Sieve - parse filter expressions into a syntax tree")]
#[command(version)]
struct Cli {
    /// Log filter (e.g. "debug", "sieve_lang=trace")
    #[arg(long, global = true, env = "SIEVE_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Source,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Source => OutputFormat::Source,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print its syntax tree
    Check {
        /// The expression to parse (reads from stdin if not provided)
        expression: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't print the tree
        #[arg(long)]
        syntax_only: bool,

        /// Output format for the tree
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Print the token stream of an expression
    Tokens {
        /// The expression to tokenize (reads from stdin if not provided)
        expression: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'sieve docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            expression,
            pretty,
            syntax_only,
            format,
        } => run_check(expression, pretty, syntax_only, format.into()),
        Commands::Tokens { expression, pretty } => read_expression(expression)
            .and_then(|expression| cli::execute_tokens(&expression, pretty))
            .map(|json| println!("{}", json)),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => {
            cli::get_doc_category(&category).map(|content| print!("{}", content))
        }
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
    pretty: bool,
    syntax_only: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let options = CheckOptions {
        expression: read_expression(expression)?,
        pretty,
        syntax_only,
        format,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Rendered(output) => println!("{}", output),
    }
    Ok(())
}
