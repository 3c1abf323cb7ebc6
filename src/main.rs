use clap::{ArgAction, Parser as ClapParser, Subcommand};
use jpath::cli::{self, CliError, GetOptions, SetOptions, TokensOptions};
use std::io::{self, Read};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(ClapParser)]
#[command(name = "jpath")]
#[command(about = "jpath - read and write JSON documents through dotted/bracketed paths")]
#[command(version)]
struct Cli {
    /// Log more to stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node at a path
    Get {
        /// Path such as user.roles[1] or a["weird.key"]
        path: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Write a value at a path, creating missing containers, and print the document
    Set {
        /// Path to write
        path: String,

        /// Value to write, parsed as JSON
        value: String,

        /// Store the value as a plain string instead of parsing it as JSON
        #[arg(short, long)]
        string: bool,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the tokens a path splits into
    Tokens {
        /// Path to tokenize
        path: String,

        /// Print the canonical path instead of the token list
        #[arg(long)]
        canonical: bool,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Get {
            path,
            input,
            pretty,
        } => read_input(input).and_then(|input| {
            let output = cli::execute_get(&GetOptions { path, input })?;
            print_json(&output, pretty)
        }),
        Commands::Set {
            path,
            value,
            string,
            input,
            pretty,
        } => read_input(input).and_then(|input| {
            let output = cli::execute_set(&SetOptions {
                path,
                value,
                string,
                input,
            })?;
            print_json(&output, pretty)
        }),
        Commands::Tokens { path, canonical } => {
            cli::execute_tokens(&TokensOptions { path, canonical }).and_then(|output| {
                match output {
                    serde_json::Value::String(path) if canonical => {
                        println!("{}", path);
                        Ok(())
                    }
                    output => print_json(&output, false),
                }
            })
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Falls back to stdin when no `--input` was given and stdin is piped.
fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), CliError> {
    println!("{}", cli::to_output(value, pretty)?);
    Ok(())
}
