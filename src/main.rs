use clap::{Parser as ClapParser, Subcommand};
use cqn_filter::cli::{self, CliError, CommandOutput, QueryOptions, TranslateOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "cqn-filter")]
#[command(about = "Translate query-notation where clauses into persistence-layer filters")]
#[command(version)]
struct Cli {
    /// Log filter directive (e.g. "debug", "cqn_filter=trace")
    #[arg(long, global = true, env = "CQN_FILTER_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a where-clause token array into a filter object
    Translate {
        /// JSON where array (reads from stdin if not provided)
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Reject the clause if any token would be dropped
        #[arg(long)]
        strict: bool,

        /// Report dropped tokens on stderr
        #[arg(short, long)]
        diagnostics: bool,
    },

    /// Turn a full read query into findMany arguments
    Query {
        /// JSON read query (reads from stdin if not provided)
        input: Option<String>,

        /// Entity name, overriding SELECT.from
        #[arg(short, long)]
        entity: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Report dropped tokens on stderr
        #[arg(short, long)]
        diagnostics: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let result = match cli.command {
        Commands::Translate {
            input,
            pretty,
            strict,
            diagnostics,
        } => read_input(input).and_then(|input| {
            let output = cli::execute_translate(&TranslateOptions { input, strict })?;
            print_output(&output, pretty, diagnostics)
        }),
        Commands::Query {
            input,
            entity,
            pretty,
            diagnostics,
        } => read_input(input).and_then(|input| {
            let output = cli::execute_query(&QueryOptions { input, entity })?;
            print_output(&output, pretty, diagnostics)
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

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

fn print_output(output: &CommandOutput, pretty: bool, diagnostics: bool) -> Result<(), CliError> {
    if diagnostics {
        for skipped in &output.skipped {
            eprintln!("skipped {}", skipped);
        }
    }

    let json = if pretty {
        serde_json::to_string_pretty(&output.json)
    } else {
        serde_json::to_string(&output.json)
    }?;
    println!("{}", json);
    Ok(())
}
