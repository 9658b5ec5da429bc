use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use decksheet::cli::run::RunArgs;
use decksheet::cli::SourceArgs;
use decksheet::Result;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "decksheet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Upload tournament decklist PDFs to a Google Sheet", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show debug logs (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read every decklist PDF and upload them to a new worksheet tab
    Run(RunArgs),

    /// Read decklist PDFs and print them as JSON without uploading
    Parse(SourceArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "decksheet=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

/// Returns whether the command fully succeeded
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Run(args) => {
            let report = decksheet::cli::run::run(&args)?;
            Ok(report.outcome.is_success())
        }

        Commands::Parse(args) => {
            decksheet::cli::parse::run(&args)?;
            Ok(true)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "decksheet", &mut io::stdout());
            Ok(true)
        }
    }
}
