mod commands;
mod fetch;
mod git;
mod reader;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fetch::HttpFetcher;
use reader::read_project_config;

#[derive(Parser)]
#[command(
    name = "gamevals",
    version,
    about = "Gamevals tooling — regenerate the gameval table and report changes between revisions"
)]
struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Gameval table path relative to the project root
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch upstream constants and rewrite the gameval table
    Generate {
        /// Base URL the upstream source files are fetched from
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Compare the gameval table against a previous revision and print a Markdown report
    Report {
        /// Git revision holding the previous table
        #[arg(long)]
        revision: Option<String>,

        /// Do not repeat name/id moves already reported as added or removed ids
        #[arg(long)]
        dedupe: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = match read_project_config(&cli.root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Generate { base_url } => {
            let config = config.generate_config(&cli.root, cli.table, base_url);
            let result = HttpFetcher::new()
                .and_then(|fetcher| commands::generate::run_generate(&config, &fetcher));
            if let Err(e) = result {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Commands::Report { revision, dedupe } => {
            let config = config.report_config(&cli.root, cli.table, revision, dedupe);
            match commands::report::run_report(&config) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}
