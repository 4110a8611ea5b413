// ClientSearch - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Loading the client list, running one query, printing the result

use clap::{Parser, Subcommand};
use clientsearch::app::query::{self, Query};
use clientsearch::app::report::{self, OutputFormat};
use clientsearch::core::store::ClientStore;
use clientsearch::platform::config::{self, AppConfig, PlatformPaths};
use clientsearch::util::{self, error::display_chain};
use std::path::PathBuf;

/// ClientSearch - search a JSON client list by field and find duplicate emails.
#[derive(Parser, Debug)]
#[command(name = "clientsearch", version, about)]
struct Cli {
    /// JSON file holding an array of client objects.
    file: PathBuf,

    #[command(subcommand)]
    command: Command,

    /// Output format (defaults to [output] format in config.toml, then pretty).
    #[arg(short = 'f', long = "format", value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Config file to use instead of the platform default. Must exist and be valid.
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Case-insensitive substring search on one field (id, full_name, email).
    Search {
        /// Field to match against.
        field: String,
        /// Text to look for.
        query: String,
    },

    /// List every client whose email is shared with another client.
    Duplicates,
}

impl From<&Command> for Query {
    fn from(command: &Command) -> Self {
        match command {
            Command::Search { field, query } => Query::Search {
                field: field.clone(),
                text: query.clone(),
            },
            Command::Duplicates => Query::Duplicates,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", display_chain(&e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> util::error::Result<()> {
    let (app_config, config_warnings): (AppConfig, Vec<String>) = match cli.config {
        Some(ref path) => (config::load_config_strict(path)?, Vec::new()),
        None => config::load_config(&PlatformPaths::resolve().config_file()),
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ClientSearch starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let store = ClientStore::load_from_file_with_limit(&cli.file, app_config.max_file_bytes)?;

    let outcome = query::run(&store, &Query::from(&cli.command));
    for warning in &outcome.warnings {
        eprintln!("Warning: {warning}");
    }

    let format = cli
        .format
        .or_else(|| OutputFormat::from_name(&app_config.output_format))
        .unwrap_or_default();
    let stdout = std::io::stdout();
    report::render(&outcome, format, stdout.lock())?;

    Ok(())
}
