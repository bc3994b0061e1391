//! namestore CLI - Command-line interface for the SQLite name store

mod commands;

use clap::{Parser, Subcommand};
use namestore::config::{self, ConnectionConfig, DATABASE_ENV};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "namestore")]
#[command(version)]
#[command(about = "Store names in a SQLite table and read them back")]
#[command(long_about = r#"
namestore keeps a single `names` table in a SQLite database.

Example usage:
  namestore init
  namestore add Khushi Alice
  namestore list --ids
  namestore demo
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (`:memory:` for a throwaway database)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Open the database without write access
    #[arg(long, global = true)]
    read_only: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and the names table
    Init {
        /// Also write the resolved settings to the config file
        #[arg(long)]
        write_config: bool,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Add one or more names
    Add {
        /// Names to store
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List every stored name
    List {
        /// Show storage ids alongside names
        #[arg(long)]
        ids: bool,
    },

    /// Show statistics about the store
    Stats,

    /// Insert the two sample names and print the table contents
    Demo,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Add { .. } => "add",
            Commands::List { .. } => "list",
            Commands::Stats => "stats",
            Commands::Demo => "demo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

/// Print a success envelope in JSON mode
pub fn emit_success(output_mode: OutputMode, command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        let envelope = serde_json::json!({
            "ok": true,
            "command": command,
            "data": data,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }
    Ok(())
}

fn emit_failure(output_mode: OutputMode, command: &str, err: &anyhow::Error) {
    match output_mode {
        OutputMode::Human => namestore::ui::error(&format!("{:#}", err)),
        OutputMode::Json => {
            let envelope = serde_json::json!({
                "ok": false,
                "command": command,
                "error": format!("{:#}", err),
            });
            println!("{}", envelope);
        }
    }
}

/// Settings shared by every command
pub struct Context {
    pub output_mode: OutputMode,
    pub connection: ConnectionConfig,
    pub config_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let command_name = cli.command.name();

    match run(cli, output_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{} failed: {:#}", command_name, err);
            emit_failure(output_mode, command_name, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let file_config = config::load_config(Some(&config_path))?;
    let env_database = std::env::var(DATABASE_ENV).ok();
    let base = std::env::current_dir()?;

    let connection = ConnectionConfig::resolve(
        cli.database.as_deref(),
        cli.read_only,
        env_database.as_deref(),
        file_config.as_ref(),
        &base,
    );
    tracing::debug!("Using database {:?} (read_only: {})", connection.database, connection.read_only);

    let ctx = Context {
        output_mode,
        connection,
        config_path,
    };

    match cli.command {
        Commands::Init { write_config, force } => commands::run_init(&ctx, write_config, force),
        Commands::Add { names } => commands::run_add(&ctx, &names),
        Commands::List { ids } => commands::run_list(&ctx, ids),
        Commands::Stats => commands::run_stats(&ctx),
        Commands::Demo => commands::run_demo(&ctx),
    }
}
