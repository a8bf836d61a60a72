//! Refcat CLI - Command-line interface for the personal reference catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use refcat::config::{self, RefcatConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "refcat")]
#[command(version)]
#[command(about = "Personal reference catalog - categorized code and config snippets")]
#[command(long_about = r#"
Refcat keeps short snippets you look up again and again:
  • Categorized references (Git, Docker, Kubernetes, ...)
  • Case-insensitive search over titles and content
  • An HTTP API for browser front-ends

Example usage:
  refcat serve --port 5000
  refcat list --search "rebase" --category Git
  echo "git stash pop" | refcat add --title "Stash pop" --category Git --language bash
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file (defaults to ./refcat.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Address to listen on
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of static front-end files
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// List references, optionally filtered
    List {
        /// Case-insensitive text to look for in titles and content
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category to restrict to
        #[arg(short, long)]
        category: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show one reference with its content
    Show {
        /// Reference id
        id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Add a reference (content is read from stdin when --content is omitted)
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        category: String,

        #[arg(long)]
        content: Option<String>,

        /// Language hint, e.g. bash or yaml
        #[arg(short, long)]
        language: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Replace every field of a reference (omitted fields become empty)
    Edit {
        /// Reference id
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(short, long)]
        language: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Delete a reference
    Rm {
        /// Reference id
        id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// List the distinct categories
    Categories {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Write a default refcat.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print version information
    Version,
}

/// How command results are printed
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

/// Print a successful result as a JSON envelope (no-op in human mode)
pub fn emit_success(output_mode: OutputMode, command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    if output_mode.is_human() {
        return Ok(());
    }
    let envelope = serde_json::json!({
        "ok": true,
        "command": command,
        "data": data,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    let cfg = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    match cli.command {
        Commands::Serve { database, host, port, static_dir } => {
            let database = cfg.database_path(database);
            let host = cfg.host(host);
            let port = cfg.port(port);
            let static_dir = cfg.static_dir(static_dir);

            tracing::info!("Serving {:?} (static files from {:?})", database, static_dir);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(refcat::server::start_server(&host, port, database, static_dir))?;
        }

        Commands::List { search, category, database } => {
            commands::run_list(output_mode, &cfg.database_path(database), search, category)?;
        }

        Commands::Show { id, database } => {
            commands::run_show(output_mode, &cfg.database_path(database), id)?;
        }

        Commands::Add { title, category, content, language, database } => {
            let content = match content {
                Some(content) => content,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            commands::run_add(output_mode, &cfg.database_path(database), title, category, content, language)?;
        }

        Commands::Edit { id, title, category, content, language, database } => {
            commands::run_edit(output_mode, &cfg.database_path(database), id, title, category, content, language)?;
        }

        Commands::Rm { id, database } => {
            commands::run_remove(output_mode, &cfg.database_path(database), id)?;
        }

        Commands::Categories { database } => {
            commands::run_categories(output_mode, &cfg.database_path(database))?;
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &RefcatConfig::with_defaults(), force)?;
            if output_mode.is_human() {
                refcat::ui::success(&format!("Wrote {}", path.display()));
            } else {
                emit_success(output_mode, "init", serde_json::json!({ "path": path }))?;
            }
        }

        Commands::Version => {
            commands::run_version(output_mode)?;
        }
    }

    Ok(())
}
