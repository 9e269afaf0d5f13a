mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_MANIFEST_ERROR};
use config::CliConfig;
use keelson_schema::SortOrder;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "keelson",
    version,
    about = "Inspect install and uninstall ordering of rendered resources"
)]
struct Cli {
    /// Path to a keelson.toml config file (defaults to ./keelson.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Split, classify, and order a directory (or file) of rendered documents.
    Sort {
        /// Directory or file holding rendered documents.
        source: PathBuf,
        /// Direction to order for: install or uninstall.
        #[arg(long)]
        order: Option<SortOrder>,
        /// Shorthand for --order uninstall.
        #[arg(long, default_value_t = false, conflicts_with = "order")]
        uninstall: bool,
        /// Recognized API version (repeatable). Overrides the config file.
        #[arg(long = "api-version")]
        api_versions: Vec<String>,
    },
    /// Print the kind-priority table for a direction.
    Kinds {
        /// Direction to print: install or uninstall.
        #[arg(long, default_value_t = SortOrder::Install)]
        order: SortOrder,
    },
}

fn main() -> ExitCode {
    // A closed stdout (`keelson kinds | head -1`) ends the run quietly.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("KEELSON_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = match CliConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    let result = match cli.command {
        Commands::Sort {
            source,
            order,
            uninstall,
            api_versions,
        } => {
            let flag = if uninstall {
                Some(SortOrder::Uninstall)
            } else {
                order
            };
            commands::sort::run(
                &source,
                &config.version_set(&api_versions),
                config.order(flag),
                cli.json,
            )
        }
        Commands::Kinds { order } => commands::kinds::run(order, cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("manifest error:") {
                EXIT_MANIFEST_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
