//! cmake-tools CLI - Main entry point

mod commands;

use clap::{Parser, Subcommand};
use cmake_foundation::JsonStore;
use commands::Store;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// cmake-tools - manage CMake installations and resolve build steps
#[derive(Parser, Debug)]
#[command(name = "cmake-tools")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory holding installations.json (defaults to the global config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered installation names in order
    List,
    /// Show a single installation
    Show {
        /// Installation name (exact match)
        name: String,
    },
    /// Register a new installation
    Add {
        /// Unique installation name
        #[arg(long)]
        name: String,
        /// Path to the cmake executable (empty = `cmake` on PATH)
        #[arg(long, default_value = "")]
        home: String,
    },
    /// Remove an installation
    Remove {
        /// Installation name (exact match)
        name: String,
    },
    /// Resolve a build step against the registry without running it
    Step {
        /// Installation to use
        #[arg(long)]
        installation: Option<String>,
        /// Working directory relative to the workspace
        #[arg(long)]
        working_dir: Option<String>,
        /// Extra arguments passed to cmake
        #[arg(long, allow_hyphen_values = true)]
        args: Option<String>,
        /// Workspace root of the build
        #[arg(long)]
        workspace: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let (message, code) = commands::describe_error(&e);
            eprintln!("Error: {}", message);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let store = match args.config_dir {
        Some(dir) => Store::at(JsonStore::new(dir)),
        None => Store::global()?,
    };
    tracing::debug!("Using config store {}", store.base_dir().display());

    let mut out = std::io::stdout().lock();
    match args.command {
        Command::List => commands::list(&store, &mut out),
        Command::Show { name } => commands::show(&store, &name, &mut out),
        Command::Add { name, home } => commands::add(&store, &name, &home, &mut out),
        Command::Remove { name } => commands::remove(&store, &name, &mut out),
        Command::Step {
            installation,
            working_dir,
            args,
            workspace,
        } => commands::step(
            &store,
            commands::StepArgs {
                installation: installation.as_deref(),
                working_dir: working_dir.as_deref(),
                cmake_args: args.as_deref(),
                workspace: &workspace,
            },
            &mut out,
        ),
    }
}
