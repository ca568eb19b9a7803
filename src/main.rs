//! Netsketch CLI - Topology Editor
//!
//! Command-line interface for the synchronized topology model.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use netsketch::cli::{commands, Cli, Commands};
use netsketch::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Netsketch Topology Editor v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init {
            path,
            layers,
            nodes,
        } => commands::init(&path, layers, nodes),
        Commands::AddLayer { path, count, nodes } => commands::add_layer(&path, count, nodes),
        Commands::AddNode { path, layer, count } => commands::add_node(&path, layer, count),
        Commands::RemoveLayer { path, layer } => commands::remove_layer(&path, layer),
        Commands::RemoveNode { path, layer } => commands::remove_node(&path, layer),
        Commands::Show { path } => commands::show(&path),
        #[cfg(feature = "training-bridge")]
        Commands::Send { path, url } => commands::send(&path, url.as_deref()),
    }
}
