//! CLI Module
//!
//! Command-line interface for editing a topology file in the wire shape.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Netsketch - synchronized neural-network topology editor
#[derive(Parser, Debug)]
#[command(name = "netsketch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new topology file
    #[command(name = "init")]
    Init {
        /// Path for the new topology file
        path: PathBuf,

        /// Number of layers
        #[arg(long, default_value_t = crate::mirror::DEFAULT_LAYERS)]
        layers: usize,

        /// Nodes per layer
        #[arg(long, default_value_t = crate::mirror::DEFAULT_NODES_PER_LAYER)]
        nodes: usize,
    },

    /// Append layers to the topology
    #[command(name = "add-layer")]
    AddLayer {
        /// Path to the topology file
        path: PathBuf,

        /// Number of layers to add
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Nodes in each new layer
        #[arg(long, default_value_t = 1)]
        nodes: usize,
    },

    /// Append nodes to a layer
    #[command(name = "add-node")]
    AddNode {
        /// Path to the topology file
        path: PathBuf,

        /// 0-based index of the layer
        #[arg(short, long)]
        layer: usize,

        /// Number of nodes to add
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Remove a layer
    #[command(name = "remove-layer")]
    RemoveLayer {
        /// Path to the topology file
        path: PathBuf,

        /// 0-based index of the layer
        #[arg(short, long)]
        layer: usize,
    },

    /// Remove the last node of a layer
    #[command(name = "remove-node")]
    RemoveNode {
        /// Path to the topology file
        path: PathBuf,

        /// 0-based index of the layer
        #[arg(short, long)]
        layer: usize,
    },

    /// Print the topology as the control panel renders it
    #[command(name = "show")]
    Show {
        /// Path to the topology file
        path: PathBuf,
    },

    /// Send the topology to the training service and store the echo
    #[cfg(feature = "training-bridge")]
    #[command(name = "send")]
    Send {
        /// Path to the topology file
        path: PathBuf,

        /// Training service base URL (defaults to NETSKETCH_TRAINING_URL)
        #[arg(long)]
        url: Option<String>,
    },
}
