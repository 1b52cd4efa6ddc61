//! Command-line surface of the `stockroom` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Stockroom - small-shop inventory tracker
///
/// Keeps a list of products (name, category, price, quantity) and persists
/// it after every change.
#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STOCKROOM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every product
    List,

    /// Show one product
    Show {
        /// Product id
        id: String,
    },

    /// Add a product
    Add(FieldArgs),

    /// Edit a product; only the given fields change
    Edit {
        /// Product id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

/// Raw field input, staged exactly as a form would receive it.
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// Product name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Product category
    #[arg(long)]
    pub category: Option<String>,

    /// Unit price; a comma is accepted as the decimal separator
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Units in stock
    #[arg(short, long, allow_hyphen_values = true)]
    pub quantity: Option<String>,
}
