use std::path::PathBuf;

use clap::{Parser, Subcommand};

use electrovault_core::ItemId;
use electrovault_infra::StoreConfig;
use electrovault_inventory::DEFAULT_TOP_N;

/// ElectroVault - inventory manager for electronic components
#[derive(Parser, Debug)]
#[command(name = "electrovault", author, version, about, long_about = None)]
pub struct Cli {
    /// Inventory JSON file (default: $ELECTROVAULT_DATA_PATH, then
    /// ./electrovault_inventory.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Enable JSON log format
    #[arg(long, global = true, env = "ELECTROVAULT_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Store configuration: `--data` wins over the environment.
    pub fn store_config(&self) -> StoreConfig {
        match &self.data {
            Some(path) => StoreConfig::new(path.clone()),
            None => StoreConfig::from_env(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List items, newest first
    List {
        /// Only items whose name or category contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a new component
    Add {
        #[arg(long)]
        name: String,
        /// GPU, CPU, Mobile, Laptop, Accessory or Other (other labels are accepted)
        #[arg(long, default_value = "Other")]
        category: String,
        /// Unit price, must be greater than 0
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        /// Quantity, at least 1
        #[arg(long, allow_negative_numbers = true)]
        qty: i64,
    },

    /// Delete one item by id
    Delete { id: ItemId },

    /// Change an item's stock by a positive or negative amount
    Adjust {
        id: ItemId,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Permanently delete ALL records
    Purge {
        /// Confirm the purge; without it nothing is deleted
        #[arg(long)]
        yes: bool,
    },

    /// Total items, inventory value and low-stock alerts
    Stats,

    /// Value distribution per category and the most expensive items
    Analytics {
        /// How many of the most expensive items to show
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Write the inventory as JSON (stdout unless --output is given)
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
