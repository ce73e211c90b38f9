//! Command handlers: one store call per invocation.

use std::io::Write;

use anyhow::{bail, Context};

use electrovault_infra::{InventoryStorage, InventoryStore};
use electrovault_inventory::{Inventory, NewItem};

use crate::args::{Cli, Command};
use crate::render;

/// Execute `cli.command` against the configured data file, writing
/// user-facing output to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = cli.store_config();
    tracing::debug!(path = %config.data_path.display(), "opening inventory");
    let store = InventoryStore::open(&config);
    execute(&store, &cli.command, out)
}

fn load<S: InventoryStorage>(store: &InventoryStore<S>) -> anyhow::Result<Inventory> {
    store
        .load()
        .with_context(|| format!("failed to load inventory from {}", store.storage().describe()))
}

fn execute<S: InventoryStorage, W: Write>(
    store: &InventoryStore<S>,
    command: &Command,
    out: &mut W,
) -> anyhow::Result<()> {
    let inventory = load(store)?;

    match command {
        Command::List { search } => {
            let matches = inventory.search(search.as_deref().unwrap_or(""));
            render::items(out, &matches)?;
        }

        Command::Add {
            name,
            category,
            price,
            qty,
        } => {
            let new = NewItem::new(name.clone(), category.clone(), *price, *qty);
            let (_, item) = store
                .add_item(&inventory, new)
                .context("could not add item")?;
            writeln!(out, "Added {} to the vault! (id {})", item.name(), item.id())?;
        }

        Command::Delete { id } => {
            let existed = inventory.contains(*id);
            store
                .delete_item(&inventory, *id)
                .with_context(|| format!("could not delete item {id}"))?;
            if existed {
                writeln!(out, "Item ID {id} successfully purged.")?;
            } else {
                writeln!(out, "No item with ID {id}; inventory unchanged.")?;
            }
        }

        Command::Adjust { id, delta } => {
            let (_, item) = store
                .adjust_stock(&inventory, *id, *delta)
                .with_context(|| format!("could not adjust stock of item {id}"))?;
            writeln!(out, "{} now has {} in stock.", item.name(), item.qty())?;
        }

        Command::Purge { yes } => {
            if !yes {
                tracing::warn!(items = inventory.len(), "purge refused without confirmation");
                bail!(
                    "refusing to delete {} records without confirmation; re-run with --yes",
                    inventory.len()
                );
            }
            store
                .clear_all(&inventory)
                .context("could not purge inventory")?;
            writeln!(out, "System purged. {} records removed.", inventory.len())?;
        }

        Command::Stats => {
            render::summary(out, &inventory.summary())?;
        }

        Command::Analytics { top } => {
            if inventory.is_empty() {
                writeln!(out, "No items in the vault to generate analytics.")?;
                return Ok(());
            }
            render::distribution(out, &inventory.category_value_distribution())?;
            writeln!(out)?;
            render::top_expensive(out, &inventory.top_expensive(*top))?;
        }

        Command::Export { output } => match output {
            Some(path) => {
                store
                    .export_to(&inventory, path)
                    .with_context(|| format!("could not export to {}", path.display()))?;
                writeln!(out, "Exported {} items to {}", inventory.len(), path.display())?;
            }
            None => {
                let document = store.export(&inventory).context("could not export inventory")?;
                writeln!(out, "{document}")?;
            }
        },
    }

    Ok(())
}
