//! Plain-text rendering of items and analytics.

use std::io::{self, Write};

use electrovault_inventory::{category_icon, CategoryShare, InventorySummary, Item};

const BAR_WIDTH: usize = 30;

/// `$1,234.50` style: two decimals, comma thousands separators.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

pub fn items<W: Write>(out: &mut W, items: &[&Item]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(
            out,
            "No items found matching the search criteria or the vault is empty."
        );
    }

    writeln!(
        out,
        "{:>4}     {:<28}  {:<10}  {:>12}  {:>5}",
        "ID", "NAME", "CATEGORY", "PRICE", "STOCK"
    )?;
    for item in items {
        let flag = if item.is_low_stock() { "  LOW" } else { "" };
        writeln!(
            out,
            "{:>4}  {}  {:<28}  {:<10}  {:>12}  {:>5}{}",
            item.id(),
            category_icon(item.category()),
            item.name(),
            item.category(),
            format_currency(item.price().amount()),
            item.qty(),
            flag
        )?;
    }
    Ok(())
}

pub fn summary<W: Write>(out: &mut W, summary: &InventorySummary) -> io::Result<()> {
    writeln!(out, "Total Items:      {}", summary.total_items)?;
    writeln!(out, "Inventory Value:  {}", format_currency(summary.total_value))?;
    writeln!(out, "Low Stock Alerts: {}", summary.low_stock_count)
}

pub fn distribution<W: Write>(out: &mut W, shares: &[CategoryShare]) -> io::Result<()> {
    writeln!(out, "Inventory Value Distribution")?;
    for share in shares {
        let filled = ((share.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        writeln!(
            out,
            "  {:<12} {:>14} ({:>5.1}%)  [{}{}]",
            share.category,
            format_currency(share.total_value),
            share.percent,
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH - filled)
        )?;
    }
    Ok(())
}

pub fn top_expensive<W: Write>(out: &mut W, items: &[&Item]) -> io::Result<()> {
    writeln!(out, "Most Expensive Assets")?;
    for item in items {
        writeln!(
            out,
            "  {:<28} {:>12}",
            item.name(),
            format_currency(item.price().amount())
        )?;
    }
    Ok(())
}
