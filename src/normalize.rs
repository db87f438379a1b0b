//! Inventory normalization: free-text product names become (model, color).

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};

use crate::{
    cli::NormalizeArgs,
    colors::Palette,
    diagnostics::{Diagnostic, InputError},
    io_utils::{self, Table},
};

pub const SKU_COLUMN: &str = "sku";
pub const PRODUCT_NAME_COLUMN: &str = "product_name";
pub const COLOR_COLUMN: &str = "color";
pub const MODEL_COLUMN: &str = "model";

/// One classified inventory row. `color` is always a palette label; rows with
/// unrecognized colors never become entries. Duplicate sku values pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub sku: String,
    pub model: String,
    pub color: String,
}

/// Strips the trailing whitespace-delimited token from a product name and
/// rejoins the rest with single spaces. The last token is assumed to be the
/// color; nothing verifies that. Zero- and one-token names yield an empty
/// model.
pub fn extract_model(product_name: &str) -> String {
    let tokens = product_name.split_whitespace().collect::<Vec<_>>();
    match tokens.split_last() {
        Some((_, rest)) => rest.iter().join(" "),
        None => String::new(),
    }
}

/// Applies the palette classifier and model extractor to every inventory row,
/// dropping rows whose product name matches no keyword.
///
/// Returns the classified entries in input order plus a diagnostic carrying
/// the dropped-row count when any were dropped. Zero surviving entries is a
/// valid outcome, not an error.
pub fn normalize_inventory(
    inventory: &Table,
    palette: &Palette,
) -> Result<(Vec<InventoryEntry>, Option<Diagnostic>), InputError> {
    let sku_idx = inventory.require_column("inventory", SKU_COLUMN)?;
    let name_idx = inventory.require_column("inventory", PRODUCT_NAME_COLUMN)?;

    let mut entries = Vec::with_capacity(inventory.rows.len());
    let mut dropped = 0usize;
    for row in &inventory.rows {
        let product_name = row.get(name_idx).map(|s| s.as_str()).unwrap_or("");
        match palette.classify(product_name) {
            Some(label) => entries.push(InventoryEntry {
                sku: row.get(sku_idx).cloned().unwrap_or_default(),
                model: extract_model(product_name),
                color: label.to_string(),
            }),
            None => dropped += 1,
        }
    }

    let diagnostic = (dropped > 0).then_some(Diagnostic::UnrecognizedColors { dropped });
    Ok((entries, diagnostic))
}

pub fn execute(args: &NormalizeArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.inventory, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let palette = Palette::resolve(args.palette.as_deref())?;

    let inventory = io_utils::read_table(&args.inventory, delimiter, encoding)
        .with_context(|| format!("Reading inventory from {:?}", args.inventory))?;
    let (entries, diagnostic) = normalize_inventory(&inventory, &palette)?;
    if let Some(diagnostic) = &diagnostic {
        warn!("{}", diagnostic.render());
    }

    let output_delimiter = io_utils::resolve_output_delimiter(args.output.as_deref(), delimiter);
    let mut writer = io_utils::open_csv_writer(args.output.as_deref(), output_delimiter)?;
    writer
        .write_record([SKU_COLUMN, MODEL_COLUMN, COLOR_COLUMN])
        .context("Writing normalized headers")?;
    for entry in &entries {
        writer
            .write_record([
                entry.sku.as_str(),
                entry.model.as_str(),
                entry.color.as_str(),
            ])
            .context("Writing normalized row")?;
    }
    writer.flush().context("Flushing normalized output")?;
    info!(
        "Normalized {} of {} inventory row(s)",
        entries.len(),
        inventory.rows.len()
    );
    Ok(())
}
