//! End-to-end summarize pipeline: validate, normalize, join, pivot, export.
//!
//! The core stages are pure table transformations returning diagnostics to
//! the caller; only [`execute`] touches files, logging, and stdout.

use anyhow::{Context, Result, anyhow};
use log::{info, warn};

use crate::{
    aggregate::{self, Summary},
    cli::SummarizeArgs,
    colors::Palette,
    diagnostics::{Diagnostic, InputError},
    export,
    io_utils::{self, Table},
    normalize::{self, PRODUCT_NAME_COLUMN, SKU_COLUMN},
    table,
};

/// Validates required columns on both inputs. Runs before any stage so a
/// malformed orders file aborts the run without normalizing inventory first.
pub fn validate_inputs(inventory: &Table, orders: &Table) -> Result<(), InputError> {
    inventory.require_column("inventory", SKU_COLUMN)?;
    inventory.require_column("inventory", PRODUCT_NAME_COLUMN)?;
    orders.require_column("orders", SKU_COLUMN)?;
    Ok(())
}

/// Runs the full pipeline over in-memory tables and returns the summary
/// together with any non-fatal diagnostics raised along the way. Stateless
/// and deterministic: identical inputs always produce identical output.
pub fn run_pipeline(
    inventory: &Table,
    orders: &Table,
    palette: &Palette,
) -> Result<(Summary, Vec<Diagnostic>), InputError> {
    validate_inputs(inventory, orders)?;

    let mut diagnostics = Vec::new();
    let (entries, dropped) = normalize::normalize_inventory(inventory, palette)?;
    diagnostics.extend(dropped);
    let (summary, unmatched) = aggregate::aggregate_orders(&entries, orders)?;
    diagnostics.extend(unmatched);
    Ok((summary, diagnostics))
}

pub fn execute(args: &SummarizeArgs) -> Result<()> {
    if io_utils::is_dash(&args.inventory) && io_utils::is_dash(&args.orders) {
        return Err(anyhow!(
            "Only one of --inventory/--orders can read from stdin"
        ));
    }

    let inventory_delimiter = io_utils::resolve_input_delimiter(&args.inventory, args.delimiter);
    let orders_delimiter = io_utils::resolve_input_delimiter(&args.orders, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let palette = Palette::resolve(args.palette.as_deref())?;

    let inventory = io_utils::read_table(&args.inventory, inventory_delimiter, encoding)
        .with_context(|| format!("Reading inventory from {:?}", args.inventory))?;
    let orders = io_utils::read_table(&args.orders, orders_delimiter, encoding)
        .with_context(|| format!("Reading orders from {:?}", args.orders))?;

    let (summary, diagnostics) = run_pipeline(&inventory, &orders, &palette)?;
    for diagnostic in &diagnostics {
        warn!("{}", diagnostic.render());
    }

    if args.table {
        table::print_table(&summary.headers(), &summary.render_rows());
    } else {
        let output_delimiter = io_utils::resolve_output_delimiter(
            args.output.as_deref(),
            io_utils::DEFAULT_CSV_DELIMITER,
        );
        let mut writer = io_utils::open_csv_writer(args.output.as_deref(), output_delimiter)?;
        export::write_summary(&mut writer, &summary)?;
    }

    info!(
        "Summarized {} order row(s) into {} model row(s)",
        orders.rows.len(),
        summary.rows.len()
    );
    Ok(())
}
