//! Left join of orders onto normalized inventory, pivoted into a
//! model × color count matrix with a row-wise total.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    diagnostics::{Diagnostic, InputError},
    io_utils::Table,
    normalize::{InventoryEntry, MODEL_COLUMN, SKU_COLUMN},
};

pub const TOTAL_COLUMN: &str = "Total Orders";

/// One pivoted row. `counts` lines up index-for-index with
/// [`Summary::colors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub model: String,
    pub counts: Vec<usize>,
    pub total: usize,
}

/// The pivoted count matrix. Models and color columns are sorted
/// lexicographically ascending, so repeated runs over identical inputs
/// produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub colors: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.colors.len() + 2);
        headers.push(MODEL_COLUMN.to_string());
        headers.extend(self.colors.iter().cloned());
        headers.push(TOTAL_COLUMN.to_string());
        headers
    }

    /// Renders data rows as strings in header order.
    pub fn render_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(self.colors.len() + 2);
                cells.push(row.model.clone());
                cells.extend(row.counts.iter().map(|count| count.to_string()));
                cells.push(row.total.to_string());
                cells
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Left-joins order rows onto the normalized inventory by sku, then pivots
/// the matched rows into per-model color counts.
///
/// Join semantics: every order row is retained once per matching inventory
/// entry, so duplicate inventory skus multiply matching order rows. Order
/// rows with no match carry no color, are excluded from the pivot, and are
/// reported through the returned diagnostic. Cells count sku occurrences,
/// not distinct skus.
pub fn aggregate_orders(
    inventory: &[InventoryEntry],
    orders: &Table,
) -> Result<(Summary, Option<Diagnostic>), InputError> {
    let sku_idx = orders.require_column("orders", SKU_COLUMN)?;

    let mut lookup: HashMap<&str, Vec<&InventoryEntry>> = HashMap::new();
    for entry in inventory {
        lookup.entry(entry.sku.as_str()).or_default().push(entry);
    }

    // model -> color -> count; BTreeMap keys give the lexicographic ordering
    // the output promises.
    let mut matrix: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    let mut unmatched = 0usize;
    for row in &orders.rows {
        let sku = row.get(sku_idx).map(|s| s.as_str()).unwrap_or("");
        match lookup.get(sku) {
            Some(entries) => {
                for entry in entries {
                    *matrix
                        .entry(entry.model.clone())
                        .or_default()
                        .entry(entry.color.clone())
                        .or_insert(0) += 1;
                }
            }
            None => unmatched += 1,
        }
    }

    let colors = matrix
        .values()
        .flat_map(|by_color| by_color.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();

    let rows = matrix
        .into_iter()
        .map(|(model, by_color)| {
            let counts = colors
                .iter()
                .map(|color| by_color.get(color).copied().unwrap_or(0))
                .collect::<Vec<_>>();
            let total = counts.iter().sum();
            SummaryRow {
                model,
                counts,
                total,
            }
        })
        .collect();

    let diagnostic = (unmatched > 0).then_some(Diagnostic::UnmatchedOrders { unmatched });
    Ok((Summary { colors, rows }, diagnostic))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sku: &str, model: &str, color: &str) -> InventoryEntry {
        InventoryEntry {
            sku: sku.to_string(),
            model: model.to_string(),
            color: color.to_string(),
        }
    }

    fn orders(skus: &[&str]) -> Table {
        Table {
            headers: vec![SKU_COLUMN.to_string(), "qty".to_string()],
            rows: skus
                .iter()
                .map(|sku| vec![sku.to_string(), "1".to_string()])
                .collect(),
        }
    }

    #[test]
    fn counts_sku_occurrences_per_model_and_color() {
        let inventory = vec![entry("A1", "X200", "Blue")];
        let (summary, diagnostic) =
            aggregate_orders(&inventory, &orders(&["A1", "A1"])).expect("aggregate");
        assert_eq!(diagnostic, None);
        assert_eq!(summary.colors, ["Blue"]);
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].model, "X200");
        assert_eq!(summary.rows[0].counts, [2]);
        assert_eq!(summary.rows[0].total, 2);
    }

    #[test]
    fn pivot_zero_fills_absent_model_color_combinations() {
        let inventory = vec![
            entry("A1", "X200", "Blue"),
            entry("A2", "X200", "Black"),
            entry("B1", "Y10", "Brown"),
        ];
        let (summary, _) =
            aggregate_orders(&inventory, &orders(&["A1", "A2", "A2", "B1"])).expect("aggregate");
        // colors lexicographic: Black, Blue, Brown
        assert_eq!(summary.colors, ["Black", "Blue", "Brown"]);
        assert_eq!(summary.headers()[0], MODEL_COLUMN);
        assert_eq!(summary.headers().last().map(String::as_str), Some(TOTAL_COLUMN));
        assert_eq!(summary.rows[0].model, "X200");
        assert_eq!(summary.rows[0].counts, [2, 1, 0]);
        assert_eq!(summary.rows[0].total, 3);
        assert_eq!(summary.rows[1].model, "Y10");
        assert_eq!(summary.rows[1].counts, [0, 0, 1]);
        assert_eq!(summary.rows[1].total, 1);
    }

    #[test]
    fn unmatched_orders_are_counted_and_excluded() {
        let inventory = vec![entry("A1", "X200", "Blue")];
        let (summary, diagnostic) =
            aggregate_orders(&inventory, &orders(&["Z9"])).expect("aggregate");
        assert_eq!(diagnostic, Some(Diagnostic::UnmatchedOrders { unmatched: 1 }));
        assert!(summary.is_empty());
        assert!(summary.colors.is_empty());
    }

    #[test]
    fn duplicate_inventory_skus_multiply_matching_order_rows() {
        let inventory = vec![
            entry("A1", "X200", "Blue"),
            entry("A1", "X200", "Black"),
        ];
        let (summary, diagnostic) =
            aggregate_orders(&inventory, &orders(&["A1"])).expect("aggregate");
        assert_eq!(diagnostic, None);
        assert_eq!(summary.colors, ["Black", "Blue"]);
        assert_eq!(summary.rows[0].counts, [1, 1]);
        assert_eq!(summary.rows[0].total, 2);
    }

    #[test]
    fn empty_inventory_yields_empty_summary_with_unmatched_diagnostic() {
        let (summary, diagnostic) =
            aggregate_orders(&[], &orders(&["A1", "A2"])).expect("aggregate");
        assert!(summary.is_empty());
        assert_eq!(diagnostic, Some(Diagnostic::UnmatchedOrders { unmatched: 2 }));
    }

    #[test]
    fn models_are_sorted_lexicographically() {
        let inventory = vec![
            entry("B1", "Zeta", "Blue"),
            entry("A1", "Alpha", "Blue"),
        ];
        let (summary, _) = aggregate_orders(&inventory, &orders(&["B1", "A1"])).expect("aggregate");
        let models = summary
            .rows
            .iter()
            .map(|row| row.model.as_str())
            .collect::<Vec<_>>();
        assert_eq!(models, ["Alpha", "Zeta"]);
    }

    #[test]
    fn missing_sku_column_is_a_validation_error() {
        let table = Table {
            headers: vec!["order_id".to_string()],
            rows: Vec::new(),
        };
        let err = aggregate_orders(&[], &table).unwrap_err();
        assert_eq!(
            err,
            InputError::MissingColumn {
                table: "orders",
                column: SKU_COLUMN,
            }
        );
    }
}
