//! Structured diagnostics produced by the pipeline stages.
//!
//! Stages never talk to the user directly. Non-fatal conditions come back to
//! the caller as [`Diagnostic`] values and the command layer decides how to
//! render them; fatal input problems are [`InputError`] and abort the run
//! before any stage executes.

use thiserror::Error;

/// Non-fatal condition observed while running the pipeline. Carries a count,
/// never row contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Inventory rows whose product name matched no palette keyword. The rows
    /// are dropped from the normalized inventory.
    UnrecognizedColors { dropped: usize },
    /// Order rows whose sku matched no normalized inventory entry. The rows
    /// carry no color and are excluded from the pivot.
    UnmatchedOrders { unmatched: usize },
}

impl Diagnostic {
    pub fn render(&self) -> String {
        match self {
            Diagnostic::UnrecognizedColors { dropped } => {
                format!("{dropped} inventory row(s) ignored due to unsupported colors")
            }
            Diagnostic::UnmatchedOrders { unmatched } => {
                format!("{unmatched} order row(s) reference sku values not found in inventory")
            }
        }
    }
}

/// Fatal validation failure raised before the pipeline starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{table} file must contain column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}
