//! Color classification driven by an ordered keyword palette.
//!
//! The recognized vocabulary is data, not code: an ordered list of
//! (keyword, label) pairs consulted in priority order. Extending the set is a
//! palette change, never a control-flow change.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{cli::PaletteArgs, table};

/// One keyword→label pair. Earlier entries win when a product name matches
/// more than one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub keyword: String,
    pub label: String,
}

/// Ordered list of recognized colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub entries: Vec<PaletteEntry>,
}

impl Default for Palette {
    fn default() -> Self {
        let entries = [("blue", "Blue"), ("black", "Black"), ("brown", "Brown")]
            .into_iter()
            .map(|(keyword, label)| PaletteEntry {
                keyword: keyword.to_string(),
                label: label.to_string(),
            })
            .collect();
        Self { entries }
    }
}

impl Palette {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Reading palette file {path:?}"))?;
        let palette: Palette = serde_yaml::from_str(&contents)
            .with_context(|| format!("Parsing palette file {path:?}"))?;
        if palette.entries.is_empty() {
            return Err(anyhow!("Palette file {path:?} defines no colors"));
        }
        Ok(palette)
    }

    /// Loads the palette from `path` when given, otherwise the built-in set.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the label of the first palette keyword found in `text`, or
    /// `None` when nothing matches.
    ///
    /// Matching is case-insensitive, unanchored substring search: a name like
    /// "Blueberry Steel" classifies as Blue. Inherited behavior; kept as is.
    pub fn classify(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(&entry.keyword.to_lowercase()))
            .map(|entry| entry.label.as_str())
    }
}

pub fn execute(args: &PaletteArgs) -> Result<()> {
    let palette = Palette::resolve(args.palette.as_deref())?;
    let rows = palette
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            vec![
                (idx + 1).to_string(),
                entry.keyword.clone(),
                entry.label.clone(),
            ]
        })
        .collect::<Vec<_>>();
    let headers = vec![
        "#".to_string(),
        "keyword".to_string(),
        "label".to_string(),
    ];
    table::print_table(&headers, &rows);
    Ok(())
}
