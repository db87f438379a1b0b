use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Pivot order counts by product model and color", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Join an orders file against inventory and emit the pivoted summary
    Summarize(SummarizeArgs),
    /// Normalize an inventory file into sku, model, color rows
    Normalize(NormalizeArgs),
    /// List the recognized color keywords in priority order
    Palette(PaletteArgs),
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Inventory CSV with `sku` and `product_name` columns ('-' for stdin)
    #[arg(long = "inventory")]
    pub inventory: PathBuf,
    /// Orders CSV with a `sku` column ('-' for stdin)
    #[arg(long = "orders")]
    pub orders: PathBuf,
    /// Output CSV file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Palette YAML file overriding the built-in color keywords
    #[arg(long = "palette")]
    pub palette: Option<PathBuf>,
    /// CSV delimiter character for both inputs (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input files (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Render the summary as an elastic table on stdout instead of CSV
    #[arg(long = "table")]
    pub table: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Inventory CSV with `sku` and `product_name` columns ('-' for stdin)
    #[arg(short = 'i', long = "inventory")]
    pub inventory: PathBuf,
    /// Output CSV file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Palette YAML file overriding the built-in color keywords
    #[arg(long = "palette")]
    pub palette: Option<PathBuf>,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Palette YAML file overriding the built-in color keywords
    #[arg(long = "palette")]
    pub palette: Option<PathBuf>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
