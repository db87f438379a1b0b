//! Serialization of a summary into a single-table CSV stream.

use std::io::Write;

use anyhow::{Context, Result, anyhow};

use crate::aggregate::Summary;

/// Writes the summary through an existing CSV writer: one header row in
/// [`Summary::headers`] order, one data row per model, no index column.
pub fn write_summary<W: Write>(writer: &mut csv::Writer<W>, summary: &Summary) -> Result<()> {
    writer
        .write_record(summary.headers())
        .context("Writing summary headers")?;
    for row in summary.render_rows() {
        writer.write_record(&row).context("Writing summary row")?;
    }
    writer.flush().context("Flushing summary output")?;
    Ok(())
}

/// Renders the summary as an in-memory CSV byte stream, for callers that
/// hand the bytes off as a download or attachment rather than a file.
pub fn summary_to_bytes(summary: &Summary, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    write_summary(&mut writer, summary)?;
    writer
        .into_inner()
        .map_err(|err| anyhow!("Finishing summary byte stream: {err}"))
}
