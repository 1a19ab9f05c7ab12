use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::extractor::CanonicalRow;

/// Write rows as CSV (header row first) to `path`.
///
/// Returns `Ok(false)` without creating the file when there are no rows.
pub fn write_csv(path: &Path, rows: &[CanonicalRow]) -> Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows(file, rows)?;
    info!(path = %path.display(), rows = rows.len(), "saved products");
    Ok(true)
}

/// Serialize rows to any writer. Column order follows [`crate::extractor::Column::ALL`].
pub fn write_rows<W: Write>(out: W, rows: &[CanonicalRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}
