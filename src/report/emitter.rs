//! Manifest writer
//!
//! Every field, the header row included, is wrapped in double quotes with
//! embedded quotes doubled, which is what the myHermes importer expects.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use indicatif::ProgressBar;
use tempfile::NamedTempFile;

use super::schema::TargetSchema;
use crate::pipeline::Order;

/// Write the manifest header and one row per order to `writer`.
///
/// `pace` is slept after each record so the operator can follow along; zero
/// disables it. Returns the number of records written.
pub fn write_manifest<W: Write>(
    writer: W,
    schema: &TargetSchema,
    orders: &[Order],
    pace: Duration,
    progress: Option<&ProgressBar>,
) -> Result<usize> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer
        .write_record(schema.header())
        .context("Failed to write manifest header")?;

    for (idx, order) in orders.iter().enumerate() {
        csv_writer
            .write_record(schema.project(order))
            .with_context(|| format!("Failed to write record {} (reference {})", idx + 1, order.reference))?;

        if let Some(pb) = progress {
            pb.set_message(order.customer_name());
            pb.inc(1);
        }
        if !pace.is_zero() {
            std::thread::sleep(pace);
        }
    }

    csv_writer.flush().context("Failed to flush manifest")?;
    Ok(orders.len())
}

/// Write the manifest to `path`.
///
/// Records go to a temporary file beside `path` that is only renamed into
/// place once every record has been flushed; on error `path` is left untouched.
pub fn write_manifest_file(
    path: &Path,
    schema: &TargetSchema,
    orders: &[Order],
    pace: Duration,
    progress: Option<&ProgressBar>,
) -> Result<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staging = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let written = write_manifest(staging.as_file(), schema, orders, pace, progress)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    staging
        .persist(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(written)
}
