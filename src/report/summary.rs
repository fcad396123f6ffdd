//! Conversion summary report

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{GroupError, SkippedRow, ValueParseError};

/// What happened during one conversion run.
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub rows_examined: usize,
    pub skipped_rows: Vec<SkippedRow>,
    pub price_warnings: Vec<ValueParseError>,
    pub collapsed_groups: usize,
    pub rejected_groups: Vec<GroupError>,
    pub orders_normalized: usize,
    pub merged_groups: usize,
    pub declined_groups: usize,
    pub orders_exported: usize,
    pub output: Option<PathBuf>,
    pub step_times: Vec<(&'static str, Duration)>,
}

impl ConversionSummary {
    pub fn new(rows_examined: usize) -> Self {
        Self {
            rows_examined,
            ..Default::default()
        }
    }

    pub fn record_step(&mut self, step: &'static str, elapsed: Duration) {
        self.step_times.push((step, elapsed));
    }

    /// Number of warnings worth a second look before uploading the manifest.
    pub fn warning_count(&self) -> usize {
        self.skipped_rows.len() + self.price_warnings.len() + self.rejected_groups.len()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows Examined"),
            Cell::new(self.rows_examined),
        ]);
        table.add_row(vec![
            Cell::new("🗑️  Rows Skipped"),
            count_cell(self.skipped_rows.len(), Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("📦 Multi-purchases Split"),
            Cell::new(self.collapsed_groups),
        ]);
        table.add_row(vec![
            Cell::new("⛔ Multi-purchases Rejected"),
            count_cell(self.rejected_groups.len(), Color::Red),
        ]);
        table.add_row(vec![
            Cell::new("🧾 Orders After Split"),
            Cell::new(self.orders_normalized),
        ]);
        table.add_row(vec![
            Cell::new("💷 Unreadable Prices"),
            count_cell(self.price_warnings.len(), Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("🔗 Duplicates Merged"),
            Cell::new(self.merged_groups),
        ]);
        table.add_row(vec![
            Cell::new("👥 Duplicates Kept Apart"),
            Cell::new(self.declined_groups),
        ]);
        table.add_row(vec![
            Cell::new("✅ Parcels Exported"),
            Cell::new(self.orders_exported)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        let total: Duration = self.step_times.iter().map(|(_, t)| *t).sum();
        table.add_row(vec![
            Cell::new("⏱️  Processing Time"),
            Cell::new(format!("{:.2}s", total.as_secs_f64())),
        ]);
        if let Some(output) = &self.output {
            table.add_row(vec![
                Cell::new("💾 Output"),
                Cell::new(output.display()),
            ]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if self.warning_count() > 0 {
            self.display_warnings();
        }
    }

    fn display_warnings(&self) {
        println!();
        println!(
            "    {} {}",
            style("📝").cyan(),
            style("CHECK BEFORE UPLOADING").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        if !self.skipped_rows.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Skipped Rows").yellow(),
                style(format!("({})", self.skipped_rows.len())).dim()
            );
            for row in &self.skipped_rows {
                println!(
                    "        {} line {} ({} fields): {}",
                    style("•").dim(),
                    row.line,
                    row.field_count,
                    row.preview
                );
            }
        }

        if !self.rejected_groups.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Rejected Multi-purchases").red(),
                style(format!("({})", self.rejected_groups.len())).dim()
            );
            for err in &self.rejected_groups {
                println!("        {} {}", style("•").dim(), err);
            }
        }

        if !self.price_warnings.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Parcel Value Left Blank").yellow(),
                style(format!("({})", self.price_warnings.len())).dim()
            );
            for err in &self.price_warnings {
                println!("        {} {}", style("•").dim(), err);
            }
        }
    }
}

fn count_cell(count: usize, alert: Color) -> Cell {
    Cell::new(count).fg(if count == 0 { Color::White } else { alert })
}
