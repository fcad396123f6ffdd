//! Shared test utilities and fixture generators

use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;
use ebay2hermes::pipeline::{
    parse_weight, Decisions, EnteredWeight, Order, RawRow, SourceLayout, Weight,
};
use tempfile::TempDir;

/// Width of an eBay sales export row
pub const EXPORT_WIDTH: usize = 37;

/// Column-header row as eBay writes it (only the width matters to the parser)
pub fn export_header() -> RawRow {
    let mut row = vec![String::new(); EXPORT_WIDTH];
    row[0] = "Sales record number".to_string();
    row[2] = "Buyer name".to_string();
    row[11] = "Item number".to_string();
    row[15] = "Sale price".to_string();
    row
}

/// A full-width export row with the fields the converter reads.
///
/// Address, postcode, email and phone are derived from `name` so that rows of
/// different customers are distinguishable.
pub fn export_row(order_id: &str, name: &str, item_id: &str, price: &str) -> RawRow {
    let layout = SourceLayout::EBAY;
    let mut row = vec![String::new(); EXPORT_WIDTH];
    row[layout.order_id] = order_id.to_string();
    row[1] = "buyer_user".to_string();
    row[layout.full_name] = name.to_string();
    row[layout.item_id] = item_id.to_string();
    row[layout.price] = price.to_string();
    if !name.is_empty() {
        row[layout.phone] = "07700 900123".to_string();
        row[layout.email] = format!("{}@Example.COM", name.replace(' ', "."));
        row[layout.address[0]] = "12 HIGH street".to_string();
        row[layout.address[1]] = "old TOWN".to_string();
        row[layout.address[2]] = "springfield".to_string();
        row[layout.address[3]] = "".to_string();
        row[layout.postcode] = "ab1-2cd".to_string();
    }
    row
}

/// A single-sale order row
pub fn simple_row(order_id: &str, name: &str, price: &str) -> RawRow {
    export_row(order_id, name, "110012345678", price)
}

/// A multi-purchase header row (no item id, no price)
pub fn header_row(order_id: &str, name: &str) -> RawRow {
    export_row(order_id, name, "", "")
}

/// A multi-purchase item row (buyer details left blank)
pub fn item_row(order_id: &str, item_id: &str, price: &str) -> RawRow {
    export_row(order_id, "", item_id, price)
}

/// A trailing line like the ones eBay appends after the data
pub fn trailer_row(text: &str) -> RawRow {
    vec![text.to_string()]
}

/// Export rows with the column-header row prepended
pub fn with_header(rows: Vec<RawRow>) -> Vec<RawRow> {
    let mut all = vec![export_header()];
    all.extend(rows);
    all
}

/// Minimal order with a reference and a name
pub fn order(reference: &str, first_names: &str, last_name: &str) -> Order {
    Order {
        reference: reference.to_string(),
        first_names: first_names.to_string(),
        last_name: last_name.to_string(),
        ..Default::default()
    }
}

/// Serialize rows to CSV text
pub fn to_csv(rows: &[RawRow]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

/// Create a temporary directory with an export CSV file
pub fn create_temp_export(rows: &[RawRow]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("ebay_sales.csv");
    std::fs::write(&csv_path, to_csv(rows)).unwrap();
    (temp_dir, csv_path)
}

/// Read a written manifest back as rows of fields
pub fn read_manifest(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

/// Decisions answered from a script, recording every question asked.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    pub specify: bool,
    pub merge_answers: VecDeque<bool>,
    pub weight_answers: VecDeque<&'static str>,
    pub merge_prompts: Vec<(String, String)>,
    pub weight_prompts: Vec<String>,
}

impl ScriptedDecisions {
    pub fn merging(answers: &[bool]) -> Self {
        Self {
            merge_answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn weighing(answers: &[&'static str]) -> Self {
        Self {
            specify: true,
            weight_answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl Decisions for ScriptedDecisions {
    fn specify_weights(&mut self, _default: Weight) -> Result<bool> {
        Ok(self.specify)
    }

    fn merge_duplicates(&mut self, customer: &str, references: &str) -> Result<bool> {
        self.merge_prompts
            .push((customer.to_string(), references.to_string()));
        self.merge_answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected merge prompt for {}", customer))
    }

    fn parcel_weight(&mut self, order: &Order) -> Result<EnteredWeight> {
        self.weight_prompts.push(order.reference.clone());
        let answer = self
            .weight_answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected weight prompt for {}", order.reference))?;
        Ok(parse_weight(answer)?)
    }
}
