//! Row parser: raw export rows to order groups
//!
//! Every retained row is normalized field by field and appended to the group of
//! its order id. Groups keep the order in which their id first appeared, and rows
//! within a group keep export order.

use std::collections::HashMap;

use super::error::{FormatError, SkippedRow, ValueParseError};
use super::layout::{SourceLayout, MAX_SKIPPED_ROWS};
use super::loader::RawRow;
use super::order::{Order, ParsedRow};
use super::text::{extract_price, format_email, format_postcode, split_name, title_case};

/// Rows sharing one source order id.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceOrderGroup {
    pub order_id: String,
    pub rows: Vec<ParsedRow>,
}

impl SourceOrderGroup {
    /// More than one row: a header followed by item lines.
    pub fn is_multi_item(&self) -> bool {
        self.rows.len() > 1
    }
}

/// Result of parsing a whole export.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub groups: Vec<SourceOrderGroup>,
    /// Data rows looked at (column-header row and blank lines excluded)
    pub examined: usize,
    /// Rows dropped as malformed, within tolerance
    pub skipped: Vec<SkippedRow>,
    /// Emitted rows whose price could not be read; their value is left unset
    pub price_warnings: Vec<ValueParseError>,
}

impl ParseOutcome {
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}

/// Parse export rows into order groups.
///
/// The first row is the export's column-header row and is always skipped. Rows
/// narrower than the layout, or with an empty order id, are skipped and counted.
///
/// # Errors
/// Returns a [`FormatError`] when no row survives or when more than
/// [`MAX_SKIPPED_ROWS`] rows had to be skipped.
pub fn parse_rows(rows: &[RawRow], layout: &SourceLayout) -> Result<ParseOutcome, FormatError> {
    let mut groups: Vec<SourceOrderGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = Vec::new();
    let mut price_errors: Vec<(usize, usize, ValueParseError)> = Vec::new();
    let mut examined = 0;

    for (idx, row) in rows.iter().enumerate().skip(1) {
        if is_blank(row) {
            continue;
        }
        examined += 1;

        let order_id = row.get(layout.order_id).map(|s| s.trim()).unwrap_or_default();
        if row.len() < layout.min_width || order_id.is_empty() {
            skipped.push(SkippedRow {
                line: idx + 1,
                field_count: row.len(),
                preview: preview(row),
            });
            continue;
        }

        let (parsed, price_error) = parse_row(row, layout);

        let slot = *index.entry(order_id.to_string()).or_insert_with(|| {
            groups.push(SourceOrderGroup {
                order_id: order_id.to_string(),
                rows: Vec::new(),
            });
            groups.len() - 1
        });
        if let Some(err) = price_error {
            price_errors.push((slot, groups[slot].rows.len(), err));
        }
        groups[slot].rows.push(parsed);
    }

    // A multi-purchase header never becomes an order, so its blank price is
    // only worth reporting when the row stands alone.
    let price_warnings = price_errors
        .into_iter()
        .filter(|(slot, pos, _)| {
            let group = &groups[*slot];
            !group.is_multi_item() || !group.rows[*pos].multi_item
        })
        .map(|(_, _, err)| err)
        .collect();

    if skipped.len() == examined {
        return Err(FormatError::NoRowsSurvived { examined, skipped });
    }
    if skipped.len() > MAX_SKIPPED_ROWS {
        return Err(FormatError::TooManySkipped {
            count: skipped.len(),
            examined,
            skipped,
        });
    }

    Ok(ParseOutcome {
        groups,
        examined,
        skipped,
        price_warnings,
    })
}

/// Normalize one full-width row, returning the price error if the price field
/// holds no number.
pub fn parse_row(row: &RawRow, layout: &SourceLayout) -> (ParsedRow, Option<ValueParseError>) {
    let field = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or_default();

    let multi_item = field(layout.item_id).is_empty();
    let (first_names, last_name) = split_name(&title_case(field(layout.full_name)));

    let raw_price = field(layout.price);
    let value = extract_price(raw_price);
    let price_error = value.is_none().then(|| ValueParseError {
        order_id: field(layout.order_id).to_string(),
        raw: raw_price.to_string(),
    });

    let order = Order {
        reference: field(layout.order_id).to_string(),
        first_names,
        last_name,
        address: layout.address.map(|i| title_case(field(i))),
        postcode: format_postcode(field(layout.postcode)),
        email: format_email(field(layout.email)),
        phone: field(layout.phone).to_string(),
        value,
        contents: None,
        weight: None,
    };

    (ParsedRow { multi_item, order }, price_error)
}

fn is_blank(row: &RawRow) -> bool {
    row.iter().all(|f| f.trim().is_empty())
}

fn preview(row: &RawRow) -> String {
    const PREVIEW_FIELDS: usize = 4;
    let mut text = row
        .iter()
        .take(PREVIEW_FIELDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    if row.len() > PREVIEW_FIELDS {
        text.push_str(",...");
    }
    text
}
