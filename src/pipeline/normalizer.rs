//! Multi-purchase normalization
//!
//! eBay exports a multi-purchase as a header row carrying the buyer's details
//! followed by one row per item with those details left blank:
//!
//! ```text
//! (header) 5001  user  Jane A Doe  phone  email  addr1..4  postcode  <no item id>
//! (item)   5001  user  <empty>     ...                               77  Widget
//! (item)   5001  user  <empty>     ...                               78  Gadget
//! ```
//!
//! Each item becomes its own order so it can be packed separately or merged
//! later with the buyer's other purchases.

use super::error::GroupError;
use super::order::Order;
use super::parser::SourceOrderGroup;

/// Flattened orders plus any groups that had to be left out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizeOutcome {
    pub orders: Vec<Order>,
    /// Multi-purchase groups collapsed into item orders
    pub collapsed_groups: usize,
    /// Malformed multi-purchase groups, none of whose rows were emitted
    pub rejected: Vec<GroupError>,
}

/// Flatten order groups into one order per shippable item, dropping headers.
pub fn normalize_groups(groups: Vec<SourceOrderGroup>) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();

    for group in groups {
        if !group.is_multi_item() {
            outcome
                .orders
                .extend(group.rows.into_iter().map(|row| row.order));
            continue;
        }

        match collapse_multi_item(group) {
            Ok(items) => {
                outcome.collapsed_groups += 1;
                outcome.orders.extend(items);
            }
            Err(err) => outcome.rejected.push(err),
        }
    }

    outcome
}

/// Collapse a header + items group into item orders.
///
/// Item `k` (1-based) gets reference `order_id - k`: the export reuses the
/// header's id for every line, while the sales page numbered each sale
/// separately.
pub fn collapse_multi_item(group: SourceOrderGroup) -> Result<Vec<Order>, GroupError> {
    let SourceOrderGroup { order_id, rows } = group;
    let row_count = rows.len();

    let mut rows = rows.into_iter();
    let header = match rows.next() {
        Some(first) if first.multi_item => first.order,
        _ => {
            return Err(GroupError::MissingHeader {
                order_id,
                rows: row_count,
            })
        }
    };

    let base: u64 = order_id
        .parse()
        .map_err(|_| GroupError::UnusableOrderId {
            order_id: order_id.clone(),
        })?;

    let mut items = Vec::with_capacity(row_count - 1);
    for (offset, row) in (1u64..).zip(rows) {
        if row.multi_item {
            return Err(GroupError::ExtraHeader { order_id });
        }
        let reference = base
            .checked_sub(offset)
            .ok_or_else(|| GroupError::UnusableOrderId {
                order_id: order_id.clone(),
            })?;

        let mut order = row.order;
        order.take_customer_from(&header);
        order.reference = reference.to_string();
        items.push(order);
    }

    Ok(items)
}
