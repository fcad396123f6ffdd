//! Duplicate customer consolidation
//!
//! Customers sometimes place several separate orders. When the same
//! (first names, last name) pair appears on more than one order the operator is
//! asked whether to ship them together. A merged parcel keeps the earliest order
//! and lists every merged reference on it.

use std::collections::HashSet;

use anyhow::Result;

use super::decisions::Decisions;
use super::order::Order;

/// Orders after consolidation plus what happened on the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsolidateOutcome {
    pub orders: Vec<Order>,
    /// Duplicate sets the operator chose to merge
    pub merged_groups: usize,
    /// Duplicate sets the operator chose to keep apart
    pub declined_groups: usize,
}

/// Find every order sharing the query order's name, the query included.
///
/// Orders already merged away are not candidates. A query order that is in
/// `ignored` (it belonged to a set the operator declined) never has duplicates.
/// Returns an empty list unless at least two orders match.
pub fn find_duplicates(
    orders: &[Order],
    query: usize,
    merged_away: &[bool],
    ignored: &HashSet<usize>,
) -> Vec<usize> {
    if ignored.contains(&query) {
        return Vec::new();
    }
    let Some(key) = orders[query].name_key() else {
        return Vec::new();
    };

    let matches: Vec<usize> = orders
        .iter()
        .enumerate()
        .filter(|(idx, order)| !merged_away[*idx] && order.name_key() == Some(key))
        .map(|(idx, _)| idx)
        .collect();

    if matches.len() < 2 {
        Vec::new()
    } else {
        matches
    }
}

/// Offer to merge every set of orders placed under the same name.
///
/// Orders are visited in input order, so the order that triggers a prompt is
/// always the earliest of its set. On a merge that order survives with the
/// comma-joined references of the whole set and the others are removed. On a
/// decline every order of the set is kept unchanged and none of them prompts
/// again.
pub fn consolidate_duplicates<D>(orders: Vec<Order>, decisions: &mut D) -> Result<ConsolidateOutcome>
where
    D: Decisions + ?Sized,
{
    let mut merged_away = vec![false; orders.len()];
    let mut merged_references: Vec<Option<String>> = vec![None; orders.len()];
    let mut ignored: HashSet<usize> = HashSet::new();
    let mut merged_groups = 0;
    let mut declined_groups = 0;

    for idx in 0..orders.len() {
        if merged_away[idx] {
            continue;
        }

        let duplicates = find_duplicates(&orders, idx, &merged_away, &ignored);
        if duplicates.is_empty() {
            continue;
        }

        let references = duplicates
            .iter()
            .map(|&d| orders[d].reference.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        if decisions.merge_duplicates(&orders[idx].customer_name(), &references)? {
            for &d in duplicates.iter().filter(|&&d| d != idx) {
                merged_away[d] = true;
            }
            merged_references[idx] = Some(references);
            merged_groups += 1;
        } else {
            ignored.extend(duplicates);
            declined_groups += 1;
        }
    }

    let orders = orders
        .into_iter()
        .zip(merged_away)
        .zip(merged_references)
        .filter(|((_, away), _)| !away)
        .map(|((mut order, _), reference)| {
            if let Some(reference) = reference {
                order.reference = reference;
            }
            order
        })
        .collect();

    Ok(ConsolidateOutcome {
        orders,
        merged_groups,
        declined_groups,
    })
}
