//! Error types for the conversion pipeline.
//!
//! Fatal conditions (`FormatError`) abort the run before any output is written.
//! Everything else is recoverable: the affected row, group or prompt answer is
//! reported and the run carries on.

use thiserror::Error;

/// A source row that was skipped because it did not match the export layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// One-based line number in the input, counting the column-header row
    pub line: usize,
    /// Number of fields the row actually had
    pub field_count: usize,
    /// First few fields joined by commas, for the operator to eyeball
    pub preview: String,
}

/// The export no longer looks like an eBay sales report.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Every examined row was rejected.
    #[error("No rows survived parsing ({examined} examined) - the export format has probably changed")]
    NoRowsSurvived {
        examined: usize,
        skipped: Vec<SkippedRow>,
    },

    /// More rows were rejected than the trailing-garbage tolerance allows.
    #[error("Unexpectedly many rows skipped ({count} of {examined}) - the export format may have changed")]
    TooManySkipped {
        count: usize,
        examined: usize,
        skipped: Vec<SkippedRow>,
    },
}

impl FormatError {
    /// Rows that were rejected, in input order.
    pub fn skipped(&self) -> &[SkippedRow] {
        match self {
            FormatError::NoRowsSurvived { skipped, .. } => skipped,
            FormatError::TooManySkipped { skipped, .. } => skipped,
        }
    }
}

/// A price field with no numeric token in it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not read a price from '{raw}' on order {order_id}")]
pub struct ValueParseError {
    pub order_id: String,
    pub raw: String,
}

/// A multi-item group that cannot be collapsed safely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The first row of a multi-row group carries an item id.
    #[error("Order {order_id} has {rows} rows but its first row is not a multi-purchase header")]
    MissingHeader { order_id: String, rows: usize },

    /// A later row of the group is a second header.
    #[error("Order {order_id} has more than one multi-purchase header")]
    ExtraHeader { order_id: String },

    /// Item references are derived by decrementing the order id, so it must be a
    /// number at least as large as the item count.
    #[error("Order {order_id} is a multi-purchase but its id cannot be decremented into item references")]
    UnusableOrderId { order_id: String },
}

/// Reasons a typed weight is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidWeightInput {
    #[error("Invalid weight, please try again")]
    NotNumeric,

    #[error("There is no such thing as weightless. Sorry. Try again")]
    Zero,

    #[error("Inverse weight is a fantasy. Stop it. Try again")]
    Negative,

    #[error("This is more than myHermes allows! Please try again")]
    TooHeavy,
}

/// A yes/no answer that was neither.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input '{0}', please answer y/yes or n/no")]
pub struct InvalidConfirmation(pub String);

/// An unknown status tag was handed to the styling helper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid status: {0}")]
pub struct InvalidStatusTag(pub String);
