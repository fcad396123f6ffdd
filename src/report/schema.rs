//! Target manifest schema
//!
//! The courier's import format is a fixed, ordered list of columns. Each column
//! is bound to an internal order field; columns the converter never fills
//! (compensation, signature, safe place, delivery instructions) are still bound
//! to a key so they are emitted as empty strings in the right position.

use crate::pipeline::{FieldKey, Order};

/// Ordered (internal key, external column) pairs.
pub type ColumnTable = [(FieldKey, &'static str)];

/// Column layout of the myHermes bulk import CSV.
pub static HERMES_COLUMNS: &ColumnTable = &[
    (FieldKey::AddressLine1, "Address_line_1"),
    (FieldKey::AddressLine2, "Address_line_2"),
    (FieldKey::AddressLine3, "Address_line_3"),
    (FieldKey::AddressLine4, "Address_line_4"),
    (FieldKey::Postcode, "Postcode"),
    (FieldKey::FirstNames, "First_name"),
    (FieldKey::LastName, "Last_name"),
    (FieldKey::Email, "Email"),
    (FieldKey::Weight, "Weight(Kg)"),
    (FieldKey::Compensation, "Compensation(£)"),
    (FieldKey::Signature, "Signature(y/n)"),
    (FieldKey::Reference, "Reference"),
    (FieldKey::Contents, "Contents"),
    (FieldKey::Value, "Parcel_value(£)"),
    (FieldKey::Phone, "Delivery_phone"),
    (FieldKey::SafePlace, "Delivery_safe_place"),
    (FieldKey::DeliveryInstructions, "Delivery_instructions"),
];

/// A courier import layout.
#[derive(Debug, Clone, Copy)]
pub struct TargetSchema {
    columns: &'static ColumnTable,
}

impl TargetSchema {
    pub fn new(columns: &'static ColumnTable) -> Self {
        Self { columns }
    }

    pub fn hermes() -> Self {
        Self::new(HERMES_COLUMNS)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// External column names in output order.
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(_, name)| *name).collect()
    }

    /// One output row for `order`: a value per column, empty when absent.
    pub fn project(&self, order: &Order) -> Vec<String> {
        self.columns
            .iter()
            .map(|(key, _)| order.field(*key).map(|v| v.into_owned()).unwrap_or_default())
            .collect()
    }
}

impl Default for TargetSchema {
    fn default() -> Self {
        Self::hermes()
    }
}
