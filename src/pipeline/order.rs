//! Order records as they move through the pipeline

use std::borrow::Cow;
use std::fmt;

/// Maximum weight myHermes accepts for a single parcel, in kilograms.
pub const MAX_PARCEL_KG: f64 = 15.0;

/// Factor applied to typed weights to land just under a pricing band
/// (10 kg is shipped as 9.9 kg, inside the 5-10 kg band).
pub const WEIGHT_SCALE: f64 = 0.99;

/// Internal keys an order can be projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    AddressLine1,
    AddressLine2,
    AddressLine3,
    AddressLine4,
    Postcode,
    FirstNames,
    LastName,
    Email,
    Weight,
    Compensation,
    Signature,
    Reference,
    Contents,
    Value,
    Phone,
    SafePlace,
    DeliveryInstructions,
}

/// Parcel weight in kilograms, as written to the manifest.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn from_kg(kg: f64) -> Self {
        Self(kg)
    }

    pub fn kg(self) -> f64 {
        self.0
    }
}

/// Granularity used to drop float noise such as `9.899999999999999`.
const RENDER_STEP: f64 = 1e9;

impl fmt::Display for Weight {
    /// Shortest decimal form of the value, so `10 * 0.99` prints as `9.9` and a
    /// configured `0.1234` prints unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * RENDER_STEP).round() / RENDER_STEP;
        // Never round a positive weight down to zero
        if rounded == 0.0 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}", rounded)
        }
    }
}

/// One retained export row after field normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// True when the item id is empty: a multi-purchase header
    pub multi_item: bool,
    pub order: Order,
}

/// A shippable parcel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    pub reference: String,
    pub first_names: String,
    pub last_name: String,
    pub address: [String; 4],
    pub postcode: String,
    pub email: String,
    pub phone: String,
    /// Unset when the price could not be read
    pub value: Option<String>,
    pub contents: Option<String>,
    pub weight: Option<Weight>,
}

impl Order {
    /// First names and surname joined for display.
    pub fn customer_name(&self) -> String {
        match (self.first_names.is_empty(), self.last_name.is_empty()) {
            (true, _) => self.last_name.clone(),
            (false, true) => self.first_names.clone(),
            (false, false) => format!("{} {}", self.first_names, self.last_name),
        }
    }

    /// Key used to spot the same customer ordering more than once.
    ///
    /// `None` when the order carries no name at all.
    pub fn name_key(&self) -> Option<(&str, &str)> {
        if self.first_names.is_empty() && self.last_name.is_empty() {
            None
        } else {
            Some((self.first_names.as_str(), self.last_name.as_str()))
        }
    }

    /// Copy the customer and address details of a multi-purchase header.
    pub fn take_customer_from(&mut self, header: &Order) {
        self.first_names.clone_from(&header.first_names);
        self.last_name.clone_from(&header.last_name);
        self.address.clone_from(&header.address);
        self.postcode.clone_from(&header.postcode);
        self.email.clone_from(&header.email);
        self.phone.clone_from(&header.phone);
    }

    /// Value of a projected field, or `None` when the order has no such value.
    pub fn field(&self, key: FieldKey) -> Option<Cow<'_, str>> {
        match key {
            FieldKey::AddressLine1 => text(&self.address[0]),
            FieldKey::AddressLine2 => text(&self.address[1]),
            FieldKey::AddressLine3 => text(&self.address[2]),
            FieldKey::AddressLine4 => text(&self.address[3]),
            FieldKey::Postcode => text(&self.postcode),
            FieldKey::FirstNames => text(&self.first_names),
            FieldKey::LastName => text(&self.last_name),
            FieldKey::Email => text(&self.email),
            FieldKey::Reference => text(&self.reference),
            FieldKey::Phone => text(&self.phone),
            FieldKey::Value => self.value.as_deref().map(Cow::Borrowed),
            FieldKey::Contents => self.contents.as_deref().map(Cow::Borrowed),
            FieldKey::Weight => self.weight.map(|w| Cow::Owned(w.to_string())),
            FieldKey::Compensation
            | FieldKey::Signature
            | FieldKey::SafePlace
            | FieldKey::DeliveryInstructions => None,
        }
    }
}

fn text(value: &str) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(value))
}
