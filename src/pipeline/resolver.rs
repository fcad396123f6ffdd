//! Weight and contents resolution

use anyhow::Result;

use super::decisions::Decisions;
use super::error::InvalidWeightInput;
use super::order::{Order, Weight, MAX_PARCEL_KG, WEIGHT_SCALE};

/// Contents category written on every parcel unless overridden.
pub const DEFAULT_CONTENTS: &str = "Home & Garden";

/// Weight used when the operator does not type one in, in kilograms.
pub const DEFAULT_WEIGHT_KG: f64 = 0.5;

/// A weight typed by the operator, validated to lie in (0, 15] kg.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EnteredWeight(f64);

impl EnteredWeight {
    pub fn kg(self) -> f64 {
        self.0
    }

    /// Weight to ship: the entry scaled by 0.99 to land just under the next
    /// pricing band.
    pub fn shipping_weight(self) -> Weight {
        Weight::from_kg(self.0 * WEIGHT_SCALE)
    }
}

/// Validate a typed weight.
///
/// ```
/// use ebay2hermes::pipeline::{parse_weight, InvalidWeightInput};
///
/// assert_eq!(parse_weight("10").unwrap().kg(), 10.0);
/// assert_eq!(parse_weight("0"), Err(InvalidWeightInput::Zero));
/// assert_eq!(parse_weight("16"), Err(InvalidWeightInput::TooHeavy));
/// ```
pub fn parse_weight(input: &str) -> Result<EnteredWeight, InvalidWeightInput> {
    let kg: f64 = input
        .trim()
        .parse()
        .map_err(|_| InvalidWeightInput::NotNumeric)?;

    if !kg.is_finite() {
        Err(InvalidWeightInput::NotNumeric)
    } else if kg > MAX_PARCEL_KG {
        Err(InvalidWeightInput::TooHeavy)
    } else if kg == 0.0 {
        Err(InvalidWeightInput::Zero)
    } else if kg < 0.0 {
        Err(InvalidWeightInput::Negative)
    } else {
        Ok(EnteredWeight(kg))
    }
}

/// How parcel weights are decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightPolicy {
    /// Every parcel gets this weight, unscaled
    Fixed(Weight),
    /// Ask for each parcel and scale the answer
    PerOrder,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        WeightPolicy::Fixed(Weight::from_kg(DEFAULT_WEIGHT_KG))
    }
}

/// Attach contents and weight to every order.
pub fn resolve_orders<D>(
    orders: &mut [Order],
    contents: &str,
    policy: WeightPolicy,
    decisions: &mut D,
) -> Result<()>
where
    D: Decisions + ?Sized,
{
    for order in orders.iter_mut() {
        resolve_order(order, contents, policy, decisions)?;
    }
    Ok(())
}

/// Attach contents and weight to one order.
pub fn resolve_order<D>(
    order: &mut Order,
    contents: &str,
    policy: WeightPolicy,
    decisions: &mut D,
) -> Result<()>
where
    D: Decisions + ?Sized,
{
    order.contents = Some(contents.to_string());
    order.weight = Some(match policy {
        WeightPolicy::Fixed(weight) => weight,
        WeightPolicy::PerOrder => decisions.parcel_weight(order)?.shipping_weight(),
    });
    Ok(())
}
