//! Tests for weight and contents resolution

use ebay2hermes::pipeline::{
    resolve_orders, KeepSeparate, Weight, WeightPolicy, DEFAULT_CONTENTS, WEIGHT_SCALE,
};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_default_weight_applied_unscaled() {
    let mut orders = vec![order("1", "Jo", "March"), order("2", "Ann", "Lee")];

    resolve_orders(
        &mut orders,
        DEFAULT_CONTENTS,
        WeightPolicy::Fixed(Weight::from_kg(0.5)),
        &mut KeepSeparate,
    )
    .unwrap();

    for o in &orders {
        assert_eq!(o.weight, Some(Weight::from_kg(0.5)), "Default weight is never scaled");
        assert_eq!(o.contents.as_deref(), Some("Home & Garden"));
    }
}

#[test]
fn test_typed_weights_are_scaled() {
    let mut orders = vec![
        order("1", "Jo", "March"),
        order("2", "Ann", "Lee"),
        order("3", "Cat", "Fox"),
    ];
    let mut decisions = ScriptedDecisions::weighing(&["10", "15", "0.25"]);

    resolve_orders(&mut orders, "Toys", WeightPolicy::PerOrder, &mut decisions).unwrap();

    assert_eq!(decisions.weight_prompts, vec!["1", "2", "3"]);
    assert_eq!(orders[0].weight, Some(Weight::from_kg(10.0 * WEIGHT_SCALE)));
    assert_eq!(orders[1].weight, Some(Weight::from_kg(15.0 * WEIGHT_SCALE)));
    assert_eq!(orders[2].weight, Some(Weight::from_kg(0.25 * WEIGHT_SCALE)));
    assert!(orders.iter().all(|o| o.contents.as_deref() == Some("Toys")));
}

#[test]
fn test_scaled_weights_stay_within_courier_limit() {
    let mut orders = vec![order("1", "Jo", "March")];
    let mut decisions = ScriptedDecisions::weighing(&["15"]);

    resolve_orders(&mut orders, DEFAULT_CONTENTS, WeightPolicy::PerOrder, &mut decisions).unwrap();

    let kg = orders[0].weight.unwrap().kg();
    assert!(kg > 0.0 && kg <= 14.85 + 1e-9, "got {}", kg);
}

#[test]
fn test_invalid_typed_weight_surfaces_as_error() {
    let mut orders = vec![order("1", "Jo", "March")];
    let mut decisions = ScriptedDecisions::weighing(&["16"]);

    let result = resolve_orders(&mut orders, DEFAULT_CONTENTS, WeightPolicy::PerOrder, &mut decisions);

    assert!(result.is_err(), "Out-of-range weights never reach an order");
}
