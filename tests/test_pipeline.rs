//! Integration tests for the full conversion run

use std::path::PathBuf;
use std::time::Duration;

use ebay2hermes::cli::{run_convert, RunConfig};
use ebay2hermes::pipeline::{SourceLayout, Weight};

#[path = "common/mod.rs"]
mod common;

use common::*;

fn config(input: PathBuf, output: PathBuf) -> RunConfig {
    RunConfig {
        input,
        output,
        contents: "Home & Garden".to_string(),
        default_weight: Weight::from_kg(0.5),
        pace: Duration::ZERO,
        layout: SourceLayout::EBAY,
    }
}

fn sample_export() -> Vec<ebay2hermes::pipeline::RawRow> {
    with_header(vec![
        simple_row("100", "john smith", "£3.00"),
        header_row("5001", "Jane A Doe"),
        item_row("5001", "77", "£12.50"),
        item_row("5001", "78", "£1.25"),
        simple_row("101", "JOHN SMITH", "abc"),
        simple_row("102", "Cat Fox", "£7"),
        trailer_row("4 record(s) downloaded"),
    ])
}

#[test]
fn test_full_run_with_merge_and_typed_weights() {
    let (temp_dir, input) = create_temp_export(&sample_export());
    let output = temp_dir.path().join("hermes.csv");

    // Jane's two items form a duplicate set as well as John's two orders
    let mut decisions = ScriptedDecisions {
        specify: true,
        merge_answers: [true, false].into_iter().collect(),
        weight_answers: ["2", "10", "1", "3", "0.5"].into_iter().collect(),
        ..Default::default()
    };

    let summary = run_convert(&config(input, output.clone()), &mut decisions).unwrap();

    assert_eq!(
        decisions.merge_prompts,
        vec![
            ("John Smith".to_string(), "100, 101".to_string()),
            ("Jane A Doe".to_string(), "5000, 4999".to_string()),
        ]
    );

    let rows = read_manifest(&output);
    assert_eq!(rows.len(), 5, "Header plus four parcels");

    let refs: Vec<&str> = rows[1..].iter().map(|r| r[11].as_str()).collect();
    assert_eq!(refs, vec!["100, 101", "5000", "4999", "102"]);

    let weights: Vec<&str> = rows[1..].iter().map(|r| r[8].as_str()).collect();
    assert_eq!(weights, vec!["1.98", "9.9", "0.99", "2.97"]);

    // Merged parcel keeps the first order's value
    assert_eq!(rows[1][13], "3.00");
    assert_eq!(rows[2][5], "Jane A");
    assert_eq!(rows[2][4], "AB1 2CD");

    assert_eq!(summary.merged_groups, 1);
    assert_eq!(summary.declined_groups, 1);
    assert_eq!(summary.collapsed_groups, 1);
    assert_eq!(summary.orders_normalized, 5, "Two items split out plus three single sales");
    assert_eq!(summary.orders_exported, 4);
    assert_eq!(summary.skipped_rows.len(), 1);
    assert_eq!(summary.price_warnings.len(), 1);
    assert_eq!(decisions.weight_answers.len(), 1, "One scripted weight left over");
}

#[test]
fn test_full_run_default_weights() {
    let (temp_dir, input) = create_temp_export(&sample_export());
    let output = temp_dir.path().join("hermes.csv");
    let mut decisions = ScriptedDecisions::merging(&[false, false]);

    let summary = run_convert(&config(input, output.clone()), &mut decisions).unwrap();

    let rows = read_manifest(&output);
    assert_eq!(rows.len(), 6);
    assert!(rows[1..].iter().all(|r| r[8] == "0.5"));
    assert!(rows[1..].iter().all(|r| r[12] == "Home & Garden"));
    assert!(decisions.weight_prompts.is_empty());

    // Unreadable price on order 101 leaves its value blank
    let john_101 = rows.iter().find(|r| r[11] == "101").unwrap();
    assert_eq!(john_101[13], "");
    assert_eq!(summary.orders_exported, 5);
}

#[test]
fn test_windows_1252_export_is_decoded() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let input = temp_dir.path().join("ebay.csv");
    let output = temp_dir.path().join("hermes.csv");

    let text = to_csv(&with_header(vec![simple_row("100", "John Smith", "£3.50")]));
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&text);
    assert!(std::str::from_utf8(&bytes).is_err(), "Fixture must not be UTF-8");
    std::fs::write(&input, &bytes).unwrap();

    run_convert(&config(input, output.clone()), &mut ScriptedDecisions::default()).unwrap();

    let rows = read_manifest(&output);
    assert_eq!(rows[1][13], "3.50");
}

#[test]
fn test_format_error_leaves_no_output() {
    let (temp_dir, input) = create_temp_export(&with_header(vec![
        simple_row("100", "John Smith", "1"),
        trailer_row("a"),
        trailer_row("b"),
        trailer_row("c"),
    ]));
    let output = temp_dir.path().join("hermes.csv");

    let err = run_convert(&config(input, output.clone()), &mut ScriptedDecisions::default())
        .unwrap_err();

    assert!(err.to_string().contains("Unexpectedly many rows skipped"));
    assert!(!output.exists());
}
