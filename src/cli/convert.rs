//! Staged eBay to myHermes conversion run

use std::time::Instant;

use anyhow::Result;
use console::style;

use super::args::RunConfig;
use crate::pipeline::{
    consolidate_duplicates, load_raw_rows_with_progress, normalize_groups, parse_rows,
    resolve_orders, Decisions, FormatError, WeightPolicy,
};
use crate::report::{write_manifest_file, ConversionSummary, TargetSchema};
use crate::utils::{
    colorize, create_progress_bar, finish_with_success, print_count, print_info,
    print_step_header, print_step_time, print_success, print_warning, Status,
};

/// Run the whole conversion, asking `decisions` whenever an operator answer is
/// needed.
///
/// The manifest is only created once every order has been resolved, so a fatal
/// error leaves no partial output behind.
pub fn run_convert<D>(config: &RunConfig, decisions: &mut D) -> Result<ConversionSummary>
where
    D: Decisions + ?Sized,
{
    // Step 1: Read and parse the export
    print_step_header(1, "Read eBay Export");
    let step_start = Instant::now();
    println!();
    let rows = load_raw_rows_with_progress(&config.input)?;
    let parsed = match parse_rows(&rows, &config.layout) {
        Ok(parsed) => parsed,
        Err(err) => {
            report_format_error(&err);
            return Err(err.into());
        }
    };

    let mut summary = ConversionSummary::new(parsed.examined);
    print_success(&format!(
        "Parsed {} row(s) into {} order id(s)",
        parsed.row_count(),
        parsed.groups.len()
    ));
    if !parsed.skipped.is_empty() {
        print_count(
            "malformed row(s) skipped",
            parsed.skipped.len(),
            Some("(trailing lines are expected)"),
        );
    }
    for warning in &parsed.price_warnings {
        print_warning(&format!("{} - parcel value left blank", warning));
    }
    summary.skipped_rows = parsed.skipped;
    summary.price_warnings = parsed.price_warnings;
    let elapsed = step_start.elapsed();
    summary.record_step("read", elapsed);
    print_step_time(elapsed);

    // Step 2: Split multi-purchases into one order per item
    print_step_header(2, "Split Multi-purchases");
    let step_start = Instant::now();
    let normalized = normalize_groups(parsed.groups);
    if normalized.collapsed_groups == 0 {
        print_info("No multi-purchase orders found");
    } else {
        print_count("multi-purchase order(s)", normalized.collapsed_groups, None);
    }
    for err in &normalized.rejected {
        print_warning(&format!("{} - order left out", err));
    }
    summary.collapsed_groups = normalized.collapsed_groups;
    summary.rejected_groups = normalized.rejected;
    summary.orders_normalized = normalized.orders.len();
    let elapsed = step_start.elapsed();
    summary.record_step("normalize", elapsed);
    print_step_time(elapsed);

    // Step 3: Offer to combine orders from the same customer
    print_step_header(3, "Combine Duplicate Customers");
    let step_start = Instant::now();
    let consolidated = consolidate_duplicates(normalized.orders, decisions)?;
    if consolidated.merged_groups + consolidated.declined_groups == 0 {
        print_info("No customer placed more than one order");
    } else {
        println!(
            "      Merged {} set(s), kept {} set(s) apart",
            style(consolidated.merged_groups).yellow().bold(),
            style(consolidated.declined_groups).yellow().bold()
        );
    }
    summary.merged_groups = consolidated.merged_groups;
    summary.declined_groups = consolidated.declined_groups;
    let mut orders = consolidated.orders;
    let elapsed = step_start.elapsed();
    summary.record_step("consolidate", elapsed);
    print_step_time(elapsed);

    // Step 4: Weights and contents
    print_step_header(4, "Weights & Contents");
    let policy = if decisions.specify_weights(config.default_weight)? {
        WeightPolicy::PerOrder
    } else {
        WeightPolicy::Fixed(config.default_weight)
    };
    let step_start = Instant::now();
    resolve_orders(&mut orders, &config.contents, policy, decisions)?;
    print_success(&format!("Imported {} order(s) successfully", orders.len()));
    let elapsed = step_start.elapsed();
    summary.record_step("resolve", elapsed);
    print_step_time(elapsed);

    // Step 5: Write the manifest
    print_step_header(5, "Export myHermes Manifest");
    let step_start = Instant::now();
    if orders.is_empty() {
        print_warning("No orders left to export - the manifest will only hold a header");
    }
    let progress = create_progress_bar(orders.len() as u64, "Exporting");
    let exported = write_manifest_file(
        &config.output,
        &TargetSchema::hermes(),
        &orders,
        config.pace,
        Some(&progress),
    )?;
    finish_with_success(&progress, &format!("{}", colorize("Done!", Status::Success)));
    summary.orders_exported = exported;
    summary.output = Some(config.output.clone());
    let elapsed = step_start.elapsed();
    summary.record_step("export", elapsed);
    print_step_time(elapsed);

    Ok(summary)
}

/// Dump the rows that made the export look malformed.
fn report_format_error(err: &FormatError) {
    println!();
    println!(
        "    {} {}",
        colorize("FAILURE", Status::Failure),
        style(err).red().bold()
    );
    for row in err.skipped() {
        println!(
            "      {} line {} ({} fields): {}",
            style("•").dim(),
            row.line,
            row.field_count,
            row.preview
        );
    }
}
