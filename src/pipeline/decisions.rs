//! Operator decision points
//!
//! The pipeline never talks to the terminal itself. Whenever a stage needs a
//! human answer it asks a [`Decisions`] implementation: the CLI answers with
//! dialoguer prompts, tests answer from a script.

use anyhow::Result;

use super::order::{Order, Weight};
use super::resolver::EnteredWeight;

pub trait Decisions {
    /// Type a weight for every parcel instead of using `default`?
    fn specify_weights(&mut self, default: Weight) -> Result<bool>;

    /// Should these orders from the same customer go out as one parcel?
    ///
    /// `references` is the comma-joined list of every matched reference.
    fn merge_duplicates(&mut self, customer: &str, references: &str) -> Result<bool>;

    /// Weight typed in for one order, already validated.
    fn parcel_weight(&mut self, order: &Order) -> Result<EnteredWeight>;
}

/// Answers every question without asking: default weights, duplicates kept
/// separate. Used with `--no-confirm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepSeparate;

impl Decisions for KeepSeparate {
    fn specify_weights(&mut self, _default: Weight) -> Result<bool> {
        Ok(false)
    }

    fn merge_duplicates(&mut self, _customer: &str, _references: &str) -> Result<bool> {
        Ok(false)
    }

    fn parcel_weight(&mut self, order: &Order) -> Result<EnteredWeight> {
        anyhow::bail!(
            "No weight available for order {} in non-interactive mode",
            order.reference
        )
    }
}
