//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Input;

use crate::pipeline::{
    parse_weight, Decisions, EnteredWeight, InvalidConfirmation, Order, Weight,
};
use crate::utils::{colorize, print_note, Status};

/// Interpret a yes/no answer: `y`/`yes` or `n`/`no`, any case.
pub fn parse_confirmation(input: &str) -> Result<bool, InvalidConfirmation> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InvalidConfirmation(input.trim().to_string())),
    }
}

/// Ask a yes/no question until the answer is one.
pub fn confirm_step(message: &str) -> Result<bool> {
    let answer: String = Input::new()
        .with_prompt(format!("{} (y/n)", message))
        .validate_with(|input: &String| -> Result<(), String> {
            parse_confirmation(input)
                .map(|_| ())
                .map_err(|e| colorize(e, Status::Failure).to_string())
        })
        .interact_text()?;
    Ok(parse_confirmation(&answer)?)
}

/// Ask for a parcel weight until a valid one is typed.
pub fn prompt_weight(message: &str) -> Result<EnteredWeight> {
    let answer: String = Input::new()
        .with_prompt(message)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_weight(input)
                .map(|_| ())
                .map_err(|e| colorize(e, Status::Failure).to_string())
        })
        .interact_text()?;
    Ok(parse_weight(&answer)?)
}

/// Decisions answered by the operator at the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompts;

impl Decisions for TerminalPrompts {
    fn specify_weights(&mut self, default: Weight) -> Result<bool> {
        println!();
        println!("    Weights of each order default to {} Kg.", default);
        let specify = confirm_step("Would you prefer to specify weights for each order?")?;
        if specify {
            print_note("Please keep in mind that weights will be reduced slightly to drop below cost threshold.");
        }
        Ok(specify)
    }

    fn merge_duplicates(&mut self, customer: &str, references: &str) -> Result<bool> {
        println!();
        print_note(&format!(
            "{} has placed multiple orders. ({})",
            customer, references
        ));
        confirm_step("Do you wish to combine these orders and send in one parcel?")
    }

    fn parcel_weight(&mut self, order: &Order) -> Result<EnteredWeight> {
        prompt_weight(&format!(
            "Please enter weight (Kg) for eBay order {} ({})",
            order.reference,
            order.customer_name()
        ))
    }
}
