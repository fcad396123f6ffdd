//! Terminal styling utilities

use console::{style, Emoji, StyledObject};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::pipeline::InvalidStatusTag;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
pub static SCALES: Emoji<'_, '_> = Emoji("⚖️  ", "");
pub static CLOCK: Emoji<'_, '_> = Emoji("⏱️  ", "");

/// Status tags used to colour operator messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
    Warning,
    Note,
}

impl FromStr for Status {
    type Err = InvalidStatusTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(Status::Success),
            "FAILURE" => Ok(Status::Failure),
            "WARNING" => Ok(Status::Warning),
            "NOTE" => Ok(Status::Note),
            other => Err(InvalidStatusTag(other.to_string())),
        }
    }
}

/// Text on a background matching its status: green, red, yellow or blue.
pub fn colorize<D: Display>(text: D, status: Status) -> StyledObject<D> {
    let styled = style(text).white();
    match status {
        Status::Success => styled.on_green(),
        Status::Failure => styled.on_red(),
        Status::Warning => styled.on_yellow().black(),
        Status::Note => styled.on_blue(),
    }
}

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     ___ ___   __   _  _   ___   _  _  ___  ___  __  __  ___  ___
    | __| _ ) /_\  | || | |_  ) | || || __|| _ \|  \/  || __|/ __|
    | _|| _ \/ _ \  \_, |  / /  | __ || _| |   /| |\/| || _| \__ \
    |___|___/_/ \_\ |__/  /___| |_||_||___||_|_\|_|  |_||___||___/
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("eBay sales export to myHermes import manifest").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, output: &Path, contents: &str, weights: &str, pace: Duration) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!("    │  {} Input:    {:<37}│", FOLDER, truncate_path(input, 36));
    println!("    │  {} Output:   {:<37}│", SAVE, truncate_path(output, 36));
    println!("    ├{}┤", line);
    println!(
        "    │  {} Contents: {:<37}│",
        PACKAGE,
        style(truncate_string(contents, 36)).yellow()
    );
    println!(
        "    │  {} Weights:  {:<37}│",
        SCALES,
        style(truncate_string(weights, 36)).yellow()
    );
    println!(
        "    │  {} Pacing:   {:<37}│",
        CLOCK,
        style(format!("{} ms", pace.as_millis())).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print how long a step took
pub fn print_step_time(elapsed: Duration) {
    println!(
        "    {}",
        style(format!("⏱  {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a non-fatal problem
pub fn print_warning(message: &str) {
    println!("    {} {}", colorize("WARN", Status::Warning), message);
}

/// Print a highlighted note
pub fn print_note(message: &str) {
    println!("    {}", colorize(message, Status::Note));
}

/// Print the final completion message
pub fn print_completion(exported: usize, output: &Path) {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style(format!(
            "Exported {} record(s) to {} successfully!",
            exported,
            output.display()
        ))
        .green()
        .bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
