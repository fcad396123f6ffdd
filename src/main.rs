//! ebay2hermes: eBay to myHermes CLI Tool
//!
//! Converts an eBay sales export into a myHermes import manifest.

use anyhow::Result;
use clap::Parser;

use ebay2hermes::cli::{run_convert, Cli, TerminalPrompts};
use ebay2hermes::pipeline::{Decisions, KeepSeparate};
use ebay2hermes::utils::{print_banner, print_completion, print_config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.run_config();

    print_banner(env!("CARGO_PKG_VERSION"));

    let weights = if cli.no_confirm {
        format!("{} Kg (fixed)", config.default_weight)
    } else {
        format!("{} Kg or typed in", config.default_weight)
    };
    print_config(
        &config.input,
        &config.output,
        &config.contents,
        &weights,
        config.pace,
    );

    let mut decisions: Box<dyn Decisions> = if cli.no_confirm {
        Box::new(KeepSeparate)
    } else {
        Box::new(TerminalPrompts)
    };

    let summary = run_convert(&config, decisions.as_mut())?;

    summary.display();
    print_completion(summary.orders_exported, &config.output);

    Ok(())
}
