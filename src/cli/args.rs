//! Command-line argument definitions using clap

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::pipeline::{SourceLayout, Weight, DEFAULT_CONTENTS, MAX_PARCEL_KG};

/// ebay2hermes - Convert an eBay sales export into a myHermes import manifest
#[derive(Parser, Debug)]
#[command(name = "ebay2hermes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// eBay sales export CSV (the "sales record" download)
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Output manifest path.
    /// Defaults to hermes_<yy>_<mm>_<dd>.csv in the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Contents category written on every parcel
    #[arg(long, default_value = DEFAULT_CONTENTS)]
    pub contents: String,

    /// Weight in Kg used for every parcel when weights are not typed in.
    /// Must be above 0 and at most 15.
    #[arg(long, default_value = "0.5", value_parser = validate_default_weight)]
    pub default_weight: f64,

    /// Pause in milliseconds after each exported record (0 disables)
    #[arg(long, default_value = "125")]
    pub pace_ms: u64,

    /// Skip interactive prompts: default weights, duplicate orders kept separate
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub contents: String,
    pub default_weight: Weight,
    /// Delay after each exported record
    pub pace: Duration,
    pub layout: SourceLayout,
}

impl Cli {
    /// Get the output path, falling back to today's dated manifest name.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(default_output_name(chrono::Local::now().date_naive()))
        })
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            input: self.file.clone(),
            output: self.output_path(),
            contents: self.contents.clone(),
            default_weight: Weight::from_kg(self.default_weight),
            pace: Duration::from_millis(self.pace_ms),
            layout: SourceLayout::EBAY,
        }
    }
}

/// Manifest file name for a given day, e.g. `hermes_24_03_09.csv`.
pub fn default_output_name(date: NaiveDate) -> String {
    date.format("hermes_%y_%m_%d.csv").to_string()
}

/// Validator for default_weight parameter
fn validate_default_weight(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value > 0.0 && value <= MAX_PARCEL_KG {
        Ok(value)
    } else {
        Err(format!(
            "default_weight must be above 0 and at most {}, got {}",
            MAX_PARCEL_KG, value
        ))
    }
}
