//! ebay2hermes: eBay to myHermes Conversion Library
//!
//! Turns an eBay sales export into a myHermes bulk import manifest: splits
//! multi-purchases into per-item parcels, offers to combine orders placed by the
//! same customer, and attaches weights and contents.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
