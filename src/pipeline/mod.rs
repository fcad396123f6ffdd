//! Pipeline module - parse, normalize, consolidate and resolve orders

pub mod consolidator;
pub mod decisions;
pub mod error;
pub mod layout;
pub mod loader;
pub mod normalizer;
pub mod order;
pub mod parser;
pub mod resolver;
pub mod text;

pub use consolidator::*;
pub use decisions::*;
pub use error::*;
pub use layout::*;
pub use loader::*;
pub use normalizer::*;
pub use order::*;
pub use parser::*;
pub use resolver::*;
pub use text::*;
