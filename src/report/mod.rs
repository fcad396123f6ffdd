//! Report module - manifest schema, writer and run summary

pub mod emitter;
pub mod schema;
pub mod summary;

pub use emitter::*;
pub use schema::*;
pub use summary::*;
