//! Core SQL-generation primitives shared by the mortar dialect crates.
//!
//! This crate carries the cross-dialect pieces: the fragment joiner, the
//! literal value model, table references, deterministic index naming, the
//! [`Dialect`] enum, and the [`QueryGenerator`] capability trait that the
//! concrete dialect crates implement.

pub mod dialect;
pub mod error;
pub mod fragments;
pub mod generator;
pub mod index;
pub mod json;
pub mod table;
pub mod tracing;
pub mod value;

// Re-export key types and traits
pub use dialect::{Dialect, DialectParseError};
pub use error::{MortarError, Result};
pub use fragments::join_sql_fragments;
pub use generator::{IndexRef, QueryGenerator, RemoveIndexOptions};
pub use index::generate_index_name;
pub use json::JsonPathElement;
pub use table::TableRef;
pub use value::SqlValue;
