//! PostgreSQL statement generation for mortar
//!
//! This crate compiles structural schema intent — tables, columns, indexes,
//! enumerated types — into PostgreSQL DDL, catalog queries, and expressions.
//! Enumerated types are emulated through catalog-visible named types because
//! the dialect has no inline bounded-enum column syntax.

pub mod enums;
pub mod escape;
pub mod generator;
pub mod indexes;
pub mod introspect;
pub mod types;

pub use enums::{AddEnumValueOptions, EnumOptions, EnumTypeDescriptor, EnumTypeName};
pub use escape::{escape_string, escape_value, quote_identifier};
pub use generator::PostgresQueryGenerator;

pub use mortar_core::{IndexRef, QueryGenerator, RemoveIndexOptions};
