//! # Mortar
//!
//! A dialect-aware SQL statement generator for Rust.
//!
//! Mortar compiles structural descriptions of tables, columns, indexes, and
//! enumerated types into dialect-correct, injection-safe SQL text. The
//! `mortar-core` crate carries the cross-dialect primitives — fragment
//! joining, literal values, table references, the [`core::QueryGenerator`]
//! capability trait — and dialect crates such as `mortar-postgres` supply
//! the concrete generators. Generation is pure: nothing here executes SQL,
//! manages connections, or validates against a live catalog.
//!
//! ## Quick start
//!
//! ```rust
//! use mortar::core::{QueryGenerator, TableRef};
//! use mortar::postgres::PostgresQueryGenerator;
//!
//! let generator = PostgresQueryGenerator::new();
//! let users = TableRef::parse("users");
//!
//! let sql = generator.describe_table_query(&users)?;
//! assert!(sql.contains("FROM information_schema.columns c"));
//! # Ok::<(), mortar::MortarError>(())
//! ```
//!
//! ## Dialect support
//!
//! | Dialect    | Crate             | Feature Flag |
//! |------------|-------------------|--------------|
//! | PostgreSQL | `mortar-postgres` | `postgres`   |

pub use mortar_core as core;

#[cfg(feature = "postgres")]
pub use mortar_postgres as postgres;

pub use mortar_core::{MortarError, Result};
