//! Tracing utilities for statement-generation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The macro no-ops when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event with the operation name and generated SQL.
///
/// ```ignore
/// mortar_trace_sql!("remove_index_query", sql);
/// ```
#[macro_export]
macro_rules! mortar_trace_sql {
    ($op:literal, $sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(op = $op, sql = %$sql, "mortar.generate");
    };
}
