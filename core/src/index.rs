//! Deterministic index naming.

use crate::table::TableRef;
use heck::ToSnakeCase;

/// Derives the canonical name for an index over `columns`.
///
/// The name is `<table>_<col>_..` (plus a `_unique` suffix for unique
/// indexes), snake-cased. The same algorithm must be used wherever an index
/// is created, otherwise removal by column list will silently fail to match
/// the index that was actually created.
///
/// # Examples
///
/// ```
/// use mortar_core::{TableRef, generate_index_name};
///
/// let users = TableRef::parse("users");
/// assert_eq!(generate_index_name(&users, &["first_name", "last_name"], false),
///            "users_first_name_last_name");
/// ```
pub fn generate_index_name(table: &TableRef, columns: &[&str], unique: bool) -> String {
    let mut name = String::with_capacity(
        table.table_name.len() + columns.iter().map(|column| column.len() + 1).sum::<usize>(),
    );
    name.push_str(&table.table_name);
    for column in columns {
        name.push('_');
        name.push_str(column);
    }
    if unique {
        name.push_str("_unique");
    }

    name.to_snake_case()
}
