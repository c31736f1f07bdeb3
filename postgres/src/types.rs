//! Column-type rewriting for PostgreSQL DDL.
//!
//! Generic column-type text needs rewriting: the dialect has no single
//! inline auto-increment token, and primary-key-ness is expressed as a
//! separate constraint clause rather than alongside the type.

use mortar_core::TableRef;
use regex::NoExpand;

use crate::enums::{ENUM_SIGNATURE, EnumOptions};
use crate::generator::PostgresQueryGenerator;

/// Rewrites `data_type` into dialect-correct DDL syntax. Rule order matters:
/// later rules inspect the result of earlier ones.
///
/// Text containing none of the trigger tokens passes through unchanged,
/// modulo whitespace normalization; the rewrite is a fixed point of itself.
pub(crate) fn rewrite_column_type(
    generator: &PostgresQueryGenerator,
    table: &TableRef,
    column: &str,
    data_type: &str,
    enum_custom_name: Option<&str>,
) -> String {
    let mut data_type = data_type.to_string();

    if data_type.contains("PRIMARY KEY") {
        data_type = data_type.replacen("PRIMARY KEY", "", 1);
    }

    if data_type.contains("SERIAL") {
        if data_type.contains("BIGINT") {
            data_type = data_type.replacen("SERIAL", "BIGSERIAL", 1);
            data_type = data_type.replacen("BIGINT", "", 1);
        } else if data_type.contains("SMALLINT") {
            data_type = data_type.replacen("SERIAL", "SMALLSERIAL", 1);
            data_type = data_type.replacen("SMALLINT", "", 1);
        } else {
            data_type = data_type.replacen("INTEGER", "", 1);
        }

        // serial columns are implicitly non-null
        data_type = data_type.replacen("NOT NULL", "", 1);
    }

    if data_type.starts_with("ENUM(") {
        let enum_name =
            generator.enum_type_name(table, Some(column), enum_custom_name, &EnumOptions::default());
        data_type = ENUM_SIGNATURE
            .replace(&data_type, NoExpand(&enum_name))
            .into_owned();
    }

    squash_whitespace(&data_type)
}

/// Collapses whitespace runs left behind by token removal, without touching
/// the inside of single-quoted literals.
fn squash_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_literal = false;
    let mut pending_space = false;

    for ch in text.chars() {
        if in_literal {
            out.push(ch);
            if ch == '\'' {
                in_literal = false;
            }
            continue;
        }

        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;

        if ch == '\'' {
            in_literal = true;
        }
        out.push(ch);
    }

    out
}
