//! Identifier quoting and literal escaping with PostgreSQL semantics.
//!
//! Quoting a name for use as an identifier and escaping a value for use as
//! a literal are different, non-interchangeable operations.

use mortar_core::SqlValue;

/// Quotes `name` for use as an identifier, doubling embedded double quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Escapes a string as a text literal.
///
/// Embedded single quotes are doubled. Backslashes force the `E'...'` form
/// with backslashes doubled, so the text survives servers running with
/// `standard_conforming_strings` off.
pub fn escape_string(value: &str) -> String {
    let escaped = value.replace('\'', "''");
    if value.contains('\\') {
        format!("E'{}'", escaped.replace('\\', "\\\\"))
    } else {
        format!("'{escaped}'")
    }
}

/// Escapes any scalar or array value as a literal.
///
/// Arrays render as an `ARRAY[...]` constructor with elements escaped
/// recursively; non-finite floats use their quoted spellings.
pub fn escape_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bool(true) => "true".to_string(),
        SqlValue::Bool(false) => "false".to_string(),
        SqlValue::Integer(value) => value.to_string(),
        SqlValue::Float(value) if value.is_nan() => "'NaN'".to_string(),
        SqlValue::Float(value) if value.is_infinite() => if value.is_sign_positive() {
            "'Infinity'"
        } else {
            "'-Infinity'"
        }
        .to_string(),
        SqlValue::Float(value) => value.to_string(),
        SqlValue::Text(value) => escape_string(value),
        SqlValue::Array(values) => {
            let elements = values
                .iter()
                .map(escape_value)
                .collect::<Vec<_>>()
                .join(",");
            format!("ARRAY[{elements}]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("us\"ers"), "\"us\"\"ers\"");
    }

    #[test]
    fn test_escape_string_doubles_quotes() {
        assert_eq!(escape_string("it's"), "'it''s'");
    }

    #[test]
    fn test_escape_string_backslash_uses_e_form() {
        assert_eq!(escape_string(r"a\b"), r"E'a\\b'");
        assert_eq!(escape_string(r"it's a\b"), r"E'it''s a\\b'");
    }

    #[test]
    fn test_escape_scalars() {
        assert_eq!(escape_value(&SqlValue::Null), "NULL");
        assert_eq!(escape_value(&SqlValue::Bool(true)), "true");
        assert_eq!(escape_value(&SqlValue::Integer(-3)), "-3");
        assert_eq!(escape_value(&SqlValue::Float(1.5)), "1.5");
        assert_eq!(escape_value(&SqlValue::Float(f64::NAN)), "'NaN'");
        assert_eq!(escape_value(&SqlValue::Float(f64::NEG_INFINITY)), "'-Infinity'");
    }

    #[test]
    fn test_escape_array() {
        let value = SqlValue::from(vec!["a", "b"]);
        assert_eq!(escape_value(&value), "ARRAY['a','b']");
    }

    #[test]
    fn test_identifier_and_literal_escaping_differ() {
        assert_ne!(quote_identifier("enum_users_role"), escape_string("enum_users_role"));
    }
}
