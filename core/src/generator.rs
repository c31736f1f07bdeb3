//! The cross-dialect statement-generation surface.

use crate::{
    dialect::Dialect,
    error::{MortarError, Result},
    json::JsonPathElement,
    table::TableRef,
    value::SqlValue,
};

/// Options for removing an index.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveIndexOptions {
    pub concurrently: bool,
    pub if_exists: bool,
    pub cascade: bool,
}

/// An index identified either by an explicit name or by its column list.
///
/// Column lists are resolved through [`crate::generate_index_name`], so the
/// derived name matches the one used at creation time.
#[derive(Debug, Clone, Copy)]
pub enum IndexRef<'a> {
    Name(&'a str),
    Columns(&'a [&'a str]),
}

/// One dialect's SQL-generation capabilities.
///
/// The base operations carry ANSI defaults that concrete dialects may
/// override; dialect-specific statements default to
/// [`MortarError::Unsupported`] and are supplied by the dialect crates.
/// Dialect selection picks one concrete implementation — there are no
/// runtime override chains.
pub trait QueryGenerator {
    fn dialect(&self) -> Dialect;

    /// Schema assumed when a table reference carries none.
    fn default_schema(&self) -> &str {
        self.dialect().default_schema()
    }

    /// Quotes `name` for use as an identifier.
    ///
    /// Never interchangeable with [`QueryGenerator::escape_value`]:
    /// identifiers and literals are escaped differently.
    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Escapes `value` for inlining as a literal.
    fn escape_value(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(true) => "true".to_string(),
            SqlValue::Bool(false) => "false".to_string(),
            SqlValue::Integer(value) => value.to_string(),
            SqlValue::Float(value) => value.to_string(),
            SqlValue::Text(value) => format!("'{}'", value.replace('\'', "''")),
            SqlValue::Array(values) => {
                let elements = values
                    .iter()
                    .map(|value| self.escape_value(value))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("ARRAY[{elements}]")
            }
        }
    }

    /// Applies an explicit schema override to a resolved table reference.
    fn table_details(&self, table: &TableRef, schema_override: Option<&str>) -> TableRef {
        let mut details = table.clone();
        if let Some(schema) = schema_override {
            details.schema = Some(schema.into());
        }
        details
    }

    /// Query describing the columns of `table`.
    fn describe_table_query(&self, _table: &TableRef) -> Result<String> {
        Err(self.unsupported("describe_table_query"))
    }

    /// Query listing the indexes defined on `table`.
    fn list_indexes_query(&self, _table: &TableRef) -> Result<String> {
        Err(self.unsupported("list_indexes_query"))
    }

    /// Statement removing an index by name or by its column list.
    fn remove_index_query(
        &self,
        _table: &TableRef,
        _index: IndexRef<'_>,
        _options: &RemoveIndexOptions,
    ) -> Result<String> {
        Err(self.unsupported("remove_index_query"))
    }

    /// Expression extracting `path` from the JSON expression `expr`.
    fn json_path_extraction_query(
        &self,
        _expr: &str,
        _path: &[JsonPathElement],
        _unquote: bool,
    ) -> Result<String> {
        Err(self.unsupported("json_path_extraction_query"))
    }

    /// Expression extracting the root of `expr` as unquoted text.
    fn format_unquote_json(&self, _expr: &str) -> Result<String> {
        Err(self.unsupported("format_unquote_json"))
    }

    /// Rewrites a generic column-type string into dialect-correct DDL syntax.
    fn rewrite_column_type(
        &self,
        _table: &TableRef,
        _column: &str,
        _data_type: &str,
        _enum_custom_name: Option<&str>,
    ) -> Result<String> {
        Err(self.unsupported("rewrite_column_type"))
    }

    fn unsupported(&self, operation: &'static str) -> MortarError {
        MortarError::Unsupported {
            dialect: self.dialect(),
            operation,
        }
    }
}
