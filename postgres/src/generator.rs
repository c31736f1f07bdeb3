//! The PostgreSQL query generator.

use compact_str::CompactString;
use mortar_core::{
    Dialect, IndexRef, JsonPathElement, QueryGenerator, RemoveIndexOptions, Result, SqlValue,
    TableRef,
};

use crate::escape::{escape_value, quote_identifier};
use crate::{indexes, introspect, types};

/// Generates PostgreSQL statements from schema-model references.
///
/// Every operation is a pure function from its inputs to SQL text. The only
/// state is the connection-default schema assumed for unqualified table
/// references; the generator never executes SQL or touches a connection.
#[derive(Debug, Clone)]
pub struct PostgresQueryGenerator {
    default_schema: CompactString,
}

impl Default for PostgresQueryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PostgresQueryGenerator {
    pub fn new() -> Self {
        Self {
            default_schema: CompactString::const_new("public"),
        }
    }

    /// Overrides the schema assumed for unqualified table references.
    pub fn with_default_schema(mut self, schema: impl Into<CompactString>) -> Self {
        self.default_schema = schema.into();
        self
    }

    /// Schema of `table`, falling back to the connection default.
    pub(crate) fn schema_of<'a>(&'a self, table: &'a TableRef) -> &'a str {
        table.schema.as_deref().unwrap_or(&self.default_schema)
    }
}

impl QueryGenerator for PostgresQueryGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSQL
    }

    fn default_schema(&self) -> &str {
        &self.default_schema
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_identifier(name)
    }

    fn escape_value(&self, value: &SqlValue) -> String {
        escape_value(value)
    }

    fn describe_table_query(&self, table: &TableRef) -> Result<String> {
        Ok(introspect::describe_table_query(self, table))
    }

    fn list_indexes_query(&self, table: &TableRef) -> Result<String> {
        Ok(indexes::list_indexes_query(self, table))
    }

    fn remove_index_query(
        &self,
        table: &TableRef,
        index: IndexRef<'_>,
        options: &RemoveIndexOptions,
    ) -> Result<String> {
        indexes::remove_index_query(self, table, index, options)
    }

    /// Chooses the extraction operator by path shape: depth-1 paths use the
    /// `->` family and keep the element's native type, deeper paths use the
    /// `#>` family with every element coerced into a text-array literal.
    fn json_path_extraction_query(
        &self,
        expr: &str,
        path: &[JsonPathElement],
        unquote: bool,
    ) -> Result<String> {
        let operator = if path.len() == 1 {
            if unquote { "->>" } else { "->" }
        } else if unquote {
            "#>>"
        } else {
            "#>"
        };

        let path_sql = if let [element] = path {
            // -> accepts either an array index or an object key directly
            let value = match element {
                JsonPathElement::Index(index) => SqlValue::Integer(*index),
                JsonPathElement::Key(key) => SqlValue::Text(key.clone()),
            };
            escape_value(&value)
        } else {
            // #> requires a homogeneous text-array path
            let elements = path
                .iter()
                .map(|element| SqlValue::Text(element.to_path_string()))
                .collect();
            escape_value(&SqlValue::Array(elements))
        };

        Ok(format!("{expr}{operator}{path_sql}"))
    }

    /// Extracts the root value as unquoted text through an empty path array.
    fn format_unquote_json(&self, expr: &str) -> Result<String> {
        Ok(format!("{expr}#>>ARRAY[]::TEXT[]"))
    }

    fn rewrite_column_type(
        &self,
        table: &TableRef,
        column: &str,
        data_type: &str,
        enum_custom_name: Option<&str>,
    ) -> Result<String> {
        Ok(types::rewrite_column_type(
            self,
            table,
            column,
            data_type,
            enum_custom_name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> PostgresQueryGenerator {
        PostgresQueryGenerator::new()
    }

    #[test]
    fn test_default_schema_override() {
        let generator = PostgresQueryGenerator::new().with_default_schema("app");
        assert_eq!(generator.default_schema(), "app");
    }

    #[test]
    fn test_json_operator_selection() {
        let generator = generator();
        let path = [JsonPathElement::from(0i64)];
        assert_eq!(
            generator
                .json_path_extraction_query("\"profile\"", &path, false)
                .unwrap(),
            "\"profile\"->0"
        );
        assert_eq!(
            generator
                .json_path_extraction_query("\"profile\"", &path, true)
                .unwrap(),
            "\"profile\"->>0"
        );

        let deep = [JsonPathElement::from("a"), JsonPathElement::from("b")];
        assert_eq!(
            generator
                .json_path_extraction_query("\"profile\"", &deep, false)
                .unwrap(),
            "\"profile\"#>ARRAY['a','b']"
        );
        assert_eq!(
            generator
                .json_path_extraction_query("\"profile\"", &deep, true)
                .unwrap(),
            "\"profile\"#>>ARRAY['a','b']"
        );
    }

    #[test]
    fn test_json_single_key_escapes_as_string() {
        let path = [JsonPathElement::from("name")];
        assert_eq!(
            generator()
                .json_path_extraction_query("\"data\"", &path, false)
                .unwrap(),
            "\"data\"->'name'"
        );
    }

    #[test]
    fn test_json_deep_path_coerces_indices_to_strings() {
        let path = [JsonPathElement::from("items"), JsonPathElement::from(0i64)];
        assert_eq!(
            generator()
                .json_path_extraction_query("\"data\"", &path, true)
                .unwrap(),
            "\"data\"#>>ARRAY['items','0']"
        );
    }

    #[test]
    fn test_format_unquote_json() {
        assert_eq!(
            generator().format_unquote_json("\"data\"").unwrap(),
            "\"data\"#>>ARRAY[]::TEXT[]"
        );
    }
}
