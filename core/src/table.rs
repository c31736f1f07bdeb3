//! Table references and name resolution.

use compact_str::CompactString;

/// A resolved reference to one relation.
///
/// References are produced through [`TableRef::parse`] or the builder
/// methods and are immutable once resolved; the generator modules never
/// pick raw table strings apart themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub table_name: CompactString,
    pub schema: Option<CompactString>,
    /// Separator between the schema and table identifiers, `.` by default.
    pub delimiter: CompactString,
}

impl TableRef {
    pub fn new(table_name: impl Into<CompactString>) -> Self {
        Self {
            table_name: table_name.into(),
            schema: None,
            delimiter: CompactString::const_new("."),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<CompactString>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<CompactString>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Splits a possibly schema-qualified name on the first `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mortar_core::TableRef;
    ///
    /// let table = TableRef::parse("archive.users");
    /// assert_eq!(table.table_name, "users");
    /// assert_eq!(table.schema.as_deref(), Some("archive"));
    /// ```
    pub fn parse(input: &str) -> Self {
        match input.split_once('.') {
            Some((schema, table_name)) => Self::new(table_name).with_schema(schema),
            None => Self::new(input),
        }
    }
}

impl From<&str> for TableRef {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}
