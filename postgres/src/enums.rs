//! Enum-type emulation DDL and catalog queries.
//!
//! PostgreSQL has no inline bounded-enum column type; closed value sets are
//! emulated with named types visible in `pg_type`/`pg_enum`. Creation must
//! tolerate a pre-existing type of the same name, so it is expressed as a
//! guarded `DO` block — the dialect has no `CREATE TYPE IF NOT EXISTS`.

use std::sync::LazyLock;

use compact_str::{CompactString, format_compact};
use mortar_core::{MortarError, QueryGenerator, Result, TableRef, join_sql_fragments, mortar_trace_sql};
use regex::Regex;

use crate::escape::{escape_string, quote_identifier};
use crate::generator::PostgresQueryGenerator;

/// Matches a serialized `ENUM(...)` signature at the start of a type string.
pub(crate) static ENUM_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ENUM\(.+\)").expect("valid enum signature pattern"));

/// Canonical name of an emulated enum type.
///
/// The same logical name has two representations that must never be mixed:
/// the quoted identifier used in DDL, and the raw name escaped as a string
/// literal when compared against catalog text columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTypeName {
    name: CompactString,
    schema: Option<CompactString>,
    delimiter: CompactString,
}

impl EnumTypeName {
    /// Derives the canonical name: `enum_<custom>` when a custom name is
    /// given, otherwise `enum_<table>_<column>`.
    pub fn derive(table: &TableRef, column: Option<&str>, custom_name: Option<&str>) -> Self {
        let name = match custom_name {
            Some(custom) => format_compact!("enum_{custom}"),
            None => format_compact!("enum_{}_{}", table.table_name, column.unwrap_or_default()),
        };

        Self {
            name,
            schema: table.schema.clone(),
            delimiter: table.delimiter.clone(),
        }
    }

    /// The raw name, for escaping as a literal.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The quoted identifier form, schema-qualified when requested and a
    /// schema is present.
    pub fn as_identifier(&self, qualify: bool) -> String {
        let ident = quote_identifier(&self.name);
        match &self.schema {
            Some(schema) if qualify => {
                format!("{}{}{}", quote_identifier(schema), self.delimiter, ident)
            }
            _ => ident,
        }
    }
}

/// Options shared by the enum-name and enum-DDL operations.
#[derive(Debug, Clone, Default)]
pub struct EnumOptions {
    /// Explicit schema override applied when resolving the table reference.
    pub schema: Option<String>,
    /// Whether to schema-qualify the emitted identifier. Defaults to
    /// qualifying whenever a schema is present.
    pub qualify: Option<bool>,
    /// Return the raw type name instead of a quoted identifier, for callers
    /// that escape it as a literal.
    pub no_escape: bool,
    /// Drop and recreate the type instead of tolerating an existing one.
    pub force: bool,
}

/// Positional insertion for [`PostgresQueryGenerator::add_enum_value`].
///
/// `before` takes precedence when both are set: first-checked wins, the
/// combination is not an error.
#[derive(Debug, Clone, Default)]
pub struct AddEnumValueOptions {
    pub before: Option<String>,
    pub after: Option<String>,
}

/// Structured description of an enum column type.
///
/// The value list is the primary contract. `raw` carries a serialized
/// `ENUM(...)` signature produced by passes that stringify types and exists
/// only as a compatibility fallback.
#[derive(Debug, Clone, Default)]
pub struct EnumTypeDescriptor {
    pub values: Vec<String>,
    pub custom_name: Option<String>,
    pub raw: Option<String>,
}

impl EnumTypeDescriptor {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            custom_name: None,
            raw: None,
        }
    }

    pub fn with_custom_name(mut self, custom_name: impl Into<String>) -> Self {
        self.custom_name = Some(custom_name.into());
        self
    }

    /// Compatibility constructor for callers that only hold a serialized
    /// type string such as `ENUM('a', 'b')`.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            values: Vec::new(),
            custom_name: None,
            raw: Some(raw.into()),
        }
    }
}

impl PostgresQueryGenerator {
    /// Name of the emulated enum type backing `table`.`column`.
    ///
    /// With `no_escape` the raw name is returned for later literal-escaping;
    /// otherwise the quoted, optionally schema-qualified identifier.
    pub fn enum_type_name(
        &self,
        table: &TableRef,
        column: Option<&str>,
        custom_name: Option<&str>,
        options: &EnumOptions,
    ) -> String {
        let details = self.table_details(table, options.schema.as_deref());
        let name = EnumTypeName::derive(&details, column, custom_name);

        if options.no_escape {
            return name.as_str().to_string();
        }

        name.as_identifier(options.qualify.unwrap_or(true))
    }

    /// Catalog query listing enum types and their labels in sort order.
    ///
    /// Filtered by schema — the explicit option, else the table's schema,
    /// else the connection default. When a column is given without either
    /// schema, the query filters on the exact type name instead; the name is
    /// compared against a catalog text column, so it is escaped as a
    /// literal, not quoted as an identifier.
    pub fn list_enums_query(
        &self,
        table: &TableRef,
        column: Option<&str>,
        custom_name: Option<&str>,
        options: &EnumOptions,
    ) -> String {
        let mut name_filter = String::new();
        let schema = options.schema.as_deref().or(table.schema.as_deref());

        if schema.is_none() {
            if let Some(column) = column {
                let name = EnumTypeName::derive(table, Some(column), custom_name);
                name_filter = format!(" AND t.typname={}", escape_string(name.as_str()));
            }
        }

        let schema = schema.unwrap_or_else(|| self.default_schema());

        format!(
            "SELECT t.typname enum_name, array_agg(e.enumlabel ORDER BY enumsortorder) enum_value FROM pg_type t \
             JOIN pg_enum e ON t.oid = e.enumtypid \
             JOIN pg_catalog.pg_namespace n ON n.oid = t.typnamespace \
             WHERE n.nspname = {}{} GROUP BY 1",
            escape_string(schema),
            name_filter
        )
    }

    /// Statement creating the emulated enum type.
    ///
    /// Creation is idempotent: an existing type of the same name is
    /// tolerated through the `duplicate_object` handler. With
    /// [`EnumOptions::force`] a `DROP TYPE IF EXISTS` is emitted strictly
    /// before the create.
    pub fn create_enum_type(
        &self,
        table: &TableRef,
        column: &str,
        data_type: &EnumTypeDescriptor,
        options: &EnumOptions,
    ) -> Result<String> {
        let enum_name =
            self.enum_type_name(table, Some(column), data_type.custom_name.as_deref(), options);

        let values = if !data_type.values.is_empty() {
            let escaped = data_type
                .values
                .iter()
                .map(|value| escape_string(value))
                .collect::<Vec<_>>()
                .join(", ");
            format!("ENUM({escaped})")
        } else if let Some(signature) = data_type
            .raw
            .as_deref()
            .and_then(|raw| ENUM_SIGNATURE.find(raw))
        {
            signature.as_str().to_string()
        } else {
            return Err(MortarError::InvalidTypeDescriptor(format!(
                "no value list for {}.{}",
                table.table_name, column
            )));
        };

        let body = format!(
            "BEGIN CREATE TYPE {enum_name} AS {values}; EXCEPTION WHEN duplicate_object THEN null; END"
        );
        let create = format!("DO {};", escape_string(&body));

        let sql = if options.force {
            let drop = self.drop_enum_type(table, Some(column), Some(enum_name));
            join_sql_fragments([drop, create])
        } else {
            create
        };

        mortar_trace_sql!("create_enum_type", sql);
        Ok(sql)
    }

    /// Statement appending a value to an existing enum type, optionally
    /// positioned before or after an existing label.
    pub fn add_enum_value(
        &self,
        table: &TableRef,
        column: &str,
        value: &str,
        options: &AddEnumValueOptions,
        custom_name: Option<&str>,
    ) -> String {
        let enum_name = self.enum_type_name(table, Some(column), custom_name, &EnumOptions::default());
        let mut sql = format!(
            "ALTER TYPE {enum_name} ADD VALUE IF NOT EXISTS {}",
            escape_string(value)
        );

        if let Some(before) = &options.before {
            sql.push_str(" BEFORE ");
            sql.push_str(&escape_string(before));
        } else if let Some(after) = &options.after {
            sql.push_str(" AFTER ");
            sql.push_str(&escape_string(after));
        }

        sql
    }

    /// Statement dropping the emulated enum type. Safe to run against a
    /// type that does not exist.
    ///
    /// `enum_name`, when given, is the already-rendered identifier; the name
    /// is otherwise derived from `table` and `column`.
    pub fn drop_enum_type(
        &self,
        table: &TableRef,
        column: Option<&str>,
        enum_name: Option<String>,
    ) -> String {
        let enum_name = enum_name
            .unwrap_or_else(|| self.enum_type_name(table, column, None, &EnumOptions::default()));

        format!("DROP TYPE IF EXISTS {enum_name};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> PostgresQueryGenerator {
        PostgresQueryGenerator::new()
    }

    #[test]
    fn test_enum_type_name_from_table_and_column() {
        let users = TableRef::parse("users");
        let sql = generator().enum_type_name(&users, Some("role"), None, &EnumOptions::default());
        assert_eq!(sql, "\"enum_users_role\"");
    }

    #[test]
    fn test_enum_type_name_custom_name_wins() {
        let users = TableRef::parse("users");
        let sql = generator().enum_type_name(
            &users,
            Some("role"),
            Some("user_role"),
            &EnumOptions::default(),
        );
        assert_eq!(sql, "\"enum_user_role\"");
    }

    #[test]
    fn test_enum_type_name_schema_qualified_by_default() {
        let users = TableRef::parse("archive.users");
        let generator = generator();
        let sql = generator.enum_type_name(&users, Some("role"), None, &EnumOptions::default());
        assert_eq!(sql, "\"archive\".\"enum_users_role\"");

        let unqualified = generator.enum_type_name(
            &users,
            Some("role"),
            None,
            &EnumOptions {
                qualify: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(unqualified, "\"enum_users_role\"");
    }

    #[test]
    fn test_enum_type_name_schema_override() {
        let users = TableRef::parse("users");
        let sql = generator().enum_type_name(
            &users,
            Some("role"),
            None,
            &EnumOptions {
                schema: Some("audit".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(sql, "\"audit\".\"enum_users_role\"");
    }

    #[test]
    fn test_enum_type_name_no_escape_returns_raw() {
        let users = TableRef::parse("users");
        let sql = generator().enum_type_name(
            &users,
            Some("role"),
            None,
            &EnumOptions {
                no_escape: true,
                ..Default::default()
            },
        );
        assert_eq!(sql, "enum_users_role");
    }

    #[test]
    fn test_enum_type_name_distinct_across_tables() {
        let generator = generator();
        let users = TableRef::parse("users");
        let posts = TableRef::parse("posts");
        assert_ne!(
            generator.enum_type_name(&users, Some("state"), None, &EnumOptions::default()),
            generator.enum_type_name(&posts, Some("state"), None, &EnumOptions::default()),
        );
    }

    #[test]
    fn test_list_enums_filters_by_default_schema() {
        let users = TableRef::parse("users");
        let sql = generator().list_enums_query(&users, None, None, &EnumOptions::default());
        assert!(sql.contains("WHERE n.nspname = 'public'"));
        assert!(!sql.contains("AND t.typname"));
        assert!(sql.ends_with("GROUP BY 1"));
    }

    #[test]
    fn test_list_enums_filters_by_type_name_when_schemaless() {
        let users = TableRef::parse("users");
        let sql = generator().list_enums_query(&users, Some("role"), None, &EnumOptions::default());
        assert!(sql.contains("AND t.typname='enum_users_role'"));
    }

    #[test]
    fn test_list_enums_table_schema_suppresses_name_filter() {
        let users = TableRef::parse("archive.users");
        let sql = generator().list_enums_query(&users, Some("role"), None, &EnumOptions::default());
        assert!(sql.contains("WHERE n.nspname = 'archive'"));
        assert!(!sql.contains("typname='enum_users_role'"));
    }

    #[test]
    fn test_create_enum_type_emits_guarded_block() {
        let users = TableRef::parse("users");
        let data_type = EnumTypeDescriptor::new(["admin", "member"]);
        let sql = generator()
            .create_enum_type(&users, "role", &data_type, &EnumOptions::default())
            .unwrap();
        assert_eq!(
            sql,
            "DO 'BEGIN CREATE TYPE \"enum_users_role\" AS ENUM(''admin'', ''member''); \
             EXCEPTION WHEN duplicate_object THEN null; END';"
        );
    }

    #[test]
    fn test_create_enum_type_force_drops_first() {
        let users = TableRef::parse("users");
        let data_type = EnumTypeDescriptor::new(["admin"]);
        let sql = generator()
            .create_enum_type(
                &users,
                "role",
                &data_type,
                &EnumOptions {
                    force: true,
                    ..Default::default()
                },
            )
            .unwrap();
        let drop_at = sql.find("DROP TYPE IF EXISTS").unwrap();
        let create_at = sql.find("CREATE TYPE").unwrap();
        assert!(drop_at < create_at);
        assert!(sql.starts_with("DROP TYPE IF EXISTS \"enum_users_role\";"));
    }

    #[test]
    fn test_create_enum_type_falls_back_to_raw_signature() {
        let users = TableRef::parse("users");
        let data_type = EnumTypeDescriptor::from_raw("ENUM('a', 'b') NOT NULL");
        let sql = generator()
            .create_enum_type(&users, "role", &data_type, &EnumOptions::default())
            .unwrap();
        assert!(sql.contains("AS ENUM(''a'', ''b'')"));
        assert!(!sql.contains("NOT NULL"));
    }

    #[test]
    fn test_create_enum_type_rejects_missing_values() {
        let users = TableRef::parse("users");
        let err = generator()
            .create_enum_type(
                &users,
                "role",
                &EnumTypeDescriptor::from_raw("TEXT"),
                &EnumOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, MortarError::InvalidTypeDescriptor(_)));
    }

    #[test]
    fn test_add_enum_value() {
        let users = TableRef::parse("users");
        let sql = generator().add_enum_value(
            &users,
            "role",
            "owner",
            &AddEnumValueOptions::default(),
            None,
        );
        assert_eq!(
            sql,
            "ALTER TYPE \"enum_users_role\" ADD VALUE IF NOT EXISTS 'owner'"
        );
    }

    #[test]
    fn test_add_enum_value_before_wins_over_after() {
        let users = TableRef::parse("users");
        let options = AddEnumValueOptions {
            before: Some("admin".to_string()),
            after: Some("member".to_string()),
        };
        let sql = generator().add_enum_value(&users, "role", "owner", &options, None);
        assert!(sql.ends_with("BEFORE 'admin'"));
        assert!(!sql.contains("AFTER"));
    }

    #[test]
    fn test_add_enum_value_after() {
        let users = TableRef::parse("users");
        let options = AddEnumValueOptions {
            before: None,
            after: Some("member".to_string()),
        };
        let sql = generator().add_enum_value(&users, "role", "owner", &options, None);
        assert!(sql.ends_with("AFTER 'member'"));
    }

    #[test]
    fn test_drop_enum_type_derives_name() {
        let users = TableRef::parse("users");
        let sql = generator().drop_enum_type(&users, Some("role"), None);
        assert_eq!(sql, "DROP TYPE IF EXISTS \"enum_users_role\";");
    }
}
