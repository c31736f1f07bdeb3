//! Index introspection and removal.

use mortar_core::{
    IndexRef, MortarError, RemoveIndexOptions, Result, TableRef, generate_index_name,
    join_sql_fragments, mortar_trace_sql,
};

use crate::escape::{escape_string, quote_identifier};
use crate::generator::PostgresQueryGenerator;

/// Catalog query reporting, per index: name, primary/unique flags, raw key
/// positions, resolved column numbers and names in key order, and the
/// canonical definition text.
pub(crate) fn list_indexes_query(generator: &PostgresQueryGenerator, table: &TableRef) -> String {
    let table_filter = format!(
        "t.relkind = 'r' and t.relname = {}",
        escape_string(&table.table_name)
    );
    let schema_filter = format!(
        "AND s.oid = t.relnamespace AND s.nspname = {}",
        escape_string(generator.schema_of(table))
    );

    join_sql_fragments([
        "SELECT i.relname AS name, ix.indisprimary AS primary, ix.indisunique AS unique, ix.indkey AS indkey,",
        "array_agg(a.attnum) as column_indexes, array_agg(a.attname) AS column_names, pg_get_indexdef(ix.indexrelid)",
        "AS definition FROM pg_class t, pg_class i, pg_index ix, pg_attribute a, pg_namespace s",
        "WHERE t.oid = ix.indrelid AND i.oid = ix.indexrelid AND a.attrelid = t.oid AND",
        table_filter.as_str(),
        schema_filter.as_str(),
        "GROUP BY i.relname, ix.indexrelid, ix.indisprimary, ix.indisunique, ix.indkey ORDER BY i.relname;",
    ])
}

/// `DROP INDEX [CONCURRENTLY] [IF EXISTS] <schema>.<name> [CASCADE]`.
///
/// Column lists derive the name with the same algorithm used at creation
/// time, so the drop targets the index that was actually created.
pub(crate) fn remove_index_query(
    generator: &PostgresQueryGenerator,
    table: &TableRef,
    index: IndexRef<'_>,
    options: &RemoveIndexOptions,
) -> Result<String> {
    // DROP INDEX CONCURRENTLY ... CASCADE is rejected by the server
    if options.cascade && options.concurrently {
        return Err(MortarError::ConfigurationConflict(
            "cannot remove an index both concurrently and with cascade".to_string(),
        ));
    }

    let index_name = match index {
        IndexRef::Name(name) => name.to_string(),
        IndexRef::Columns(columns) => generate_index_name(table, columns, false),
    };

    let target = format!(
        "{}.{}",
        quote_identifier(generator.schema_of(table)),
        quote_identifier(&index_name)
    );

    let sql = join_sql_fragments([
        "DROP INDEX",
        if options.concurrently { "CONCURRENTLY" } else { "" },
        if options.if_exists { "IF EXISTS" } else { "" },
        target.as_str(),
        if options.cascade { "CASCADE" } else { "" },
    ]);

    mortar_trace_sql!("remove_index_query", sql);
    Ok(sql)
}
