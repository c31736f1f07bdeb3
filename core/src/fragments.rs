//! Whitespace-normalizing SQL fragment joining.

use compact_str::CompactString;
use smallvec::SmallVec;

/// Joins an ordered sequence of SQL fragments into one statement.
///
/// Empty fragments represent omitted clauses and are dropped entirely rather
/// than leaving extra spaces behind. Fragments arrive pre-escaped; this
/// function has no escaping responsibility.
///
/// Joining the output again as a single fragment returns the same text.
///
/// # Examples
///
/// ```
/// use mortar_core::join_sql_fragments;
///
/// let sql = join_sql_fragments(["DROP INDEX", "", "IF EXISTS", "\"users_email\""]);
/// assert_eq!(sql, "DROP INDEX IF EXISTS \"users_email\"");
/// ```
pub fn join_sql_fragments<I>(fragments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let fragments: SmallVec<[I::Item; 8]> = fragments.into_iter().collect();

    let capacity = fragments
        .iter()
        .map(|fragment| fragment.as_ref().len() + 1)
        .sum();
    let mut buf = CompactString::with_capacity(capacity);

    for fragment in &fragments {
        let fragment = fragment.as_ref().trim();
        if fragment.is_empty() {
            continue;
        }
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(fragment);
    }

    buf.into()
}
