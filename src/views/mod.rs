//! Aggregation stage: independent, deterministic views over the working set.
//!
//! Each view issues one SQL query against the typed tables, embedding the
//! filter predicate where the view respects the sidebar filters. Every query
//! carries an explicit ORDER BY with tie-breaks so results are stable across
//! runs.

use duckdb::Connection;

use crate::error::ViewError;

pub mod categories;
pub mod geography;
pub mod orders;
pub mod reviews;

/// Run a query and materialize every row through `map`.
pub(crate) fn collect_rows<T, F>(
    con: &Connection,
    context: &str,
    sql: &str,
    map: F,
) -> Result<Vec<T>, ViewError>
where
    F: FnMut(&duckdb::Row<'_>) -> duckdb::Result<T>,
{
    let mut stmt = con
        .prepare(sql)
        .map_err(|e| ViewError::sql(context, sql, &e))?;
    let rows = stmt
        .query_map([], map)
        .map_err(|e| ViewError::sql(context, sql, &e))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ViewError::sql(context, sql, &e))?);
    }
    Ok(out)
}

/// SQL counts arrive as `BIGINT`; they are never negative.
pub(crate) fn non_negative(n: i64) -> u64 {
    u64::try_from(n).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::non_negative;

    #[test]
    fn non_negative_clamps_to_zero() {
        assert_eq!(non_negative(7), 7);
        assert_eq!(non_negative(0), 0);
        assert_eq!(non_negative(-1), 0);
    }
}
