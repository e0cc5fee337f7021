use std::fmt;

/// Errors produced by the view pipeline.
///
/// Loading failures (`DataUnavailable`, `SchemaMismatch`) are fatal and
/// surface before any view is produced. Per-view failures are isolated by the
/// dashboard snapshot so one broken chart does not take down the rest.
#[derive(Debug)]
pub enum ViewError {
    /// A source file could not be read or parsed as CSV at all.
    DataUnavailable { path: String, detail: String },
    /// A required column is absent from an input table.
    SchemaMismatch {
        table: String,
        column: String,
        available: Vec<String>,
        suggestion: Option<String>,
    },
    /// An aggregation was requested on a set too small (or too degenerate)
    /// to produce a defined result.
    InsufficientData { view: String, pairs: usize },
    /// A generated query failed to execute — carries the full SQL for
    /// diagnosis since these indicate an internal invariant violation.
    Sql {
        context: String,
        sql: String,
        detail: String,
    },
}

impl ViewError {
    /// Wrap a `DuckDB` execution error with the query that produced it.
    pub(crate) fn sql(context: &str, sql: &str, err: &duckdb::Error) -> Self {
        Self::Sql {
            context: context.to_string(),
            sql: sql.to_string(),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUnavailable { path, detail } => {
                write!(f, "data source '{path}' is unavailable: {detail}")
            }
            Self::SchemaMismatch {
                table,
                column,
                available,
                suggestion,
            } => {
                write!(
                    f,
                    "table '{table}': required column '{column}' is missing. Available: [{}]",
                    available.join(", ")
                )?;
                if let Some(s) = suggestion {
                    write!(f, ". Did you mean '{s}'?")?;
                }
                Ok(())
            }
            Self::InsufficientData { view, pairs } => {
                write!(
                    f,
                    "view '{view}': insufficient data — {pairs} usable paired observation(s); \
                     at least 2 with nonzero variance are required"
                )
            }
            Self::Sql {
                context,
                sql,
                detail,
            } => {
                write!(
                    f,
                    "query for '{context}' failed: {detail}\nGenerated SQL:\n{sql}"
                )
            }
        }
    }
}

impl std::error::Error for ViewError {}
