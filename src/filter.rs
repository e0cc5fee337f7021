use serde::{Deserialize, Serialize};

use crate::model::{DateRange, StateSelection};

/// The sidebar filter state: a purchase-date range plus a geographic state
/// selection, re-evaluated on every user interaction.
///
/// A `FilterSpec` compiles to a pure SQL predicate over the typed `orders`
/// view. The working set it describes is never materialized — every
/// downstream aggregation embeds the predicate in its own query, so the
/// source table is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct FilterSpec {
    pub range: DateRange,
    pub states: StateSelection,
}

impl FilterSpec {
    #[must_use]
    pub fn new(range: DateRange, states: StateSelection) -> Self {
        Self { range, states }
    }

    /// Compile the filter to a SQL predicate over the `orders` view.
    ///
    /// A row is retained iff its purchase date (time-of-day discarded) falls
    /// inside the closed date range AND either party's state is selected.
    /// Deterministic: state codes render in sorted order, and nothing here
    /// depends on the current date or any other ambient state.
    #[must_use]
    pub fn predicate(&self) -> String {
        let mut sql = String::with_capacity(160);

        // 1. Date clause. Comparing as DATE makes both bounds inclusive
        //    regardless of time-of-day; NULL timestamps never pass BETWEEN.
        sql.push_str("(CAST(order_purchase_timestamp AS DATE) BETWEEN DATE '");
        sql.push_str(&self.range.start.format("%Y-%m-%d").to_string());
        sql.push_str("' AND DATE '");
        sql.push_str(&self.range.end.format("%Y-%m-%d").to_string());
        sql.push_str("')");

        // 2. State clause: OR across the two parties, so a cross-state order
        //    is retained when either side is selected. An empty selection
        //    matches nothing — no implicit select-all.
        sql.push_str(" AND (");
        if self.states.is_empty() {
            sql.push_str("FALSE");
        } else {
            let list = self
                .states
                .codes
                .iter()
                .map(|code| quote_literal(code))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str("customer_state IN (");
            sql.push_str(&list);
            sql.push_str(") OR seller_state IN (");
            sql.push_str(&list);
            sql.push(')');
        }
        sql.push(')');

        sql
    }
}

/// Single-quote a SQL string literal, escaping embedded single quotes.
///
/// `DuckDB` uses `'` for string literals. Internal `'` must be escaped
/// as `''` per the SQL standard. State selections are user input, so they
/// only ever reach generated SQL through this function.
///
/// # Examples
///
/// ```
/// # use order_views::filter::quote_literal;
/// assert_eq!(quote_literal("SP"), "'SP'");
/// assert_eq!(quote_literal("it's"), "'it''s'");
/// ```
#[must_use]
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
