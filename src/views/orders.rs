//! Order-volume views: monthly counts and the headline totals.

use crate::dataset::Dataset;
use crate::error::ViewError;
use crate::filter::FilterSpec;
use crate::model::{MonthlyOrderCount, OrderTotals};
use crate::views::{collect_rows, non_negative};

/// Distinct orders per calendar month over the working set, oldest month
/// first.
///
/// One order spans one row per line item, so the count is over distinct
/// `order_id`, never raw rows. Months with no matching orders do not appear.
pub fn monthly_orders(
    dataset: &Dataset,
    filter: &FilterSpec,
) -> Result<Vec<MonthlyOrderCount>, ViewError> {
    let sql = format!(
        "WITH \"_working\" AS (SELECT * FROM orders WHERE {predicate})
         SELECT strftime(order_purchase_timestamp, '%Y-%m') AS month,
                count(DISTINCT order_id) AS orders
         FROM \"_working\"
         GROUP BY month
         ORDER BY month",
        predicate = filter.predicate(),
    );
    collect_rows(dataset.connection(), "monthly orders", &sql, |row| {
        Ok(MonthlyOrderCount {
            month: row.get(0)?,
            orders: non_negative(row.get(1)?),
        })
    })
}

/// Distinct-order count and summed line-item revenue (rounded to cents) over
/// the working set. An empty working set yields zero totals, not an error.
pub fn order_totals(dataset: &Dataset, filter: &FilterSpec) -> Result<OrderTotals, ViewError> {
    let sql = format!(
        "WITH \"_working\" AS (SELECT * FROM orders WHERE {predicate})
         SELECT count(DISTINCT order_id) AS orders,
                coalesce(round(sum(price), 2), 0.0) AS revenue
         FROM \"_working\"",
        predicate = filter.predicate(),
    );
    dataset
        .connection()
        .query_row(&sql, [], |row| {
            Ok(OrderTotals {
                orders: non_negative(row.get(0)?),
                revenue: row.get(1)?,
            })
        })
        .map_err(|e| ViewError::sql("order totals", &sql, &e))
}
