//! Geographic distribution views over the dimension tables.
//!
//! These read `customers` and `sellers` directly and take no filter: the
//! sidebar filters apply to the order-fact table only, and the state maps
//! always show the whole population. That asymmetry is inherited dashboard
//! behavior and is pinned by tests rather than "fixed".

use crate::dataset::Dataset;
use crate::error::ViewError;
use crate::model::StateCount;
use crate::views::{collect_rows, non_negative};

/// Distinct customers per state, busiest state first.
pub fn customer_distribution(dataset: &Dataset) -> Result<Vec<StateCount>, ViewError> {
    let sql = "SELECT customer_state AS state,
                      count(DISTINCT customer_unique_id) AS entities
               FROM customers
               WHERE customer_state IS NOT NULL
               GROUP BY customer_state
               ORDER BY entities DESC, state";
    collect_rows(dataset.connection(), "customer distribution", sql, |row| {
        Ok(StateCount {
            state: row.get(0)?,
            entities: non_negative(row.get(1)?),
        })
    })
}

/// Seller rows per state, busiest state first.
///
/// Unlike customers, sellers are counted per row: the dimension table carries
/// one row per seller already, and duplicate ids (re-registered sellers)
/// intentionally count separately.
pub fn seller_distribution(dataset: &Dataset) -> Result<Vec<StateCount>, ViewError> {
    let sql = "SELECT seller_state AS state,
                      count(seller_id) AS entities
               FROM sellers
               WHERE seller_state IS NOT NULL
               GROUP BY seller_state
               ORDER BY entities DESC, state";
    collect_rows(dataset.connection(), "seller distribution", sql, |row| {
        Ok(StateCount {
            state: row.get(0)?,
            entities: non_negative(row.get(1)?),
        })
    })
}

/// Distinct customers across the whole dimension table, stateless customers
/// included.
pub fn customer_total(dataset: &Dataset) -> Result<u64, ViewError> {
    let sql = "SELECT count(DISTINCT customer_unique_id) FROM customers";
    dataset
        .connection()
        .query_row(sql, [], |row| row.get(0))
        .map(non_negative)
        .map_err(|e| ViewError::sql("customer total", sql, &e))
}

/// Seller rows with both an id and a state: exactly the sum of the
/// distribution the metric sits next to.
pub fn seller_total(dataset: &Dataset) -> Result<u64, ViewError> {
    let sql = "SELECT count(seller_id) FROM sellers WHERE seller_state IS NOT NULL";
    dataset
        .connection()
        .query_row(sql, [], |row| row.get(0))
        .map(non_negative)
        .map_err(|e| ViewError::sql("seller total", sql, &e))
}
