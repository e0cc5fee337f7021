//! Product-category views: the top/bottom ranking and the per-state winner.

use crate::dataset::Dataset;
use crate::error::ViewError;
use crate::filter::FilterSpec;
use crate::model::{CategoryRanking, CategorySales, StateTopCategory};
use crate::views::{collect_rows, non_negative};

/// Category ranking over the working set: units sold per category, with the
/// best and worst `depth` categories picked off either end.
///
/// Units are non-NULL `product_id` rows; rows without a category are dropped,
/// the way a dataframe group-by drops missing keys. Ranking order is
/// `(units DESC, category ASC)`; `bottom` is re-sorted `(units ASC,
/// category ASC)` so the smallest count comes first. With fewer than
/// `2 * depth` categories the two ends overlap, which callers accept.
pub fn category_sales(
    dataset: &Dataset,
    filter: &FilterSpec,
    depth: usize,
) -> Result<CategoryRanking, ViewError> {
    let sql = format!(
        "WITH \"_working\" AS (SELECT * FROM orders WHERE {predicate})
         SELECT product_category_name AS category,
                count(product_id) AS units
         FROM \"_working\"
         WHERE product_category_name IS NOT NULL
         GROUP BY product_category_name
         ORDER BY units DESC, category",
        predicate = filter.predicate(),
    );
    let ranked = collect_rows(dataset.connection(), "category sales", &sql, |row| {
        Ok(CategorySales {
            category: row.get(0)?,
            units: non_negative(row.get(1)?),
        })
    })?;

    let top = ranked.iter().take(depth).cloned().collect();
    let mut bottom = ranked;
    bottom.sort_by(|a, b| a.units.cmp(&b.units).then_with(|| a.category.cmp(&b.category)));
    bottom.truncate(depth);
    Ok(CategoryRanking { top, bottom })
}

/// The best-selling category per customer state over the working set,
/// states in ascending order.
///
/// Ties on units resolve to the lexicographically first category. Rows with
/// a missing state or category are dropped.
pub fn top_category_by_state(
    dataset: &Dataset,
    filter: &FilterSpec,
) -> Result<Vec<StateTopCategory>, ViewError> {
    let sql = format!(
        "WITH \"_working\" AS (SELECT * FROM orders WHERE {predicate}),
              \"_ranked\" AS (
                  SELECT customer_state AS state,
                         product_category_name AS category,
                         count(product_id) AS units,
                         row_number() OVER (
                             PARTITION BY customer_state
                             ORDER BY count(product_id) DESC,
                                      product_category_name
                         ) AS pos
                  FROM \"_working\"
                  WHERE customer_state IS NOT NULL
                    AND product_category_name IS NOT NULL
                  GROUP BY customer_state, product_category_name
              )
         SELECT state, category, units
         FROM \"_ranked\"
         WHERE pos = 1
         ORDER BY state",
        predicate = filter.predicate(),
    );
    collect_rows(dataset.connection(), "top category by state", &sql, |row| {
        Ok(StateTopCategory {
            state: row.get(0)?,
            category: row.get(1)?,
            units: non_negative(row.get(2)?),
        })
    })
}
