//! Review views: the score histogram and the shipping-time correlation.

use crate::dataset::Dataset;
use crate::error::ViewError;
use crate::filter::FilterSpec;
use crate::model::ScoreBucket;
use crate::views::{collect_rows, non_negative};

/// Orders per review score over the working set, highest score first.
///
/// Line items replicate the order's score, so rows are first reduced to one
/// score per `order_id` (MIN of its non-NULL scores, a deterministic
/// representative). Orders without any score are excluded; scores with zero
/// orders are omitted rather than zero-filled.
pub fn review_score_histogram(
    dataset: &Dataset,
    filter: &FilterSpec,
) -> Result<Vec<ScoreBucket>, ViewError> {
    let sql = format!(
        "WITH \"_working\" AS (SELECT * FROM orders WHERE {predicate}),
              \"_order_scores\" AS (
                  SELECT order_id, min(review_score) AS score
                  FROM \"_working\"
                  WHERE review_score IS NOT NULL
                  GROUP BY order_id
              )
         SELECT score, count(*) AS orders
         FROM \"_order_scores\"
         GROUP BY score
         ORDER BY score DESC",
        predicate = filter.predicate(),
    );
    collect_rows(dataset.connection(), "review score histogram", &sql, |row| {
        let score: i64 = row.get(0)?;
        Ok(ScoreBucket {
            score: u8::try_from(score).unwrap_or_default(),
            orders: non_negative(row.get(1)?),
        })
    })
}

/// Pearson correlation between shipping time and review score over the
/// working set, rounded to 5 decimal digits.
///
/// Only delivered orders with a score participate. Each order contributes
/// one pair: shipping time in whole elapsed days (floor of the delivery
/// delta, matching dataframe day arithmetic) and its score, both MIN
/// representatives across line items. Fewer than 2 pairs, or a series with
/// no variance, has no defined coefficient and fails with
/// [`ViewError::InsufficientData`].
pub fn shipping_review_correlation(
    dataset: &Dataset,
    filter: &FilterSpec,
) -> Result<f64, ViewError> {
    let sql = format!(
        "WITH \"_working\" AS (SELECT * FROM orders WHERE {predicate}),
              \"_pairs\" AS (
                  SELECT min(CAST(floor((epoch_ms(order_delivered_customer_date)
                                         - epoch_ms(order_purchase_timestamp))
                                        / 86400000.0) AS BIGINT)) AS shipping_time,
                         min(review_score) AS review_score
                  FROM \"_working\"
                  WHERE order_delivered_customer_date IS NOT NULL
                    AND review_score IS NOT NULL
                  GROUP BY order_id
              )
         SELECT count(*) AS pairs,
                round(corr(shipping_time, review_score), 5) AS coefficient
         FROM \"_pairs\"",
        predicate = filter.predicate(),
    );
    let (pairs, coefficient): (i64, Option<f64>) = dataset
        .connection()
        .query_row(&sql, [], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(|e| ViewError::sql("shipping/review correlation", &sql, &e))?;

    match coefficient {
        Some(r) if pairs >= 2 && r.is_finite() => Ok(r),
        _ => Err(ViewError::InsufficientData {
            view: "shipping_review_correlation".to_string(),
            pairs: usize::try_from(pairs).unwrap_or_default(),
        }),
    }
}
