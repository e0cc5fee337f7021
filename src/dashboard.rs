//! The dashboard boundary: one call computes every view for the current
//! filter and packs the results into a serializable snapshot.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::ViewError;
use crate::filter::FilterSpec;
use crate::model::{
    CategoryRanking, MonthlyOrderCount, OrderRecord, OrderTotals, ScoreBucket, StateCount,
    StateTopCategory,
};
use crate::views::{categories, geography, orders, reviews};

/// How many categories each end of the top/bottom ranking shows.
pub const DEFAULT_CATEGORY_DEPTH: usize = 5;

/// How many rows the dataset glimpse shows.
pub const PREVIEW_LIMIT: usize = 5;

/// One view that failed to compute, by name, with its rendered error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewFailure {
    pub view: String,
    pub message: String,
}

/// Everything the dashboard renders for one filter state.
///
/// Each view slot is `None` when that view failed; the failure is recorded
/// in `failures` instead of aborting the rest. The snapshot serializes to
/// JSON for the presentation layer as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// The filter the views were computed under, echoed for the renderer.
    pub filter: FilterSpec,
    pub preview: Option<Vec<OrderRecord>>,
    pub totals: Option<OrderTotals>,
    pub monthly_orders: Option<Vec<MonthlyOrderCount>>,
    pub categories: Option<CategoryRanking>,
    pub state_top_categories: Option<Vec<StateTopCategory>>,
    pub review_histogram: Option<Vec<ScoreBucket>>,
    pub shipping_review_correlation: Option<f64>,
    pub customer_distribution: Option<Vec<StateCount>>,
    pub seller_distribution: Option<Vec<StateCount>>,
    pub customer_total: Option<u64>,
    pub seller_total: Option<u64>,
    pub failures: Vec<ViewFailure>,
}

impl Snapshot {
    /// Compute every view against the dataset under `filter`.
    ///
    /// Never fails as a whole: a failing view leaves its slot empty and adds
    /// an entry to `failures`, so one broken widget cannot blank the page.
    /// The geography views and their totals ignore the filter by design.
    #[must_use]
    pub fn compute(dataset: &Dataset, filter: &FilterSpec) -> Self {
        let mut snapshot = Self {
            filter: filter.clone(),
            preview: None,
            totals: None,
            monthly_orders: None,
            categories: None,
            state_top_categories: None,
            review_histogram: None,
            shipping_review_correlation: None,
            customer_distribution: None,
            seller_distribution: None,
            customer_total: None,
            seller_total: None,
            failures: Vec::new(),
        };

        record(
            &mut snapshot.preview,
            &mut snapshot.failures,
            "preview",
            dataset.preview(filter, PREVIEW_LIMIT),
        );
        record(
            &mut snapshot.totals,
            &mut snapshot.failures,
            "order_totals",
            orders::order_totals(dataset, filter),
        );
        record(
            &mut snapshot.monthly_orders,
            &mut snapshot.failures,
            "monthly_orders",
            orders::monthly_orders(dataset, filter),
        );
        record(
            &mut snapshot.categories,
            &mut snapshot.failures,
            "category_sales",
            categories::category_sales(dataset, filter, DEFAULT_CATEGORY_DEPTH),
        );
        record(
            &mut snapshot.state_top_categories,
            &mut snapshot.failures,
            "top_category_by_state",
            categories::top_category_by_state(dataset, filter),
        );
        record(
            &mut snapshot.review_histogram,
            &mut snapshot.failures,
            "review_score_histogram",
            reviews::review_score_histogram(dataset, filter),
        );
        record(
            &mut snapshot.shipping_review_correlation,
            &mut snapshot.failures,
            "shipping_review_correlation",
            reviews::shipping_review_correlation(dataset, filter),
        );
        record(
            &mut snapshot.customer_distribution,
            &mut snapshot.failures,
            "customer_distribution",
            geography::customer_distribution(dataset),
        );
        record(
            &mut snapshot.seller_distribution,
            &mut snapshot.failures,
            "seller_distribution",
            geography::seller_distribution(dataset),
        );
        record(
            &mut snapshot.customer_total,
            &mut snapshot.failures,
            "customer_total",
            geography::customer_total(dataset),
        );
        record(
            &mut snapshot.seller_total,
            &mut snapshot.failures,
            "seller_total",
            geography::seller_total(dataset),
        );

        snapshot
    }
}

fn record<T>(
    slot: &mut Option<T>,
    failures: &mut Vec<ViewFailure>,
    view: &str,
    result: Result<T, ViewError>,
) {
    match result {
        Ok(value) => *slot = Some(value),
        Err(err) => failures.push(ViewFailure {
            view: view.to_string(),
            message: err.to_string(),
        }),
    }
}
