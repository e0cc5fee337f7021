use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A closed date interval `[start, end]`, both bounds inclusive.
///
/// Applied to `order_purchase_timestamp` with the time-of-day discarded, so a
/// purchase at `23:59` on `end` still falls inside the range. An inverted
/// range (`start > end`) matches nothing — an empty result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for DateRange {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Offsets from an anchor date keep generated values inside chrono's
        // supported range; inverted ranges are intentionally reachable.
        let anchor = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap_or_default();
        let start = u.int_in_range(0u32..=2000)?;
        let end = u.int_in_range(0u32..=2000)?;
        Ok(Self {
            start: anchor
                .checked_add_days(chrono::Days::new(u64::from(start)))
                .unwrap_or(anchor),
            end: anchor
                .checked_add_days(chrono::Days::new(u64::from(end)))
                .unwrap_or(anchor),
        })
    }
}

/// A set of two-letter state codes selected in the sidebar.
///
/// A row passes the geographic filter when its `customer_state` **or** its
/// `seller_state` is in the set — a cross-state order where either party is
/// selected must be retained. An empty selection matches nothing; there is no
/// implicit select-all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct StateSelection {
    pub codes: BTreeSet<String>,
}

impl StateSelection {
    /// Build a selection from any iterable of state codes, deduplicating.
    #[must_use]
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}

/// One row of the order-fact table: a single product line item, joined with
/// customer, seller, product and review attributes.
///
/// `order_id` is **not** unique per row — an order may span multiple line
/// items, which is why every order-count metric counts distinct `order_id`
/// values rather than rows. Every attribute except `order_id` is optional:
/// malformed values are coerced to missing on load rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub product_id: Option<String>,
    pub customer_state: Option<String>,
    pub seller_state: Option<String>,
    pub product_category_name: Option<String>,
    pub price: Option<f64>,
    /// Review score on the 1–5 scale; values outside it are treated as missing.
    pub review_score: Option<u8>,
    pub order_purchase_timestamp: Option<NaiveDateTime>,
    /// Absent for orders that were never delivered.
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    /// Derived: whole days from purchase to delivery, when both are present.
    pub shipping_time: Option<i64>,
}

/// One row of the customer dimension table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub customer_unique_id: String,
    pub customer_state: Option<String>,
}

/// One row of the seller dimension table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRow {
    pub seller_id: String,
    pub seller_state: Option<String>,
}

/// Distinct orders purchased in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyOrderCount {
    /// Calendar month key, `"YYYY-MM"`.
    pub month: String,
    pub orders: u64,
}

/// Product units sold in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySales {
    pub category: String,
    pub units: u64,
}

/// Best and worst performing categories by unit count.
///
/// When fewer than `2k` distinct categories exist, `top` and `bottom` may
/// overlap — accepted behavior inherited from the source dashboard, not a bug
/// silently fixed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRanking {
    /// First `k` categories, largest unit count first.
    pub top: Vec<CategorySales>,
    /// Last `k` categories, smallest unit count first.
    pub bottom: Vec<CategorySales>,
}

/// The best-selling category for one customer state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateTopCategory {
    pub state: String,
    pub category: String,
    pub units: u64,
}

/// Distinct orders that awarded one review score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub score: u8,
    pub orders: u64,
}

/// Entities (customers or sellers) registered in one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state: String,
    pub entities: u64,
}

/// Headline metrics over the filtered working set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTotals {
    /// Distinct `order_id` count.
    pub orders: u64,
    /// Sum of line-item prices, rounded to 2 decimal digits.
    pub revenue: f64,
}
