use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use duckdb::Connection;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::filter::{quote_literal, FilterSpec};
use crate::model::{CustomerRow, OrderRecord, SellerRow};

/// Columns the order-fact table must provide. Names must match exactly;
/// extra columns are ignored.
pub const ORDER_COLUMNS: [&str; 9] = [
    "order_id",
    "product_id",
    "customer_state",
    "seller_state",
    "product_category_name",
    "price",
    "review_score",
    "order_purchase_timestamp",
    "order_delivered_customer_date",
];

/// Columns the customer dimension table must provide.
pub const CUSTOMER_COLUMNS: [&str; 2] = ["customer_unique_id", "customer_state"];

/// Columns the seller dimension table must provide.
pub const SELLER_COLUMNS: [&str; 2] = ["seller_id", "seller_state"];

/// Timestamp layout used when moving values across the SQL boundary.
/// The source dataset carries second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where the three input CSV files live.
///
/// Deserialized from a JSON manifest:
/// `{"orders_csv": "...", "customers_csv": "...", "sellers_csv": "..."}`.
/// Unknown keys are rejected so a typo'd manifest fails loudly instead of
/// silently falling back to a default path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSource {
    pub orders_csv: PathBuf,
    pub customers_csv: PathBuf,
    pub sellers_csv: PathBuf,
}

impl DatasetSource {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid dataset manifest: {e}"))
    }

    /// Read and parse a manifest file.
    pub fn from_json_file(path: &Path) -> Result<Self, ViewError> {
        let text = std::fs::read_to_string(path).map_err(|e| ViewError::DataUnavailable {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|detail| ViewError::DataUnavailable {
            path: path.display().to_string(),
            detail,
        })
    }
}

/// Suggest the closest matching column from `available` using Levenshtein
/// distance.
///
/// Returns `Some(column)` (with original casing) if the best match has an
/// edit distance of 3 or fewer characters — close enough to be a typo or a
/// renamed header. Both sides are lowercased for comparison.
fn suggest_closest(name: &str, available: &[String]) -> Option<String> {
    let query = name.to_ascii_lowercase();
    let mut best: Option<(usize, &str)> = None;
    for candidate in available {
        let dist = strsim::levenshtein(&query, &candidate.to_ascii_lowercase());
        if dist <= 3 {
            if let Some((best_dist, _)) = best {
                if dist < best_dist {
                    best = Some((dist, candidate));
                }
            } else {
                best = Some((dist, candidate));
            }
        }
    }
    best.map(|(_, s)| s.to_string())
}

/// The loaded dataset: an in-memory `DuckDB` database holding the raw ingest
/// tables (`orders_raw`, `customers_raw`, `sellers_raw`) and the typed views
/// (`orders`, `customers`, `sellers`) every pipeline stage queries.
///
/// The raw tables are written exactly once at load time; all derived results
/// are produced by reading them, never by mutating them.
pub struct Dataset {
    con: Connection,
}

impl Dataset {
    /// Load the order-fact table and both dimension tables from CSV files.
    ///
    /// CSV values are ingested as VARCHAR and exposed through typed views
    /// that coerce malformed values to NULL (`TRY_CAST`) — permissive-parse
    /// semantics, matching the source dashboard. A missing file or
    /// unparseable CSV fails with [`ViewError::DataUnavailable`]; a missing
    /// required column fails with [`ViewError::SchemaMismatch`] carrying the
    /// available columns and a closest-match suggestion.
    pub fn load(source: &DatasetSource) -> Result<Self, ViewError> {
        let con = open_in_memory()?;

        ingest_csv(&con, "orders_raw", &source.orders_csv)?;
        ensure_columns(&con, "orders_raw", &ORDER_COLUMNS)?;

        ingest_csv(&con, "customers_raw", &source.customers_csv)?;
        ensure_columns(&con, "customers_raw", &CUSTOMER_COLUMNS)?;

        ingest_csv(&con, "sellers_raw", &source.sellers_csv)?;
        ensure_columns(&con, "sellers_raw", &SELLER_COLUMNS)?;

        create_typed_views(&con)?;
        Ok(Self { con })
    }

    /// Build a dataset from fixed in-memory rows instead of files.
    ///
    /// This is the injectable data source for tests and embedders that
    /// already hold the tables: same raw tables, same typed views, no I/O.
    /// `OrderRecord::shipping_time` is derived, not stored, and is ignored
    /// on insert.
    pub fn from_rows(
        orders: &[OrderRecord],
        customers: &[CustomerRow],
        sellers: &[SellerRow],
    ) -> Result<Self, ViewError> {
        let con = open_in_memory()?;

        con.execute_batch(
            "CREATE TABLE orders_raw (
                 order_id VARCHAR,
                 product_id VARCHAR,
                 customer_state VARCHAR,
                 seller_state VARCHAR,
                 product_category_name VARCHAR,
                 price VARCHAR,
                 review_score VARCHAR,
                 order_purchase_timestamp VARCHAR,
                 order_delivered_customer_date VARCHAR
             );
             CREATE TABLE customers_raw (
                 customer_unique_id VARCHAR,
                 customer_state VARCHAR
             );
             CREATE TABLE sellers_raw (
                 seller_id VARCHAR,
                 seller_state VARCHAR
             );",
        )
        .map_err(|e| ViewError::sql("create raw tables", "CREATE TABLE ...", &e))?;

        insert_orders(&con, orders)?;
        insert_customers(&con, customers)?;
        insert_sellers(&con, sellers)?;

        create_typed_views(&con)?;
        Ok(Self { con })
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.con
    }

    /// Distinct states appearing on either side of any order, sorted
    /// ascending. This feeds the sidebar's state multiselect, which offers
    /// every state present in the data.
    pub fn states(&self) -> Result<Vec<String>, ViewError> {
        let sql = "SELECT DISTINCT customer_state AS state FROM orders \
                   WHERE customer_state IS NOT NULL \
                   UNION \
                   SELECT DISTINCT seller_state FROM orders \
                   WHERE seller_state IS NOT NULL \
                   ORDER BY state";
        let mut stmt = self
            .con
            .prepare(sql)
            .map_err(|e| ViewError::sql("states", sql, &e))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| ViewError::sql("states", sql, &e))?;

        let mut states = Vec::new();
        for row in rows {
            states.push(row.map_err(|e| ViewError::sql("states", sql, &e))?);
        }
        Ok(states)
    }

    /// First `limit` rows of the filtered working set, in stored order — the
    /// "glimpse of the dataset" table at the top of the dashboard.
    pub fn preview(
        &self,
        filter: &FilterSpec,
        limit: usize,
    ) -> Result<Vec<OrderRecord>, ViewError> {
        let sql = format!(
            "SELECT
                 order_id,
                 product_id,
                 customer_state,
                 seller_state,
                 product_category_name,
                 price,
                 review_score,
                 strftime(order_purchase_timestamp, '{ts}') AS purchased,
                 strftime(order_delivered_customer_date, '{ts}') AS delivered,
                 CAST(floor((epoch_ms(order_delivered_customer_date)
                             - epoch_ms(order_purchase_timestamp))
                            / 86400000.0) AS BIGINT) AS shipping_time
             FROM orders
             WHERE {predicate}
             LIMIT {limit}",
            ts = TIMESTAMP_FORMAT,
            predicate = filter.predicate(),
        );
        let mut stmt = self
            .con
            .prepare(&sql)
            .map_err(|e| ViewError::sql("preview", &sql, &e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(OrderRecord {
                    order_id: row.get(0)?,
                    product_id: row.get(1)?,
                    customer_state: row.get(2)?,
                    seller_state: row.get(3)?,
                    product_category_name: row.get(4)?,
                    price: row.get(5)?,
                    review_score: row
                        .get::<_, Option<i64>>(6)?
                        .and_then(|v| u8::try_from(v).ok()),
                    order_purchase_timestamp: parse_timestamp(row.get(7)?),
                    order_delivered_customer_date: parse_timestamp(row.get(8)?),
                    shipping_time: row.get(9)?,
                })
            })
            .map_err(|e| ViewError::sql("preview", &sql, &e))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| ViewError::sql("preview", &sql, &e))?);
        }
        Ok(records)
    }
}

fn open_in_memory() -> Result<Connection, ViewError> {
    Connection::open_in_memory().map_err(|e| ViewError::DataUnavailable {
        path: ":memory:".to_string(),
        detail: e.to_string(),
    })
}

/// Materialize one CSV file into a raw all-VARCHAR table.
///
/// `all_varchar` defers every type decision to the typed views, so a stray
/// `"abc"` in a numeric column degrades that one value to NULL later instead
/// of failing the whole load here.
fn ingest_csv(con: &Connection, table: &str, path: &Path) -> Result<(), ViewError> {
    let sql = format!(
        "CREATE TABLE {table} AS \
         SELECT * FROM read_csv({path}, header = true, all_varchar = true)",
        path = quote_literal(&path.to_string_lossy()),
    );
    con.execute_batch(&sql).map_err(|e| ViewError::DataUnavailable {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}

/// Check that every required column is present, with a did-you-mean hint on
/// the first one missing.
fn ensure_columns(con: &Connection, table: &str, columns: &[&str]) -> Result<(), ViewError> {
    let sql = format!("PRAGMA table_info('{table}')");
    let mut stmt = con
        .prepare(&sql)
        .map_err(|e| ViewError::sql("schema check", &sql, &e))?;
    // PRAGMA table_info returns (cid, name, type, notnull, dflt_value, pk);
    // only the name is needed here.
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| ViewError::sql("schema check", &sql, &e))?;

    let mut available = Vec::new();
    for row in rows {
        available.push(row.map_err(|e| ViewError::sql("schema check", &sql, &e))?);
    }

    for &required in columns {
        if !available.iter().any(|col| col.as_str() == required) {
            return Err(ViewError::SchemaMismatch {
                table: table.to_string(),
                column: required.to_string(),
                suggestion: suggest_closest(required, &available),
                available,
            });
        }
    }
    Ok(())
}

/// Create the typed views every pipeline stage queries.
///
/// `TRY_CAST` turns malformed values into NULL. Review scores additionally
/// collapse to NULL outside the 1–5 scale, which is the documented domain.
fn create_typed_views(con: &Connection) -> Result<(), ViewError> {
    let sql = "CREATE VIEW orders AS
               SELECT
                   order_id,
                   product_id,
                   customer_state,
                   seller_state,
                   product_category_name,
                   TRY_CAST(price AS DOUBLE) AS price,
                   CASE
                       WHEN TRY_CAST(review_score AS INTEGER) BETWEEN 1 AND 5
                       THEN TRY_CAST(review_score AS INTEGER)
                   END AS review_score,
                   TRY_CAST(order_purchase_timestamp AS TIMESTAMP)
                       AS order_purchase_timestamp,
                   TRY_CAST(order_delivered_customer_date AS TIMESTAMP)
                       AS order_delivered_customer_date
               FROM orders_raw;
               CREATE VIEW customers AS
               SELECT customer_unique_id, customer_state FROM customers_raw;
               CREATE VIEW sellers AS
               SELECT seller_id, seller_state FROM sellers_raw;";
    con.execute_batch(sql)
        .map_err(|e| ViewError::sql("create typed views", sql, &e))
}

fn insert_orders(con: &Connection, orders: &[OrderRecord]) -> Result<(), ViewError> {
    let sql = "INSERT INTO orders_raw VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
    let mut stmt = con
        .prepare(sql)
        .map_err(|e| ViewError::sql("insert orders", sql, &e))?;
    for rec in orders {
        stmt.execute(duckdb::params![
            rec.order_id,
            rec.product_id,
            rec.customer_state,
            rec.seller_state,
            rec.product_category_name,
            rec.price.map(|p| p.to_string()),
            rec.review_score.map(|s| s.to_string()),
            rec.order_purchase_timestamp
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            rec.order_delivered_customer_date
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
        ])
        .map_err(|e| ViewError::sql("insert orders", sql, &e))?;
    }
    Ok(())
}

fn insert_customers(con: &Connection, customers: &[CustomerRow]) -> Result<(), ViewError> {
    let sql = "INSERT INTO customers_raw VALUES (?, ?)";
    let mut stmt = con
        .prepare(sql)
        .map_err(|e| ViewError::sql("insert customers", sql, &e))?;
    for rec in customers {
        stmt.execute(duckdb::params![rec.customer_unique_id, rec.customer_state])
            .map_err(|e| ViewError::sql("insert customers", sql, &e))?;
    }
    Ok(())
}

fn insert_sellers(con: &Connection, sellers: &[SellerRow]) -> Result<(), ViewError> {
    let sql = "INSERT INTO sellers_raw VALUES (?, ?)";
    let mut stmt = con
        .prepare(sql)
        .map_err(|e| ViewError::sql("insert sellers", sql, &e))?;
    for rec in sellers {
        stmt.execute(duckdb::params![rec.seller_id, rec.seller_state])
            .map_err(|e| ViewError::sql("insert sellers", sql, &e))?;
    }
    Ok(())
}

fn parse_timestamp(value: Option<String>) -> Option<NaiveDateTime> {
    value.and_then(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateRange, StateSelection};
    use chrono::NaiveDate;

    fn wide_open(states: &[&str]) -> FilterSpec {
        FilterSpec::new(
            DateRange::new(
                NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2018, 12, 31).unwrap(),
            ),
            StateSelection::from_codes(states.iter().copied()),
        )
    }

    /// Write fixture CSVs under a fresh /tmp directory and return a source
    /// pointing at them.
    fn fixture_source(dir_name: &str, orders: &str, customers: &str, sellers: &str) -> DatasetSource {
        let dir = std::env::temp_dir().join(dir_name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create fixture dir");
        let orders_csv = dir.join("orders.csv");
        let customers_csv = dir.join("customers.csv");
        let sellers_csv = dir.join("sellers.csv");
        std::fs::write(&orders_csv, orders).expect("write orders fixture");
        std::fs::write(&customers_csv, customers).expect("write customers fixture");
        std::fs::write(&sellers_csv, sellers).expect("write sellers fixture");
        DatasetSource {
            orders_csv,
            customers_csv,
            sellers_csv,
        }
    }

    const ORDERS_HEADER: &str = "order_id,product_id,customer_state,seller_state,\
                                 product_category_name,price,review_score,\
                                 order_purchase_timestamp,order_delivered_customer_date";

    fn sample_orders_csv() -> String {
        format!(
            "{ORDERS_HEADER}\n\
             O1,P1,SP,RJ,toys,10.5,5,2018-03-05 10:00:00,2018-03-08 14:00:00\n\
             O1,P2,SP,RJ,toys,20.0,5,2018-03-05 10:00:00,2018-03-08 14:00:00\n\
             O2,P3,RJ,RJ,books,abc,9,2018-03-10 09:30:00,\n\
             O3,P4,MG,SP,garden,15.0,1,not-a-date,2018-04-05 08:00:00\n"
        )
    }

    const CUSTOMERS_CSV: &str = "customer_unique_id,customer_state\nC1,SP\nC2,RJ\n";
    const SELLERS_CSV: &str = "seller_id,seller_state\nS1,RJ\nS2,SP\n";

    #[test]
    fn load_exposes_typed_tables() {
        let source = fixture_source(
            "order_views_load_ok",
            &sample_orders_csv(),
            CUSTOMERS_CSV,
            SELLERS_CSV,
        );
        let ds = Dataset::load(&source).unwrap();

        let states = ds.states().unwrap();
        assert_eq!(states, vec!["MG", "RJ", "SP"]);
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let source = DatasetSource {
            orders_csv: PathBuf::from("/tmp/order_views_nope/missing.csv"),
            customers_csv: PathBuf::from("/tmp/order_views_nope/missing.csv"),
            sellers_csv: PathBuf::from("/tmp/order_views_nope/missing.csv"),
        };
        let err = Dataset::load(&source).unwrap_err();
        match err {
            ViewError::DataUnavailable { path, .. } => {
                assert!(path.contains("missing.csv"), "unexpected path: {path}");
            }
            other => panic!("expected DataUnavailable, got: {other}"),
        }
    }

    #[test]
    fn missing_column_is_schema_mismatch_with_suggestion() {
        // Header carries a typo'd purchase timestamp column.
        let orders = "order_id,product_id,customer_state,seller_state,\
                      product_category_name,price,review_score,\
                      order_purchase_timestmap,order_delivered_customer_date\n\
                      O1,P1,SP,RJ,toys,10.5,5,2018-03-05 10:00:00,\n";
        let source = fixture_source("order_views_typo", orders, CUSTOMERS_CSV, SELLERS_CSV);
        let err = Dataset::load(&source).unwrap_err();
        match err {
            ViewError::SchemaMismatch {
                table,
                column,
                suggestion,
                ..
            } => {
                assert_eq!(table, "orders_raw");
                assert_eq!(column, "order_purchase_timestamp");
                assert_eq!(suggestion.as_deref(), Some("order_purchase_timestmap"));
            }
            other => panic!("expected SchemaMismatch, got: {other}"),
        }
    }

    #[test]
    fn malformed_values_coerce_to_missing() {
        let source = fixture_source(
            "order_views_permissive",
            &sample_orders_csv(),
            CUSTOMERS_CSV,
            SELLERS_CSV,
        );
        let ds = Dataset::load(&source).unwrap();

        // O2 has price "abc" and review score "9" — both outside the domain.
        let rows = ds.preview(&wide_open(&["RJ"]), 10).unwrap();
        let o2 = rows.iter().find(|r| r.order_id == "O2").expect("O2 present");
        assert_eq!(o2.price, None);
        assert_eq!(o2.review_score, None);
        assert!(o2.order_purchase_timestamp.is_some());
        // Never delivered: no delivery date, no derived shipping time.
        assert_eq!(o2.order_delivered_customer_date, None);
        assert_eq!(o2.shipping_time, None);
    }

    #[test]
    fn unparseable_purchase_timestamp_drops_row_from_any_range() {
        let source = fixture_source(
            "order_views_bad_ts",
            &sample_orders_csv(),
            CUSTOMERS_CSV,
            SELLERS_CSV,
        );
        let ds = Dataset::load(&source).unwrap();

        // O3's purchase timestamp is garbage, so no date range can admit it,
        // but its states still count toward the sidebar options.
        let rows = ds.preview(&wide_open(&["MG", "RJ", "SP"]), 10).unwrap();
        assert!(rows.iter().all(|r| r.order_id != "O3"));
        assert!(ds.states().unwrap().contains(&"MG".to_string()));
    }

    #[test]
    fn preview_respects_filter_and_limit() {
        let source = fixture_source(
            "order_views_preview",
            &sample_orders_csv(),
            CUSTOMERS_CSV,
            SELLERS_CSV,
        );
        let ds = Dataset::load(&source).unwrap();

        let all = ds.preview(&wide_open(&["SP", "RJ", "MG"]), 10).unwrap();
        assert_eq!(all.len(), 3); // O1 twice, O2 once; O3 has no valid date

        let capped = ds.preview(&wide_open(&["SP", "RJ", "MG"]), 2).unwrap();
        assert_eq!(capped.len(), 2);

        let none = ds.preview(&wide_open(&[]), 10).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn preview_derives_shipping_time_in_whole_days() {
        let source = fixture_source(
            "order_views_shipping",
            &sample_orders_csv(),
            CUSTOMERS_CSV,
            SELLERS_CSV,
        );
        let ds = Dataset::load(&source).unwrap();

        let rows = ds.preview(&wide_open(&["SP"]), 10).unwrap();
        let o1 = rows.iter().find(|r| r.order_id == "O1").expect("O1 present");
        // 2018-03-05 10:00 -> 2018-03-08 14:00 is 3 days 4 hours: 3 whole days.
        assert_eq!(o1.shipping_time, Some(3));
    }

    #[test]
    fn from_rows_round_trips_records() {
        let purchase = NaiveDate::from_ymd_opt(2018, 3, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let delivered = NaiveDate::from_ymd_opt(2018, 3, 9)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let orders = vec![OrderRecord {
            order_id: "O1".to_string(),
            product_id: Some("P1".to_string()),
            customer_state: Some("SP".to_string()),
            seller_state: Some("RJ".to_string()),
            product_category_name: Some("toys".to_string()),
            price: Some(10.5),
            review_score: Some(5),
            order_purchase_timestamp: Some(purchase),
            order_delivered_customer_date: Some(delivered),
            shipping_time: None,
        }];
        let customers = vec![CustomerRow {
            customer_unique_id: "C1".to_string(),
            customer_state: Some("SP".to_string()),
        }];
        let sellers = vec![SellerRow {
            seller_id: "S1".to_string(),
            seller_state: Some("RJ".to_string()),
        }];

        let ds = Dataset::from_rows(&orders, &customers, &sellers).unwrap();
        let rows = ds.preview(&wide_open(&["SP"]), 10).unwrap();
        assert_eq!(rows.len(), 1);
        let rec = &rows[0];
        assert_eq!(rec.order_id, "O1");
        assert_eq!(rec.price, Some(10.5));
        assert_eq!(rec.review_score, Some(5));
        assert_eq!(rec.order_purchase_timestamp, Some(purchase));
        assert_eq!(rec.order_delivered_customer_date, Some(delivered));
        // 3 days 23 hours elapsed: 3 whole days.
        assert_eq!(rec.shipping_time, Some(3));
    }

    mod manifest_tests {
        use super::*;

        #[test]
        fn valid_manifest_parses() {
            let json = r#"{
                "orders_csv": "/data/all_df.csv",
                "customers_csv": "/data/cust_state_df.csv",
                "sellers_csv": "/data/seller_state_df.csv"
            }"#;
            let source = DatasetSource::from_json(json).unwrap();
            assert_eq!(source.orders_csv, PathBuf::from("/data/all_df.csv"));
        }

        #[test]
        fn unknown_manifest_keys_are_rejected() {
            let json = r#"{
                "orders_csv": "a",
                "customers_csv": "b",
                "sellers_csv": "c",
                "extra": "d"
            }"#;
            assert!(DatasetSource::from_json(json).is_err());
        }

        #[test]
        fn missing_manifest_key_is_error() {
            let json = r#"{"orders_csv": "a"}"#;
            assert!(DatasetSource::from_json(json).is_err());
        }

        #[test]
        fn unreadable_manifest_file_is_data_unavailable() {
            let err = DatasetSource::from_json_file(Path::new(
                "/tmp/order_views_no_such_manifest.json",
            ))
            .unwrap_err();
            assert!(matches!(err, ViewError::DataUnavailable { .. }));
        }
    }

    mod suggestion_tests {
        use super::*;

        #[test]
        fn close_column_is_suggested() {
            let available = vec!["order_id".to_string(), "prodct_id".to_string()];
            assert_eq!(
                suggest_closest("product_id", &available),
                Some("prodct_id".to_string())
            );
        }

        #[test]
        fn distant_columns_yield_no_suggestion() {
            let available = vec!["zipcode".to_string()];
            assert_eq!(suggest_closest("review_score", &available), None);
        }
    }
}
