#![no_main]
use libfuzzer_sys::fuzz_target;
use order_views::filter::FilterSpec;

fuzz_target!(|filter: FilterSpec| {
    let sql = filter.predicate();

    // The builder must always emit a well-formed two-clause predicate.
    assert!(!sql.is_empty());
    assert!(sql.starts_with("(CAST(order_purchase_timestamp AS DATE) BETWEEN DATE '"));
    assert!(sql.contains(") AND ("));

    // Every embedded literal stays quoted: an odd quote count would mean a
    // state code broke out of its string.
    let quotes = sql.matches('\'').count();
    assert!(quotes % 2 == 0, "unbalanced quotes in: {sql}");

    if filter.states.is_empty() {
        assert!(sql.ends_with("(FALSE)"));
    } else {
        assert!(sql.contains("customer_state IN ("));
        assert!(sql.contains("seller_state IN ("));
    }
});
