// Normalizer and pagination contract checks. These exercise the pure
// request-shaping layer directly; no server or database involved.

use folio_api::listing::pagination::{
    parse_page_query, parse_page_size_query, read_pagination_params, Paginated,
};
use folio_api::listing::params::{
    parse_search_query, parse_sort_by, parse_sort_dir, parse_translation_filter, to_ilike_pattern,
};
use folio_api::listing::{SortDir, TranslationFilter};

#[test]
fn page_size_outside_range_is_clamped() {
    for (raw, expected) in [("0", 1), ("-5", 1), ("101", 100), ("99999", 100), ("60", 60)] {
        assert_eq!(parse_page_size_query(Some(raw)), expected, "raw={}", raw);
    }
}

#[test]
fn non_numeric_page_params_use_defaults() {
    assert_eq!(parse_page_query(Some("two")), 1);
    assert_eq!(parse_page_query(Some("")), 1);
    assert_eq!(parse_page_size_query(Some("ten")), 10);
    assert_eq!(parse_page_size_query(None), 10);
}

#[test]
fn zero_total_never_yields_zero_pages() {
    for (page, page_size) in [(1, 1), (3, 10), (7, 100)] {
        let envelope: Paginated<()> = Paginated::new(vec![], page, page_size, 0);
        assert_eq!(envelope.total_pages, 1);
        assert_eq!(envelope.total, 0);
    }
}

#[test]
fn explicit_page_three_size_twenty_maps_to_rows_40_to_59() {
    let params = read_pagination_params(Some("3"), Some("20"));
    assert!(params.enabled);
    assert_eq!((params.from, params.to), (40, 59));

    let params = read_pagination_params(None, None);
    assert!(!params.enabled);
}

#[test]
fn supplying_either_param_enables_pagination() {
    assert!(read_pagination_params(Some("1"), None).enabled);
    assert!(read_pagination_params(None, Some("10")).enabled);
}

#[test]
fn search_text_is_collapsed_trimmed_and_bounded() {
    assert_eq!(parse_search_query(Some("  a   b  ")), "a b");
    assert_eq!(parse_search_query(None), "");

    let long: String = "é".repeat(200);
    let parsed = parse_search_query(Some(long.as_str()));
    assert_eq!(parsed.chars().count(), 120);
}

#[test]
fn ilike_pattern_strips_delimiters_and_wraps_wildcards() {
    assert_eq!(to_ilike_pattern("50% off, \"great\""), "%50 off great%");
}

#[test]
fn sort_inputs_degrade_to_safe_defaults() {
    let allowed = ["order", "title_en", "created_at"];
    assert_eq!(parse_sort_by(Some("created_at"), &allowed, "order"), "created_at");
    assert_eq!(parse_sort_by(Some("secret_col"), &allowed, "order"), "order");
    assert_eq!(parse_sort_dir(Some("desc"), SortDir::Asc), SortDir::Desc);
    assert_eq!(parse_sort_dir(Some("descending"), SortDir::Asc), SortDir::Asc);
    assert_eq!(
        parse_translation_filter(Some("missing_fr")),
        TranslationFilter::MissingFr
    );
    assert_eq!(parse_translation_filter(Some("")), TranslationFilter::All);
}
