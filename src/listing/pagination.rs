// Pagination math for admin list endpoints.
//
// Page/pageSize parsing never fails; the computed row range is zero-based
// and inclusive so it maps directly onto a range-style fetch
// (LIMIT page_size OFFSET from).

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Parse a 1-based page number; garbage or out-of-range falls back to 1.
pub fn parse_page_query(raw: Option<&str>) -> i64 {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(page) if page >= 1 => page,
        _ => DEFAULT_PAGE,
    }
}

/// Parse a page size; garbage falls back to 10, numeric values are clamped
/// into [1, MAX_PAGE_SIZE] so no request can produce an unbounded result.
pub fn parse_page_size_query(raw: Option<&str>) -> i64 {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(size) => size.clamp(1, MAX_PAGE_SIZE),
        None => DEFAULT_PAGE_SIZE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// True iff the caller explicitly supplied `page` or `pageSize`.
    /// Distinguishes "no pagination requested, return everything" from
    /// "page 1 requested".
    pub enabled: bool,
    pub page: i64,
    pub page_size: i64,
    /// Zero-based inclusive row range.
    pub from: i64,
    pub to: i64,
}

pub fn read_pagination_params(page: Option<&str>, page_size: Option<&str>) -> PaginationParams {
    let enabled = page.is_some() || page_size.is_some();
    let page = parse_page_query(page);
    let page_size = parse_page_size_query(page_size);
    // Saturating math: an absurd page number must not wrap the row range
    let from = (page - 1).saturating_mul(page_size);
    PaginationParams {
        enabled,
        page,
        page_size,
        from,
        to: from.saturating_add(page_size - 1),
    }
}

/// Paginated response envelope. Metadata only: the store has already applied
/// the row range, so correctness here never depends on `items.len()` — an
/// empty page (total changed between count and fetch) is fine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total: i64) -> Self {
        let total = total.max(0);
        let page_size = page_size.max(1);
        let total_pages = ((total + page_size - 1) / page_size).max(1);
        Self {
            items,
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_and_bounds() {
        assert_eq!(parse_page_query(None), 1);
        assert_eq!(parse_page_query(Some("abc")), 1);
        assert_eq!(parse_page_query(Some("0")), 1);
        assert_eq!(parse_page_query(Some("-3")), 1);
        assert_eq!(parse_page_query(Some("7")), 7);
    }

    #[test]
    fn page_size_clamps_into_range() {
        assert_eq!(parse_page_size_query(None), 10);
        assert_eq!(parse_page_size_query(Some("abc")), 10);
        assert_eq!(parse_page_size_query(Some("0")), 1);
        assert_eq!(parse_page_size_query(Some("100000")), 100);
        assert_eq!(parse_page_size_query(Some("25")), 25);
    }

    #[test]
    fn row_range_is_zero_based_inclusive() {
        let params = read_pagination_params(Some("3"), Some("20"));
        assert!(params.enabled);
        assert_eq!(params.from, 40);
        assert_eq!(params.to, 59);
    }

    #[test]
    fn pagination_disabled_when_no_params_supplied() {
        let params = read_pagination_params(None, None);
        assert!(!params.enabled);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
    }

    #[test]
    fn empty_total_still_reports_one_page() {
        let envelope: Paginated<i32> = Paginated::new(vec![], 1, 10, 0);
        assert_eq!(envelope.total_pages, 1);
        let envelope: Paginated<i32> = Paginated::new(vec![], 5, 99, -42);
        assert_eq!(envelope.total, 0);
        assert_eq!(envelope.total_pages, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let envelope: Paginated<i32> = Paginated::new(vec![], 1, 10, 31);
        assert_eq!(envelope.total_pages, 4);
        let envelope: Paginated<i32> = Paginated::new(vec![], 1, 10, 30);
        assert_eq!(envelope.total_pages, 3);
    }
}
