// Query-string normalization for list endpoints.
//
// Every parser here is total: arbitrary raw input degrades to a safe default
// instead of failing the request. Malformed mutation bodies are handled
// elsewhere (see crate::bulk) and do fail fast.

/// Longest search string accepted before truncation.
pub const MAX_SEARCH_LEN: usize = 120;

/// Characters that are metacharacters or delimiters in a pattern-match
/// expression. Stripped before a search string is embedded in an ILIKE
/// pattern, so free text can never alter predicate structure or smuggle
/// in wildcards.
const PATTERN_METACHARS: &[char] = &['%', '_', ',', '(', ')', '\'', '"', '\\'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// Translation-completeness filter over a bilingual column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationFilter {
    #[default]
    All,
    MissingEn,
    MissingFr,
    Complete,
}

/// Collapse whitespace runs to single spaces, trim, and truncate to
/// `MAX_SEARCH_LEN` characters. Absent input yields an empty string.
pub fn parse_search_query(raw: Option<&str>) -> String {
    parse_search_query_limited(raw, MAX_SEARCH_LEN)
}

pub fn parse_search_query_limited(raw: Option<&str>, max_len: usize) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let collapsed = collapse_whitespace(raw);
    // Truncation counts characters, not bytes; a limit of 0 is meaningless.
    collapsed.chars().take(max_len.max(1)).collect()
}

/// Accept exactly "asc" or "desc"; anything else maps to `fallback`.
pub fn parse_sort_dir(raw: Option<&str>, fallback: SortDir) -> SortDir {
    match raw {
        Some("asc") => SortDir::Asc,
        Some("desc") => SortDir::Desc,
        _ => fallback,
    }
}

/// Accept only members of the entity's sortable-column allow-list, so a
/// caller can never sort by an unindexed or sensitive column.
pub fn parse_sort_by<'a>(raw: Option<&str>, allowed: &[&'a str], fallback: &'a str) -> &'a str {
    match raw {
        Some(candidate) => allowed
            .iter()
            .copied()
            .find(|column| *column == candidate)
            .unwrap_or(fallback),
        None => fallback,
    }
}

pub fn parse_translation_filter(raw: Option<&str>) -> TranslationFilter {
    match raw {
        Some("missing_en") => TranslationFilter::MissingEn,
        Some("missing_fr") => TranslationFilter::MissingFr,
        Some("complete") => TranslationFilter::Complete,
        _ => TranslationFilter::All,
    }
}

/// Turn free search text into a `%…%` pattern safe to bind into an ILIKE
/// predicate. Returns an empty string when nothing survives stripping, in
/// which case the caller skips the search predicate entirely.
pub fn to_ilike_pattern(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !PATTERN_METACHARS.contains(c))
        .collect();
    let cleaned = collapse_whitespace(&stripped);
    if cleaned.is_empty() {
        return String::new();
    }
    format!("%{}%", cleaned)
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
