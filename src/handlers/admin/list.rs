use axum::extract::{Path, Query};
use serde::Deserialize;
use serde_json::Value;

use crate::database::{DatabaseManager, EntityRepository};
use crate::filter::{apply_translation_filter, ListFilter};
use crate::handlers::resolve_entity;
use crate::listing::params::{
    parse_search_query, parse_sort_by, parse_sort_dir, parse_translation_filter, to_ilike_pattern,
};
use crate::listing::{read_pagination_params, Paginated, SortDir};
use crate::middleware::{ApiResponse, ApiResult};

/// Raw query-string values. Everything is optional and arrives as text;
/// normalization (with safe defaults) happens in crate::listing.
#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    pub search: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,
    #[serde(rename = "translationFilter")]
    pub translation_filter: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// GET /api/admin/:entity - filtered, sorted, optionally paginated list
pub async fn entity_list(
    Path(entity): Path<String>,
    Query(query): Query<AdminListQuery>,
) -> ApiResult<Value> {
    let def = resolve_entity(&entity)?;
    let pool = DatabaseManager::pool().await?;

    let search = parse_search_query(query.search.as_deref());
    let sort_by = parse_sort_by(query.sort_by.as_deref(), def.sort_columns, def.default_sort);
    let sort_dir = parse_sort_dir(query.sort_dir.as_deref(), SortDir::Asc);
    let translation = parse_translation_filter(query.translation_filter.as_deref());
    let pagination = read_pagination_params(query.page.as_deref(), query.page_size.as_deref());

    let mut filter = ListFilter::new(def.table)?;
    if !search.is_empty() {
        filter.search(def.search_columns, &to_ilike_pattern(&search))?;
    }
    apply_translation_filter(&mut filter, translation, def.english_column, def.french_column)?;
    filter.order_by(sort_by, sort_dir)?;

    let repository = EntityRepository::new(def, pool);

    if !pagination.enabled {
        let items = repository.list(&filter).await?;
        return Ok(ApiResponse::success(Value::Array(
            items.into_iter().map(Value::Object).collect(),
        )));
    }

    // Count before the range is applied so totals reflect the filters only
    let total = repository.count(&filter).await?;
    filter.range(pagination.from, pagination.to);
    let items = repository.list(&filter).await?;

    let envelope = Paginated::new(items, pagination.page, pagination.page_size, total);
    Ok(ApiResponse::success(serde_json::to_value(envelope)?))
}
