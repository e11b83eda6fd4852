use axum::extract::Path;
use serde_json::{json, Map, Value};

use crate::bulk::STATUS_APPROVED;
use crate::database::{DatabaseManager, EntityRepository};
use crate::filter::ListFilter;
use crate::handlers::resolve_entity;
use crate::listing::SortDir;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/portfolio/:entity - visible records for the public site,
/// in manual display order
pub async fn entity_list(Path(entity): Path<String>) -> ApiResult<Vec<Map<String, Value>>> {
    let def = resolve_entity(&entity)?;
    let pool = DatabaseManager::pool().await?;

    let mut filter = ListFilter::new(def.table)?;
    // Reviewable records are public only once approved
    if def.reviewable {
        filter.eq("status", json!(STATUS_APPROVED))?;
    }
    filter.order_by(def.default_sort, SortDir::Asc)?;

    let repository = EntityRepository::new(def, pool);
    let items = repository.list(&filter).await?;

    Ok(ApiResponse::success(items))
}
