use axum::extract::{Extension, Path};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::cache::SharedCacheInvalidator;
use crate::database::{next_order_value, DatabaseManager, EntityRepository};
use crate::error::ApiError;
use crate::handlers::resolve_entity;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /api/admin/:entity/:id/duplicate - copy a record into a fresh
/// ordered slot.
///
/// The copy takes the table's next free order value (max + 1), not a slot
/// next to the source record, so it always sorts after every existing
/// record and never reorders them. Read-max and insert are two store calls
/// without a transaction; see crate::database::order.
pub async fn duplicate(
    Path((entity, id)): Path<(String, String)>,
    Extension(invalidator): Extension<SharedCacheInvalidator>,
) -> ApiResult<Map<String, Value>> {
    let def = resolve_entity(&entity)?;
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("invalid record id"))?;
    let pool = DatabaseManager::pool().await?;

    let repository = EntityRepository::new(def, pool.clone());
    let source = repository
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found("record not found"))?;

    let next_order = next_order_value(&pool, def.table).await?;

    // Copy the writable columns verbatim; id and timestamps regenerate,
    // the order takes the allocated slot.
    let mut fields = Map::new();
    for column in def.writable_columns {
        if let Some(value) = source.get(*column) {
            fields.insert((*column).to_string(), value.clone());
        }
    }
    fields.insert("order".to_string(), json!(next_order));

    let created = repository.insert(&fields).await?;
    tracing::info!("duplicated {} record into order slot {}", def.slug, next_order);

    invalidator.invalidate_public_pages().await;
    Ok(ApiResponse::created(created))
}
