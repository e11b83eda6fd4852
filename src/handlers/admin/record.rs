use axum::extract::{Extension, Path};
use axum::Json;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::cache::SharedCacheInvalidator;
use crate::database::{DatabaseManager, EntityRepository};
use crate::error::ApiError;
use crate::handlers::admin::writable_fields;
use crate::handlers::resolve_entity;
use crate::middleware::{AdminUser, ApiResponse, ApiResult};

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request("invalid record id"))
}

/// GET /api/admin/:entity/:id - fetch a single record
pub async fn show(Path((entity, id)): Path<(String, String)>) -> ApiResult<Map<String, Value>> {
    let def = resolve_entity(&entity)?;
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let repository = EntityRepository::new(def, pool);
    let record = repository
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found("record not found"))?;

    Ok(ApiResponse::success(record))
}

/// POST /api/admin/:entity - create a record
pub async fn create(
    Path(entity): Path<String>,
    Extension(admin): Extension<AdminUser>,
    Extension(invalidator): Extension<SharedCacheInvalidator>,
    Json(body): Json<Value>,
) -> ApiResult<Map<String, Value>> {
    let def = resolve_entity(&entity)?;
    let fields = writable_fields(def, &body)?;
    let pool = DatabaseManager::pool().await?;

    let repository = EntityRepository::new(def, pool);
    let created = repository.insert(&fields).await?;
    tracing::info!("created {} record (by '{}')", def.slug, admin.subject);

    invalidator.invalidate_public_pages().await;
    Ok(ApiResponse::created(created))
}

/// PATCH /api/admin/:entity/:id - partial update
pub async fn update(
    Path((entity, id)): Path<(String, String)>,
    Extension(invalidator): Extension<SharedCacheInvalidator>,
    Json(body): Json<Value>,
) -> ApiResult<Map<String, Value>> {
    let def = resolve_entity(&entity)?;
    let id = parse_id(&id)?;
    let fields = writable_fields(def, &body)?;
    let pool = DatabaseManager::pool().await?;

    let repository = EntityRepository::new(def, pool);
    let updated = repository
        .update(id, &fields)
        .await?
        .ok_or_else(|| ApiError::not_found("record not found"))?;
    tracing::info!("updated {} record", def.slug);

    invalidator.invalidate_public_pages().await;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/admin/:entity/:id - delete a single record
pub async fn destroy(
    Path((entity, id)): Path<(String, String)>,
    Extension(invalidator): Extension<SharedCacheInvalidator>,
) -> ApiResult<Value> {
    let def = resolve_entity(&entity)?;
    let id = parse_id(&id)?;
    let pool = DatabaseManager::pool().await?;

    let repository = EntityRepository::new(def, pool);
    if !repository.delete(id).await? {
        return Err(ApiError::not_found("record not found"));
    }
    tracing::info!("deleted {} record", def.slug);

    invalidator.invalidate_public_pages().await;
    Ok(ApiResponse::success(Value::Null))
}
