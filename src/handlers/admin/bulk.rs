use axum::extract::{Extension, Path};
use axum::Json;
use serde_json::{json, Value};

use crate::bulk::{execute, resolve_action, BulkRequest};
use crate::cache::SharedCacheInvalidator;
use crate::database::{DatabaseManager, EntityRepository};
use crate::handlers::resolve_entity;
use crate::middleware::{AdminUser, ApiResponse, ApiResult};

/// POST /api/admin/:entity/bulk - batched approve/reject/delete
pub async fn bulk_mutate(
    Path(entity): Path<String>,
    Extension(admin): Extension<AdminUser>,
    Extension(invalidator): Extension<SharedCacheInvalidator>,
    Json(body): Json<Value>,
) -> ApiResult<Value> {
    let def = resolve_entity(&entity)?;
    let request = BulkRequest::from_value(&body)?;
    let action = resolve_action(def, &request.action)?;

    let pool = DatabaseManager::pool().await?;
    let repository = EntityRepository::new(def, pool);

    let affected = execute(&repository, action, &request.ids).await?;
    tracing::info!(
        "bulk {} on {} by '{}': {} of {} ids matched",
        action.as_str(),
        def.slug,
        admin.subject,
        affected,
        request.ids.len()
    );

    // Invalidation fires once, only after the store mutation succeeded
    invalidator.invalidate_public_pages().await;

    Ok(ApiResponse::success(json!({
        "action": action.as_str(),
        "affected": affected,
    })))
}
