// Batched multi-record mutations (approve/reject/delete).
//
// Body parsing fails fast with descriptive 400s: a malformed mutation
// request must never silently no-op or apply to the wrong rows. This is
// the opposite policy from the query-string parsers in crate::listing,
// which degrade to defaults.

use std::collections::HashSet;

use serde_json::Value;
use uuid::Uuid;

use crate::database::{DatabaseError, EntityRepository};
use crate::entities::EntityDef;
use crate::error::ApiError;

pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Approve,
    Reject,
    Delete,
}

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Approve => "approve",
            BulkAction::Reject => "reject",
            BulkAction::Delete => "delete",
        }
    }
}

/// Validated bulk request: a recognized-later action string plus a
/// deduplicated, non-empty id set.
#[derive(Debug, Clone)]
pub struct BulkRequest {
    pub action: String,
    pub ids: Vec<Uuid>,
}

impl BulkRequest {
    /// Parse a request body. Ids are filtered to strings, parsed as UUIDs
    /// and deduplicated with set semantics (duplicates collapse, order of
    /// first occurrence is kept).
    pub fn from_value(body: &Value) -> Result<Self, ApiError> {
        let Some(object) = body.as_object() else {
            return Err(ApiError::bad_request("request body must be a JSON object"));
        };

        let raw_ids = object
            .get("ids")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for raw in raw_ids.iter().filter_map(Value::as_str) {
            let id = Uuid::parse_str(raw).map_err(|_| {
                ApiError::bad_request(format!("ids must be valid UUIDs, got '{}'", raw))
            })?;
            if seen.insert(id) {
                ids.push(id);
            }
        }

        if ids.is_empty() {
            return Err(ApiError::bad_request("ids must contain at least one id"));
        }

        let action = match object.get("action").and_then(Value::as_str) {
            Some(action) if !action.trim().is_empty() => action.trim().to_string(),
            _ => return Err(ApiError::bad_request("action is required")),
        };

        Ok(Self { action, ids })
    }
}

/// Map the parsed action against the entity's allow-list. Reviewable
/// entities accept approve/reject/delete, everything else delete only.
pub fn resolve_action(def: &EntityDef, action: &str) -> Result<BulkAction, ApiError> {
    let resolved = match action {
        "approve" => BulkAction::Approve,
        "reject" => BulkAction::Reject,
        "delete" => BulkAction::Delete,
        other => {
            return Err(ApiError::bad_request(format!(
                "unsupported action '{}' for {}",
                other, def.slug
            )))
        }
    };

    if !def.reviewable && resolved != BulkAction::Delete {
        return Err(ApiError::bad_request(format!(
            "unsupported action '{}' for {}",
            action, def.slug
        )));
    }

    Ok(resolved)
}

/// Issue the single store-level mutation for the action. Returns the number
/// of rows the store matched — fewer than `ids.len()` when some ids did not
/// exist, which is a count discrepancy, not an error.
pub async fn execute(
    repository: &EntityRepository,
    action: BulkAction,
    ids: &[Uuid],
) -> Result<u64, DatabaseError> {
    match action {
        BulkAction::Delete => repository.delete_ids(ids).await,
        BulkAction::Approve => repository.set_status(STATUS_APPROVED, ids).await,
        BulkAction::Reject => repository.set_status(STATUS_REJECTED, ids).await,
    }
}
