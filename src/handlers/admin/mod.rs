pub mod bulk;
pub mod duplicate;
pub mod list;
pub mod record;

use serde_json::{Map, Value};

use crate::entities::EntityDef;
use crate::error::ApiError;

/// Validate a create/update body: a JSON object whose keys are all writable
/// columns of the entity. Store-managed fields (id, timestamps) and unknown
/// keys are rejected by name.
pub(crate) fn writable_fields(
    def: &EntityDef,
    body: &Value,
) -> Result<Map<String, Value>, ApiError> {
    let Some(object) = body.as_object() else {
        return Err(ApiError::bad_request("request body must be a JSON object"));
    };
    if object.is_empty() {
        return Err(ApiError::bad_request("request body must not be empty"));
    }
    for key in object.keys() {
        if !def.is_writable(key) {
            return Err(ApiError::validation_error(
                format!("unknown field '{}' for {}", key, def.slug),
                key.clone(),
            ));
        }
    }
    Ok(object.clone())
}
