pub mod admin;
pub mod public;

use crate::entities::{self, EntityDef};
use crate::error::ApiError;

/// Resolve an entity path slug against the registry. Unknown slugs are a
/// 404 before any store call.
pub(crate) fn resolve_entity(slug: &str) -> Result<&'static EntityDef, ApiError> {
    entities::resolve(slug).ok_or_else(|| ApiError::not_found(format!("unknown entity '{}'", slug)))
}
