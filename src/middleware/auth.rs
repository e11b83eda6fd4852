use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::{Claims, ROLE_ADMIN};
use crate::config;
use crate::error::ApiError;

/// Authenticated admin context extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AdminUser {
    pub subject: String,
}

/// Role gate for the admin API. Verifies the bearer token and requires the
/// admin role; everything downstream can assume the caller is an admin.
/// 401 for a missing or invalid token, 403 for a valid token without the
/// admin role. No store interaction either way.
pub async fn admin_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    let token = extract_bearer_token(&headers).map_err(|msg| error_response(ApiError::unauthorized(msg)))?;

    let claims =
        validate_jwt(&token).map_err(|msg| error_response(ApiError::unauthorized(msg)))?;

    if claims.role != ROLE_ADMIN {
        tracing::warn!("role gate rejected non-admin token for '{}'", claims.sub);
        return Err(error_response(ApiError::forbidden(
            "admin role required",
        )));
    }

    request.extensions_mut().insert(AdminUser {
        subject: claims.sub,
    });

    Ok(next.run(request).await)
}

fn error_response(api_error: ApiError) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::from_u16(api_error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(api_error.to_json()),
    )
}

/// Extract the token from an `Authorization: Bearer …` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

fn validate_jwt(token: &str) -> Result<Claims, String> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err("JWT secret not configured".to_string());
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Invalid bearer token: {}", e))?;

    Ok(token_data.claims)
}
