mod common;

use anyhow::Result;
use reqwest::StatusCode;

// End-to-end checks that do not need a database: service banner, the admin
// role gate, entity resolution, and bulk body validation, all of which run
// before any store call.

fn admin_token() -> String {
    // The config singleton reads JWT_SECRET on first access
    std::env::set_var("JWT_SECRET", common::TEST_JWT_SECRET);
    let claims = folio_api::auth::Claims::new("tester".into(), "admin".into());
    folio_api::auth::generate_jwt(claims).expect("token")
}

fn non_admin_token() -> String {
    std::env::set_var("JWT_SECRET", common::TEST_JWT_SECRET);
    let claims = folio_api::auth::Claims::new("tester".into(), "viewer".into());
    folio_api::auth::generate_jwt(claims).expect("token")
}

#[tokio::test]
async fn root_banner_reports_service() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["success"].as_bool().unwrap_or(false));
    assert_eq!(payload["data"]["name"], "folio API");

    Ok(())
}

#[tokio::test]
async fn admin_routes_require_a_bearer_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/admin/skills", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["code"], "UNAUTHORIZED");

    Ok(())
}

#[tokio::test]
async fn admin_routes_reject_non_admin_roles() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/admin/skills", server.base_url))
        .bearer_auth(non_admin_token())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn unknown_entity_is_404_before_any_store_call() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/admin/widgets", server.base_url))
        .bearer_auth(admin_token())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["message"]
        .as_str()
        .unwrap_or_default()
        .contains("unknown entity"));

    Ok(())
}

#[tokio::test]
async fn bulk_body_validation_fails_fast() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/api/admin/testimonials/bulk", server.base_url);

    // Missing action
    let res = client
        .post(&url)
        .bearer_auth(admin_token())
        .json(&serde_json::json!({ "ids": ["4c8d3a92-0000-0000-0000-000000000001"] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["message"]
        .as_str()
        .unwrap_or_default()
        .contains("action is required"));

    // Empty id list
    let res = client
        .post(&url)
        .bearer_auth(admin_token())
        .json(&serde_json::json!({ "action": "approve", "ids": [] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["message"]
        .as_str()
        .unwrap_or_default()
        .contains("at least one id"));

    // Action outside this entity's allow-list
    let res = client
        .post(format!("{}/api/admin/skills/bulk", server.base_url))
        .bearer_auth(admin_token())
        .json(&serde_json::json!({
            "action": "approve",
            "ids": ["4c8d3a92-0000-0000-0000-000000000001"]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["message"]
        .as_str()
        .unwrap_or_default()
        .contains("unsupported action"));

    Ok(())
}
