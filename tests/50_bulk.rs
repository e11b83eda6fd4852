// Bulk request parsing and action dispatch rules.

use folio_api::bulk::{resolve_action, BulkAction, BulkRequest};
use folio_api::entities;
use serde_json::json;
use uuid::Uuid;

const ID_A: Uuid = Uuid::from_u128(0xa);
const ID_B: Uuid = Uuid::from_u128(0xb);

#[test]
fn duplicate_ids_collapse_with_set_semantics() {
    let body = json!({ "action": "delete", "ids": [ID_A, ID_A, ID_B] });
    let request = BulkRequest::from_value(&body).unwrap();
    assert_eq!(request.action, "delete");
    assert_eq!(request.ids, vec![ID_A, ID_B]);
}

#[test]
fn empty_action_is_a_400_naming_the_field() {
    let err = BulkRequest::from_value(&json!({ "action": "", "ids": [ID_A] })).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.message().contains("action is required"));
}

#[test]
fn missing_ids_is_a_400_naming_the_field() {
    let err = BulkRequest::from_value(&json!({ "action": "delete", "ids": [] })).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.message().contains("ids must contain at least one id"));
}

#[test]
fn non_object_bodies_are_rejected() {
    for body in [json!(null), json!("delete"), json!([ID_A]), json!(7)] {
        let err = BulkRequest::from_value(&body).unwrap_err();
        assert_eq!(err.status_code(), 400, "body={}", body);
    }
}

#[test]
fn reviewable_entities_accept_status_transitions() {
    let testimonials = entities::resolve("testimonials").unwrap();
    assert_eq!(
        resolve_action(testimonials, "approve").unwrap(),
        BulkAction::Approve
    );
    assert_eq!(
        resolve_action(testimonials, "reject").unwrap(),
        BulkAction::Reject
    );
    assert_eq!(
        resolve_action(testimonials, "delete").unwrap(),
        BulkAction::Delete
    );
}

#[test]
fn other_entities_accept_delete_only() {
    for slug in ["skills", "projects", "experience", "education", "hobbies", "social-links"] {
        let def = entities::resolve(slug).unwrap();
        assert_eq!(resolve_action(def, "delete").unwrap(), BulkAction::Delete);
        assert!(resolve_action(def, "approve").is_err(), "slug={}", slug);
        assert!(resolve_action(def, "reject").is_err(), "slug={}", slug);
        assert!(resolve_action(def, "archive").is_err(), "slug={}", slug);
    }
}
