use firmsite_models::domain::prelude::{
    LoginRequest, MoveDirection, NewConsultationRequest, NewContactSubmission, ReorderPayload,
    UpdateBackgroundImage,
};
use validator::Validate;

#[test]
fn test_reorder_payload_deserialize() {
    let raw = serde_json::json!({ "id": 3, "direction": "up" });
    let payload: ReorderPayload = serde_json::from_value(raw).expect("deserialize payload");
    assert_eq!(payload.id, 3);
    assert_eq!(payload.direction, MoveDirection::Up);

    let raw = serde_json::json!({ "id": 7, "direction": "down" });
    let payload: ReorderPayload = serde_json::from_value(raw).expect("deserialize payload");
    assert_eq!(payload.direction, MoveDirection::Down);
}

#[test]
fn test_background_image_update_uses_camel_case() {
    let raw = serde_json::json!({
        "id": 5,
        "title": "Spring campaign",
        "linkUrl": "https://example.com/spring"
    });
    let payload: UpdateBackgroundImage = serde_json::from_value(raw).expect("deserialize payload");
    assert_eq!(payload.id, 5);
    assert_eq!(payload.link_url.as_deref(), Some("https://example.com/spring"));
    assert_eq!(payload.description, None);
}

#[test]
fn test_login_request_requires_credentials() {
    let raw = serde_json::json!({ "username": "admin" });
    let payload: LoginRequest = serde_json::from_value(raw).expect("deserialize payload");
    assert!(payload.validate().is_err());

    let raw = serde_json::json!({ "username": "admin", "password": "secret" });
    let payload: LoginRequest = serde_json::from_value(raw).expect("deserialize payload");
    assert!(payload.validate().is_ok());
}

#[test]
fn test_contact_submission_rejects_bad_email() {
    let raw = serde_json::json!({
        "name": "Jo Bloggs",
        "email": "not-an-email",
        "message": "Hello"
    });
    let payload: NewContactSubmission = serde_json::from_value(raw).expect("deserialize payload");
    assert!(payload.validate().is_err());
}

#[test]
fn test_consultation_dates_normalize_before_persisting() {
    let raw = serde_json::json!({
        "name": "Jo Bloggs",
        "email": "jo@example.com",
        "service": "Audit",
        "preferredDate": "2026-09-01T09:30",
        "alternateDate": ""
    });
    let payload: NewConsultationRequest =
        serde_json::from_value(raw).expect("deserialize payload");
    assert!(payload.validate().is_ok());

    let model = payload.into_normalized_active_model().expect("normalize");
    let preferred = model.preferred_date.clone().unwrap();
    assert_eq!(
        preferred.map(|d| d.to_rfc3339()),
        Some("2026-09-01T09:30:00+00:00".to_string())
    );
    assert_eq!(model.alternate_date.clone().unwrap(), None);
}

#[test]
fn test_consultation_with_garbage_date_is_rejected() {
    let raw = serde_json::json!({
        "name": "Jo Bloggs",
        "email": "jo@example.com",
        "service": "Audit",
        "preferredDate": "whenever suits"
    });
    let payload: NewConsultationRequest =
        serde_json::from_value(raw).expect("deserialize payload");
    let err = payload.into_normalized_active_model().unwrap_err();
    assert!(err.contains("whenever suits"));
}
