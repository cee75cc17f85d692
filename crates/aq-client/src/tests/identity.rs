use crate::{
    AcquireIdentityFactory, Identity, IdentityError, IdentityFactory, IdentityOptions,
    LoginPayload, ServiceClient, User,
};

use std::sync::Arc;

use serde_json::json;

fn client() -> Arc<ServiceClient> {
    Arc::new(ServiceClient::new("http://localhost:8080/t/identity"))
}

#[test]
fn test_user_keeps_username() {
    let user = User::new(IdentityOptions::new("chryswoods"), client()).unwrap();

    assert_eq!(user.username(), "chryswoods");
    assert_eq!(user.identity_url(), "http://localhost:8080/t/identity");
}

#[test]
fn test_empty_username_is_rejected() {
    let result = User::new(IdentityOptions::new(""), client());

    match result {
        Err(IdentityError::InvalidUsername { .. }) => {}
        other => panic!("Expected InvalidUsername, got {other:?}"),
    }
}

#[test]
fn test_blank_username_is_rejected() {
    assert!(User::new(IdentityOptions::new("  \t"), client()).is_err());
}

#[test]
fn test_overlong_username_is_rejected() {
    let username = "u".repeat(aq_config::MAX_USERNAME_LENGTH + 1);
    assert!(User::new(IdentityOptions::new(username), client()).is_err());
}

#[test]
fn test_username_at_config_limit_is_accepted() {
    let username = "u".repeat(aq_config::MAX_USERNAME_LENGTH);
    assert!(User::new(IdentityOptions::new(username), client()).is_ok());
}

#[test]
fn test_factory_builds_user_for_username() {
    let factory = AcquireIdentityFactory::new(ServiceClient::new("http://localhost:8080"));

    let user = factory
        .make_identity(IdentityOptions::new("chryswoods"))
        .unwrap();

    assert_eq!(user.username(), "chryswoods");
}

#[test]
fn test_invalid_username_error_mentions_username() {
    let err = IdentityError::invalid_username("", "username cannot be empty");
    assert!(err.to_string().contains("username cannot be empty"));
}

#[test]
fn test_payload_accessors_read_known_fields() {
    let payload = LoginPayload::from(json!({
        "login_url": "http://localhost/t/identity/s?id=a0b1c2",
        "session_uid": "1234-5678",
    }));

    assert_eq!(
        payload.login_url(),
        Some("http://localhost/t/identity/s?id=a0b1c2")
    );
    assert_eq!(payload.session_uid(), Some("1234-5678"));
    assert_eq!(payload.short_uid(), Some(String::from("a0b1c2")));
}

#[test]
fn test_payload_prefers_explicit_short_uid() {
    let payload = LoginPayload::from(json!({
        "login_url": "http://localhost/t/identity/s?id=a0b1c2",
        "short_uid": "zz99",
    }));

    assert_eq!(payload.short_uid(), Some(String::from("zz99")));
}

#[test]
fn test_payload_without_known_fields() {
    let payload = LoginPayload::from(json!({"status": "ok", "token": "abc"}));

    assert!(payload.login_url().is_none());
    assert!(payload.session_uid().is_none());
    assert!(payload.short_uid().is_none());
}

#[test]
fn test_payload_serializes_transparently() {
    let payload = LoginPayload::from(json!({"status": "ok"}));

    assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"status": "ok"}));
}
