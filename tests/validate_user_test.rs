//! User validation middleware tests, end to end over the router.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{post_json, sample_user, test_app};

fn valid_body() -> serde_json::Value {
    json!({
        "title": "Mr",
        "name": "John Doe",
        "phone": "9876543210",
        "email": "J@X.COM ",
        "password": "Secret123"
    })
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let (app, _, _) = test_app();

    let (status, body) = post_json(app, "/register", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "can't create data with empty body");
}

#[tokio::test]
async fn each_missing_mandatory_field_is_named() {
    for field in ["title", "name", "phone", "email", "password"] {
        let (app, _, _) = test_app();
        let mut payload = valid_body();
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = post_json(app, "/register", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {}", field);
        let message = &body["message"][format!("{}Error", field)];
        assert_eq!(
            message,
            &json!(format!("mandatory {} is missing", field)),
            "field: {}",
            field
        );
    }
}

#[tokio::test]
async fn missing_fields_are_reported_together() {
    let (app, _, _) = test_app();

    let (status, body) = post_json(app, "/register", json!({"title": "Mr"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_object().unwrap();
    assert_eq!(message.len(), 4);
    assert!(message.contains_key("nameError"));
    assert!(message.contains_key("phoneError"));
    assert!(message.contains_key("emailError"));
    assert!(message.contains_key("passwordError"));
}

#[tokio::test]
async fn malformed_fields_are_named() {
    let cases = [
        ("email", json!("no-at-sign.example.com"), "emailError"),
        ("phone", json!("12345"), "phoneError"),
        ("password", json!("short1"), "passwordError"),
        ("name", json!("John3"), "nameError"),
        ("title", json!("M"), "titleError"),
    ];

    for (field, value, key) in cases {
        let (app, _, _) = test_app();
        let mut payload = valid_body();
        payload.as_object_mut().unwrap().insert(field.to_string(), value);

        let (status, body) = post_json(app, "/register", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {}", field);
        assert_eq!(body["message"][key], json!(format!("{} is invalid", field)));
    }
}

#[tokio::test]
async fn address_subfields_are_checked_only_when_address_present() {
    // Without an address nothing address-related is reported
    let (app, _, _) = test_app();
    let (status, _) = post_json(app, "/register", valid_body()).await;
    assert_eq!(status, StatusCode::CREATED);

    // A bad pincode inside a supplied address is reported
    let (app, _, _) = test_app();
    let mut payload = valid_body();
    payload.as_object_mut().unwrap().insert(
        "address".to_string(),
        json!({"street": "221B Baker Street", "city": "London", "pincode": "12"}),
    );

    let (status, body) = post_json(app, "/register", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"]["pincodeError"], "pincode is invalid");
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let (app, users, _) = test_app();
    users.seed(sample_user("j@x.com", "1111111111"));

    let (status, body) = post_json(app, "/register", valid_body()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], false);
    let message = body["message"]["emailError"].as_str().unwrap();
    assert!(message.contains("j@x.com"));
}

#[tokio::test]
async fn duplicate_phone_suffix_conflicts_across_country_codes() {
    let (app, users, _) = test_app();
    // Stored with a country code; the incoming bare number matches by suffix
    users.seed(sample_user("other@example.com", "+91-9876543210"));

    let (status, body) = post_json(app, "/register", valid_body()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    let message = body["message"]["phoneError"].as_str().unwrap();
    assert!(message.contains("9876543210"));
}

#[tokio::test]
async fn successful_registration_normalizes_the_payload() {
    let (app, users, _) = test_app();

    let (status, body) = post_json(app, "/register", valid_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], true);
    assert_eq!(body["data"]["email"], "j@x.com");
    assert_eq!(body["data"]["name"], "JOHN DOE");

    let stored = users.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "j@x.com");
    assert_eq!(stored[0].name, "JOHN DOE");
    // Password is hashed before it reaches the store
    assert_ne!(stored[0].password_hash, "Secret123");
    assert!(stored[0].password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn registered_user_can_login() {
    let (app, _, _) = test_app();

    let (status, _) = post_json(app.clone(), "/register", valid_body()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        app.clone(),
        "/login",
        json!({"email": "j@x.com", "password": "Secret123"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert!(body["data"]["access_token"].as_str().unwrap().len() > 20);

    // Wrong password is rejected
    let (status, body) = post_json(
        app,
        "/login",
        json!({"email": "j@x.com", "password": "Wrong4567"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], false);
}
