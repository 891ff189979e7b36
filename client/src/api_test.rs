use super::*;
use serde_json::json;

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:8787/", SessionContext::ephemeral());
    assert_eq!(client.base_url(), "http://localhost:8787");
}

#[test]
fn base_url_without_slash_is_unchanged() {
    let client = ApiClient::new("http://localhost:8787", SessionContext::ephemeral());
    assert_eq!(client.base_url(), "http://localhost:8787");
}

#[test]
fn payload_json_accessors() {
    let payload = ApiPayload::Json(json!({ "ok": true }));
    assert_eq!(payload.as_json(), Some(&json!({ "ok": true })));
    assert_eq!(payload.into_json(), json!({ "ok": true }));
}

#[test]
fn payload_text_folds_into_json_string() {
    let payload = ApiPayload::Text("pong".to_owned());
    assert_eq!(payload.as_json(), None);
    assert_eq!(payload.into_json(), Value::String("pong".to_owned()));
}

#[test]
fn status_error_names_the_failed_operation() {
    let err = ApiError::Status {
        namespace: "entities/Listing".to_owned(),
        method: "filter".to_owned(),
        status: 404,
        body: "Not Found".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "entities/Listing/filter failed with HTTP 404: Not Found"
    );
}

#[test]
fn store_error_passes_through_display() {
    let err = ApiError::Store(TokenStoreError::Unavailable("no home directory".to_owned()));
    assert_eq!(err.to_string(), "token store unavailable: no home directory");
}

#[test]
fn client_shares_session_with_caller() {
    let session = SessionContext::ephemeral();
    let client = ApiClient::new("http://localhost:8787", session.clone());

    session.set_token("devtoken:a@b.com", false).unwrap();
    assert_eq!(
        client.session().token().as_deref(),
        Some("devtoken:a@b.com")
    );
}
