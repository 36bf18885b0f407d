//! Integration tests for the Telegram notifier.

use solsignal::services::{Notifier, ServiceError, TelegramNotifier};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{send_message_path, CHAT_ID, TOKEN};

#[tokio::test]
async fn message_is_posted_as_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .and(body_string_contains("chat_id=42"))
        .and(body_string_contains("text=hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::with_base_url(server.uri(), TOKEN, CHAT_ID);
    notifier.send("hello").await.expect("delivered");
}

#[tokio::test]
async fn rejected_message_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let notifier = TelegramNotifier::with_base_url(server.uri(), TOKEN, CHAT_ID);
    let result = notifier.send("hello").await;
    assert!(matches!(result, Err(ServiceError::Api { status: 401, .. })));
}
