//! Wiremock integration tests for the Twilio client

use integration_twilio::{TwilioClient, TwilioConfig, TwilioError};
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> TwilioConfig {
    TwilioConfig {
        account_sid: "AC_test".to_string(),
        auth_token: "token_test".to_string(),
        from_number: "whatsapp:+14155238886".to_string(),
        base_url: server.uri(),
        ..Default::default()
    }
}

#[tokio::test]
async fn send_text_posts_form_and_returns_sid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC_test/Messages.json"))
        .and(header_exists("authorization"))
        .and(body_string_contains("To=whatsapp%3A%2B919876543210"))
        .and(body_string_contains("From=whatsapp%3A%2B14155238886"))
        .and(body_string_contains("Body="))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sid": "SM_abc123",
            "status": "queued",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TwilioClient::new(config_for(&server)).unwrap();
    let response = client
        .send_text("whatsapp:+919876543210", "🌧️ RAIN ALERT")
        .await
        .unwrap();

    assert_eq!(response.sid, "SM_abc123");
    assert_eq!(response.status, "queued");
}

#[tokio::test]
async fn send_media_posts_media_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC_test/Messages.json"))
        .and(body_string_contains("MediaUrl=https"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sid": "MM_xyz789",
            "status": "queued",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TwilioClient::new(config_for(&server)).unwrap();
    let response = client
        .send_media(
            "whatsapp:+919876543210",
            "https://farm.example.com/audio/0123456789abcdef0123456789abcdef",
        )
        .await
        .unwrap();

    assert_eq!(response.sid, "MM_xyz789");
}

#[tokio::test]
async fn api_error_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC_test/Messages.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 21211,
            "message": "The 'To' number is not a valid phone number.",
            "status": 400,
        })))
        .mount(&server)
        .await;

    let client = TwilioClient::new(config_for(&server)).unwrap();
    let err = client
        .send_text("whatsapp:+919876543210", "test")
        .await
        .unwrap_err();

    match err {
        TwilioError::Api { code, message } => {
            assert_eq!(code, 21211);
            assert!(message.contains("not a valid phone number"));
        },
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn media_send_body_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC_test/Messages.json"))
        .and(body_string_contains("Body="))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sid": "MM1", "status": "queued",
        })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC_test/Messages.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sid": "MM1", "status": "queued",
        })))
        .mount(&server)
        .await;

    let client = TwilioClient::new(config_for(&server)).unwrap();
    client
        .send_media("whatsapp:+919876543210", "https://x/audio/a")
        .await
        .unwrap();
}
