//! Integration tests for the HttpMailer using mockito for HTTP mocking.

use contact_desk::mailer::{AsyncHttpMailer, HttpMailer, Mailer};
use contact_desk::MailError;
use mockito::{Matcher, Server};

fn mailer(server: &Server) -> HttpMailer {
    HttpMailer::with_base_url(
        server.url(),
        "test-api-key".to_string(),
        "\"Contact Form\" <owner@renovations.ca>".to_string(),
    )
}

#[test]
fn test_send_posts_json_with_bearer_token() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/send")
        .match_header("authorization", "Bearer test-api-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "from": "\"Contact Form\" <owner@renovations.ca>",
            "to": "jane@example.com",
            "subject": "Hello",
            "html": "<p>Hi</p>",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "msg_123"}"#)
        .create();

    let mailer = mailer(&server);
    mailer
        .send_html("jane@example.com", "Hello", "<p>Hi</p>")
        .unwrap();

    mock.assert();
    assert_eq!(mailer.metrics().emails_sent_total(), 1);
}

#[test]
fn test_send_unauthorized() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/send")
        .with_status(401)
        .with_body("Invalid API key")
        .create();

    let mailer = mailer(&server);
    let result = mailer.send_html("jane@example.com", "Hello", "<p>Hi</p>");

    mock.assert();
    assert!(matches!(result, Err(MailError::Unauthorized)));
    assert_eq!(mailer.metrics().emails_failed_total(), 1);
}

#[test]
fn test_send_server_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/send")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let mailer = mailer(&server);
    let result = mailer.send_html("jane@example.com", "Hello", "<p>Hi</p>");

    mock.assert();
    match result {
        Err(MailError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[test]
fn test_base_url_with_path_prefix() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/v1/send")
        .with_status(202)
        .create();

    let mailer = HttpMailer::with_base_url(
        format!("{}/v1/", server.url()),
        "test-api-key".to_string(),
        "owner@renovations.ca".to_string(),
    );
    mailer
        .send_html("jane@example.com", "Hello", "<p>Hi</p>")
        .unwrap();

    mock.assert();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_async_mailer_delegates_to_http() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/send")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "to": "jane@example.com",
        })))
        .with_status(200)
        .create_async()
        .await;

    let mailer = AsyncHttpMailer::new(mailer(&server));
    mailer
        .send("jane@example.com", "Hello", "<p>Hi</p>")
        .await
        .unwrap();

    mock.assert_async().await;
}
