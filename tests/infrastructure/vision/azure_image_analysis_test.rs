use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;

use vitrine::application::ports::{CaptionProvider, ProviderOutcome, ProviderUnavailable};
use vitrine::infrastructure::vision::AzureImageAnalysisProvider;

use crate::helpers::{MockReply, MockVisionServer, png_bytes};

const NOT_CALLED: MockReply = MockReply::Respond(500, "{}");

async fn caption_from(server: &MockVisionServer, client: Client) -> ProviderOutcome {
    AzureImageAnalysisProvider::new(client, &server.base_url, "test-key")
        .caption(Bytes::from(png_bytes()))
        .await
}

#[tokio::test]
async fn given_caption_result_when_analyzing_then_returns_trimmed_text() {
    let server = MockVisionServer::start(
        MockReply::Respond(
            200,
            r#"{"captionResult": {"text": " A dog running ", "confidence": 0.91}, "modelVersion": "2023-10-01"}"#,
        ),
        NOT_CALLED,
    )
    .await;

    let outcome = caption_from(&server, Client::new()).await;

    assert_eq!(outcome, ProviderOutcome::Success("A dog running".to_string()));
    assert_eq!(server.analyze_hits(), 1);
    assert_eq!(server.describe_hits(), 0);
}

#[tokio::test]
async fn given_request_when_analyzing_then_sends_key_and_caption_query() {
    let server = MockVisionServer::start(
        MockReply::Respond(200, r#"{"captionResult": {"text": "A dog running"}}"#),
        NOT_CALLED,
    )
    .await;

    caption_from(&server, Client::new()).await;

    assert_eq!(*server.seen_keys.lock().unwrap(), vec!["test-key".to_string()]);
    let queries = server.seen_queries.lock().unwrap();
    assert!(queries[0].contains("api-version=2023-10-01"));
    assert!(queries[0].contains("features=caption"));
    assert!(queries[0].contains("language=en"));
}

#[tokio::test]
async fn given_endpoint_with_trailing_slash_when_analyzing_then_path_is_not_doubled() {
    let server = MockVisionServer::start(
        MockReply::Respond(200, r#"{"captionResult": {"text": "A dog running"}}"#),
        NOT_CALLED,
    )
    .await;
    let endpoint = format!("{}/", server.base_url);

    let outcome = AzureImageAnalysisProvider::new(Client::new(), &endpoint, "test-key")
        .caption(Bytes::from(png_bytes()))
        .await;

    assert_eq!(outcome, ProviderOutcome::Success("A dog running".to_string()));
}

#[tokio::test]
async fn given_error_status_when_analyzing_then_unavailable_with_status_and_body() {
    let server = MockVisionServer::start(
        MockReply::Respond(401, r#"{"error": {"code": "401"}}"#),
        NOT_CALLED,
    )
    .await;

    let outcome = caption_from(&server, Client::new()).await;

    assert_eq!(
        outcome,
        ProviderOutcome::Unavailable(ProviderUnavailable::ErrorStatus {
            status: 401,
            body: r#"{"error": {"code": "401"}}"#.to_string(),
        })
    );
}

#[tokio::test]
async fn given_non_json_body_when_analyzing_then_unavailable_as_malformed() {
    let server =
        MockVisionServer::start(MockReply::Respond(200, "<html>gateway</html>"), NOT_CALLED)
            .await;

    let outcome = caption_from(&server, Client::new()).await;

    assert!(matches!(
        outcome,
        ProviderOutcome::Unavailable(ProviderUnavailable::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn given_missing_or_empty_caption_when_analyzing_then_unavailable_without_caption() {
    for body in [
        r#"{"modelVersion": "2023-10-01"}"#,
        r#"{"captionResult": {"confidence": 0.4}}"#,
        r#"{"captionResult": {"text": ""}}"#,
    ] {
        let server = MockVisionServer::start(MockReply::Respond(200, body), NOT_CALLED).await;

        let outcome = caption_from(&server, Client::new()).await;

        assert_eq!(
            outcome,
            ProviderOutcome::Unavailable(ProviderUnavailable::NoCaption),
            "body: {}",
            body
        );
    }
}

#[tokio::test]
async fn given_whitespace_caption_when_analyzing_then_answers_with_blank_text() {
    let server = MockVisionServer::start(
        MockReply::Respond(200, r#"{"captionResult": {"text": "   "}}"#),
        NOT_CALLED,
    )
    .await;

    let outcome = caption_from(&server, Client::new()).await;

    assert_eq!(outcome, ProviderOutcome::Success(String::new()));
}

#[tokio::test]
async fn given_slow_endpoint_when_analyzing_then_unavailable_as_timed_out() {
    let server =
        MockVisionServer::start(MockReply::Hang(Duration::from_secs(2)), NOT_CALLED).await;
    let client = Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let outcome = caption_from(&server, client).await;

    assert_eq!(
        outcome,
        ProviderOutcome::Unavailable(ProviderUnavailable::TimedOut)
    );
}

#[tokio::test]
async fn given_unreachable_endpoint_when_analyzing_then_unavailable_as_request_failed() {
    let outcome = AzureImageAnalysisProvider::new(Client::new(), "http://127.0.0.1:1", "test-key")
        .caption(Bytes::from(png_bytes()))
        .await;

    assert!(matches!(
        outcome,
        ProviderOutcome::Unavailable(ProviderUnavailable::RequestFailed(_))
    ));
}
