use bytes::Bytes;
use reqwest::Client;

use vitrine::application::ports::{CaptionProvider, ProviderOutcome, ProviderUnavailable};
use vitrine::infrastructure::vision::AzureDescribeProvider;

use crate::helpers::{MockReply, MockVisionServer, png_bytes};

const NOT_CALLED: MockReply = MockReply::Respond(500, "{}");

async fn describe_with(body: &'static str) -> (MockVisionServer, ProviderOutcome) {
    let server = MockVisionServer::start(NOT_CALLED, MockReply::Respond(200, body)).await;
    let outcome = AzureDescribeProvider::new(Client::new(), &server.base_url, "test-key")
        .caption(Bytes::from(png_bytes()))
        .await;
    (server, outcome)
}

#[tokio::test]
async fn given_candidates_when_describing_then_returns_first_caption() {
    let (server, outcome) = describe_with(
        r#"{"description": {"tags": ["cat"], "captions": [{"text": "A cat sleeping", "confidence": 0.87}, {"text": "A cat", "confidence": 0.5}]}}"#,
    )
    .await;

    assert_eq!(outcome, ProviderOutcome::Success("A cat sleeping".to_string()));
    assert_eq!(server.describe_hits(), 1);
    assert_eq!(server.analyze_hits(), 0);
}

#[tokio::test]
async fn given_request_when_describing_then_asks_for_single_english_candidate() {
    let (server, _) =
        describe_with(r#"{"description": {"captions": [{"text": "A cat sleeping"}]}}"#).await;

    assert_eq!(*server.seen_keys.lock().unwrap(), vec!["test-key".to_string()]);
    let queries = server.seen_queries.lock().unwrap();
    assert!(queries[0].contains("maxCandidates=1"));
    assert!(queries[0].contains("language=en"));
}

#[tokio::test]
async fn given_no_usable_candidate_when_describing_then_unavailable_without_caption() {
    for body in [
        r#"{"description": {"captions": []}}"#,
        r#"{"description": {"tags": []}}"#,
        r#"{"requestId": "abc"}"#,
        r#"{"description": {"captions": [{"text": ""}]}}"#,
    ] {
        let (_server, outcome) = describe_with(body).await;

        assert_eq!(
            outcome,
            ProviderOutcome::Unavailable(ProviderUnavailable::NoCaption),
            "body: {}",
            body
        );
    }
}

#[tokio::test]
async fn given_error_status_when_describing_then_unavailable_with_status() {
    let server = MockVisionServer::start(
        NOT_CALLED,
        MockReply::Respond(429, r#"{"error": "rate limited"}"#),
    )
    .await;

    let outcome = AzureDescribeProvider::new(Client::new(), &server.base_url, "test-key")
        .caption(Bytes::from(png_bytes()))
        .await;

    assert!(matches!(
        outcome,
        ProviderOutcome::Unavailable(ProviderUnavailable::ErrorStatus { status: 429, .. })
    ));
}

#[tokio::test]
async fn given_whitespace_first_candidate_when_describing_then_answers_with_blank_text() {
    let (_server, outcome) =
        describe_with(r#"{"description": {"captions": [{"text": "  "}]}}"#).await;

    assert_eq!(outcome, ProviderOutcome::Success(String::new()));
}
