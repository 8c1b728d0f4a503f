//! Behavior-driven tests for the external source normalizer.
//!
//! These tests verify HOW the pipeline behaves end to end: cache reuse,
//! atomic failure, and the exact envelope produced for each upstream shape.

mod support;

use std::sync::Arc;

use nexus_core::{Config, ExternalSources, HttpError, HttpResponse, SourceId};
use support::RecordingHttpClient;

fn sources_with(client: Arc<RecordingHttpClient>, config: Config) -> ExternalSources {
    ExternalSources::new(client, &config)
}

fn keyless_config() -> Config {
    Config {
        weather_api_key: None,
        weather_city: String::from("London"),
    }
}

fn keyed_config() -> Config {
    Config {
        weather_api_key: Some(String::from("demo-key")),
        weather_city: String::from("London"),
    }
}

// =============================================================================
// Caching behavior
// =============================================================================

#[tokio::test]
async fn when_fetched_twice_within_ttl_only_one_network_call_is_made() {
    // Given: an upstream that would answer every request
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse::ok_json(
        r#"[{"q": "Fear is temporary.", "a": "Anonymous"}]"#,
    ))]);
    let sources = sources_with(client.clone(), keyless_config());

    // When: the same source is fetched twice in a row
    let first = sources.fetch(SourceId::Quotes).await.expect("first fetch");
    let second = sources.fetch(SourceId::Quotes).await.expect("second fetch");

    // Then: the second response came from the cache
    assert_eq!(client.call_count(), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn when_a_fetch_fails_nothing_is_cached() {
    // Given: an upstream that yields an empty quote array, then a valid one
    let client = RecordingHttpClient::with_responses([
        Ok(HttpResponse::ok_json("[]")),
        Ok(HttpResponse::ok_json(
            r#"[{"q": "The house remembers.", "a": "Unknown"}]"#,
        )),
    ]);
    let sources = sources_with(client.clone(), keyless_config());

    // When: the first fetch fails
    sources
        .fetch(SourceId::Quotes)
        .await
        .expect_err("empty array must fail");

    // Then: the failure was not cached and the retry goes back upstream
    let retry = sources.fetch(SourceId::Quotes).await.expect("retry succeeds");
    assert_eq!(client.call_count(), 2);
    assert_eq!(retry.source_id(), SourceId::Quotes);
}

#[tokio::test]
async fn when_one_source_fails_another_sources_cache_entry_survives() {
    // Given: quotes succeed, jokes blow up at the transport
    let client = RecordingHttpClient::with_responses([
        Ok(HttpResponse::ok_json(
            r#"[{"q": "Fear is temporary.", "a": "Anonymous"}]"#,
        )),
        Err(HttpError::new("connection failed: refused")),
    ]);
    let sources = sources_with(client.clone(), keyless_config());

    sources.fetch(SourceId::Quotes).await.expect("quotes cached");
    sources
        .fetch(SourceId::Jokes)
        .await
        .expect_err("jokes must fail");

    // When: quotes are fetched again
    sources.fetch(SourceId::Quotes).await.expect("still cached");

    // Then: the cached quote entry was untouched by the joke failure
    assert_eq!(client.call_count(), 2);
}

// =============================================================================
// Source selection
// =============================================================================

#[tokio::test]
async fn when_source_name_is_unsupported_no_network_call_happens() {
    let client = RecordingHttpClient::with_responses([]);
    let sources = sources_with(client.clone(), keyless_config());

    let error = sources
        .fetch_named("unsupported_name")
        .await
        .expect_err("unknown name must fail");

    assert_eq!(error.code(), "source.unsupported");
    assert!(error.to_string().contains("unsupported_name"));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn when_source_name_is_registered_fetch_named_resolves_it() {
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse::ok_json(
        r#"{"slip": {"id": 7, "advice": "Lock the door."}}"#,
    ))]);
    let sources = sources_with(client.clone(), keyless_config());

    let response = sources.fetch_named("advice").await.expect("fetch succeeds");

    assert_eq!(response.source_id(), SourceId::Advice);
    assert!(client.calls()[0].contains("adviceslip.com"));
}

// =============================================================================
// Normalization envelopes
// =============================================================================

#[tokio::test]
async fn quote_envelope_carries_formatted_text_and_raw_payload() {
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse::ok_json(
        r#"[{"q": "Fear is temporary.", "a": "Anonymous"}]"#,
    ))]);
    let sources = sources_with(client, keyless_config());

    let response = sources.fetch(SourceId::Quotes).await.expect("fetch succeeds");
    let value = serde_json::to_value(&response).expect("serializes");

    assert_eq!(value["type"], "quote");
    assert_eq!(value["quote"], "Fear is temporary.");
    assert_eq!(value["author"], "Anonymous");
    assert_eq!(value["formatted"], "\"Fear is temporary.\" — Anonymous");
    assert_eq!(value["raw"]["q"], "Fear is temporary.");
}

#[tokio::test]
async fn weather_without_api_key_degrades_to_fallback_without_network() {
    let client = RecordingHttpClient::with_responses([]);
    let sources = sources_with(client.clone(), keyless_config());

    let response = sources.fetch(SourceId::Weather).await.expect("fallback");
    let value = serde_json::to_value(&response).expect("serializes");

    assert_eq!(value["type"], "weather");
    assert_eq!(value["location"], "Unknown Location");
    assert_eq!(value["temperature"], "??°C");
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn weather_with_api_key_queries_configured_city() {
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse::ok_json(
        r#"{"name": "London", "main": {"temp": 6.5, "humidity": 91}, "weather": [{"description": "thick fog"}]}"#,
    ))]);
    let sources = sources_with(client.clone(), keyed_config());

    let response = sources.fetch(SourceId::Weather).await.expect("fetch succeeds");
    sources
        .fetch(SourceId::Weather)
        .await
        .expect("second fetch is served from cache");
    assert_eq!(client.call_count(), 1);

    let value = serde_json::to_value(&response).expect("serializes");

    assert_eq!(value["location"], "London");
    assert_eq!(value["temperature"], "6.5°C");
    assert_eq!(value["humidity"], "91%");

    let url = &client.calls()[0];
    assert!(url.contains("api.openweathermap.org"));
    assert!(url.contains("q=London"));
    assert!(url.contains("appid=demo-key"));
    assert!(url.contains("units=metric"));
}

#[tokio::test]
async fn two_part_joke_is_joined_into_one_line() {
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse::ok_json(
        r#"{"type": "twopart", "setup": "Who is there?", "delivery": "Nobody.", "category": "Spooky"}"#,
    ))]);
    let sources = sources_with(client, keyless_config());

    let response = sources.fetch(SourceId::Jokes).await.expect("fetch succeeds");
    let value = serde_json::to_value(&response).expect("serializes");

    assert_eq!(value["type"], "joke");
    assert_eq!(value["joke"], "Who is there? - Nobody.");
    assert_eq!(value["category"], "Spooky");
}

#[tokio::test]
async fn catfact_envelope_keeps_upstream_length() {
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse::ok_json(
        r#"{"fact": "Cats can see in near darkness.", "length": 30}"#,
    ))]);
    let sources = sources_with(client, keyless_config());

    let response = sources
        .fetch(SourceId::CatFacts)
        .await
        .expect("fetch succeeds");
    let value = serde_json::to_value(&response).expect("serializes");

    assert_eq!(value["type"], "catfact");
    assert_eq!(value["length"], 30);
}

// =============================================================================
// Upstream failure handling
// =============================================================================

#[tokio::test]
async fn non_success_status_becomes_one_source_error() {
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse {
        status: 503,
        body: String::from("upstream down"),
    })]);
    let sources = sources_with(client, keyless_config());

    let error = sources
        .fetch(SourceId::Advice)
        .await
        .expect_err("must fail");

    assert_eq!(error.code(), "source.status");
    assert!(error.to_string().contains("503"));
}

#[tokio::test]
async fn transport_failure_becomes_one_source_error() {
    let client = RecordingHttpClient::with_responses([Err(HttpError::new(
        "request timeout: deadline elapsed",
    ))]);
    let sources = sources_with(client, keyless_config());

    let error = sources.fetch(SourceId::Jokes).await.expect_err("must fail");

    assert_eq!(error.code(), "source.transport");
    assert!(error.to_string().contains("timeout"));
}

#[tokio::test]
async fn non_json_body_becomes_one_source_error() {
    let client = RecordingHttpClient::with_responses([Ok(HttpResponse::ok_json(
        "<html>not json</html>",
    ))]);
    let sources = sources_with(client, keyless_config());

    let error = sources
        .fetch(SourceId::CatFacts)
        .await
        .expect_err("must fail");

    assert_eq!(error.code(), "source.malformed");
}
