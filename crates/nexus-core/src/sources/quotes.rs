//! ZenQuotes random quote. The upstream wraps each quote in a one-element array.

use serde::Deserialize;
use serde_json::Value;

use super::{get_json, malformed};
use crate::envelope::NormalizedResponse;
use crate::http_client::HttpClient;
use crate::source::{SourceError, SourceId};

const QUOTE_URL: &str = "https://zenquotes.io/api/random";

#[derive(Debug, Deserialize)]
struct QuotePayload {
    q: Option<String>,
    a: Option<String>,
}

pub(super) async fn fetch(http: &dyn HttpClient) -> Result<NormalizedResponse, SourceError> {
    let raw = get_json(http, SourceId::Quotes, QUOTE_URL).await?;
    normalize(raw)
}

fn normalize(raw: Value) -> Result<NormalizedResponse, SourceError> {
    let first = raw
        .as_array()
        .and_then(|entries| entries.first())
        .ok_or_else(|| malformed(SourceId::Quotes, "no quote data received"))?
        .clone();

    let payload: QuotePayload =
        serde_json::from_value(first.clone()).map_err(|e| malformed(SourceId::Quotes, e))?;

    let quote = payload.q.unwrap_or_default();
    if quote.is_empty() {
        return Err(malformed(SourceId::Quotes, "quote text is empty"));
    }
    let author = payload.a.unwrap_or_else(|| String::from("Unknown"));
    let formatted = format!("\"{quote}\" — {author}");

    Ok(NormalizedResponse::Quote {
        quote,
        author,
        formatted,
        // The interesting payload is the single element, not the wrapper array.
        raw: first,
    })
}
