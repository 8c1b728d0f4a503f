//! JokeAPI random joke, single and two-part forms.

use serde::Deserialize;
use serde_json::Value;

use super::{get_json, malformed};
use crate::envelope::NormalizedResponse;
use crate::http_client::HttpClient;
use crate::source::{SourceError, SourceId};

const JOKE_URL: &str = "https://v2.jokeapi.dev/joke/Any?safe-mode";

#[derive(Debug, Deserialize)]
struct JokePayload {
    #[serde(rename = "type")]
    kind: String,
    joke: Option<String>,
    setup: Option<String>,
    delivery: Option<String>,
    category: Option<String>,
}

pub(super) async fn fetch(http: &dyn HttpClient) -> Result<NormalizedResponse, SourceError> {
    let raw = get_json(http, SourceId::Jokes, JOKE_URL).await?;
    normalize(raw)
}

fn normalize(raw: Value) -> Result<NormalizedResponse, SourceError> {
    let payload: JokePayload =
        serde_json::from_value(raw.clone()).map_err(|e| malformed(SourceId::Jokes, e))?;

    let joke = if payload.kind == "single" {
        payload
            .joke
            .ok_or_else(|| malformed(SourceId::Jokes, "single joke is missing its text"))?
    } else {
        let setup = payload
            .setup
            .ok_or_else(|| malformed(SourceId::Jokes, "two-part joke is missing its setup"))?;
        let delivery = payload
            .delivery
            .ok_or_else(|| malformed(SourceId::Jokes, "two-part joke is missing its delivery"))?;
        format!("{setup} - {delivery}")
    };

    Ok(NormalizedResponse::Joke {
        joke,
        category: payload.category.unwrap_or_else(|| String::from("Unknown")),
        raw,
    })
}
