//! Advice Slip random advice.

use serde::Deserialize;
use serde_json::Value;

use super::{get_json, malformed};
use crate::envelope::NormalizedResponse;
use crate::http_client::HttpClient;
use crate::source::{SourceError, SourceId};

const ADVICE_URL: &str = "https://api.adviceslip.com/advice";

#[derive(Debug, Deserialize)]
struct AdvicePayload {
    slip: AdviceSlip,
}

#[derive(Debug, Deserialize)]
struct AdviceSlip {
    id: u64,
    advice: String,
}

pub(super) async fn fetch(http: &dyn HttpClient) -> Result<NormalizedResponse, SourceError> {
    let raw = get_json(http, SourceId::Advice, ADVICE_URL).await?;
    normalize(raw)
}

fn normalize(raw: Value) -> Result<NormalizedResponse, SourceError> {
    let payload: AdvicePayload =
        serde_json::from_value(raw.clone()).map_err(|e| malformed(SourceId::Advice, e))?;

    Ok(NormalizedResponse::Advice {
        advice: payload.slip.advice,
        id: payload.slip.id,
        raw,
    })
}
