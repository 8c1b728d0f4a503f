//! Cat Facts random fact.

use serde::Deserialize;
use serde_json::Value;

use super::{get_json, malformed};
use crate::envelope::NormalizedResponse;
use crate::http_client::HttpClient;
use crate::source::{SourceError, SourceId};

const CATFACT_URL: &str = "https://catfact.ninja/fact";

#[derive(Debug, Deserialize)]
struct CatFactPayload {
    fact: String,
    length: Option<u64>,
}

pub(super) async fn fetch(http: &dyn HttpClient) -> Result<NormalizedResponse, SourceError> {
    let raw = get_json(http, SourceId::CatFacts, CATFACT_URL).await?;
    normalize(raw)
}

fn normalize(raw: Value) -> Result<NormalizedResponse, SourceError> {
    let payload: CatFactPayload =
        serde_json::from_value(raw.clone()).map_err(|e| malformed(SourceId::CatFacts, e))?;

    let length = payload
        .length
        .unwrap_or(payload.fact.chars().count() as u64);

    Ok(NormalizedResponse::CatFact {
        fact: payload.fact,
        length,
        raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_fact_with_length() {
        let raw = json!({"fact": "Cats can see in near darkness.", "length": 30});

        let response = normalize(raw).expect("valid payload normalizes");
        match response {
            NormalizedResponse::CatFact { fact, length, .. } => {
                assert_eq!(fact, "Cats can see in near darkness.");
                assert_eq!(length, 30);
            }
            other => panic!("expected catfact, got {other:?}"),
        }
    }

    #[test]
    fn missing_length_falls_back_to_character_count() {
        let raw = json!({"fact": "Cats purr."});

        let response = normalize(raw).expect("valid payload normalizes");
        match response {
            NormalizedResponse::CatFact { length, .. } => assert_eq!(length, 10),
            other => panic!("expected catfact, got {other:?}"),
        }
    }

    #[test]
    fn missing_fact_is_malformed() {
        let err = normalize(json!({"length": 5})).expect_err("must fail");
        assert_eq!(err.code(), "source.malformed");
    }
}
