//! OpenWeatherMap current conditions, with a keyless fallback.

use serde::Deserialize;
use serde_json::Value;

use super::{get_json, malformed};
use crate::envelope::NormalizedResponse;
use crate::http_client::HttpClient;
use crate::source::{SourceError, SourceId};

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    name: String,
    main: WeatherMain,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
    humidity: u64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

pub(super) async fn fetch(
    http: &dyn HttpClient,
    api_key: Option<&str>,
    city: &str,
) -> Result<NormalizedResponse, SourceError> {
    let Some(api_key) = api_key else {
        // No key configured: degrade to canned conditions instead of failing.
        return Ok(fallback());
    };

    let url = format!(
        "http://api.openweathermap.org/data/2.5/weather?q={}&appid={}&units=metric",
        urlencoding::encode(city),
        urlencoding::encode(api_key),
    );

    let raw = get_json(http, SourceId::Weather, &url).await?;
    normalize(raw)
}

fn normalize(raw: Value) -> Result<NormalizedResponse, SourceError> {
    let payload: WeatherPayload =
        serde_json::from_value(raw.clone()).map_err(|e| malformed(SourceId::Weather, e))?;

    let description = payload
        .weather
        .first()
        .map(|condition| condition.description.clone())
        .ok_or_else(|| malformed(SourceId::Weather, "weather conditions array is empty"))?;

    Ok(NormalizedResponse::Weather {
        location: payload.name,
        temperature: format!("{}°C", payload.main.temp),
        description,
        humidity: Some(format!("{}%", payload.main.humidity)),
        raw,
    })
}

fn fallback() -> NormalizedResponse {
    NormalizedResponse::Weather {
        location: String::from("Unknown Location"),
        temperature: String::from("??°C"),
        description: String::from("Mysterious fog"),
        humidity: None,
        raw: Value::String(String::from("Weather API key not configured")),
    }
}
