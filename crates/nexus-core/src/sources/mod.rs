//! Fetch-and-normalize pipeline over the registered external sources.
//!
//! Every source goes through the same sequence: cache check, one outbound GET
//! with a bounded timeout, reshape into [`NormalizedResponse`], cache store.
//! Registering a source means adding a `SourceId` variant and its module here;
//! the match in [`ExternalSources::fetch`] keeps the set closed at compile time.

mod advice;
mod catfacts;
mod jokes;
mod quotes;
mod weather;

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::envelope::NormalizedResponse;
use crate::http_client::{HttpClient, HttpRequest};
use crate::source::{SourceError, SourceId};

const FETCH_TIMEOUT_MS: u64 = 5_000;
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Uniform front over the registered third-party data sources.
///
/// Owns its cache; failures are returned as-is, never retried and never
/// written to the cache, so one source's trouble cannot leak into another's
/// entries.
pub struct ExternalSources {
    http: Arc<dyn HttpClient>,
    cache: CacheStore<NormalizedResponse>,
    weather_api_key: Option<String>,
    weather_city: String,
}

impl ExternalSources {
    pub fn new(http: Arc<dyn HttpClient>, config: &Config) -> Self {
        Self {
            http,
            cache: CacheStore::new(),
            weather_api_key: config.weather_api_key.clone(),
            weather_city: config.weather_city.clone(),
        }
    }

    fn cache_key(source: SourceId) -> String {
        format!("external_api:{source}")
    }

    /// Fetch a normalized response for `source`, serving from cache within the
    /// TTL window.
    pub async fn fetch(&self, source: SourceId) -> Result<NormalizedResponse, SourceError> {
        let key = Self::cache_key(source);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(%source, "serving cached response");
            return Ok(cached);
        }

        let fresh = match source {
            SourceId::Weather => {
                weather::fetch(
                    self.http.as_ref(),
                    self.weather_api_key.as_deref(),
                    &self.weather_city,
                )
                .await
            }
            SourceId::Jokes => jokes::fetch(self.http.as_ref()).await,
            SourceId::Quotes => quotes::fetch(self.http.as_ref()).await,
            SourceId::Advice => advice::fetch(self.http.as_ref()).await,
            SourceId::CatFacts => catfacts::fetch(self.http.as_ref()).await,
        }?;

        self.cache.set(key, fresh.clone(), CACHE_TTL).await;
        Ok(fresh)
    }

    /// Parse a caller-supplied source name and fetch it.
    ///
    /// An unsupported name fails before any network activity.
    pub async fn fetch_named(&self, name: &str) -> Result<NormalizedResponse, SourceError> {
        let source: SourceId = name.parse()?;
        self.fetch(source).await
    }

    /// Drop expired cache entries; run periodically by the server.
    pub async fn purge_expired(&self) {
        self.cache.cleanup_expired().await;
    }
}

/// One GET with the standard timeout, folded into `SourceError` on any
/// transport failure, non-success status, or non-JSON body.
async fn get_json(
    http: &dyn HttpClient,
    source: SourceId,
    url: &str,
) -> Result<Value, SourceError> {
    let request = HttpRequest::get(url).with_timeout_ms(FETCH_TIMEOUT_MS);

    let response = http.execute(request).await.map_err(|e| {
        warn!(%source, error = %e, "upstream request failed");
        SourceError::Transport {
            id: source,
            message: e.message().to_owned(),
        }
    })?;

    if !response.is_success() {
        warn!(%source, status = response.status, "upstream returned non-success status");
        return Err(SourceError::UpstreamStatus {
            id: source,
            status: response.status,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| SourceError::MalformedPayload {
        id: source,
        message: e.to_string(),
    })
}

fn malformed(source: SourceId, error: impl std::fmt::Display) -> SourceError {
    SourceError::MalformedPayload {
        id: source,
        message: error.to_string(),
    }
}
