//! Wayback Machine snapshot retrieval.
//!
//! Two upstream calls per miss: the availability endpoint to locate the
//! closest snapshot, then the snapshot page itself. Results are cached per
//! URL; that key space is unbounded, which is what the server's periodic
//! `purge_expired` sweep is for.

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::cache::CacheStore;
use crate::http_client::{HttpClient, HttpRequest};

const AVAILABILITY_URL: &str = "http://archive.org/wayback/available";
const SNAPSHOT_TIMEOUT_MS: u64 = 10_000;
const CACHE_TTL: Duration = Duration::from_secs(300);
const MAX_HTML_BYTES: usize = 50_000;
const TRUNCATION_MARKER: &str = "\n<!-- Content truncated for display -->";

/// Archived page content with its archive metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSnapshot {
    pub html: String,
    /// `YYYY-MM-DD`, derived from the archive's 14-digit timestamp.
    pub archive_date: String,
    pub archive_url: String,
}

/// Single error kind every snapshot failure collapses into.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("invalid url: {message}")]
    InvalidUrl { message: String },

    #[error("no archived version found for {url}")]
    NoSnapshot { url: String },

    #[error("archive request failed: {message}")]
    Transport { message: String },

    #[error("archive returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("failed to parse archive response: {message}")]
    Malformed { message: String },
}

impl SnapshotError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "snapshot.invalid_url",
            Self::NoSnapshot { .. } => "snapshot.not_found",
            Self::Transport { .. } => "snapshot.transport",
            Self::UpstreamStatus { .. } => "snapshot.status",
            Self::Malformed { .. } => "snapshot.malformed",
        }
    }

    /// The caller supplied a bad URL, as opposed to the archive failing us.
    pub const fn is_invalid_url(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    #[serde(default)]
    archived_snapshots: Option<ArchivedSnapshots>,
}

#[derive(Debug, Deserialize)]
struct ArchivedSnapshots {
    closest: Option<ClosestSnapshot>,
}

#[derive(Debug, Deserialize)]
struct ClosestSnapshot {
    url: String,
    timestamp: String,
}

/// Fetches and caches archived page snapshots.
pub struct SnapshotService {
    http: Arc<dyn HttpClient>,
    cache: CacheStore<ArchiveSnapshot>,
}

impl SnapshotService {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            cache: CacheStore::new(),
        }
    }

    /// Fetch the closest archived snapshot of `url`, serving from cache within
    /// the TTL window.
    pub async fn fetch(&self, url: &str) -> Result<ArchiveSnapshot, SnapshotError> {
        let validated = validate_url(url)?;

        if let Some(cached) = self.cache.get(&validated).await {
            return Ok(cached);
        }

        let availability_url = format!(
            "{AVAILABILITY_URL}?url={}",
            urlencoding::encode(&validated)
        );
        let body = self.get(&availability_url).await?;

        let availability: AvailabilityResponse =
            serde_json::from_str(&body).map_err(|e| SnapshotError::Malformed {
                message: e.to_string(),
            })?;

        let closest = availability
            .archived_snapshots
            .and_then(|snapshots| snapshots.closest)
            .ok_or_else(|| SnapshotError::NoSnapshot {
                url: validated.clone(),
            })?;

        let archive_date = format_wayback_timestamp(&closest.timestamp);
        let page = self.get(&closest.url).await?;

        let snapshot = ArchiveSnapshot {
            html: clean_archived_html(&page),
            archive_date,
            archive_url: closest.url,
        };
        self.cache
            .set(validated, snapshot.clone(), CACHE_TTL)
            .await;
        Ok(snapshot)
    }

    /// Drop expired cache entries; run periodically by the server.
    pub async fn purge_expired(&self) {
        self.cache.cleanup_expired().await;
    }

    async fn get(&self, url: &str) -> Result<String, SnapshotError> {
        let request = HttpRequest::get(url).with_timeout_ms(SNAPSHOT_TIMEOUT_MS);

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(error = %e, "archive request failed");
            SnapshotError::Transport {
                message: e.message().to_owned(),
            }
        })?;

        if !response.is_success() {
            warn!(status = response.status, "archive returned non-success status");
            return Err(SnapshotError::UpstreamStatus {
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

fn validate_url(url: &str) -> Result<String, SnapshotError> {
    let trimmed = url.trim();
    let parsed = reqwest::Url::parse(trimmed).map_err(|e| SnapshotError::InvalidUrl {
        message: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SnapshotError::InvalidUrl {
            message: String::from("only HTTP and HTTPS protocols are supported"),
        });
    }
    if parsed.host_str().is_none() {
        return Err(SnapshotError::InvalidUrl {
            message: String::from("url must include a host"),
        });
    }

    Ok(trimmed.to_owned())
}

fn format_wayback_timestamp(timestamp: &str) -> String {
    // 14-digit YYYYMMDDHHMMSS; anything shorter is passed through untouched.
    if timestamp.len() >= 8 && timestamp[..8].chars().all(|ch| ch.is_ascii_digit()) {
        format!(
            "{}-{}-{}",
            &timestamp[..4],
            &timestamp[4..6],
            &timestamp[6..8]
        )
    } else {
        timestamp.to_owned()
    }
}

/// Strip the Wayback toolbar and archive-injected script/style blocks, then
/// bound the size of what we hand back.
fn clean_archived_html(html: &str) -> String {
    let toolbar = Regex::new(
        r"(?is)<!--\s*BEGIN WAYBACK TOOLBAR INSERT\s*-->.*?<!--\s*END WAYBACK TOOLBAR INSERT\s*-->",
    )
    .expect("toolbar pattern is valid");
    let cleaned = toolbar.replace_all(html, "");

    let mut cleaned = cleaned.into_owned();
    for pattern in [
        r"(?is)<script\b.*?</script\s*>",
        r"(?is)<style\b.*?</style\s*>",
    ] {
        let block = Regex::new(pattern).expect("block pattern is valid");
        cleaned = block
            .replace_all(&cleaned, |caps: &regex::Captures<'_>| {
                let text = caps[0].to_ascii_lowercase();
                if text.contains("archive.org") || text.contains("wayback") {
                    String::new()
                } else {
                    caps[0].to_owned()
                }
            })
            .into_owned();
    }

    truncate_html(cleaned)
}

fn truncate_html(mut html: String) -> String {
    if html.len() <= MAX_HTML_BYTES {
        return html;
    }

    let mut cut = MAX_HTML_BYTES;
    while !html.is_char_boundary(cut) {
        cut -= 1;
    }
    html.truncate(cut);
    html.push_str(TRUNCATION_MARKER);
    html
}
