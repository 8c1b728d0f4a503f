use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical identifiers for the registered external data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Weather,
    Jokes,
    Quotes,
    Advice,
    CatFacts,
}

impl SourceId {
    pub const ALL: [Self; 5] = [
        Self::Weather,
        Self::Jokes,
        Self::Quotes,
        Self::Advice,
        Self::CatFacts,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Jokes => "jokes",
            Self::Quotes => "quotes",
            Self::Advice => "advice",
            Self::CatFacts => "catfacts",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = SourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weather" => Ok(Self::Weather),
            "jokes" => Ok(Self::Jokes),
            "quotes" => Ok(Self::Quotes),
            "advice" => Ok(Self::Advice),
            "catfacts" => Ok(Self::CatFacts),
            other => Err(SourceError::UnsupportedSource {
                name: other.to_owned(),
            }),
        }
    }
}

/// Single error kind every source failure collapses into.
///
/// Callers never see upstream-specific error types; the variant carries enough
/// to explain the failure and pick an envelope code at the HTTP boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("unsupported source '{name}', expected one of weather, jokes, quotes, advice, catfacts")]
    UnsupportedSource { name: String },

    #[error("{id} request failed: {message}")]
    Transport { id: SourceId, message: String },

    #[error("{id} returned status {status}")]
    UpstreamStatus { id: SourceId, status: u16 },

    #[error("failed to parse {id} payload: {message}")]
    MalformedPayload { id: SourceId, message: String },
}

impl SourceError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedSource { .. } => "source.unsupported",
            Self::Transport { .. } => "source.transport",
            Self::UpstreamStatus { .. } => "source.status",
            Self::MalformedPayload { .. } => "source.malformed",
        }
    }

    pub const fn retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::UpstreamStatus { .. })
    }
}
