use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SourceId;

/// Uniform shape every upstream payload is reshaped into.
///
/// The `type` tag names the kind of data; `raw` preserves the unmodified
/// upstream payload for debugging. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NormalizedResponse {
    Weather {
        location: String,
        temperature: String,
        description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        humidity: Option<String>,
        raw: Value,
    },
    Joke {
        joke: String,
        category: String,
        raw: Value,
    },
    Quote {
        quote: String,
        author: String,
        formatted: String,
        raw: Value,
    },
    Advice {
        advice: String,
        id: u64,
        raw: Value,
    },
    CatFact {
        fact: String,
        length: u64,
        raw: Value,
    },
}

impl NormalizedResponse {
    /// The source this response was fetched from.
    pub const fn source_id(&self) -> SourceId {
        match self {
            Self::Weather { .. } => SourceId::Weather,
            Self::Joke { .. } => SourceId::Jokes,
            Self::Quote { .. } => SourceId::Quotes,
            Self::Advice { .. } => SourceId::Advice,
            Self::CatFact { .. } => SourceId::CatFacts,
        }
    }

    /// One-line rendering of the interesting content, used when two responses
    /// are stitched into a single sentence.
    pub fn summary(&self) -> String {
        match self {
            Self::Weather {
                location,
                temperature,
                description,
                ..
            } => format!("The weather in {location} is {description}, {temperature}"),
            Self::Joke { joke, .. } => joke.clone(),
            Self::Quote { formatted, .. } => formatted.clone(),
            Self::Advice { advice, .. } => advice.clone(),
            Self::CatFact { fact, .. } => fact.clone(),
        }
    }
}
