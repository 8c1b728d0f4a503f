//! Keyword-driven emotion classification for journal entries.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Emotions the journal classifier can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Sadness,
    Anger,
    Fear,
    Joy,
    Hope,
    Confusion,
    Contemplation,
}

// Checked in this order; the first list with a hit wins.
const SADNESS: &[&str] = &[
    "sad", "depressed", "lonely", "alone", "cry", "tears", "hurt", "pain", "loss", "miss",
];
const ANGER: &[&str] = &[
    "angry", "mad", "furious", "hate", "rage", "frustrated", "annoyed",
];
const FEAR: &[&str] = &[
    "scared", "afraid", "fear", "anxious", "worry", "nervous", "panic", "terrified",
];
const JOY: &[&str] = &[
    "happy", "joy", "excited", "great", "wonderful", "amazing", "love", "blessed", "grateful",
];
const HOPE: &[&str] = &[
    "hope", "better", "future", "dream", "wish", "believe", "faith", "optimistic",
];
const CONFUSION: &[&str] = &[
    "confused", "lost", "uncertain", "don't know", "unsure", "doubt", "question",
];

impl Emotion {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Joy => "joy",
            Self::Hope => "hope",
            Self::Confusion => "confusion",
            Self::Contemplation => "contemplation",
        }
    }

    /// Classify a journal entry by scanning the keyword lists in priority
    /// order. Entries matching nothing land in contemplation.
    pub fn classify(entry: &str) -> Self {
        let entry = entry.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|keyword| entry.contains(keyword));

        if matches(SADNESS) {
            Self::Sadness
        } else if matches(ANGER) {
            Self::Anger
        } else if matches(FEAR) {
            Self::Fear
        } else if matches(JOY) {
            Self::Joy
        } else if matches(HOPE) {
            Self::Hope
        } else if matches(CONFUSION) {
            Self::Confusion
        } else {
            Self::Contemplation
        }
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
