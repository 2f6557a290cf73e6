//! Wire records for the provider API.

use serde::{Deserialize, Serialize};

/// A voice offered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Voice {
    #[serde(rename = "voice_id")]
    pub id: String,
    pub name: String,
}

impl Voice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
}

/// Account subscription state. Only the character budget is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    pub character_count: u64,
    pub character_limit: u64,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub next_character_count_reset_unix: Option<i64>,
}

impl Subscription {
    pub fn remaining(&self) -> u64 {
        self.character_limit.saturating_sub(self.character_count)
    }
}

/// Per-run synthesis tuning, sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: i32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.0,
            style: 0,
            use_speaker_boost: true,
        }
    }
}

/// Body of a text-to-speech request.
#[derive(Debug, Clone, Serialize)]
pub struct TtsRequest<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
    pub voice_settings: VoiceSettings,
}
