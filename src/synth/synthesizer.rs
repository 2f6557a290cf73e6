use crate::provider::{ProviderClient, TtsRequest, VoiceSettings};
use crate::{Error, Result};
use tracing::info;

/// Model every request is synthesized with.
pub const MODEL_ID: &str = "eleven_monolingual_v1";

/// Guidance attached to a 404 from the synthesis endpoint. That status usually
/// means the request text was malformed rather than a missing voice.
pub const NOT_FOUND_HINT: &str =
    "verify the script file's encoding and content (try copying its contents into a fresh .txt file)";

pub trait Synthesize {
    /// Synthesize `text` with the given voice, returning the encoded audio.
    fn synthesize(&self, text: &str, voice_id: &str, settings: &VoiceSettings) -> Result<Vec<u8>>;
}

/// Synthesizer backed by the provider's text-to-speech endpoint.
pub struct SpeechSynthesizer<'a> {
    client: &'a ProviderClient,
    model_id: String,
}

impl<'a> SpeechSynthesizer<'a> {
    pub fn new(client: &'a ProviderClient) -> Self {
        Self {
            client,
            model_id: MODEL_ID.to_string(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl Synthesize for SpeechSynthesizer<'_> {
    fn synthesize(&self, text: &str, voice_id: &str, settings: &VoiceSettings) -> Result<Vec<u8>> {
        let request = TtsRequest {
            text,
            model_id: &self.model_id,
            voice_settings: *settings,
        };
        match self.client.text_to_speech(voice_id, &request) {
            Ok(audio) => {
                info!(voice_id, bytes = audio.len(), "speech synthesized");
                Ok(audio)
            }
            Err(Error::Provider {
                status: 404, body, ..
            }) => Err(Error::Provider {
                status: 404,
                body,
                hint: Some(NOT_FOUND_HINT.to_string()),
            }),
            Err(e) => Err(e),
        }
    }
}
