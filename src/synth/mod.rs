//! Speech synthesis: one blocking request per line, no retries.

mod synthesizer;

pub use crate::provider::VoiceSettings;
pub use synthesizer::{SpeechSynthesizer, Synthesize, MODEL_ID, NOT_FOUND_HINT};
