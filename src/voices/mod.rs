//! Voice directory: resolves configured voice references to provider voice IDs.

mod directory;

pub use crate::provider::Voice;
pub use directory::{VoiceBindings, VoiceDirectory};
