use crate::provider::{ProviderClient, Voice};
use crate::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// Voices available on the account, fetched once per run.
#[derive(Debug, Clone, Default)]
pub struct VoiceDirectory {
    voices: Vec<Voice>,
}

impl VoiceDirectory {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self { voices }
    }

    /// Fetch the provider's voice list, replacing whatever was loaded before.
    pub fn refresh(&mut self, client: &ProviderClient) -> Result<()> {
        self.voices = client.list_voices()?;
        info!(count = self.voices.len(), "voice directory refreshed");
        Ok(())
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn by_id(&self, id: &str) -> Option<&Voice> {
        self.voices.iter().find(|v| v.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().find(|v| v.name == name)
    }

    /// Resolve a voice ID or name to a canonical ID.
    ///
    /// An exact ID match always wins, so a value that is already an ID is never
    /// re-resolved by name.
    pub fn resolve(&self, reference: &str) -> Result<String> {
        self.by_id(reference)
            .or_else(|| self.by_name(reference))
            .map(|v| v.id.clone())
            .ok_or_else(|| Error::UnknownVoice {
                reference: reference.to_string(),
            })
    }

    /// Resolve every configured speaker binding.
    ///
    /// Unresolvable references are logged and left unbound; generation for those
    /// speakers fails later instead of aborting the whole run here.
    pub fn bind(&self, configured: &BTreeMap<String, String>) -> VoiceBindings {
        let mut bound = HashMap::with_capacity(configured.len());
        for (speaker, reference) in configured {
            match self.resolve(reference) {
                Ok(id) => {
                    bound.insert(speaker.clone(), id);
                }
                Err(e) => {
                    warn!(speaker = %speaker, error = %e, "invalid voice ID / name, speaker left unbound");
                }
            }
        }
        VoiceBindings { bound }
    }
}

/// Speaker label to resolved voice ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceBindings {
    bound: HashMap<String, String>,
}

impl VoiceBindings {
    pub fn voice_for(&self, speaker: &str) -> Option<&str> {
        self.bound.get(speaker).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

impl FromIterator<(String, String)> for VoiceBindings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            bound: iter.into_iter().collect(),
        }
    }
}
