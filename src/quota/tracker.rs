use crate::provider::ProviderClient;
use crate::script::ScriptLine;
use crate::Result;
use tracing::debug;

/// Characters billed per character of input text.
pub const COST_PER_CHARACTER: u64 = 1;

/// Remaining character budget as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaSnapshot {
    pub remaining: u64,
    pub tier: Option<String>,
    /// Unix timestamp of the next character-count reset, when the plan has one.
    pub resets_at_unix: Option<i64>,
}

pub trait QuotaSource {
    /// Fetch the current budget. Implementations must not cache.
    fn snapshot(&self) -> Result<QuotaSnapshot>;

    fn remaining(&self) -> Result<u64> {
        Ok(self.snapshot()?.remaining)
    }

    fn cost_per_character(&self) -> u64 {
        COST_PER_CHARACTER
    }

    fn cost_of(&self, text: &str) -> u64 {
        text.chars().count() as u64 * self.cost_per_character()
    }

    fn cost_of_script(&self, lines: &[ScriptLine]) -> u64 {
        lines.iter().map(|l| self.cost_of(&l.text)).sum()
    }
}

/// Quota source backed by the provider's subscription endpoint.
pub struct QuotaTracker<'a> {
    client: &'a ProviderClient,
}

impl<'a> QuotaTracker<'a> {
    pub fn new(client: &'a ProviderClient) -> Self {
        Self { client }
    }
}

impl QuotaSource for QuotaTracker<'_> {
    fn snapshot(&self) -> Result<QuotaSnapshot> {
        let subscription = self.client.subscription()?;
        let snapshot = QuotaSnapshot {
            remaining: subscription.remaining(),
            tier: subscription.tier,
            resets_at_unix: subscription.next_character_count_reset_unix,
        };
        debug!(remaining = snapshot.remaining, "quota fetched");
        Ok(snapshot)
    }
}
