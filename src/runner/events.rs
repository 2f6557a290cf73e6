use super::session::RunSummary;
use crate::quota::QuotaSnapshot;
use std::path::PathBuf;

/// Progress notifications for a presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Up-front estimate for the whole script against the current budget.
    Estimate { quota: QuotaSnapshot, cost: u64 },
    /// The operator declined to continue after an over-budget estimate.
    Aborted,
    Prompting {
        line_number: usize,
        speaker: String,
        text: String,
    },
    Edited { line_number: usize, text: String },
    Skipped { line_number: usize },
    QuotaChecked {
        line_number: usize,
        remaining: u64,
        cost: u64,
    },
    Generating { line_number: usize, voice_id: String },
    AudioSaved { line_number: usize, path: PathBuf },
    PlaybackFailed { path: PathBuf, reason: String },
    Kept { line_number: usize, path: PathBuf },
    Discarded { line_number: usize },
    Finished(RunSummary),
}

pub trait EventSink {
    fn emit(&mut self, event: RunEvent);
}

impl EventSink for Vec<RunEvent> {
    fn emit(&mut self, event: RunEvent) {
        self.push(event);
    }
}
