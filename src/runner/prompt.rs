use crate::script::ScriptLine;
use crate::workspace::GeneratedAudio;
use crate::Result;

/// Operator's answer at the generate prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Skip,
    Edit,
}

impl Action {
    /// `n`/`no` skips, `e`/`edit` edits, anything else (including empty) generates.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "n" | "no" => Self::Skip,
            "e" | "edit" => Self::Edit,
            _ => Self::Generate,
        }
    }
}

/// Operator's verdict after listening to a take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Keep,
    Discard,
}

impl Review {
    /// `n`/`no` discards, anything else keeps.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "n" | "no" => Self::Discard,
            _ => Self::Keep,
        }
    }
}

/// Answer to "not enough characters for the whole script, continue?". Only `n`/`no` stops.
pub fn parse_continue(input: &str) -> bool {
    !matches!(input.trim().to_lowercase().as_str(), "n" | "no")
}

/// Source of operator decisions.
pub trait Prompter {
    fn confirm_over_budget(&mut self, remaining: u64, cost: u64) -> Result<bool>;

    fn choose_action(&mut self, line: &ScriptLine) -> Result<Action>;

    /// Replacement text for `line`. Used for this run only.
    fn edited_text(&mut self, line: &ScriptLine) -> Result<String>;

    fn review(&mut self, line: &ScriptLine, audio: &GeneratedAudio) -> Result<Review>;
}
