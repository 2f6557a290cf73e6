use super::events::{EventSink, RunEvent};
use super::prompt::{Action, Prompter, Review};
use crate::playback::Player;
use crate::quota::QuotaSource;
use crate::script::{Script, ScriptLine};
use crate::synth::{Synthesize, VoiceSettings};
use crate::voices::VoiceBindings;
use crate::workspace::{ensure_output_dir, GeneratedAudio};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Tally of a finished (or aborted) session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub kept: usize,
    pub skipped: usize,
    /// Every synthesized take, discarded ones included.
    pub takes: usize,
    pub aborted: bool,
}

/// Generate-review-retry loop over a script.
pub struct InteractiveRunner<'a> {
    quota: &'a dyn QuotaSource,
    synthesizer: &'a dyn Synthesize,
    player: &'a dyn Player,
    bindings: &'a VoiceBindings,
    settings: VoiceSettings,
    output_dir: PathBuf,
}

impl<'a> InteractiveRunner<'a> {
    pub fn builder() -> InteractiveRunnerBuilder<'a> {
        InteractiveRunnerBuilder::new()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run the session from source line `start_line` to the end of the script.
    pub fn run(
        &self,
        script: &Script,
        start_line: usize,
        prompter: &mut dyn Prompter,
        events: &mut dyn EventSink,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let quota = self.quota.snapshot()?;
        let cost = self.quota.cost_of_script(script.lines());
        let remaining = quota.remaining;
        events.emit(RunEvent::Estimate { quota, cost });
        if cost > remaining && !prompter.confirm_over_budget(remaining, cost)? {
            summary.aborted = true;
            events.emit(RunEvent::Aborted);
            return Ok(summary);
        }

        ensure_output_dir(&self.output_dir)?;
        info!(start_line, output_dir = %self.output_dir.display(), "session started");

        for line in script.from_line(start_line) {
            self.process_line(line.clone(), prompter, events, &mut summary)
                .map_err(|e| e.at_line(line.line_number))?;
        }

        info!(kept = summary.kept, skipped = summary.skipped, "session finished");
        events.emit(RunEvent::Finished(summary));
        Ok(summary)
    }

    fn process_line(
        &self,
        mut line: ScriptLine,
        prompter: &mut dyn Prompter,
        events: &mut dyn EventSink,
        summary: &mut RunSummary,
    ) -> Result<()> {
        loop {
            events.emit(RunEvent::Prompting {
                line_number: line.line_number,
                speaker: line.speaker.clone(),
                text: line.text.clone(),
            });
            match prompter.choose_action(&line)? {
                Action::Skip => {
                    summary.skipped += 1;
                    events.emit(RunEvent::Skipped {
                        line_number: line.line_number,
                    });
                    return Ok(());
                }
                Action::Edit => {
                    let edited = prompter.edited_text(&line)?.trim().to_string();
                    if edited.is_empty() {
                        warn!(line = line.line_number, "empty edit ignored, keeping previous text");
                        continue;
                    }
                    line.text = edited;
                    events.emit(RunEvent::Edited {
                        line_number: line.line_number,
                        text: line.text.clone(),
                    });
                }
                Action::Generate => {
                    let audio = self.generate(&line, events)?;
                    summary.takes += 1;
                    match prompter.review(&line, &audio)? {
                        Review::Keep => {
                            summary.kept += 1;
                            events.emit(RunEvent::Kept {
                                line_number: line.line_number,
                                path: audio.path,
                            });
                            return Ok(());
                        }
                        Review::Discard => events.emit(RunEvent::Discarded {
                            line_number: line.line_number,
                        }),
                    }
                }
            }
        }
    }

    fn generate(&self, line: &ScriptLine, events: &mut dyn EventSink) -> Result<GeneratedAudio> {
        // Re-checked on every attempt: the account may be shared.
        let remaining = self.quota.remaining()?;
        let cost = self.quota.cost_of(&line.text);
        events.emit(RunEvent::QuotaChecked {
            line_number: line.line_number,
            remaining,
            cost,
        });
        if cost > remaining {
            return Err(Error::InsufficientQuota {
                line: line.line_number,
                cost,
                remaining,
            });
        }

        let voice_id = self
            .bindings
            .voice_for(&line.speaker)
            .ok_or_else(|| Error::UnboundSpeaker {
                speaker: line.speaker.clone(),
                line: line.line_number,
            })?;

        events.emit(RunEvent::Generating {
            line_number: line.line_number,
            voice_id: voice_id.to_string(),
        });
        let data = self
            .synthesizer
            .synthesize(&line.text, voice_id, &self.settings)?;
        let audio = GeneratedAudio::new(&self.output_dir, line.line_number, &line.speaker, data);
        audio.write()?;
        events.emit(RunEvent::AudioSaved {
            line_number: line.line_number,
            path: audio.path.clone(),
        });

        if let Err(e) = self.player.play(&audio.path) {
            warn!(path = %audio.path.display(), error = %e, "playback failed");
            events.emit(RunEvent::PlaybackFailed {
                path: audio.path.clone(),
                reason: e.to_string(),
            });
        }
        Ok(audio)
    }
}

pub struct InteractiveRunnerBuilder<'a> {
    quota: Option<&'a dyn QuotaSource>,
    synthesizer: Option<&'a dyn Synthesize>,
    player: Option<&'a dyn Player>,
    bindings: Option<&'a VoiceBindings>,
    settings: VoiceSettings,
    output_dir: Option<PathBuf>,
}

impl<'a> InteractiveRunnerBuilder<'a> {
    pub fn new() -> Self {
        Self {
            quota: None,
            synthesizer: None,
            player: None,
            bindings: None,
            settings: VoiceSettings::default(),
            output_dir: None,
        }
    }
    pub fn quota(mut self, quota: &'a dyn QuotaSource) -> Self {
        self.quota = Some(quota);
        self
    }
    pub fn synthesizer(mut self, synthesizer: &'a dyn Synthesize) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }
    pub fn player(mut self, player: &'a dyn Player) -> Self {
        self.player = Some(player);
        self
    }
    pub fn bindings(mut self, bindings: &'a VoiceBindings) -> Self {
        self.bindings = Some(bindings);
        self
    }
    pub fn settings(mut self, settings: VoiceSettings) -> Self {
        self.settings = settings;
        self
    }
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<InteractiveRunner<'a>> {
        Ok(InteractiveRunner {
            quota: self
                .quota
                .ok_or_else(|| Error::configuration("runner needs a quota source"))?,
            synthesizer: self
                .synthesizer
                .ok_or_else(|| Error::configuration("runner needs a synthesizer"))?,
            player: self
                .player
                .ok_or_else(|| Error::configuration("runner needs a player"))?,
            bindings: self
                .bindings
                .ok_or_else(|| Error::configuration("runner needs voice bindings"))?,
            settings: self.settings,
            output_dir: self
                .output_dir
                .ok_or_else(|| Error::configuration("runner needs an output directory"))?,
        })
    }
}

impl Default for InteractiveRunnerBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
