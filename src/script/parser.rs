//! Script line parsing and start-line validation.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Speaker is everything before the first colon.
static DIALOGUE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]*):(.*)$").expect("dialogue pattern is valid"));

/// One spoken line of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub speaker: String,
    /// Spoken text, trimmed. May be replaced by an operator edit during review.
    pub text: String,
    /// 1-based position in the source text, skipped lines included.
    pub line_number: usize,
}

/// Parse raw script text into dialogue records. Never fails.
///
/// A line with nothing before its colon (`: orphan text`) has no speaker to bind a
/// voice to, so it is treated as non-dialogue and skipped like any other line.
pub fn parse_lines(text: &str) -> Vec<ScriptLine> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let caps = DIALOGUE_LINE.captures(raw)?;
            let speaker = caps.get(1)?.as_str().trim();
            if speaker.is_empty() {
                return None;
            }
            Some(ScriptLine {
                speaker: speaker.to_string(),
                text: caps.get(2)?.as_str().trim().to_string(),
                line_number: idx + 1,
            })
        })
        .collect()
}

/// A parsed script together with the size of its source text.
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: Vec<ScriptLine>,
    source_line_count: usize,
}

impl Script {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: parse_lines(text),
            source_line_count: text.lines().count(),
        }
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<ScriptLine> {
        self.lines
    }

    /// Number of lines in the source text, dialogue or not.
    pub fn source_line_count(&self) -> usize {
        self.source_line_count
    }

    /// Dialogue records at or after the given source line.
    pub fn from_line(&self, start: usize) -> &[ScriptLine] {
        let offset = self.lines.partition_point(|l| l.line_number < start);
        &self.lines[offset..]
    }
}

/// Validate the operator's "start from" answer against a script of `source_line_count` lines.
///
/// Empty input means line 1.
pub fn parse_start_line(input: &str, source_line_count: usize) -> Result<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(1);
    }
    let start: i64 = input
        .parse()
        .map_err(|_| Error::invalid_start_line(input, "needs to be a number"))?;
    if start <= 0 {
        return Err(Error::invalid_start_line(input, "needs to be more than 0"));
    }
    let start = start as usize;
    if start > source_line_count {
        return Err(Error::invalid_start_line(
            input,
            format!(
                "starting line is past the end of the script (total number of lines is {})",
                source_line_count
            ),
        ));
    }
    Ok(start)
}
