//! Terminal presentation: colored prompts and event rendering.

use autotts::runner::{parse_continue, Action, EventSink, Prompter, Review, RunEvent};
use autotts::script::ScriptLine;
use autotts::workspace::GeneratedAudio;
use console::style;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

pub const BANNER: &str = r"╔═╗┬ ┬┌┬┐┌─┐  ╔╦╗╔╦╗╔═╗
╠═╣│ │ │ │ │   ║  ║ ╚═╗
╩ ╩└─┘ ┴ └─┘   ╩  ╩ ╚═╝";

/// Print `prompt` and read one line from stdin, without the trailing newline.
pub fn read_input(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Keep a double-clicked console window open until the operator has read the output.
pub fn pause() {
    println!("Press Enter to exit...");
    let _ = io::stdin().lock().read_line(&mut String::new());
}

pub fn error(message: impl std::fmt::Display) {
    println!("{}", style(format!("[!] {}", message)).red().bold());
}

pub fn success(message: impl std::fmt::Display) {
    println!("{}", style(format!("[+] {}", message)).green().bold());
}

pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm_over_budget(&mut self, _remaining: u64, _cost: u64) -> autotts::Result<bool> {
        let answer = read_input(&format!(
            "{} ",
            style("[!] Not enough characters to generate the full script, continue? (y/n):")
                .red()
                .bold()
        ))?;
        Ok(parse_continue(&answer))
    }

    fn choose_action(&mut self, _line: &ScriptLine) -> autotts::Result<Action> {
        let answer = read_input(&format!(
            "[?] Generate? [{}] yes | [{}] no | [{}] edit> ",
            style("Y").green().bold(),
            style("N").red().bold(),
            style("E").white().bold(),
        ))?;
        Ok(Action::parse(&answer))
    }

    fn edited_text(&mut self, _line: &ScriptLine) -> autotts::Result<String> {
        Ok(read_input("[?] New text> ")?)
    }

    fn review(&mut self, _line: &ScriptLine, _audio: &GeneratedAudio) -> autotts::Result<Review> {
        let answer = read_input(&format!(
            "[?] Keep audio? [{}] yes | [{}] no> ",
            style("Y").green().bold(),
            style("N").red().bold(),
        ))?;
        Ok(Review::parse(&answer))
    }
}

pub struct ConsoleRenderer;

impl EventSink for ConsoleRenderer {
    fn emit(&mut self, event: RunEvent) {
        match event {
            RunEvent::Estimate { quota, cost } => {
                println!("Available characters: {}", style(quota.remaining).green().bold());
                println!("Script cost:          {}", style(cost).green().bold());
                if let Some(tier) = quota.tier {
                    println!("Plan:                 {}", tier);
                }
                if let Some(reset) = quota.resets_at_unix.and_then(hours_until) {
                    println!("Quota resets in:      ~{}h", reset);
                }
                println!();
            }
            RunEvent::Aborted => println!("[*] Stopped before generating anything"),
            RunEvent::Prompting {
                line_number,
                speaker,
                text,
            } => {
                println!(
                    "\nLine: {} | Speaker: {}",
                    style(line_number).green().bold(),
                    style(speaker).green().bold()
                );
                println!("{}\n", text);
            }
            RunEvent::Edited { .. } => {}
            RunEvent::Skipped { line_number } => {
                println!("{}", style(format!("[*] Skipped line {}", line_number)).dim())
            }
            RunEvent::QuotaChecked { .. } => {}
            RunEvent::Generating { .. } => println!("[*] Generating..."),
            RunEvent::AudioSaved { path, .. } => success(format!("Saved {}", path.display())),
            RunEvent::PlaybackFailed { path, reason } => {
                error(format!("Couldn't play {}: {}", path.display(), reason))
            }
            RunEvent::Kept { .. } => {}
            RunEvent::Discarded { .. } => println!(),
            RunEvent::Finished(summary) => {
                println!();
                success(format!(
                    "Done: {} kept, {} skipped, {} takes generated",
                    summary.kept, summary.skipped, summary.takes
                ));
            }
        }
    }
}

fn hours_until(unix: i64) -> Option<i64> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs() as i64;
    (unix > now).then(|| (unix - now + 3599) / 3600)
}
