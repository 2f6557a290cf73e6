//! # autotts
//!
//! 交互式台本配音工具：把对白脚本逐行送入远程 TTS 服务，由操作者试听、保留或重录。
//!
//! Turns a dialogue script into one synthesized clip per line through a remote
//! text-to-speech API, with an operator approving, editing or skipping every line
//! while the account's character budget is tracked.
//!
//! ## Pipeline
//!
//! ```text
//! script text -> script::Script -> runner::InteractiveRunner
//!                                     |-- quota::QuotaSource (re-checked per line)
//!                                     |-- synth::Synthesize  -> audio bytes
//!                                     |-- workspace::GeneratedAudio (written to disk)
//!                                     `-- playback::Player (fire and forget)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use autotts::provider::ProviderClient;
//! use autotts::quota::{QuotaSource, QuotaTracker};
//! use autotts::script::Script;
//!
//! fn main() -> autotts::Result<()> {
//!     let client = ProviderClient::builder().api_key("your-api-key").build()?;
//!     let script = Script::parse("Narrator: It was a dark and stormy night.");
//!
//!     let quota = QuotaTracker::new(&client);
//!     println!(
//!         "{} characters left, script costs {}",
//!         quota.remaining()?,
//!         quota.cost_of_script(script.lines())
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`script`] | Script parsing into speaker/line records |
//! | [`provider`] | Typed blocking HTTP client for the TTS provider |
//! | [`voices`] | Voice directory and speaker bindings |
//! | [`quota`] | Remaining character budget and cost estimation |
//! | [`synth`] | Speech synthesis |
//! | [`runner`] | Interactive generate/review loop |
//! | [`config`] | `config.json` and environment overrides |
//! | [`workspace`] | Script discovery and audio output paths |
//! | [`playback`] | Platform audio opener |

pub mod config;
pub mod playback;
pub mod provider;
pub mod quota;
pub mod runner;
pub mod script;
pub mod synth;
pub mod voices;
pub mod workspace;

// Re-export main types for convenience
pub use config::AppConfig;
pub use provider::{ProviderClient, Voice, VoiceSettings};
pub use quota::{QuotaSource, QuotaTracker};
pub use runner::{InteractiveRunner, RunEvent, RunSummary};
pub use script::{Script, ScriptLine};
pub use synth::{SpeechSynthesizer, Synthesize};
pub use voices::{VoiceBindings, VoiceDirectory};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
