//! Persisted configuration and environment overrides.
//!
//! The configuration lives in `config.json` next to the script:
//!
//! ```json
//! {
//!   "api-key": "...",
//!   "stability": 0.5,
//!   "similarity-boost": 0.0,
//!   "style": 0,
//!   "use-speaker-boost": true,
//!   "voices": { "Narrator": "Antoni", "Guard": "VR6AewLTigWG4xSOukaG" }
//! }
//! ```
//!
//! Voice references may be names or IDs; they are resolved against the provider's
//! voice list at startup.
//!
//! Environment overrides:
//! - `AUTOTTS_API_KEY`: replaces `api-key`
//! - `AUTOTTS_BASE_URL`: provider base URL (default `https://api.elevenlabs.io`)
//! - `AUTOTTS_HTTP_TIMEOUT_SECS`: per-request timeout (default 15)

mod app;

pub use app::{
    AppConfig, ConnectionSettings, CONFIG_FILE, ENV_API_KEY, ENV_BASE_URL, ENV_HTTP_TIMEOUT_SECS,
};
