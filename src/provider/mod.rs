//! Provider 模块：与远程 TTS 服务通信的强类型阻塞式 HTTP 客户端。
//!
//! Wraps the three endpoints autotts needs:
//!
//! | Method | Path | Record |
//! |--------|------|--------|
//! | GET | `/v1/voices` | [`VoicesResponse`] |
//! | GET | `/v1/user/subscription` | [`Subscription`] |
//! | POST | `/v1/text-to-speech/{voice_id}` | raw audio bytes |
//!
//! Responses are decoded into typed records at the boundary; a payload that does not
//! match surfaces as [`crate::Error::Decode`].

mod client;
mod types;

pub use client::{ProviderClient, ProviderClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use types::{Subscription, TtsRequest, Voice, VoiceSettings, VoicesResponse};
