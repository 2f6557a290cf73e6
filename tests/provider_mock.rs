//! Provider client, quota, voice and synthesis behavior against a mock HTTP server.

use autotts::provider::{ProviderClient, VoiceSettings};
use autotts::quota::{QuotaSource, QuotaTracker};
use autotts::synth::{SpeechSynthesizer, Synthesize, MODEL_ID, NOT_FOUND_HINT};
use autotts::{Error, VoiceDirectory};
use mockito::{Matcher, Server, ServerGuard};

const API_KEY: &str = "test-key";

fn client(server: &ServerGuard) -> ProviderClient {
    ProviderClient::builder()
        .api_key(API_KEY)
        .base_url(server.url())
        .timeout_secs(5)
        .build()
        .expect("client should build")
}

const VOICES_BODY: &str = r#"{
    "voices": [
        {"voice_id": "ErXwobaYiN019PkySvjV", "name": "Antoni", "category": "premade"},
        {"voice_id": "VR6AewLTigWG4xSOukaG", "name": "Arnold", "category": "premade"}
    ]
}"#;

#[test]
fn list_voices_sends_key_and_decodes() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/voices")
        .match_header("xi-api-key", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(VOICES_BODY)
        .create();

    let voices = client(&server).list_voices().unwrap();
    mock.assert();
    assert_eq!(voices.len(), 2);
    assert_eq!(voices[0].id, "ErXwobaYiN019PkySvjV");
    assert_eq!(voices[1].name, "Arnold");
}

#[test]
fn directory_refresh_then_resolve_names() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/voices")
        .with_status(200)
        .with_body(VOICES_BODY)
        .create();

    let client = client(&server);
    let mut directory = VoiceDirectory::default();
    directory.refresh(&client).unwrap();
    assert_eq!(directory.resolve("Antoni").unwrap(), "ErXwobaYiN019PkySvjV");
    assert_eq!(
        directory.resolve("VR6AewLTigWG4xSOukaG").unwrap(),
        "VR6AewLTigWG4xSOukaG"
    );
    assert!(matches!(
        directory.resolve("totally-unknown"),
        Err(Error::UnknownVoice { .. })
    ));
}

#[test]
fn malformed_voice_list_is_a_typed_decode_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/voices")
        .with_status(200)
        .with_body(r#"{"voices": [{"voice_id": 42}]}"#)
        .create();

    let err = client(&server).list_voices().unwrap_err();
    assert!(matches!(err, Error::Decode { endpoint: "voices", .. }), "got {:?}", err);
    assert!(err.is_provider_failure());
}

#[test]
fn quota_is_limit_minus_count_and_never_cached() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/user/subscription")
        .match_header("xi-api-key", API_KEY)
        .with_status(200)
        .with_body(
            r#"{"tier":"starter","character_count":2500,"character_limit":30000,
                "next_character_count_reset_unix":1900000000,"status":"active"}"#,
        )
        .expect(2)
        .create();

    let client = client(&server);
    let tracker = QuotaTracker::new(&client);
    assert_eq!(tracker.remaining().unwrap(), 27500);
    let snapshot = tracker.snapshot().unwrap();
    assert_eq!(snapshot.tier.as_deref(), Some("starter"));
    assert_eq!(snapshot.resets_at_unix, Some(1_900_000_000));
    mock.assert();
}

#[test]
fn subscription_error_surfaces_status_and_body() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/user/subscription")
        .with_status(401)
        .with_body(r#"{"detail":{"status":"invalid_api_key"}}"#)
        .create();

    let client = client(&server);
    match QuotaTracker::new(&client).remaining().unwrap_err() {
        Error::Provider { status, body, hint } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_api_key"));
            assert!(hint.is_none());
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[test]
fn synthesize_posts_text_model_and_settings() {
    let mut server = Server::new();
    let audio: Vec<u8> = vec![0x49, 0x44, 0x33, 0x04, 0x00, 0xff, 0xfb];
    let mock = server
        .mock("POST", "/v1/text-to-speech/ErXwobaYiN019PkySvjV")
        .match_header("xi-api-key", API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "text": "Hello there",
            "model_id": MODEL_ID,
            "voice_settings": {
                "stability": 0.5,
                "similarity_boost": 0.75,
                "style": 0,
                "use_speaker_boost": true
            }
        })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(audio.clone())
        .create();

    let client = client(&server);
    let settings = VoiceSettings {
        stability: 0.5,
        similarity_boost: 0.75,
        style: 0,
        use_speaker_boost: true,
    };
    let bytes = SpeechSynthesizer::new(&client)
        .synthesize("Hello there", "ErXwobaYiN019PkySvjV", &settings)
        .unwrap();
    mock.assert();
    assert_eq!(bytes, audio);
}

#[test]
fn synthesize_not_found_adds_guidance() {
    let mut server = Server::new();
    server
        .mock("POST", "/v1/text-to-speech/abc")
        .with_status(404)
        .with_body("Not Found")
        .create();

    let client = client(&server);
    let err = SpeechSynthesizer::new(&client)
        .synthesize("Hi", "abc", &VoiceSettings::default())
        .unwrap_err();
    match &err {
        Error::Provider { status, body, hint } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "Not Found");
            assert_eq!(hint.as_deref(), Some(NOT_FOUND_HINT));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
    assert!(err.to_string().contains("encoding"));
}

#[test]
fn synthesize_other_failures_keep_provider_body() {
    let mut server = Server::new();
    server
        .mock("POST", "/v1/text-to-speech/abc")
        .with_status(422)
        .with_body(r#"{"detail":"text too long"}"#)
        .create();

    let client = client(&server);
    let err = SpeechSynthesizer::new(&client)
        .synthesize("Hi", "abc", &VoiceSettings::default())
        .unwrap_err();
    assert!(err.to_string().contains("text too long"), "got {}", err);
}

#[test]
fn unreachable_provider_is_unavailable() {
    let client = ProviderClient::builder()
        .api_key(API_KEY)
        .base_url("http://127.0.0.1:1")
        .timeout_secs(2)
        .build()
        .unwrap();
    let err = client.list_voices().unwrap_err();
    assert!(matches!(err, Error::ProviderUnavailable { .. }), "got {:?}", err);
    assert_eq!(
        err.context().and_then(|c| c.source.as_deref()),
        Some("voices")
    );
}
