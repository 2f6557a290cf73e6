//! Full session against a mock provider: real client, quota tracker and synthesizer.

use autotts::playback::Player;
use autotts::runner::{Action, InteractiveRunner, Prompter, Review, RunEvent};
use autotts::script::{Script, ScriptLine};
use autotts::workspace::GeneratedAudio;
use autotts::{
    Error, ProviderClient, QuotaTracker, Result, SpeechSynthesizer, VoiceDirectory,
};
use mockito::Server;
use std::collections::BTreeMap;
use std::path::Path;

struct Silent;

impl Player for Silent {
    fn play(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Always continue, generate and keep.
struct Yes;

impl Prompter for Yes {
    fn confirm_over_budget(&mut self, _remaining: u64, _cost: u64) -> Result<bool> {
        Ok(true)
    }
    fn choose_action(&mut self, _line: &ScriptLine) -> Result<Action> {
        Ok(Action::Generate)
    }
    fn edited_text(&mut self, line: &ScriptLine) -> Result<String> {
        Ok(line.text.clone())
    }
    fn review(&mut self, _line: &ScriptLine, _audio: &GeneratedAudio) -> Result<Review> {
        Ok(Review::Keep)
    }
}

fn subscription(remaining: u64) -> String {
    format!(
        r#"{{"character_count": {}, "character_limit": 50000}}"#,
        50000 - remaining
    )
}

#[test]
fn short_budget_halts_before_any_synthesis_request() {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/voices")
        .with_status(200)
        .with_body(r#"{"voices":[{"voice_id":"v1","name":"Rachel"}]}"#)
        .create();
    server
        .mock("GET", "/v1/user/subscription")
        .with_status(200)
        .with_body(subscription(10))
        .create();
    let tts = server
        .mock("POST", mockito::Matcher::Regex(r"^/v1/text-to-speech/".into()))
        .expect(0)
        .create();

    let client = ProviderClient::builder()
        .api_key("k")
        .base_url(server.url())
        .build()
        .unwrap();
    let mut directory = VoiceDirectory::default();
    directory.refresh(&client).unwrap();
    let configured: BTreeMap<String, String> =
        [("Alice".to_string(), "Rachel".to_string())].into_iter().collect();
    let bindings = directory.bind(&configured);

    let quota = QuotaTracker::new(&client);
    let synthesizer = SpeechSynthesizer::new(&client);
    let dir = tempfile::tempdir().unwrap();
    let runner = InteractiveRunner::builder()
        .quota(&quota)
        .synthesizer(&synthesizer)
        .player(&Silent)
        .bindings(&bindings)
        .output_dir(dir.path().join("out"))
        .build()
        .unwrap();

    let mut events: Vec<RunEvent> = Vec::new();
    let err = runner
        .run(
            &Script::parse("Alice: Fifteen chars!!"),
            1,
            &mut Yes,
            &mut events,
        )
        .unwrap_err();
    assert!(matches!(err, Error::InsufficientQuota { line: 1, cost: 15, remaining: 10 }));
    tts.assert();
}

#[test]
fn kept_take_is_written_byte_for_byte() {
    let mut server = Server::new();
    let audio: Vec<u8> = (0..2048u32).map(|i| (i * 7 % 251) as u8).collect();
    server
        .mock("GET", "/v1/user/subscription")
        .with_status(200)
        .with_body(subscription(1000))
        .create();
    let tts = server
        .mock("POST", "/v1/text-to-speech/v1")
        .with_status(200)
        .with_body(audio.clone())
        .expect(1)
        .create();

    let client = ProviderClient::builder()
        .api_key("k")
        .base_url(server.url())
        .build()
        .unwrap();
    let bindings = VoiceDirectory::new(vec![autotts::Voice::new("v1", "Rachel")])
        .bind(&[("Old Man".to_string(), "v1".to_string())].into_iter().collect());

    let quota = QuotaTracker::new(&client);
    let synthesizer = SpeechSynthesizer::new(&client);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("scene_tts");
    let runner = InteractiveRunner::builder()
        .quota(&quota)
        .synthesizer(&synthesizer)
        .player(&Silent)
        .bindings(&bindings)
        .output_dir(&out)
        .build()
        .unwrap();

    let mut events: Vec<RunEvent> = Vec::new();
    let summary = runner
        .run(
            &Script::parse("# scene 1\nOld Man: Who goes there?"),
            1,
            &mut Yes,
            &mut events,
        )
        .unwrap();
    tts.assert();
    assert_eq!(summary.kept, 1);
    assert_eq!(std::fs::read(out.join("2_old_man.mp3")).unwrap(), audio);
}
