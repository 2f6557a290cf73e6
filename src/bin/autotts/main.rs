//! autotts: guided script-to-speech session.
//!
//! Run it in a directory holding a `.txt` script. The first launch writes a starter
//! `config.json` and exits; edit it (API key, voice per speaker) and relaunch.
//!
//! ENVIRONMENT:
//!     AUTOTTS_API_KEY              Overrides the configured API key
//!     AUTOTTS_BASE_URL             Provider base URL
//!     AUTOTTS_HTTP_TIMEOUT_SECS    Per-request timeout in seconds
//!     RUST_LOG                     Log filter (default: warn)

mod term;

use anyhow::Context;
use autotts::config::{AppConfig, ConnectionSettings, CONFIG_FILE};
use autotts::playback::SystemPlayer;
use autotts::provider::ProviderClient;
use autotts::runner::InteractiveRunner;
use autotts::script::{parse_start_line, Script};
use autotts::workspace::{find_script, output_dir_for};
use autotts::{QuotaTracker, SpeechSynthesizer, VoiceDirectory};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}\n", console::style(term::BANNER).cyan().bold());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            term::pause();
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;

    let config_path = cwd.join(CONFIG_FILE);
    let config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(autotts::Error::ConfigMissing { .. }) => return bootstrap(&config_path),
        Err(e) => return Err(e.into()),
    };

    let connection = ConnectionSettings::from_env();
    let client = ProviderClient::builder()
        .api_key(config.api_key.as_str())
        .base_url(connection.base_url)
        .timeout_secs(connection.timeout_secs)
        .build()?;

    let mut directory = VoiceDirectory::default();
    directory.refresh(&client).context("updating voices")?;
    let bindings = directory.bind(&config.voices);
    term::success(format!(
        "Config loaded ({} of {} speakers bound)",
        bindings.len(),
        config.voices.len()
    ));

    let script_path = find_script(&cwd)?;
    let text = std::fs::read_to_string(&script_path)
        .with_context(|| format!("reading {}", script_path.display()))?;
    let script = Script::parse(&text);

    let start_input = term::read_input("[?] Start from (enter for 1)> ")?;
    let start_line = parse_start_line(&start_input, script.source_line_count())?;

    println!(
        "\nLoaded file:          {}",
        console::style(script_path.display()).green().bold()
    );
    println!(
        "Starting from line:   {}",
        console::style(start_line).green().bold()
    );

    let quota = QuotaTracker::new(&client);
    let synthesizer = SpeechSynthesizer::new(&client);
    let player = SystemPlayer;
    let runner = InteractiveRunner::builder()
        .quota(&quota)
        .synthesizer(&synthesizer)
        .player(&player)
        .bindings(&bindings)
        .settings(config.voice_settings())
        .output_dir(output_dir_for(&script_path))
        .build()?;

    runner.run(
        &script,
        start_line,
        &mut term::ConsolePrompter,
        &mut term::ConsoleRenderer,
    )?;
    Ok(())
}

fn bootstrap(path: &Path) -> anyhow::Result<()> {
    println!("[*] Generating new config file");
    let api_key = term::read_input("[?] API key> ")?;
    AppConfig::bootstrap(path, &api_key).context("failed to generate config file")?;
    term::success("Config file generated, edit appropriately and relaunch");
    Ok(())
}

fn report(err: &anyhow::Error) {
    term::error(format!("{:#}", err));
    if let Some(line) = err
        .downcast_ref::<autotts::Error>()
        .and_then(autotts::Error::resume_line)
    {
        term::error(format!("Continue from line {} on the next launch", line));
    }
}
