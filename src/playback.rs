//! Hands a written clip to the platform's default opener for the operator to review.

use crate::{Error, ErrorContext, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use tracing::debug;

pub trait Player {
    /// Start playback of `path`. Returns once playback is launched, not when it ends.
    fn play(&self, path: &Path) -> Result<()>;
}

/// Opens files with `xdg-open`, `open` or `cmd /c start`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlayer;

impl SystemPlayer {
    fn command_for(path: &Path) -> Result<Command> {
        let mut cmd = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/c", "start", ""]);
            c
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")) {
            Command::new("xdg-open")
        } else {
            return Err(Error::configuration_with_context(
                "audio playback is not supported on this platform",
                ErrorContext::new().with_source("playback"),
            ));
        };
        cmd.arg(path);
        Ok(cmd)
    }
}

impl Player for SystemPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        let mut cmd = Self::command_for(&path)?;
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        debug!(path = %path.display(), "launching playback");
        launch_detached(cmd)?;
        Ok(())
    }
}

/// Spawn `cmd` without waiting on it. The child is reaped on a background thread so
/// it never lingers as a zombie; the handle resolves to its exit status.
fn launch_detached(mut cmd: Command) -> Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = cmd.spawn()?;
    let pid = child.id();
    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) => Some(status),
        Err(e) => {
            debug!(pid, error = %e, "playback opener could not be reaped");
            None
        }
    }))
}
