use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SCRIPT_EXTENSION: &str = "txt";
pub const AUDIO_EXTENSION: &str = "mp3";
pub const OUTPUT_DIR_SUFFIX: &str = "_tts";

/// First `.txt` file in `dir`, by file name.
pub fn find_script(dir: &Path) -> Result<PathBuf> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(SCRIPT_EXTENSION)
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next().ok_or_else(|| Error::ScriptNotFound {
        dir: dir.display().to_string(),
    })
}

/// `<dir>/<script stem, spaces as underscores>_tts`
pub fn output_dir_for(script: &Path) -> PathBuf {
    let stem = script
        .file_stem()
        .map(|s| s.to_string_lossy().replace(' ', "_"))
        .unwrap_or_default();
    let parent = script.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{}{}", stem, OUTPUT_DIR_SUFFIX))
}

pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        std::fs::create_dir_all(dir)?;
        debug!(dir = %dir.display(), "created output directory");
    }
    Ok(())
}

/// `<lineNumber>_<speaker lowercased, spaces as underscores>.mp3`
pub fn audio_file_name(line_number: usize, speaker: &str) -> String {
    format!(
        "{}_{}.{}",
        line_number,
        speaker.to_lowercase().replace(' ', "_"),
        AUDIO_EXTENSION
    )
}

/// Synthesized audio and the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAudio {
    pub data: Vec<u8>,
    pub path: PathBuf,
}

impl GeneratedAudio {
    pub fn new(output_dir: &Path, line_number: usize, speaker: &str, data: Vec<u8>) -> Self {
        Self {
            data,
            path: output_dir.join(audio_file_name(line_number, speaker)),
        }
    }

    /// Write the whole buffer, replacing any previous take for the same line.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.data)?;
        debug!(path = %self.path.display(), bytes = self.data.len(), "audio written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_lowercased_and_underscored() {
        assert_eq!(audio_file_name(12, "Old Man"), "12_old_man.mp3");
        assert_eq!(audio_file_name(3, "BOB"), "3_bob.mp3");
    }

    #[test]
    fn output_dir_replaces_spaces_in_stem() {
        assert_eq!(
            output_dir_for(Path::new("work/my script.txt")),
            Path::new("work/my_script_tts")
        );
        assert_eq!(output_dir_for(Path::new("play.txt")), Path::new("play_tts"));
    }

    #[test]
    fn written_audio_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let audio = GeneratedAudio::new(dir.path(), 7, "Alice", data.clone());
        audio.write().unwrap();
        assert_eq!(audio.path, dir.path().join("7_alice.mp3"));
        assert_eq!(std::fs::read(&audio.path).unwrap(), data);

        // A second take overwrites the first.
        let retake = GeneratedAudio::new(dir.path(), 7, "Alice", vec![1, 2, 3]);
        retake.write().unwrap();
        assert_eq!(std::fs::read(&audio.path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn find_script_picks_first_txt_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.md"), "x").unwrap();
        std::fs::write(dir.path().join("b_scene.txt"), "B: hi").unwrap();
        std::fs::write(dir.path().join("a_scene.txt"), "A: hi").unwrap();
        std::fs::create_dir(dir.path().join("dir.txt")).unwrap();
        assert_eq!(find_script(dir.path()).unwrap(), dir.path().join("a_scene.txt"));
    }

    #[test]
    fn find_script_reports_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();
        assert!(matches!(
            find_script(dir.path()).unwrap_err(),
            Error::ScriptNotFound { .. }
        ));
    }

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scene_tts");
        ensure_output_dir(&out).unwrap();
        ensure_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }
}
