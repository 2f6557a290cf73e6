//! Files on disk: the input script and the generated audio.

mod files;

pub use files::{
    audio_file_name, ensure_output_dir, find_script, output_dir_for, GeneratedAudio, AUDIO_EXTENSION,
    OUTPUT_DIR_SUFFIX, SCRIPT_EXTENSION,
};
