use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("failed to start {engine}: {source}")]
    Spawn {
        engine: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Speaks an utterance. Implementations must not block on playback.
pub trait Speaker {
    fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Engine {
    EspeakNg,
    Espeak,
    SpdSay,
    Say,
}

const ENGINES: [Engine; 4] = [Engine::EspeakNg, Engine::Espeak, Engine::SpdSay, Engine::Say];

impl Engine {
    fn binary(self) -> &'static str {
        match self {
            Engine::EspeakNg => "espeak-ng",
            Engine::Espeak => "espeak",
            Engine::SpdSay => "spd-say",
            Engine::Say => "say",
        }
    }

    fn args(self, text: &str, lang: &str) -> Vec<String> {
        match self {
            // espeak voices are lowercase ("en-us")
            Engine::EspeakNg | Engine::Espeak => {
                vec!["-v".into(), lang.to_lowercase(), text.into()]
            }
            Engine::SpdSay => {
                let primary = lang.split('-').next().unwrap_or(lang);
                vec!["-l".into(), primary.to_string(), text.into()]
            }
            Engine::Say => vec![text.into()],
        }
    }
}

/// Speaks through the first text-to-speech program found on `PATH`.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    engine: Engine,
    program: PathBuf,
}

impl CommandSpeaker {
    pub fn engine_name(&self) -> &'static str {
        self.engine.binary()
    }

    fn locate(search_path: &std::ffi::OsStr) -> Option<Self> {
        let dirs: Vec<PathBuf> = env::split_paths(search_path).collect();
        ENGINES.iter().find_map(|&engine| {
            dirs.iter()
                .map(|dir| dir.join(engine.binary()))
                .find(|candidate| candidate.is_file())
                .map(|program| Self { engine, program })
        })
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError> {
        // The child is never waited on; playback runs detached from the UI loop.
        Command::new(&self.program)
            .args(self.engine.args(text, lang))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                engine: self.engine.binary(),
                source,
            })?;
        Ok(())
    }
}

/// Find a speech engine, or `None` when the environment has none.
pub fn detect_speaker() -> Option<CommandSpeaker> {
    let search_path = env::var_os("PATH")?;
    let speaker = CommandSpeaker::locate(&search_path);
    match &speaker {
        Some(found) => tracing::info!(engine = found.engine_name(), "speech engine available"),
        None => tracing::info!("no speech engine on PATH, pronounce disabled"),
    }
    speaker
}
