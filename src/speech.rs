//! Pronunciation through an external text-to-speech program

use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors from speaking a card
#[derive(Debug, Error)]
pub enum SpeechError {
    /// No speech program is configured
    #[error("Speech is not configured. Set speech_command in config.json")]
    NotConfigured,

    /// The speech program could not be started
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can pronounce text
pub trait Speaker {
    /// Speak `text` without blocking the caller
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;
}

/// Runs a configured command with the text as its final argument
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    argv: Vec<String>,
}

impl CommandSpeaker {
    /// Build from a configured argv, `None` if it is missing or empty
    pub fn from_config(argv: Option<&[String]>) -> Option<Self> {
        let argv = argv?;
        if argv.first().is_none_or(|p| p.trim().is_empty()) {
            return None;
        }
        Some(Self { argv: argv.to_vec() })
    }

    /// Program and arguments run for `text`, program first
    pub fn command_line(&self, text: &str) -> Vec<String> {
        let mut args = self.argv.clone();
        args.push(text.to_string());
        args
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        let argv = self.command_line(text);
        let (program, args) = (&argv[0], &argv[1..]);
        tracing::debug!("Speaking {:?} with {}", text, program);

        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|mut child| {
                // Reap in the background so finished players don't linger
                std::thread::spawn(move || child.wait());
            })
            .map_err(|source| SpeechError::Spawn { program: program.clone(), source })
    }
}

/// Speaker used when nothing is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpeech;

impl Speaker for NoSpeech {
    fn speak(&mut self, _text: &str) -> Result<(), SpeechError> {
        Err(SpeechError::NotConfigured)
    }
}

/// Pick a speaker from the configured command
pub fn speaker_from_config(argv: Option<&[String]>) -> Box<dyn Speaker> {
    match CommandSpeaker::from_config(argv) {
        Some(speaker) => Box::new(speaker),
        None => Box::new(NoSpeech),
    }
}
