//! Injected speech capability interfaces.
//!
//! The core never touches host speech engines directly. Capture and
//! synthesis are behind [`SpeechCapture`] and [`SpeechOutput`] so the
//! controller (and its tests) run against any host: a real microphone/TTS
//! pair, or the terminal implementations below, where typed lines stand in
//! for utterances and stdout for the speaker.

use crate::error::{PracticeError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

/// Capability that produces user utterances.
#[async_trait]
pub trait SpeechCapture: Send {
    /// True when the capture capability can be used in this environment.
    ///
    /// Checked once, upfront, before any generation call. The only error
    /// the user ever sees directly.
    fn is_available(&self) -> bool;

    /// Wait for the next complete utterance.
    ///
    /// Returns `None` when the input source is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying capture source fails.
    async fn next_utterance(&mut self) -> Result<Option<String>>;
}

/// Capability that speaks assistant replies.
#[async_trait]
pub trait SpeechOutput: Send {
    /// Speak the given text.
    ///
    /// # Errors
    ///
    /// Returns an error if synthesis or playback fails.
    async fn speak(&mut self, text: &str) -> Result<()>;
}

/// Terminal capture: each typed line is one utterance.
pub struct TerminalCapture {
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalCapture {
    /// Create a capture reading lines from stdin.
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for TerminalCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechCapture for TerminalCapture {
    fn is_available(&self) -> bool {
        true
    }

    async fn next_utterance(&mut self) -> Result<Option<String>> {
        let line = self
            .lines
            .next_line()
            .await
            .map_err(|e| PracticeError::Capture(format!("stdin read failed: {e}")))?;
        Ok(line.map(|l| l.trim().to_owned()))
    }
}

/// Terminal output: replies are written to stdout instead of a speaker.
pub struct TerminalOutput {
    stdout: Stdout,
}

impl TerminalOutput {
    /// Create an output writing to stdout.
    pub fn new() -> Self {
        Self {
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechOutput for TerminalOutput {
    async fn speak(&mut self, text: &str) -> Result<()> {
        let line = format!("{text}\n");
        self.stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| PracticeError::Synthesis(format!("stdout write failed: {e}")))?;
        self.stdout
            .flush()
            .await
            .map_err(|e| PracticeError::Synthesis(format!("stdout flush failed: {e}")))?;
        Ok(())
    }
}
