//! Error types for the conversation practice pipeline.

/// Top-level error type for the practice system.
#[derive(Debug, thiserror::Error)]
pub enum PracticeError {
    /// Speech capture error.
    #[error("capture error: {0}")]
    Capture(String),

    /// Speech synthesis error.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Remote reply generation error.
    #[error("generator error: {0}")]
    Generator(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Conversation sequencing error (misuse of the controller contract).
    #[error("session error: {0}")]
    Session(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PracticeError>;
