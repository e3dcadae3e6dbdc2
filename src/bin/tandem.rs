//! Terminal host for conversation practice sessions.
//!
//! Typed lines stand in for microphone capture and stdout for speech
//! synthesis; the conversation core is identical to what a voice host would
//! drive. All tracing output goes to stderr so stdout stays readable.

use std::sync::Arc;

use tandem::config::PracticeConfig;
use tandem::controller::ConversationController;
use tandem::llm::api::ApiGenerator;
use tandem::shaper::ResponseShaper;
use tandem::speech::{SpeechCapture, TerminalCapture, TerminalOutput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = PracticeConfig::default_config_path();
    let config = if config_path.exists() {
        PracticeConfig::from_file(&config_path)?
    } else {
        tracing::info!(path = %config_path.display(), "no config file, using defaults");
        PracticeConfig::default()
    };

    let mut capture = TerminalCapture::new();
    if !capture.is_available() {
        // The one user-visible error: surfaced once, before any generation.
        eprintln!("Speech capture is not available in this environment.");
        return Ok(());
    }

    let generator = Arc::new(ApiGenerator::new(&config.llm)?);
    let shaper = ResponseShaper::new(generator);
    let mut controller = ConversationController::new(
        shaper,
        Box::new(TerminalOutput::new()),
        config.conversation.clone(),
    );

    println!("What topic would you like to practice talking about?");
    let topic = match capture.next_utterance().await? {
        Some(topic) if !topic.is_empty() => topic,
        _ => {
            eprintln!("No topic given.");
            return Ok(());
        }
    };

    let reply = controller.start(&topic).await?;
    println!("  (try: {})", reply.suggestion);

    while let Some(utterance) = capture.next_utterance().await? {
        if utterance.is_empty() {
            continue;
        }
        if utterance == "/quit" {
            break;
        }
        if utterance == "/restart" {
            controller.restart();
            println!("Session cleared. What topic next?");
            match capture.next_utterance().await? {
                Some(topic) if !topic.is_empty() => {
                    let reply = controller.start(&topic).await?;
                    println!("  (try: {})", reply.suggestion);
                }
                _ => break,
            }
            continue;
        }

        let reply = controller.submit(&utterance).await?;
        if let Some(feedback) = &reply.feedback {
            println!("  (correction: {} | {})", feedback.corrected, feedback.explanation);
        }
        println!("  (try: {})", reply.suggestion);
    }

    tracing::info!("tandem shut down cleanly");
    Ok(())
}
