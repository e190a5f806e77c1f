//! Terminal chat client
//!
//! Each line read from stdin is submitted as one request; the transcript
//! entries appended by the turn are printed afterwards. `/quit` or EOF exits.

use assistant_relay::backend::{HttpBackend, LoggingBackend};
use assistant_relay::config::AppConfig;
use assistant_relay::render::{render_message, render_status, render_transcript, SENDING};
use assistant_relay::runtime::Conversation;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = AppConfig::from_env();
    let backend = LoggingBackend::new(HttpBackend::new(&config.assistant_url));
    let mut conversation = Conversation::new(backend);

    println!("{}", render_transcript(conversation.messages()));
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }

        let seen = conversation.messages().len();
        conversation.set_draft(line);
        if !conversation.state().draft().trim().is_empty() {
            println!("{SENDING}");
        }

        let ran = conversation.send().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Submission rejected");
            false
        });

        for message in conversation.messages().iter().skip(seen) {
            println!("{}", render_message(message));
        }
        // A blank line runs no turn, so an earlier error is not repeated
        if let Some(status) = render_status(conversation.state()).filter(|_| ran) {
            println!("{status}");
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}
