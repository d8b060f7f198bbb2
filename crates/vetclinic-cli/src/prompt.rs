//! Terminal implementations of the confirmation and notice collaborators.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use vetclinic_core::{Confirm, Notice, NoticeLevel, Notifier};

use crate::output;

/// Asks on stderr and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = tokio::io::stderr();
        let question = format!("{prompt} [s/N] ");
        if let Err(e) = stderr.write_all(question.as_bytes()).await {
            warn!(error = %e, "could not write prompt");
            return false;
        }
        let _ = stderr.flush().await;

        let mut answer = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut answer).await {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!(error = %e, "could not read answer");
                false
            }
        }
    }
}

/// Accepts s/si/sí/y/yes in any case.
fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

/// Prints notices as coloured status lines.
///
/// Error notices are not printed but kept for the command to report, so a
/// failure is shown once when the command exits.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    last_error: Mutex<Option<String>>,
}

impl TerminalNotifier {
    /// The most recent error notice, if any, clearing it.
    pub fn take_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => output::success(&notice.message),
            NoticeLevel::Info => output::info(&notice.message),
            NoticeLevel::Warning => output::warning(&notice.message),
            NoticeLevel::Error => {
                debug!(message = %notice.message, "error notice");
                if let Ok(mut slot) = self.last_error.lock() {
                    *slot = Some(notice.message);
                }
            }
        }
    }
}
