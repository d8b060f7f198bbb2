//! Interactive confirmation.

use async_trait::async_trait;

/// Asks the user a yes/no question before a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Returns true if the user agreed.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Answers yes without asking, for `--force` style callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

#[async_trait]
impl Confirm for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
