// src/application/ports/mail.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Outbound confirmation mail. Callers decide whether a send failure is
/// fatal; registration treats it as best-effort.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_confirmation_email(
        &self,
        recipient: &str,
        username: &str,
        confirmation_url: &str,
    ) -> ApplicationResult<()>;
}
