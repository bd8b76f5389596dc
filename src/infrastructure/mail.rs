// src/infrastructure/mail.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::mail::Mailer,
};
use async_trait::async_trait;
use serde_json::json;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Sends confirmation mail through the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    from_address: String,
}

impl ResendMailer {
    pub fn new(api_key: String, from_address: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            from_address,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send_confirmation_email(
        &self,
        recipient: &str,
        username: &str,
        confirmation_url: &str,
    ) -> ApplicationResult<()> {
        let body = json!({
            "from": self.from_address,
            "to": [recipient],
            "subject": "Confirm your email address",
            "html": format!(
                "<p>Hi {username},</p>\
                 <p>Please confirm your email address by clicking the link below:</p>\
                 <p><a href=\"{confirmation_url}\">Activate your account</a></p>"
            ),
        });

        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ApplicationError::infrastructure(format!(
                "mail delivery failed with status {status}: {detail}"
            )));
        }

        tracing::info!(recipient, "confirmation email sent");
        Ok(())
    }
}

/// Stand-in mailer for environments without a configured API key. Logs the
/// confirmation link instead of delivering it.
#[derive(Default)]
pub struct TracingMailer;

#[async_trait]
impl Mailer for TracingMailer {
    async fn send_confirmation_email(
        &self,
        recipient: &str,
        username: &str,
        confirmation_url: &str,
    ) -> ApplicationResult<()> {
        tracing::info!(
            recipient,
            username,
            confirmation_url,
            "no mail API key configured, logging confirmation link"
        );
        Ok(())
    }
}
