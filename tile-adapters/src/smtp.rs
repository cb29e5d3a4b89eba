//! SMTP delivery of estimate emails.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Deserialize;
use tile_core::{EstimateEmail, MailError, MailTransport};
use tracing::debug;

fn default_port() -> u16 {
    465
}

/// Connection settings for an SMTP relay. Port 465 uses implicit TLS.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender address, e.g. `Tile Calculator <estimates@example.com>`.
    pub from: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .finish()
    }
}

pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpTransport {
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`] for a malformed sender and
    /// [`MailError::Transport`] if the relay cannot be set up.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { mailer, from })
    }
}

impl std::fmt::Debug for SmtpTransport {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SmtpTransport")
            .field("from", &self.from.to_string())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(
        &self,
        email: &EstimateEmail,
    ) -> Result<(), MailError> {
        let message = build_message(&self.from, email)?;
        let response = self
            .mailer
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        debug!(code = %response.code(), "smtp relay accepted message");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .trim()
        .parse()
        .map_err(|_| MailError::InvalidAddress(address.to_string()))
}

fn build_message(
    from: &Mailbox,
    email: &EstimateEmail,
) -> Result<Message, MailError> {
    Message::builder()
        .from(from.clone())
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailError::Message(e.to_string()))
}
