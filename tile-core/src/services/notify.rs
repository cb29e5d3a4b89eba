use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::EstimateResult;

pub const ESTIMATE_SUBJECT: &str = "Your Tile Estimate";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailError {
    #[error("mail transport is not configured")]
    NotConfigured,

    #[error("invalid email address '{0}'")]
    InvalidAddress(String),

    #[error("could not build message: {0}")]
    Message(String),

    #[error("{0}")]
    Transport(String),
}

/// A composed, ready-to-send estimate message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EstimateEmail {
    pub fn compose(
        to: &str,
        result: EstimateResult,
    ) -> Self {
        let body = format!(
            "Hello,\n\
             \n\
             Here is your tile estimate:\n\
             \n\
             - Total Tiles Required: {tiles}\n\
             - Total Boxes Required: {boxes}\n\
             (Including 10% buffer)\n\
             \n\
             Thanks for using our Tile Calculator Bot!\n",
            tiles = result.tiles,
            boxes = result.boxes,
        );

        Self {
            to: to.trim().to_string(),
            subject: ESTIMATE_SUBJECT.to_string(),
            body,
        }
    }
}

/// Delivers a composed message.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(
        &self,
        email: &EstimateEmail,
    ) -> Result<(), MailError>;
}

/// Outcome of an attempted delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    /// Human-readable reason, shown to the user as-is.
    Failed(String),
}

impl DeliveryStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Sends estimates through a [`MailTransport`], one attempt per call.
pub struct EstimateNotifier<'a> {
    transport: &'a dyn MailTransport,
}

impl<'a> EstimateNotifier<'a> {
    pub fn new(transport: &'a dyn MailTransport) -> Self {
        Self { transport }
    }

    pub async fn send_estimate(
        &self,
        to: &str,
        result: EstimateResult,
    ) -> DeliveryStatus {
        let email = EstimateEmail::compose(to, result);

        match self.transport.send(&email).await {
            Ok(()) => {
                info!(to = %email.to, "estimate emailed");
                DeliveryStatus::Sent
            }
            Err(error) => {
                warn!(to = %email.to, %error, "estimate email failed");
                DeliveryStatus::Failed(error.to_string())
            }
        }
    }
}

/// Transport used when no mail server is configured; every send fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredTransport;

#[async_trait]
impl MailTransport for UnconfiguredTransport {
    async fn send(
        &self,
        _email: &EstimateEmail,
    ) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<EstimateEmail>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(
            &self,
            email: &EstimateEmail,
        ) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    struct RefusingTransport;

    #[async_trait]
    impl MailTransport for RefusingTransport {
        async fn send(
            &self,
            _email: &EstimateEmail,
        ) -> Result<(), MailError> {
            Err(MailError::Transport(
                "535 Username and Password not accepted".to_string(),
            ))
        }
    }

    const RESULT: EstimateResult = EstimateResult {
        tiles: 110,
        boxes: 11,
    };

    #[test]
    fn compose_uses_fixed_subject_and_template() {
        let email = EstimateEmail::compose(" someone@example.com ", RESULT);

        assert_eq!(email.to, "someone@example.com");
        assert_eq!(email.subject, "Your Tile Estimate");
        assert_eq!(
            email.body,
            "Hello,\n\nHere is your tile estimate:\n\n\
             - Total Tiles Required: 110\n\
             - Total Boxes Required: 11\n\
             (Including 10% buffer)\n\n\
             Thanks for using our Tile Calculator Bot!\n"
        );
    }

    #[tokio::test]
    async fn successful_delivery_reports_sent() {
        let transport = RecordingTransport::default();
        let notifier = EstimateNotifier::new(&transport);

        let status = notifier.send_estimate("someone@example.com", RESULT).await;

        assert_eq!(status, DeliveryStatus::Sent);
        assert_eq!(transport.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_returns_its_description() {
        let notifier = EstimateNotifier::new(&RefusingTransport);

        let status = notifier.send_estimate("someone@example.com", RESULT).await;

        assert_eq!(
            status,
            DeliveryStatus::Failed("535 Username and Password not accepted".to_string())
        );
    }

    #[tokio::test]
    async fn unconfigured_transport_always_fails() {
        let notifier = EstimateNotifier::new(&UnconfiguredTransport);

        let status = notifier.send_estimate("someone@example.com", RESULT).await;

        assert!(!status.is_sent());
        assert_eq!(
            status,
            DeliveryStatus::Failed("mail transport is not configured".to_string())
        );
    }
}
