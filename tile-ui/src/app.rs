//! Wiring between configuration and the service backends.

use anyhow::{Context, Result};
use tile_adapters::{LibreTranslateFactory, OfflineTranslatorFactory, SmtpTransport};
use tile_core::{MailTransport, TranslationAdapter, TranslatorRegistry, UnconfiguredTransport};
use tracing::{debug, info};

use crate::config::AppConfig;

/// Registry with every translation backend this binary ships.
pub fn build_registry() -> TranslatorRegistry {
    let mut registry = TranslatorRegistry::new();
    registry.register(Box::new(OfflineTranslatorFactory));
    registry.register(Box::new(LibreTranslateFactory));
    registry
}

/// Services the wizard borrows for the length of a run.
pub struct Services {
    pub translator: TranslationAdapter,
    pub mailer: Box<dyn MailTransport>,
}

/// # Errors
///
/// Fails for an unknown translation backend or an SMTP section that cannot
/// be turned into a transport.
pub fn build_services(config: &AppConfig) -> Result<Services> {
    debug!(backend = %config.translation.backend, "creating translator");
    let translator = build_registry()
        .create(&config.translation)
        .context("failed to create translator")?;

    let mailer: Box<dyn MailTransport> = match &config.smtp {
        Some(smtp) => {
            info!(host = %smtp.host, port = smtp.port, "using SMTP relay");
            Box::new(SmtpTransport::new(smtp).context("failed to set up SMTP transport")?)
        }
        None => {
            debug!("no [smtp] section; email is disabled");
            Box::new(UnconfiguredTransport)
        }
    };

    Ok(Services {
        translator: TranslationAdapter::new(translator),
        mailer,
    })
}
