//! Concrete backends for the translation and mail seams in `tile-core`.

pub mod factory;
pub mod libretranslate;
pub mod offline;
pub mod smtp;

pub use factory::{LibreTranslateFactory, OfflineTranslatorFactory};
pub use libretranslate::LibreTranslateClient;
pub use offline::OfflineTranslator;
pub use smtp::{SmtpConfig, SmtpTransport};
