//! Seams for the external collaborators: translation and mail delivery.
//!
//! The traits here are implemented by backend crates; the adapters wrap them
//! with the best-effort behavior the wizard relies on.

pub mod notify;
pub mod registry;
pub mod translate;

pub use notify::{
    DeliveryStatus, ESTIMATE_SUBJECT, EstimateEmail, EstimateNotifier, MailError, MailTransport,
    UnconfiguredTransport,
};
pub use registry::{TranslatorConfig, TranslatorFactory, TranslatorRegistry};
pub use translate::{Translation, TranslationAdapter, TranslationError, Translator};
