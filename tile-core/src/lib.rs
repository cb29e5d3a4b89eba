pub mod calculations;
pub mod models;
pub mod services;

pub use calculations::{EstimateError, TileEstimator, checked_to_square_feet, to_square_feet};
pub use models::*;
pub use services::{
    DeliveryStatus, EstimateEmail, EstimateNotifier, MailError, MailTransport, Translation,
    TranslationAdapter, TranslationError, Translator, TranslatorConfig, TranslatorFactory,
    TranslatorRegistry, UnconfiguredTransport,
};
