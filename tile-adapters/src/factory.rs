use tile_core::{TranslationError, Translator, TranslatorConfig, TranslatorFactory};

use crate::libretranslate::LibreTranslateClient;
use crate::offline::OfflineTranslator;

/// [`TranslatorFactory`] for the `"offline"` backend.
///
/// ```rust
/// use tile_adapters::OfflineTranslatorFactory;
/// use tile_core::TranslatorRegistry;
///
/// let mut registry = TranslatorRegistry::new();
/// registry.register(Box::new(OfflineTranslatorFactory));
/// assert_eq!(registry.available_backends(), vec!["offline"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTranslatorFactory;

impl TranslatorFactory for OfflineTranslatorFactory {
    fn backend_name(&self) -> &'static str {
        "offline"
    }

    fn create(
        &self,
        _config: &TranslatorConfig,
    ) -> Result<Box<dyn Translator>, TranslationError> {
        Ok(Box::new(OfflineTranslator))
    }
}

/// [`TranslatorFactory`] for `"libretranslate"`.
///
/// `config.endpoint` falls back to the public instance when unset;
/// `config.api_key` is sent with every request when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibreTranslateFactory;

impl TranslatorFactory for LibreTranslateFactory {
    fn backend_name(&self) -> &'static str {
        "libretranslate"
    }

    fn create(
        &self,
        config: &TranslatorConfig,
    ) -> Result<Box<dyn Translator>, TranslationError> {
        let client = LibreTranslateClient::new(config.endpoint.as_deref(), config.api_key.clone())?;
        Ok(Box::new(client))
    }
}
